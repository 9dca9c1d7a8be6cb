//! Color settings panel — the synchronization hub.
//!
//! Owns the four authoritative slider positions and pushes every change out
//! to the canonical color, the hex field, the per-channel textboxes, and the
//! swatches. The alpha track repaints itself from the same canonical color
//! (see `channel_slider`), so an RGB change updates the alpha preview too.

use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::channel_slider::channel_slider;
use crate::color::{alpha_percent_from_position, Channel, Rgba};
use crate::constants;
use crate::inputs::{channel_input, copy_button, hex_input};

/// Canonical color from the four slider positions. Red/green/blue map
/// one-to-one; the alpha position scales down to a percentage.
pub(crate) fn color_from_positions(red: u8, green: u8, blue: u8, alpha_pos: u8) -> Rgba {
    Rgba::new(red, green, blue, alpha_percent_from_position(alpha_pos))
}

/// One picker row: channel label, gradient slider, decimal textbox.
fn channel_row(
    channel: Channel,
    position: RwSignal<u8>,
    base_color: impl Fn() -> Rgba + 'static,
) -> impl IntoView {
    h_stack((
        label(move || channel.label()).style(|s| {
            s.width(16.0)
                .font_size(constants::INPUT_FONT)
                .color(Color::rgb8(120, 120, 120))
        }),
        channel_slider(channel, position, base_color),
        channel_input(channel, position),
    ))
    .style(|s| s.items_center().gap(constants::GAP / 2.0))
}

/// A small bordered color swatch driven by `color_fn`.
fn swatch(width: f32, color_fn: impl Fn() -> Color + 'static) -> impl IntoView {
    empty().style(move |s| {
        s.width(width)
            .height(constants::SWATCH_SIZE)
            .border(1.0)
            .border_color(Color::rgb8(140, 140, 140))
            .background(color_fn())
    })
}

/// Creates the color settings panel, reading from and writing to `current`
/// through the slider positions.
pub(crate) fn color_settings(current: RwSignal<Rgba>) -> impl IntoView {
    // The slider positions are the authoritative state; pixel offsets and
    // textbox contents are projections of these.
    let red = RwSignal::new(255u8);
    let green = RwSignal::new(255u8);
    let blue = RwSignal::new(255u8);
    let alpha = RwSignal::new(255u8);
    let hex = RwSignal::new(Rgba::default().to_hex());

    // Positions → canonical color and hex text
    create_effect(move |_| {
        let color = color_from_positions(red.get(), green.get(), blue.get(), alpha.get());
        if current.get_untracked() != color {
            current.set(color);
        }
        let new_hex = color.to_hex();
        if hex.get_untracked() != new_hex {
            hex.set(new_hex);
        }
    });

    // A successful hex commit repositions the RGB sliders; hex carries no
    // alpha, so the color becomes fully opaque.
    let apply_hex = move |color: Rgba| {
        red.set(color.red());
        green.set(color.green());
        blue.set(color.blue());
        alpha.set(255);
    };

    let position_signal = move |channel: Channel| match channel {
        Channel::Red => red,
        Channel::Green => green,
        Channel::Blue => blue,
        Channel::Alpha => alpha,
    };

    v_stack((
        // Hex row: component swatches, composite swatch, hex entry, copy
        h_stack((
            swatch(constants::SWATCH_SIZE, move || {
                Color::rgba8(red.get(), 0, 0, 255)
            }),
            swatch(constants::SWATCH_SIZE, move || {
                Color::rgba8(0, green.get(), 0, 255)
            }),
            swatch(constants::SWATCH_SIZE, move || {
                Color::rgba8(0, 0, blue.get(), 255)
            }),
            swatch(96.0, move || {
                let c = current.get();
                Color::rgba(
                    c.red() as f64 / 255.0,
                    c.green() as f64 / 255.0,
                    c.blue() as f64 / 255.0,
                    c.alpha() as f64 / 100.0,
                )
            }),
            hex_input(hex, apply_hex),
            copy_button(move || hex.get()),
        ))
        .style(|s| s.items_center().gap(constants::GAP / 2.0)),
        channel_row(Channel::Red, position_signal(Channel::Red), move || {
            current.get()
        }),
        channel_row(Channel::Green, position_signal(Channel::Green), move || {
            current.get()
        }),
        channel_row(Channel::Blue, position_signal(Channel::Blue), move || {
            current.get()
        }),
        channel_row(Channel::Alpha, position_signal(Channel::Alpha), move || {
            current.get()
        }),
    ))
    .style(|s| {
        s.gap(constants::GAP)
            .padding(constants::PADDING)
            .background(Color::rgb8(242, 242, 242))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_positions_map_one_to_one() {
        for p in 0..=255u16 {
            let color = color_from_positions(p as u8, 0, 0, 255);
            assert_eq!(color.red(), p as u8);
        }
        let color = color_from_positions(1, 2, 3, 255);
        assert_eq!((color.red(), color.green(), color.blue()), (1, 2, 3));
    }

    #[test]
    fn alpha_position_scales_to_percentage() {
        for p in 0..=255u16 {
            let color = color_from_positions(0, 0, 0, p as u8);
            assert_eq!(color.alpha(), (p * 100 / 255) as u8);
        }
    }

    #[test]
    fn default_positions_are_opaque_white() {
        let color = color_from_positions(255, 255, 255, 255);
        assert_eq!(color, Rgba::default());
        assert_eq!(color.to_hex(), "FFFFFF");
    }
}
