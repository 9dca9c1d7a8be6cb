//! Textbox components for color entry: per-channel decimal inputs and the
//! hex field, with keystroke filtering and commit-on-Enter-or-blur.

use floem::event::EventPropagation;
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use log::debug;

use crate::color::{
    alpha_percent_from_position, alpha_position_from_percent, normalize_hex_input,
    parse_channel_text, Channel, Rgba,
};
use crate::constants;

/// Decide whether a typed character may enter a color textbox.
///
/// Hex fields accept hex digits, decimal fields decimal digits. A held
/// ctrl/cmd modifier suspends filtering so paste shortcuts pass through.
/// The length caps (6 hex, 3 decimal) are deliberately not enforced here:
/// a keystroke replacing a selected run must never be blocked, and the
/// commit path truncates overflow anyway (`normalize_hex_input` keeps six
/// characters, `parse_channel_text` three digits).
fn allow_character(is_hex: bool, ch: char, modifier_bypass: bool) -> bool {
    if modifier_bypass {
        return true;
    }
    if is_hex {
        ch.is_ascii_hexdigit()
    } else {
        ch.is_ascii_digit()
    }
}

/// Attach the shared key handling: filter typed characters, commit on Enter.
/// Navigation and editing keys (named keys) always pass through.
fn filtered_keydown(
    is_hex: bool,
    on_commit: impl Fn() + Copy + 'static,
) -> impl Fn(&floem::event::Event) -> EventPropagation + 'static {
    move |e| {
        if let floem::event::Event::KeyDown(ke) = e {
            match &ke.key.logical_key {
                Key::Named(NamedKey::Enter) => {
                    on_commit();
                    return EventPropagation::Stop;
                }
                Key::Character(s) => {
                    let bypass = ke.modifiers.control() || ke.modifiers.meta();
                    if s.chars().any(|ch| !allow_character(is_hex, ch, bypass)) {
                        return EventPropagation::Stop;
                    }
                }
                _ => {}
            }
        }
        EventPropagation::Continue
    }
}

fn textbox_style(s: floem::style::Style, width: f32) -> floem::style::Style {
    s.width(width)
        .padding(2.0)
        .font_size(constants::INPUT_FONT)
        .font_family("monospace".to_string())
        .background(Color::WHITE)
        .border(1.0)
        .border_color(Color::rgb8(200, 200, 200))
        .border_radius(3.0)
}

/// A decimal input bound to one channel's slider position.
///
/// Shows the raw 0–255 value, or the 0–100 percentage for alpha. Commits on
/// Enter or focus-lost; out-of-range values are clamped, never rejected.
pub(crate) fn channel_input(channel: Channel, position: RwSignal<u8>) -> impl IntoView {
    let display = move |pos: u8| {
        let value = if channel.is_alpha() {
            alpha_percent_from_position(pos)
        } else {
            pos
        };
        format!("{}", value)
    };
    let text = RwSignal::new(display(position.get_untracked()));

    // Position → text (slider drags and hex commits)
    create_effect(move |_| {
        let expected = display(position.get());
        if text.get_untracked() != expected {
            text.set(expected);
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        match parse_channel_text(channel, &raw) {
            Some(value) => {
                let new_pos = if channel.is_alpha() {
                    alpha_position_from_percent(value)
                } else {
                    value
                };
                if position.get_untracked() != new_pos {
                    position.set(new_pos);
                }
                let formatted = format!("{}", value);
                if raw != formatted {
                    text.set(formatted);
                }
            }
            None => {
                // No digits at all: reset to the current value
                let formatted = display(position.get_untracked());
                if raw != formatted {
                    text.set(formatted);
                }
            }
        }
    };

    text_input(text)
        .style(|s| textbox_style(s, constants::INPUT_WIDTH))
        .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
            on_commit();
        })
        .on_event(
            floem::event::EventListener::KeyDown,
            filtered_keydown(false, on_commit),
        )
}

/// The hex field. Displays the canonical six-digit uppercase hex of the
/// current color; commits run shape repair then parsing, and a malformed
/// commit leaves the prior color untouched.
pub(crate) fn hex_input(
    hex: RwSignal<String>,
    on_parsed: impl Fn(Rgba) + Copy + 'static,
) -> impl IntoView {
    let text = RwSignal::new(hex.get_untracked());

    // Canonical hex → text (picker-side changes)
    create_effect(move |_| {
        let val = hex.get();
        let current = text.get_untracked();
        if current.trim_start_matches('#').to_uppercase() != val {
            text.set(val);
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        let repaired = normalize_hex_input(raw.trim_start_matches('#'));
        match Rgba::from_hex(&repaired) {
            Ok(color) => {
                on_parsed(color);
                let canonical = color.to_hex();
                if text.get_untracked() != canonical {
                    text.set(canonical);
                }
            }
            Err(err) => {
                debug!("rejected hex input {:?}: {}", raw, err);
                let prior = hex.get_untracked();
                if raw != prior {
                    text.set(prior);
                }
            }
        }
    };

    h_stack((
        label(|| "#").style(|s| {
            s.font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(120, 120, 120))
        }),
        text_input(text)
            .style(|s| textbox_style(s, constants::HEX_INPUT_WIDTH))
            .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
                on_commit();
            })
            .on_event(
                floem::event::EventListener::KeyDown,
                filtered_keydown(true, on_commit),
            ),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// A small copy button that copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

fn copy_to_clipboard(text: &str) {
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        let _ = clipboard.set_text(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{normalize_hex_input, parse_channel_text};

    #[test]
    fn hex_field_accepts_hex_digits_only() {
        assert!(allow_character(true, 'a', false));
        assert!(allow_character(true, 'F', false));
        assert!(allow_character(true, '9', false));
        assert!(!allow_character(true, 'g', false));
        assert!(!allow_character(true, '#', false));
    }

    #[test]
    fn decimal_field_accepts_digits_only() {
        assert!(allow_character(false, '0', false));
        assert!(allow_character(false, '9', false));
        assert!(!allow_character(false, 'a', false));
        assert!(!allow_character(false, '-', false));
    }

    #[test]
    fn held_modifier_suspends_filtering() {
        assert!(allow_character(true, 'v', true));
        assert!(allow_character(false, 'v', true));
    }

    #[test]
    fn typing_over_a_full_field_is_never_blocked() {
        // A keystroke replacing a selected run in a full field must go
        // through; the commit path shrinks any overflow back to size.
        assert!(allow_character(true, '0', false));
        assert!(allow_character(false, '9', false));
        assert_eq!(normalize_hex_input("ABCDEF0"), "ABCDEF");
        assert_eq!(parse_channel_text(crate::color::Channel::Red, "2559"), Some(255));
    }
}
