//! Overlay chrome: dialog frames and the menu that toggles them.
//!
//! Dialog visibility lives in one signal per dialog, so the toolbar
//! checkmark and the dialog's close button can never fall out of sync.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use floem::taffy::prelude::Display;

use crate::constants;
use crate::picker::color_settings;
use crate::scheme_dialog::scheme_dialog;
use crate::ColorHack;

/// Frame a dialog body with a title bar and close button.
fn dialog(
    title: &'static str,
    visible: RwSignal<bool>,
    body: impl IntoView + 'static,
) -> impl IntoView {
    v_stack((
        h_stack((
            label(move || title).style(|s| {
                s.font_size(13.0)
                    .font_bold()
                    .color(Color::rgb8(60, 60, 60))
                    .flex_grow(1.0)
                    .justify_center()
            }),
            label(|| "×".to_string())
                .style(|s| {
                    s.font_size(14.0)
                        .color(Color::rgb8(60, 60, 60))
                        .padding_horiz(6.0)
                        .cursor(floem::style::CursorStyle::Pointer)
                        .hover(|s| s.color(Color::BLACK))
                })
                .on_click_stop(move |_| visible.set(false)),
        ))
        .style(|s| {
            s.items_center()
                .width_full()
                .padding(4.0)
                .background(Color::rgb8(230, 230, 230))
        }),
        body,
    ))
    .style(move |s| {
        s.border(2.0)
            .border_color(Color::rgb8(60, 60, 60))
            .background(Color::rgb8(60, 60, 60))
            .color(Color::rgb8(240, 240, 240))
            .apply_if(!visible.get(), |s| s.display(Display::None))
    })
}

/// One toolbar entry: checkmark slot plus dialog name; clicking toggles the
/// dialog's visibility.
fn toolbar_item(name: &'static str, visible: RwSignal<bool>) -> impl IntoView {
    h_stack((
        label(move || {
            if visible.get() {
                lucide_icons::Icon::Check.unicode().to_string()
            } else {
                String::new()
            }
        })
        .style(|s| {
            s.width(14.0)
                .font_size(11.0)
                .font_family("lucide".to_string())
        }),
        label(move || name),
    ))
    .style(|s| {
        s.items_center()
            .gap(4.0)
            .padding(4.0)
            .width_full()
            .font_size(12.0)
            .color(Color::rgb8(240, 240, 240))
            .background(Color::rgb8(100, 100, 100))
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(60, 60, 60)))
    })
    .on_click_stop(move |_| visible.update(|v| *v = !*v))
}

/// The full overlay: both dialogs plus the menu column.
pub(crate) fn overlay(ch: &ColorHack) -> impl IntoView {
    let schemes_visible = RwSignal::new(true);
    let settings_visible = RwSignal::new(true);
    let toolbar_open = RwSignal::new(false);

    h_stack((
        dialog(
            "Color Schemes",
            schemes_visible,
            scheme_dialog(ch.store, ch.pick),
        ),
        dialog("Color Settings", settings_visible, color_settings(ch.color)),
        v_stack((
            v_stack((
                toolbar_item("Color Schemes", schemes_visible),
                toolbar_item("Color Settings", settings_visible),
            ))
            .style(move |s| {
                s.width_full()
                    .apply_if(!toolbar_open.get(), |s| s.display(Display::None))
            }),
            label(|| "ColorHack")
                .style(|s| {
                    s.font_size(14.0)
                        .font_bold()
                        .padding(4.0)
                        .width_full()
                        .justify_center()
                        .color(Color::rgb8(60, 60, 60))
                        .background(Color::rgb8(230, 230, 230))
                        .cursor(floem::style::CursorStyle::Pointer)
                })
                .on_click_stop(move |_| toolbar_open.update(|v| *v = !*v)),
        ))
        .style(|s| {
            s.width(140.0)
                .border(2.0)
                .border_color(Color::rgb8(60, 60, 60))
                .align_self(Some(floem::taffy::AlignItems::End))
        }),
    ))
    .style(|s| s.items_start().gap(constants::GAP))
}
