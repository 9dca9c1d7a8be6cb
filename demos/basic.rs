//! Standalone demo: a mock page of pickable elements with the ColorHack
//! overlay alongside.

use floem::event::EventListener;
use floem::prelude::*;
use floem::window::WindowConfig;

use floem_colorhack::{overlay, pickable, ColorHack, PageElement};

fn main() {
    env_logger::init();

    let ch = match ColorHack::install() {
        Some(ch) => ch,
        None => return,
    };

    floem::Application::new()
        .window(
            move |_| {
                app_view(ch).on_event_stop(EventListener::WindowClosed, |_| {
                    floem::quit_app();
                })
            },
            Some(
                WindowConfig::default()
                    .size((960.0, 640.0))
                    .title("ColorHack demo"),
            ),
        )
        .run();
}

fn app_view(ch: ColorHack) -> impl IntoView {
    let page = v_stack((
        pickable(
            label(|| "Welcome to the demo page").style(|s| s.font_size(24.0).font_bold()),
            PageElement::new("h1").with_id("title"),
            ch.store,
            ch.pick,
        ),
        pickable(
            label(|| "Enter picking mode from the Color Schemes dialog, then click any of these elements to attach it to a scheme."),
            PageElement::new("p").with_class("intro"),
            ch.store,
            ch.pick,
        ),
        pickable(
            container(label(|| "A sidebar-ish box")).style(|s| {
                s.padding(12.0)
                    .border(1.0)
                    .border_color(Color::rgb8(180, 180, 180))
                    .background(Color::rgb8(245, 245, 245))
            }),
            PageElement::new("div").with_id("sidebar").with_class("panel"),
            ch.store,
            ch.pick,
        ),
        pickable(
            label(|| "A footer note with a very long class list"),
            PageElement::new("span")
                .with_class("footer")
                .with_class("note")
                .with_class("muted"),
            ch.store,
            ch.pick,
        ),
    ))
    .style(|s| s.flex_grow(1.0).gap(16.0).padding(24.0));

    h_stack((page, overlay(&ch)))
        .style(|s| s.size_full().items_start().background(Color::WHITE))
}
