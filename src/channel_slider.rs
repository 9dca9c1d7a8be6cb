//! Gradient slider for a single color channel.
//!
//! The slider position (0–255) is the authoritative value; the painted thumb
//! offset is derived from it and never read back out of layout. Clicking
//! anywhere on the track grabs the thumb and moves it there, and releasing
//! the pointer anywhere ends the drag.

use floem::kurbo::{Rect, Shape};
use floem::peniko::{Color, Gradient};

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::checkerboard;
use crate::color::{Channel, Rgba};
use crate::constants;
use crate::gradient;

enum SliderUpdate {
    Position(u8),
    BaseColor(Rgba),
}

pub struct ChannelSlider {
    id: ViewId,
    channel: Channel,
    held: bool,
    position: u8,
    base: Rgba,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(u8)>>,
}

/// Creates a horizontal gradient slider for `channel`.
///
/// - `position`: slider position, 0 (left) to 255 (right), one unit per px.
/// - `base_color_fn`: returns the current color; only the alpha track's
///   gradient depends on it, so only the alpha slider subscribes.
pub fn channel_slider(
    channel: Channel,
    position: RwSignal<u8>,
    base_color_fn: impl Fn() -> Rgba + 'static,
) -> ChannelSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let p = position.get();
        id.update_state(SliderUpdate::Position(p));
    });

    if channel.is_alpha() {
        create_effect(move |_| {
            let base = base_color_fn();
            id.update_state(SliderUpdate::BaseColor(base));
        });
    }

    ChannelSlider {
        id,
        channel,
        held: false,
        position: 255,
        base: Rgba::default(),
        size: Default::default(),
        on_change: Some(Box::new(move |p| {
            position.set(p);
        })),
    }
    .style(|s| {
        s.width(constants::TRACK_WIDTH)
            .height(constants::TRACK_HEIGHT)
            .border_radius(constants::RADIUS)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl ChannelSlider {
    fn update_from_pointer(&mut self, x: f64) {
        let w = self.size.width as f64;
        if w > 1.0 {
            // One unit per px on the 256 px track; clamp to the track bounds.
            let t = (x / (w - 1.0)).clamp(0.0, 1.0);
            self.position = (t * 255.0).round() as u8;
        }
    }
}

impl View for ChannelSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SliderUpdate>() {
            match *update {
                SliderUpdate::Position(p) => self.position = p,
                SliderUpdate::BaseColor(base) => self.base = base,
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                if let Some(cb) = &self.on_change {
                    cb(self.position);
                }
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos.x);
                    if let Some(cb) = &self.on_change {
                        cb(self.position);
                    }
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                self.held = false;
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::RADIUS as f64);

        cx.save();
        cx.clip(&rrect);

        // The alpha track shows the checkerboard through its transparent end.
        if self.channel.is_alpha() {
            checkerboard::paint_checkerboard(cx, rect, constants::CHECKER_CELL);
        }

        let (start, stop) = gradient::gradient_stops(self.channel, self.base);
        let linear =
            Gradient::new_linear((0.0, h / 2.0), (w, h / 2.0)).with_stops([start, stop]);
        // Convert to BezPath so the vello renderer uses the general path
        // handler (its Rect fast-path only supports solid colors).
        let path = rect.to_path(0.1);
        cx.fill(&path, &linear, 0.0);
        cx.restore();

        // Track outline
        cx.stroke(
            &rrect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Thumb (circular ring; left = 0, right = 255)
        let radius = constants::THUMB_RADIUS;
        let thumb_x = self.position as f64 / 255.0 * (w - 1.0);
        let thumb_cy = h / 2.0;
        let circle = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius);
        cx.stroke(
            &circle,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let inner = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 1.5);
        cx.stroke(&inner, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
        let innermost = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 3.0);
        cx.stroke(
            &innermost,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}
