//! Host-side hook for add-member picking mode.

use floem::event::{EventListener, EventPropagation};
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use log::debug;

use crate::constants;
use crate::scheme::{PageElement, PickState, SchemeStore};

/// Wrap a host view so ColorHack can attach it to a scheme as a member.
///
/// Outside picking mode the view behaves exactly as before. While a picking
/// session is active, hovering applies a transient highlight halo (it
/// reverts as soon as the pointer leaves or the session ends), and a click
/// attaches the element to the session's target scheme, swallows the click
/// so its normal action does not fire, and ends the session.
pub fn pickable<V: IntoView + 'static>(
    view: V,
    element: PageElement,
    store: RwSignal<SchemeStore>,
    pick: RwSignal<PickState>,
) -> impl IntoView {
    let hovered = RwSignal::new(false);

    view.into_view()
        .style(move |s| {
            let highlight = hovered.get() && pick.get().is_picking();
            s.apply_if(highlight, |s| {
                s.box_shadow_blur(2.0)
                    .box_shadow_spread(2.0)
                    .box_shadow_color(constants::HIGHLIGHT_COLOR)
            })
        })
        .on_event(EventListener::PointerEnter, move |_| {
            hovered.set(true);
            EventPropagation::Continue
        })
        .on_event(EventListener::PointerLeave, move |_| {
            hovered.set(false);
            EventPropagation::Continue
        })
        .on_event(EventListener::Click, move |_| {
            if !pick.get_untracked().is_picking() {
                return EventPropagation::Continue;
            }
            let mut session = pick.get_untracked();
            let clicked = element.clone();
            let mut added = None;
            store.update(|s| {
                added = s.complete_pick(&mut session, clicked);
            });
            pick.set(session);
            if added.is_none() {
                debug!("pick target scheme vanished; session cancelled");
            }
            EventPropagation::Stop
        })
}
