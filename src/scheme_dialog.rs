//! Color schemes dialog: projects the scheme store into a reactive list of
//! scheme rows with nested member rows.
//!
//! Selection and expansion are view-layer state only — at most one scheme is
//! marked selected (none is fine), and each row expands independently of
//! selection.

use std::collections::HashSet;

use floem::event::EventListener;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use floem::taffy::prelude::Display;

use crate::constants;
use crate::scheme::{Member, PickState, SchemeStore};

/// A small icon button in the dialog chrome.
fn icon_button(icon: lucide_icons::Icon, on_press: impl Fn() + 'static) -> impl IntoView {
    container(
        label(move || icon.unicode().to_string()).style(|s| {
            s.font_size(12.0)
                .font_family("lucide".to_string())
                .color(Color::rgb8(230, 230, 230))
        }),
    )
    .style(|s| {
        s.size(16.0, 16.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .background(Color::rgba8(60, 60, 60, 100))
            .hover(|s| s.background(Color::rgba8(30, 30, 30, 200)))
    })
    .on_click_stop(move |_| on_press())
}

/// One member row: display-truncated name plus add/remove buttons that are
/// revealed while the row is hovered.
fn member_row(
    member: Member,
    scheme_id: String,
    store: RwSignal<SchemeStore>,
    pick: RwSignal<PickState>,
) -> impl IntoView {
    let hovered = RwSignal::new(false);
    let display = member.display_name();
    let member_id = member.id.clone();
    let anchor_id = member.id.clone();
    let pick_scheme = scheme_id.clone();

    h_stack((
        label(move || display.clone()).style(|s| {
            s.font_size(constants::INPUT_FONT)
                .color(Color::rgb8(230, 230, 230))
                .flex_grow(1.0)
        }),
        h_stack((
            // Picks started here slot the new member in below this row
            icon_button(lucide_icons::Icon::Plus, move || {
                pick.update(|p| p.begin_after(pick_scheme.clone(), anchor_id.clone()));
            }),
            icon_button(lucide_icons::Icon::Minus, move || {
                store.update(|s| s.remove_member(&scheme_id, &member_id));
            }),
        ))
        .style(move |s| {
            s.gap(2.0)
                .apply_if(!hovered.get(), |s| s.display(Display::None))
        }),
    ))
    .style(|s| {
        s.items_center()
            .padding_vert(2.0)
            .padding_left(16.0)
            .width_full()
            .hover(|s| s.background(Color::rgba8(60, 60, 60, 60)))
    })
    .on_event(EventListener::PointerEnter, move |_| {
        hovered.set(true);
        floem::event::EventPropagation::Continue
    })
    .on_event(EventListener::PointerLeave, move |_| {
        hovered.set(false);
        floem::event::EventPropagation::Continue
    })
}

/// One scheme row: title line (toggle, name, add-member, remove) plus the
/// collapsible member list.
fn scheme_row(
    scheme_id: String,
    store: RwSignal<SchemeStore>,
    pick: RwSignal<PickState>,
    selected: RwSignal<Option<String>>,
    expanded: RwSignal<HashSet<String>>,
) -> impl IntoView {
    let toggle_id = scheme_id.clone();
    let name_id = scheme_id.clone();
    let pick_id = scheme_id.clone();
    let remove_id = scheme_id.clone();
    let select_id = scheme_id.clone();
    let members_id = scheme_id.clone();
    let member_view_id = scheme_id.clone();
    let expanded_id = scheme_id.clone();
    let selected_id = scheme_id.clone();

    v_stack((
        h_stack((
            // Expand indicator: chevron turns 90° when open
            container(
                label(move || {
                    let icon = if expanded.get().contains(&toggle_id) {
                        lucide_icons::Icon::ChevronDown
                    } else {
                        lucide_icons::Icon::ChevronRight
                    };
                    icon.unicode().to_string()
                })
                .style(|s| {
                    s.font_size(12.0)
                        .font_family("lucide".to_string())
                        .color(Color::rgb8(230, 230, 230))
                }),
            )
            .style(|s| s.cursor(floem::style::CursorStyle::Pointer))
            .on_click_stop({
                let id = scheme_id.clone();
                move |_| {
                    expanded.update(|open| {
                        if !open.remove(&id) {
                            open.insert(id.clone());
                        }
                    });
                }
            }),
            label(move || {
                store
                    .get()
                    .get(&name_id)
                    .map(|s| s.name.clone())
                    .unwrap_or_default()
            })
            .style(|s| {
                s.font_size(13.0)
                    .color(Color::rgb8(240, 240, 240))
                    .flex_grow(1.0)
            }),
            icon_button(lucide_icons::Icon::Plus, move || {
                pick.update(|p| p.begin(pick_id.clone()));
            }),
            icon_button(lucide_icons::Icon::Minus, move || {
                store.update(|s| s.remove_scheme(&remove_id));
                selected.update(|sel| {
                    if sel.as_deref() == Some(select_id.as_str()) {
                        *sel = None;
                    }
                });
            }),
        ))
        .style(|s| s.items_center().gap(4.0).width_full())
        .on_click_stop({
            let id = scheme_id.clone();
            move |_| selected.set(Some(id.clone()))
        }),
        // Member list, visible while expanded
        dyn_stack(
            move || {
                store
                    .get()
                    .get(&members_id)
                    .map(|s| s.members.to_vec())
                    .unwrap_or_default()
            },
            |member: &Member| member.id.clone(),
            move |member| member_row(member, member_view_id.clone(), store, pick),
        )
        .style(move |s| {
            s.flex_col()
                .width_full()
                .margin_top(2.0)
                .apply_if(!expanded.get().contains(&expanded_id), |s| {
                    s.display(Display::None)
                })
        }),
    ))
    .style(move |s| {
        let is_selected = selected.get().as_deref() == Some(selected_id.as_str());
        s.width_full()
            .padding(4.0)
            .border(1.0)
            .border_color(Color::rgb8(80, 80, 80))
            .background(Color::rgb8(100, 100, 100))
            .hover(|s| s.border_color(Color::rgb8(160, 160, 160)))
            .apply_if(is_selected, |s| s.border_color(Color::rgb8(200, 200, 200)))
    })
}

/// The scheme list body: scrolling list of scheme rows plus an add button.
pub(crate) fn scheme_dialog(
    store: RwSignal<SchemeStore>,
    pick: RwSignal<PickState>,
) -> impl IntoView {
    // Startup state mirrors the seeded store: first scheme selected and open.
    let first = store.get_untracked().schemes().first().map(|s| s.id.clone());
    let selected: RwSignal<Option<String>> = RwSignal::new(first.clone());
    let expanded: RwSignal<HashSet<String>> =
        RwSignal::new(first.into_iter().collect());

    v_stack((
        scroll(
            dyn_stack(
                move || {
                    store
                        .get()
                        .schemes()
                        .iter()
                        .map(|s| s.id.clone())
                        .collect::<Vec<_>>()
                },
                |id: &String| id.clone(),
                move |id| scheme_row(id, store, pick, selected, expanded),
            )
            .style(|s| s.flex_col().width_full().gap(2.0)),
        )
        .style(|s| s.height(constants::SCHEME_LIST_HEIGHT).width_full()),
        h_stack((
            icon_button(lucide_icons::Icon::Plus, move || {
                store.update(|s| {
                    s.create_scheme();
                });
            }),
            label(|| "Add color scheme").style(|s| {
                s.font_size(constants::INPUT_FONT)
                    .color(Color::rgb8(200, 200, 200))
            }),
        ))
        .style(|s| s.items_center().gap(4.0).padding(4.0)),
    ))
    .style(|s| s.width(constants::SCHEME_DIALOG_WIDTH).padding(4.0))
}
