//! ColorHack for Floem: a color scheme overlay you drop onto an existing
//! application to sketch out its palette in place.
//!
//! The overlay carries two dialogs. **Color Schemes** manages named schemes
//! and the page elements attached to them; **Color Settings** is an RGBA
//! gradient picker with hex entry. Wrap the views you want attachable in
//! [`pickable`] and the scheme dialog's add-member buttons can target them.
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_colorhack::{overlay, pickable, ColorHack, PageElement};
//!
//! let ch = ColorHack::install().unwrap();
//! let page = pickable(
//!     label(|| "Welcome"),
//!     PageElement::new("h1").with_id("title"),
//!     ch.store,
//!     ch.pick,
//! );
//! let app = h_stack((page, overlay(&ch)));
//! ```

mod channel_slider;
mod checkerboard;
mod color;
mod constants;
mod gradient;
mod inputs;
mod overlay;
mod pick;
mod picker;
mod scheme;
mod scheme_dialog;

pub use color::{Channel, ColorParseError, Rgba};
pub use pick::pickable;
pub use scheme::{
    ColorRole, ColorScheme, Member, PageElement, PickState, SchemeColors, SchemeStore,
};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;
use log::warn;

static LOAD_LUCIDE_FONT: Once = Once::new();
static INSTALLED: AtomicBool = AtomicBool::new(false);

/// The shared state behind one ColorHack overlay.
///
/// All three fields are signals, so the handle is `Copy` and can be moved
/// into as many view closures as needed.
#[derive(Clone, Copy)]
pub struct ColorHack {
    /// The scheme store: every scheme and its members.
    pub store: RwSignal<SchemeStore>,
    /// The picker's canonical color.
    pub color: RwSignal<Rgba>,
    /// The active picking session, if any.
    pub pick: RwSignal<PickState>,
}

impl ColorHack {
    /// Set up ColorHack state: one scheme store seeded with a first scheme,
    /// an opaque white picker color, and no picking session.
    ///
    /// Only one instance may exist per process; further calls return `None`.
    pub fn install() -> Option<Self> {
        if INSTALLED.swap(true, Ordering::SeqCst) {
            warn!("ColorHack is already installed");
            return None;
        }
        LOAD_LUCIDE_FONT.call_once(|| {
            FONT_SYSTEM
                .lock()
                .db_mut()
                .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
        });
        Some(Self {
            store: RwSignal::new(SchemeStore::with_default_scheme()),
            color: RwSignal::new(Rgba::default()),
            pick: RwSignal::new(PickState::default()),
        })
    }
}

/// Build the overlay view for an installed [`ColorHack`]. Place it last in
/// the host layout so the dialogs draw over page content.
pub fn overlay(ch: &ColorHack) -> impl IntoView {
    overlay::overlay(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_is_exclusive() {
        let first = ColorHack::install();
        assert!(first.is_some());
        assert!(ColorHack::install().is_none());

        let ch = first.unwrap();
        let store = ch.store.get_untracked();
        assert_eq!(store.len(), 1);
        assert_eq!(ch.color.get_untracked(), Rgba::default());
        assert!(!ch.pick.get_untracked().is_picking());
    }
}
