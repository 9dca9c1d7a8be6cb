//! In-memory color scheme model: schemes, their member elements, and the
//! add-member picking state machine.
//!
//! Ids are minted from monotonic counters that are never reused, so a scheme
//! (or member) id stays unique for the whole session even across deletions.
//! Removal by an unknown id is a silent no-op; ids are internally generated
//! and never user-typed.

use log::debug;

use crate::color::Rgba;

/// Semantic role of a color within a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Foreground,
    Background,
    Border,
}

/// The three semantic colors of a scheme — exactly one per role, by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeColors {
    pub foreground: Rgba,
    pub background: Rgba,
    pub border: Rgba,
}

impl Default for SchemeColors {
    /// Black foreground and border on a white background.
    fn default() -> Self {
        Self {
            foreground: Rgba::from_rgb(0, 0, 0),
            background: Rgba::from_rgb(255, 255, 255),
            border: Rgba::from_rgb(0, 0, 0),
        }
    }
}

impl SchemeColors {
    pub fn get(&self, role: ColorRole) -> Rgba {
        match role {
            ColorRole::Foreground => self.foreground,
            ColorRole::Background => self.background,
            ColorRole::Border => self.border,
        }
    }

    pub fn set(&mut self, role: ColorRole, color: Rgba) {
        match role {
            ColorRole::Foreground => self.foreground = color,
            ColorRole::Background => self.background = color,
            ColorRole::Border => self.border = color,
        }
    }
}

/// Non-owning descriptor of a host element. ColorHack never creates or
/// destroys the element it points at, it only labels and tracks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl PageElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_lowercase(),
            id: None,
            classes: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Default member name: `tag[#id][.class1.class2…]`.
    pub fn label(&self) -> String {
        let mut label = self.tag.clone();
        if let Some(id) = &self.id {
            label.push('#');
            label.push_str(id);
        }
        for class in &self.classes {
            if !class.is_empty() {
                label.push('.');
                label.push_str(class);
            }
        }
        label
    }
}

/// A host element tracked as belonging to a scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub element: PageElement,
}

/// Longest member name shown untruncated in a dialog row.
const DISPLAY_NAME_MAX: usize = 20;

impl Member {
    /// Name shortened for row display. The stored name is never truncated.
    pub fn display_name(&self) -> String {
        if self.name.chars().count() > DISPLAY_NAME_MAX {
            let mut short: String = self.name.chars().take(DISPLAY_NAME_MAX).collect();
            short.push_str("...");
            short
        } else {
            self.name.clone()
        }
    }
}

/// A named bundle of three semantic colors plus tracked host elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    pub id: String,
    pub name: String,
    pub colors: SchemeColors,
    pub members: Vec<Member>,
    /// Counts every member ever added, deleted ones included. Only used to
    /// mint unique member ids.
    member_count: u32,
}

impl ColorScheme {
    /// Mint a member and place it directly after `after` when given (and
    /// still present), at the end otherwise.
    fn add_member(
        &mut self,
        element: PageElement,
        name: impl Into<String>,
        after: Option<&str>,
    ) -> String {
        let id = format!("{}_member{}", self.id, self.member_count);
        self.member_count += 1;
        let index = after
            .and_then(|a| self.members.iter().position(|m| m.id == a))
            .map(|i| i + 1)
            .unwrap_or(self.members.len());
        self.members.insert(
            index,
            Member {
                id: id.clone(),
                name: name.into(),
                element,
            },
        );
        id
    }
}

/// The add-member interaction mode. Process-wide: at most one picking
/// session is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PickState {
    #[default]
    Idle,
    /// Waiting for the user to click a host element to attach to `scheme_id`.
    Picking {
        scheme_id: String,
        /// Member the new one is inserted after, when the session was started
        /// from a member row's add button. `None` appends.
        after_member: Option<String>,
    },
}

impl PickState {
    /// Start picking for `scheme_id`; the picked member will be appended.
    /// Starting a new session while one is active implicitly cancels the
    /// old one.
    pub fn begin(&mut self, scheme_id: impl Into<String>) {
        *self = PickState::Picking {
            scheme_id: scheme_id.into(),
            after_member: None,
        };
    }

    /// Start picking for `scheme_id` with the picked member inserted after
    /// `member_id`, the ordering used when a member row originates the pick.
    pub fn begin_after(&mut self, scheme_id: impl Into<String>, member_id: impl Into<String>) {
        *self = PickState::Picking {
            scheme_id: scheme_id.into(),
            after_member: Some(member_id.into()),
        };
    }

    pub fn cancel(&mut self) {
        *self = PickState::Idle;
    }

    pub fn is_picking(&self) -> bool {
        matches!(self, PickState::Picking { .. })
    }

    /// Scheme the next picked element will be attached to.
    pub fn target(&self) -> Option<&str> {
        match self {
            PickState::Idle => None,
            PickState::Picking { scheme_id, .. } => Some(scheme_id),
        }
    }
}

/// Ordered collection of color schemes for one session.
#[derive(Debug, Clone, Default)]
pub struct SchemeStore {
    schemes: Vec<ColorScheme>,
    /// Counts every scheme ever created, deleted ones included.
    scheme_count: u64,
}

impl SchemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with one default scheme, the startup state.
    pub fn with_default_scheme() -> Self {
        let mut store = Self::new();
        store.create_scheme();
        store
    }

    pub fn schemes(&self) -> &[ColorScheme] {
        &self.schemes
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ColorScheme> {
        self.schemes.iter().find(|s| s.id == id)
    }

    /// Append a new scheme with default colors and no members.
    pub fn create_scheme(&mut self) -> &ColorScheme {
        let scheme = ColorScheme {
            id: format!("scheme{}", self.scheme_count),
            name: format!("Color Scheme {}", self.scheme_count + 1),
            colors: SchemeColors::default(),
            members: Vec::new(),
            member_count: 0,
        };
        self.scheme_count += 1;
        debug!("created {} ({:?})", scheme.id, scheme.name);
        let index = self.schemes.len();
        self.schemes.push(scheme);
        &self.schemes[index]
    }

    /// Attach `element` to the scheme, returning the new member's id.
    /// No-op (`None`) when the scheme id is unknown.
    pub fn add_member(
        &mut self,
        scheme_id: &str,
        element: PageElement,
        name: impl Into<String>,
    ) -> Option<String> {
        let scheme = self.schemes.iter_mut().find(|s| s.id == scheme_id)?;
        let id = scheme.add_member(element, name, None);
        debug!("added member {} to {}", id, scheme_id);
        Some(id)
    }

    /// Remove the scheme with `id`; silently ignores unknown ids.
    pub fn remove_scheme(&mut self, id: &str) {
        if let Some(index) = self.schemes.iter().position(|s| s.id == id) {
            self.schemes.remove(index);
            debug!("removed {}", id);
        }
    }

    /// Remove one member from one scheme; silently ignores unknown ids.
    pub fn remove_member(&mut self, scheme_id: &str, member_id: &str) {
        if let Some(scheme) = self.schemes.iter_mut().find(|s| s.id == scheme_id) {
            if let Some(index) = scheme.members.iter().position(|m| m.id == member_id) {
                scheme.members.remove(index);
                debug!("removed member {} from {}", member_id, scheme_id);
            }
        }
    }

    pub fn rename_scheme(&mut self, id: &str, name: impl Into<String>) {
        if let Some(scheme) = self.schemes.iter_mut().find(|s| s.id == id) {
            scheme.name = name.into();
        }
    }

    pub fn rename_member(&mut self, scheme_id: &str, member_id: &str, name: impl Into<String>) {
        if let Some(scheme) = self.schemes.iter_mut().find(|s| s.id == scheme_id) {
            if let Some(member) = scheme.members.iter_mut().find(|m| m.id == member_id) {
                member.name = name.into();
            }
        }
    }

    pub fn set_scheme_color(&mut self, scheme_id: &str, role: ColorRole, color: Rgba) {
        if let Some(scheme) = self.schemes.iter_mut().find(|s| s.id == scheme_id) {
            scheme.colors.set(role, color);
        }
    }

    /// Finish a picking session: attach the clicked element to the session's
    /// target scheme under its synthesized default name and return to Idle.
    /// A session started from a member row places the new member right after
    /// that row; otherwise (or if that member is gone) it goes last.
    ///
    /// Returns the new member's id, or `None` when no session was active (or
    /// its target scheme has since been removed — the session still ends).
    pub fn complete_pick(&mut self, pick: &mut PickState, element: PageElement) -> Option<String> {
        let (scheme_id, after) = match pick {
            PickState::Idle => return None,
            PickState::Picking {
                scheme_id,
                after_member,
            } => (scheme_id.clone(), after_member.clone()),
        };
        pick.cancel();
        let name = element.label();
        let scheme = self.schemes.iter_mut().find(|s| s.id == scheme_id)?;
        let id = scheme.add_member(element, name, after.as_deref());
        debug!("added member {} to {}", id, scheme_id);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_ids_and_names_are_sequential() {
        let mut store = SchemeStore::new();
        let ids: Vec<String> = (0..3).map(|_| store.create_scheme().id.clone()).collect();
        assert_eq!(ids, ["scheme0", "scheme1", "scheme2"]);
        let names: Vec<&str> = store.schemes().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Color Scheme 1", "Color Scheme 2", "Color Scheme 3"]);
    }

    #[test]
    fn scheme_ids_are_never_reissued_after_deletion() {
        let mut store = SchemeStore::new();
        let mut issued = Vec::new();
        for _ in 0..4 {
            issued.push(store.create_scheme().id.clone());
        }
        store.remove_scheme("scheme1");
        store.remove_scheme("scheme3");
        let next = store.create_scheme().id.clone();
        assert!(!issued.contains(&next));
        assert_eq!(next, "scheme4");
    }

    #[test]
    fn default_scheme_colors() {
        let mut store = SchemeStore::new();
        let colors = store.create_scheme().colors;
        assert_eq!(colors.get(ColorRole::Foreground), Rgba::from_rgb(0, 0, 0));
        assert_eq!(colors.get(ColorRole::Background), Rgba::from_rgb(255, 255, 255));
        assert_eq!(colors.get(ColorRole::Border), Rgba::from_rgb(0, 0, 0));
    }

    #[test]
    fn member_ids_stay_unique_across_add_and_remove() {
        let mut store = SchemeStore::new();
        let scheme_id = store.create_scheme().id.clone();
        let a = store
            .add_member(&scheme_id, PageElement::new("div"), "a")
            .unwrap();
        let b = store
            .add_member(&scheme_id, PageElement::new("div"), "b")
            .unwrap();
        assert_ne!(a, b);
        store.remove_member(&scheme_id, &a);
        let c = store
            .add_member(&scheme_id, PageElement::new("div"), "c")
            .unwrap();
        assert_ne!(c, b);
        assert_ne!(c, a);
        assert_eq!(c, format!("{}_member2", scheme_id));
    }

    #[test]
    fn removal_of_unknown_ids_is_a_silent_no_op() {
        let mut store = SchemeStore::new();
        store.create_scheme();
        store.remove_scheme("scheme99");
        store.remove_member("scheme99", "scheme99_member0");
        store.remove_member("scheme0", "scheme0_member7");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn element_label_includes_tag_id_and_classes() {
        let el = PageElement::new("DIV").with_id("x").with_class("a").with_class("b");
        assert_eq!(el.label(), "div#x.a.b");
    }

    #[test]
    fn complete_pick_attaches_the_clicked_element() {
        let mut store = SchemeStore::new();
        let scheme_id = store.create_scheme().id.clone();
        let mut pick = PickState::default();
        pick.begin(scheme_id.clone());

        let el = PageElement::new("div").with_id("x").with_class("a").with_class("b");
        let member_id = store.complete_pick(&mut pick, el).unwrap();

        assert_eq!(pick, PickState::Idle);
        let scheme = store.get(&scheme_id).unwrap();
        let member = scheme.members.iter().find(|m| m.id == member_id).unwrap();
        assert_eq!(member.name, "div#x.a.b");
    }

    #[test]
    fn pick_from_a_member_row_inserts_after_that_member() {
        let mut store = SchemeStore::new();
        let scheme_id = store.create_scheme().id.clone();
        let a = store
            .add_member(&scheme_id, PageElement::new("div"), "a")
            .unwrap();
        let b = store
            .add_member(&scheme_id, PageElement::new("div"), "b")
            .unwrap();

        let mut pick = PickState::default();
        pick.begin_after(scheme_id.clone(), a.clone());
        let c = store
            .complete_pick(&mut pick, PageElement::new("span"))
            .unwrap();

        let order: Vec<&str> = store
            .get(&scheme_id)
            .unwrap()
            .members
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(order, [a.as_str(), c.as_str(), b.as_str()]);
    }

    #[test]
    fn pick_appends_when_the_anchor_member_was_removed() {
        let mut store = SchemeStore::new();
        let scheme_id = store.create_scheme().id.clone();
        let a = store
            .add_member(&scheme_id, PageElement::new("div"), "a")
            .unwrap();
        let b = store
            .add_member(&scheme_id, PageElement::new("div"), "b")
            .unwrap();

        let mut pick = PickState::default();
        pick.begin_after(scheme_id.clone(), a.clone());
        store.remove_member(&scheme_id, &a);
        let c = store
            .complete_pick(&mut pick, PageElement::new("span"))
            .unwrap();

        let order: Vec<&str> = store
            .get(&scheme_id)
            .unwrap()
            .members
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(order, [b.as_str(), c.as_str()]);
    }

    #[test]
    fn beginning_a_new_pick_cancels_the_old_session() {
        let mut pick = PickState::default();
        pick.begin("scheme0");
        pick.begin("scheme1");
        assert_eq!(pick.target(), Some("scheme1"));
        pick.cancel();
        assert!(!pick.is_picking());
    }

    #[test]
    fn pick_without_active_session_is_a_no_op() {
        let mut store = SchemeStore::with_default_scheme();
        let mut pick = PickState::default();
        assert!(store.complete_pick(&mut pick, PageElement::new("div")).is_none());
        assert!(store.get("scheme0").unwrap().members.is_empty());
    }

    #[test]
    fn display_name_truncates_long_names_only() {
        let element = PageElement::new("div");
        let long = Member {
            id: "scheme0_member0".into(),
            name: "div#navigation.menu.dark-theme".into(),
            element: element.clone(),
        };
        assert_eq!(long.display_name(), "div#navigation.menu....");
        assert_eq!(long.name, "div#navigation.menu.dark-theme");

        let short = Member {
            id: "scheme0_member1".into(),
            name: "div#x".into(),
            element,
        };
        assert_eq!(short.display_name(), "div#x");
    }

    #[test]
    fn rename_updates_schemes_and_members() {
        let mut store = SchemeStore::with_default_scheme();
        store.rename_scheme("scheme0", "Header palette");
        assert_eq!(store.get("scheme0").unwrap().name, "Header palette");

        let member_id = store
            .add_member("scheme0", PageElement::new("h1"), "h1")
            .unwrap();
        store.rename_member("scheme0", &member_id, "Page title");
        let member = &store.get("scheme0").unwrap().members[0];
        assert_eq!(member.name, "Page title");
    }

    #[test]
    fn scheme_color_can_be_set_per_role() {
        let mut store = SchemeStore::with_default_scheme();
        store.set_scheme_color("scheme0", ColorRole::Border, Rgba::from_rgb(10, 20, 30));
        let colors = store.get("scheme0").unwrap().colors;
        assert_eq!(colors.get(ColorRole::Border), Rgba::from_rgb(10, 20, 30));
        assert_eq!(colors.get(ColorRole::Foreground), Rgba::from_rgb(0, 0, 0));
    }
}
