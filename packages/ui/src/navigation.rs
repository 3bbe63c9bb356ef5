use crate::view::{NodeRef, Selector, View};
use crate::viewport::Viewport;

/// Height of the fixed navbar; smooth scrolling stops this far above a section.
pub const NAV_SCROLL_OFFSET: f64 = 70.0;

pub fn toggle_menu(view: &mut impl View) {
    if let Some(menu) = view.query(Selector::Id("nav-menu")) {
        let open = view.has_class(menu, "active");
        view.set_class(menu, "active", !open);
    }
}

/// Used for nav-link clicks and for clicks outside the menu and its button.
pub fn close_menu(view: &mut impl View) {
    if let Some(menu) = view.query(Selector::Id("nav-menu")) {
        view.set_class(menu, "active", false);
    }
}

pub fn menu_open(view: &impl View) -> bool {
    view.query(Selector::Id("nav-menu"))
        .is_some_and(|menu| view.has_class(menu, "active"))
}

/// The section id a nav link `href` such as `#about` points at.
pub fn section_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Where to scroll for section `id`.
///
/// `measured` is the section's top read at click time; layout can move after the
/// last scroll sample (a language switch rewraps text), so it wins over the sample.
pub fn scroll_target(measured: Option<f64>, viewport: &Viewport, id: &str) -> Option<f64> {
    measured
        .or_else(|| viewport.section_top(id))
        .map(|top| top - NAV_SCROLL_OFFSET)
}

/// The URL a project card opens, if it declares a non-empty one.
pub fn project_url(view: &impl View, card: NodeRef) -> Option<String> {
    view.attr(card, "data-url")
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}
