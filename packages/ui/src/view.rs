//! The seam between controllers and whatever renders the page.
//!
//! Controllers never touch the browser DOM directly. They query and mutate a
//! [`View`]; the app keeps a [`crate::PageModel`] in a signal and the
//! components render from it, while tests use a plain `PageModel`.

/// Handle to an element inside a [`View`]. Only valid for the view that returned it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeRef(pub(crate) usize);

/// The small subset of CSS selectors the page behaviour needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// `#id`
    Id(&'a str),
    /// `.class`
    Class(&'a str),
    /// `tag`
    Tag(&'a str),
    /// `[a][b]...`, every attribute present.
    Attrs(&'a [&'a str]),
}

pub trait View {
    /// Matching elements in document order.
    fn query_all(&self, selector: Selector<'_>) -> Vec<NodeRef>;

    fn attr(&self, node: NodeRef, name: &str) -> Option<&str>;

    fn text_content(&self, node: NodeRef) -> Option<&str>;

    fn has_class(&self, node: NodeRef, class: &str) -> bool;

    fn set_text(&mut self, node: NodeRef, text: &str);

    /// Add (`on`) or remove a class. Adding a present class is a no-op.
    fn set_class(&mut self, node: NodeRef, class: &str, on: bool);

    fn set_attr(&mut self, node: NodeRef, name: &str, value: &str);

    fn set_style(&mut self, node: NodeRef, property: &str, value: &str);

    fn remove_style(&mut self, node: NodeRef, property: &str);

    fn set_title(&mut self, title: &str);

    /// The `lang` attribute of the document element.
    fn set_document_lang(&mut self, code: &str);

    fn query(&self, selector: Selector<'_>) -> Option<NodeRef> {
        self.query_all(selector).into_iter().next()
    }
}
