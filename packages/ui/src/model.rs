use crate::view::{NodeRef, Selector, View};

/// One reactive element of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    key: String,
    tag: &'static str,
    text: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    styles: Vec<(String, String)>,
}

impl Element {
    pub fn new(tag: &'static str, key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            tag,
            text: String::new(),
            classes: Vec::new(),
            attrs: Vec::new(),
            styles: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.toggle_class(class, true);
        self
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.put_attr(name, value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Carry both language variants; the localization controller picks one.
    pub fn translatable(self, tr: &str, en: &str) -> Self {
        self.with_attr("data-tr", tr).with_attr("data-en", en)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Value for a `class` attribute.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    /// Value for a `style` attribute.
    pub fn style_attr(&self) -> String {
        self.styles
            .iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn matches(&self, selector: Selector<'_>) -> bool {
        match selector {
            Selector::Id(id) => self.attr("id") == Some(id),
            Selector::Class(class) => self.has_class(class),
            Selector::Tag(tag) => self.tag == tag,
            Selector::Attrs(names) => names.iter().all(|n| self.attr(n).is_some()),
        }
    }

    fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            if !self.has_class(class) {
                self.classes.push(class.to_string());
            }
        } else {
            self.classes.retain(|c| c != class);
        }
    }

    fn put_attr(&mut self, name: &str, value: String) {
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    fn put_style(&mut self, property: &str, value: String) {
        match self.styles.iter_mut().find(|(p, _)| p == property) {
            Some(entry) => entry.1 = value,
            None => self.styles.push((property.to_string(), value)),
        }
    }
}

/// In-memory view state of the whole page, in document order.
///
/// Lookups by key are what the components use; controllers go through [`View`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageModel {
    elements: Vec<Element>,
    title: String,
    lang: String,
}

impl PageModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Element) -> NodeRef {
        if self.node(element.key()).is_some() {
            tracing::warn!("page.push: duplicate element key {}", element.key());
        }
        self.elements.push(element);
        NodeRef(self.elements.len() - 1)
    }

    pub fn with(mut self, element: Element) -> Self {
        self.push(element);
        self
    }

    pub fn node(&self, key: &str) -> Option<NodeRef> {
        self.elements
            .iter()
            .position(|e| e.key == key)
            .map(NodeRef)
    }

    pub fn element(&self, key: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.key == key)
    }

    pub fn get(&self, node: NodeRef) -> Option<&Element> {
        self.elements.get(node.0)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn text(&self, key: &str) -> String {
        self.element(key)
            .map(|e| e.text.clone())
            .unwrap_or_default()
    }

    pub fn classes(&self, key: &str) -> String {
        self.element(key).map(Element::class_attr).unwrap_or_default()
    }

    pub fn styles(&self, key: &str) -> String {
        self.element(key).map(Element::style_attr).unwrap_or_default()
    }

    pub fn attr_of(&self, key: &str, name: &str) -> String {
        self.element(key)
            .and_then(|e| e.attr(name))
            .unwrap_or_default()
            .to_string()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn document_lang(&self) -> &str {
        &self.lang
    }

    fn get_mut(&mut self, node: NodeRef) -> Option<&mut Element> {
        let element = self.elements.get_mut(node.0);
        if element.is_none() {
            tracing::debug!("page: stale node {:?}", node);
        }
        element
    }
}

impl View for PageModel {
    fn query_all(&self, selector: Selector<'_>) -> Vec<NodeRef> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.matches(selector))
            .map(|(i, _)| NodeRef(i))
            .collect()
    }

    fn attr(&self, node: NodeRef, name: &str) -> Option<&str> {
        self.get(node).and_then(|e| e.attr(name))
    }

    fn text_content(&self, node: NodeRef) -> Option<&str> {
        self.get(node).map(Element::text)
    }

    fn has_class(&self, node: NodeRef, class: &str) -> bool {
        self.get(node).is_some_and(|e| e.has_class(class))
    }

    fn set_text(&mut self, node: NodeRef, text: &str) {
        if let Some(e) = self.get_mut(node) {
            e.text = text.to_string();
        }
    }

    fn set_class(&mut self, node: NodeRef, class: &str, on: bool) {
        if let Some(e) = self.get_mut(node) {
            e.toggle_class(class, on);
        }
    }

    fn set_attr(&mut self, node: NodeRef, name: &str, value: &str) {
        if let Some(e) = self.get_mut(node) {
            e.put_attr(name, value.to_string());
        }
    }

    fn set_style(&mut self, node: NodeRef, property: &str, value: &str) {
        if let Some(e) = self.get_mut(node) {
            e.put_style(property, value.to_string());
        }
    }

    fn remove_style(&mut self, node: NodeRef, property: &str) {
        if let Some(e) = self.get_mut(node) {
            e.styles.retain(|(p, _)| p != property);
        }
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_document_lang(&mut self, code: &str) {
        self.lang = code.to_string();
    }
}
