// SPDX-License-Identifier: MPL-2.0
//! In-memory model of the rendered page.
//!
//! Elements carry the localization markers the templates declare (a text
//! key, an HTML-allowed flag, an accessibility-label key, a language
//! selector code) plus the writable surfaces the synchronizer targets
//! (text, raw HTML, value, placeholder, accessible label, CSS classes).
//! The core never creates or destroys elements; it only rewrites surfaces.

/// What kind of element a marker sits on, which decides the surface the
/// localized text lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// The document title; localized text replaces its text content.
    Title,
    /// A submit- or button-role input; localized text goes to `value`.
    ActionInput,
    /// Any other input or textarea; localized text goes to `placeholder`.
    FieldInput,
    /// Any other element; localized text goes to `text`, or `html` when the
    /// HTML-allowed marker is set.
    Node,
}

/// One page element with its markers and writable surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    kind: ElementKind,
    text_key: Option<String>,
    html_allowed: bool,
    aria_key: Option<String>,
    selector_code: Option<String>,
    text: String,
    html: String,
    value: String,
    placeholder: String,
    aria_label: Option<String>,
    classes: Vec<String>,
}

impl Element {
    fn bare(kind: ElementKind) -> Self {
        Self {
            kind,
            text_key: None,
            html_allowed: false,
            aria_key: None,
            selector_code: None,
            text: String::new(),
            html: String::new(),
            value: String::new(),
            placeholder: String::new(),
            aria_label: None,
            classes: Vec::new(),
        }
    }

    /// A generic element whose text content is localized under `text_key`.
    pub fn node(text_key: &str) -> Self {
        let mut element = Self::bare(ElementKind::Node);
        element.text_key = Some(text_key.to_string());
        element
    }

    /// A generic element allowed to receive the translation as raw HTML.
    pub fn html_node(text_key: &str) -> Self {
        let mut element = Self::node(text_key);
        element.html_allowed = true;
        element
    }

    /// The document title element.
    pub fn title(text_key: &str) -> Self {
        let mut element = Self::bare(ElementKind::Title);
        element.text_key = Some(text_key.to_string());
        element
    }

    /// A submit/button input whose `value` is localized.
    pub fn action_input(text_key: &str) -> Self {
        let mut element = Self::bare(ElementKind::ActionInput);
        element.text_key = Some(text_key.to_string());
        element
    }

    /// A text input or textarea whose `placeholder` is localized.
    pub fn field_input(text_key: &str) -> Self {
        let mut element = Self::bare(ElementKind::FieldInput);
        element.text_key = Some(text_key.to_string());
        element
    }

    /// A language-selection control carrying the code it switches to.
    pub fn selector(code: &str) -> Self {
        let mut element = Self::bare(ElementKind::Node);
        element.selector_code = Some(code.to_string());
        element
    }

    /// Adds an accessibility-label key; its translation lands in
    /// `aria_label` independently of the text surface.
    pub fn with_aria_key(mut self, aria_key: &str) -> Self {
        self.aria_key = Some(aria_key.to_string());
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn text_key(&self) -> Option<&str> {
        self.text_key.as_deref()
    }

    pub fn html_allowed(&self) -> bool {
        self.html_allowed
    }

    pub fn aria_key(&self) -> Option<&str> {
        self.aria_key.as_deref()
    }

    pub fn selector_code(&self) -> Option<&str> {
        self.selector_code.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn aria_label(&self) -> Option<&str> {
        self.aria_label.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_html(&mut self, html: impl Into<String>) {
        self.html = html.into();
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn set_aria_label(&mut self, label: impl Into<String>) {
        self.aria_label = Some(label.into());
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}

/// Handle to an element within its page. Stable for the page's lifetime
/// since the core never adds or removes elements.
pub type ElementId = usize;

/// The rendered document: a flat element list plus the document-level
/// language attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    lang_attr: Option<String>,
    elements: Vec<Element>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element and returns its handle.
    pub fn push(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        self.elements.len() - 1
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// The document-level locale attribute (the `<html lang>` analog).
    pub fn lang_attr(&self) -> Option<&str> {
        self.lang_attr.as_deref()
    }

    pub fn set_lang_attr(&mut self, code: &str) {
        self.lang_attr = Some(code.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_set_the_expected_markers() {
        let node = Element::node("nav_home");
        assert_eq!(node.kind(), ElementKind::Node);
        assert_eq!(node.text_key(), Some("nav_home"));
        assert!(!node.html_allowed());

        let html = Element::html_node("footer_note");
        assert!(html.html_allowed());

        let selector = Element::selector("fr");
        assert_eq!(selector.selector_code(), Some("fr"));
        assert_eq!(selector.text_key(), None);
    }

    #[test]
    fn aria_key_is_independent_of_text_key() {
        let element = Element::node("search_label").with_aria_key("search_aria");
        assert_eq!(element.text_key(), Some("search_label"));
        assert_eq!(element.aria_key(), Some("search_aria"));
    }

    #[test]
    fn class_toggling_is_idempotent() {
        let mut element = Element::selector("en");
        element.add_class("active");
        element.add_class("active");
        assert!(element.has_class("active"));
        element.remove_class("active");
        assert!(!element.has_class("active"));
    }

    #[test]
    fn push_returns_stable_handles() {
        let mut page = Page::new();
        let first = page.push(Element::node("a"));
        let second = page.push(Element::node("b"));
        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(page.element(second).and_then(Element::text_key), Some("b"));
    }
}
