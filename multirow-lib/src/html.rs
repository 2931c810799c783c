//! Minimal markup builder and form element naming.

use std::fmt::Write;

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Escapes text for use in element content or a quoted attribute value.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// An element under construction.
///
/// # Example
///
/// ```
/// use multirow_lib::html::Tag;
///
/// let markup = Tag::new("td").class("list-cell").text("a < b").render();
/// assert_eq!(markup, "<td class=\"list-cell\">a &lt; b</td>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Tag {
    name: &'static str,
    attributes: Vec<(String, String)>,
    content: String,
}

impl Tag {
    /// Creates an empty element.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            content: String::new(),
        }
    }

    /// Sets an attribute, replacing an earlier value for the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Sets an attribute only when `value` is present.
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Appends a CSS class.
    pub fn class(mut self, class: &str) -> Self {
        if class.is_empty() {
            return self;
        }
        match self.attributes.iter_mut().find(|(n, _)| n == "class") {
            Some((_, existing)) if !existing.is_empty() => {
                existing.push(' ');
                existing.push_str(class);
            }
            Some((_, existing)) => existing.push_str(class),
            None => self.attributes.push(("class".to_string(), class.to_string())),
        }
        self
    }

    /// Sets several attributes at once.
    pub fn attrs<'a>(mut self, attributes: impl IntoIterator<Item = (&'a String, &'a String)>) -> Self {
        for (name, value) in attributes {
            self = self.attr(name.clone(), value.clone());
        }
        self
    }

    /// Appends escaped text content.
    pub fn text(mut self, text: &str) -> Self {
        self.content.push_str(&escape(text));
        self
    }

    /// Appends raw markup.
    pub fn raw(mut self, markup: &str) -> Self {
        self.content.push_str(markup);
        self
    }

    /// Renders the element.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "<{}", self.name);
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&self.name) {
            return out;
        }
        out.push_str(&self.content);
        let _ = write!(out, "</{}>", self.name);
        out
    }
}

/// Form field name for one column of one row: `name[index][column]`.
pub fn input_name(widget_name: &str, index: &str, column: &str) -> String {
    format!("{}[{}][{}]", widget_name, index, column)
}

/// Derives an element id from a form field name.
///
/// Brackets become dashes and everything is lowercased, except text inside
/// `{...}` placeholders which must survive verbatim for client substitution.
pub fn element_id(name: &str) -> String {
    let name = name.replace("[]", "");
    let mut out = String::with_capacity(name.len());
    let mut in_placeholder = false;
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                in_placeholder = true;
                out.push(c);
            }
            '}' => {
                in_placeholder = false;
                out.push(c);
            }
            _ if in_placeholder => out.push(c),
            ']' if chars.peek() == Some(&'[') => {
                chars.next();
                out.push('-');
            }
            ']' => {}
            '[' | ' ' | '.' => out.push('-'),
            c => out.extend(c.to_lowercase()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_element() {
        let markup = Tag::new("input")
            .attr("type", "text")
            .attr("value", "\"quoted\"")
            .render();
        assert_eq!(markup, "<input type=\"text\" value=\"&quot;quoted&quot;\">");
    }

    #[test]
    fn test_attr_replaces_and_class_appends() {
        let markup = Tag::new("div")
            .attr("id", "a")
            .attr("id", "b")
            .class("one")
            .class("two")
            .raw("<span></span>")
            .render();
        assert_eq!(markup, "<div id=\"b\" class=\"one two\"><span></span></div>");
    }

    #[test]
    fn test_input_name() {
        assert_eq!(input_name("items", "0", "title"), "items[0][title]");
    }

    #[test]
    fn test_element_id() {
        assert_eq!(element_id("items[0][name]"), "items-0-name");
        assert_eq!(element_id("Order[items][2][title]"), "order-items-2-title");
        assert_eq!(element_id("tags[]"), "tags");
    }

    #[test]
    fn test_element_id_keeps_placeholder() {
        assert_eq!(
            element_id("Items[{multiple_index_W0}][Name]"),
            "items-{multiple_index_W0}-name"
        );
    }
}
