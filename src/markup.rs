//! HTML fragments handed to the host when results are rendered.
//!
//! Renderers return either a ready-made markup string or an [`Element`] the host can insert as a
//! node. Both end up as children of the result list.

use indexmap::IndexMap;
use std::borrow::Cow;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Output of a result renderer.
pub enum Markup {
    /// Raw HTML appended at the end of the result list.
    Html(String),
    /// A single element appended at the end of the result list.
    Element(Element),
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html(html) => f.write_str(html),
            Self::Element(element) => element.fmt(f),
        }
    }
}

impl From<String> for Markup {
    fn from(html: String) -> Self {
        Self::Html(html)
    }
}

impl From<Element> for Markup {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Minimal element node: a tag, ordered attributes and inner HTML.
pub struct Element {
    /// Tag name, e.g. `li`.
    pub tag: String,
    /// Attributes in insertion order.
    pub attributes: IndexMap<String, String>,
    /// Inner HTML, inserted verbatim.
    pub inner_html: String,
}

impl Element {
    #[must_use]
    /// Creates an empty element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            inner_html: String::new(),
        }
    }

    #[must_use]
    /// Sets an attribute, replacing any previous value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    /// Sets the inner HTML.
    pub fn inner_html(mut self, html: impl Into<String>) -> Self {
        self.inner_html = html.into();
        self
    }

    #[must_use]
    /// Reads an attribute.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attributes {
            write!(f, " {name}=\"{}\"", escape_attribute(value))?;
        }
        write!(f, ">{}</{}>", self.inner_html, self.tag)
    }
}

/// Escape text for use inside a double-quoted attribute value.
#[must_use]
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    escape(value, true)
}

/// Escape text for use as element content.
#[must_use]
pub fn escape_text(value: &str) -> Cow<'_, str> {
    escape(value, false)
}

fn escape(value: &str, quotes: bool) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '&' | '<' | '>') || (quotes && c == '"');
    if !value.contains(needs_escape) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
