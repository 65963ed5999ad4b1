//! Per-result attributes for rendered entries.

use crate::markup::{escape_attribute, Element};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Attributes every rendered result carries, derived from its display index.
///
/// `Display` yields an attribute string (`id="..." class="..." ...`) ready to splice into an
/// opening tag.
pub struct RenderProps {
    /// Element id, `{base}-result-{index}`.
    pub id: String,
    /// CSS class, `{base}-result`.
    pub class: String,
    /// Display index, mirrored into `data-result-index` and `tabindex`.
    pub index: usize,
    /// Whether this entry is the highlighted one.
    pub selected: bool,
}

impl RenderProps {
    #[must_use]
    /// Props for the entry at `index` given the currently selected index.
    pub fn new(index: usize, selected_index: Option<usize>, base_class: &str) -> Self {
        Self {
            id: result_id(base_class, index),
            class: format!("{base_class}-result"),
            index,
            selected: selected_index == Some(index),
        }
    }

    #[must_use]
    /// Attribute name/value pairs in rendering order.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attributes = vec![
            ("id", self.id.clone()),
            ("class", self.class.clone()),
            ("data-result-index", self.index.to_string()),
            ("tabindex", self.index.to_string()),
            ("role", "option".to_string()),
        ];
        if self.selected {
            attributes.push(("aria-selected", "true".to_string()));
        }
        attributes
    }

    #[must_use]
    /// An element of the given tag carrying these props.
    pub fn element(&self, tag: &str) -> Element {
        self.attributes()
            .into_iter()
            .fold(Element::new(tag), |element, (name, value)| {
                element.attr(name, value)
            })
    }
}

impl fmt::Display for RenderProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.attributes().into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}=\"{}\"", escape_attribute(&value))?;
        }
        Ok(())
    }
}

#[must_use]
/// Element id of the result at `index`.
pub fn result_id(base_class: &str, index: usize) -> String {
    format!("{base_class}-result-{index}")
}
