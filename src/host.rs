//! The page the dropdown is mounted in.
//!
//! The embedding application owns the input, the result list and the wrapper that positions the
//! list. The core only reads and writes attributes, styles, the input value and the list's
//! children through the [`Host`] trait; it never creates or removes the elements themselves.
//!
//! [`MemoryHost`] keeps all of that in memory. It backs the tests and the preview binary.

use crate::markup::Markup;
use crate::presentation::Position;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Host elements the dropdown knows about.
pub enum HostElement {
    /// Container holding the input and the result wrapper.
    Root,
    /// The text input.
    Input,
    /// The list the results are rendered into.
    ResultList,
    /// The positioned wrapper around the result list.
    ResultContainer,
    /// Optional branding element.
    Logo,
}

impl HostElement {
    /// Every element, required ones first.
    pub const ALL: [Self; 5] = [
        Self::Root,
        Self::Input,
        Self::ResultList,
        Self::ResultContainer,
        Self::Logo,
    ];

    #[must_use]
    /// True for elements the dropdown cannot work without.
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Logo)
    }
}

impl fmt::Display for HostElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Root => "root",
            Self::Input => "input",
            Self::ResultList => "result list",
            Self::ResultContainer => "result container",
            Self::Logo => "logo",
        };
        f.write_str(name)
    }
}

/// Operations the dropdown performs on the embedding page.
pub trait Host {
    /// Whether the element exists under the root.
    fn contains(&self, element: HostElement) -> bool;

    /// Current value of an attribute.
    fn attribute(&self, element: HostElement, name: &str) -> Option<String>;

    /// Set an attribute.
    fn set_attribute(&mut self, element: HostElement, name: &str, value: &str);

    /// Remove an attribute if present.
    fn remove_attribute(&mut self, element: HostElement, name: &str);

    /// Set an inline style property, or clear it with `None`.
    fn set_style(&mut self, element: HostElement, property: &str, value: Option<&str>);

    /// Text currently in the input.
    fn input_value(&self) -> String;

    /// Replace the text in the input.
    fn set_input_value(&mut self, value: &str);

    /// Remove every child of the result list.
    fn clear_results(&mut self);

    /// Append a rendered fragment to the result list.
    fn append_result(&mut self, fragment: Markup);

    /// Decide which side of the input the panel should open towards.
    fn resolve_position(&mut self) -> Position;

    /// Produce a document-unique id starting with `prefix`.
    fn unique_id(&mut self, prefix: &str) -> String;

    /// Scroll the result list so the element with `id` is visible.
    fn scroll_into_view(&mut self, _id: &str) {}
}

#[derive(Clone, Debug, Default)]
struct Node {
    attributes: IndexMap<String, String>,
    styles: IndexMap<String, String>,
}

#[derive(Clone, Debug)]
/// In-memory page with fixed geometry.
pub struct MemoryHost {
    nodes: HashMap<HostElement, Node>,
    input_value: String,
    results: Vec<Markup>,
    position: Position,
    position_queries: usize,
    next_id: usize,
    scrolled_to: Option<String>,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHost {
    #[must_use]
    /// A page with a root, an input, a result list and a result container, but no logo.
    pub fn new() -> Self {
        let nodes = [
            HostElement::Root,
            HostElement::Input,
            HostElement::ResultList,
            HostElement::ResultContainer,
        ]
        .into_iter()
        .map(|element| (element, Node::default()))
        .collect();

        Self {
            nodes,
            input_value: String::new(),
            results: Vec::new(),
            position: Position::Below,
            position_queries: 0,
            next_id: 0,
            scrolled_to: None,
        }
    }

    #[must_use]
    /// Adds the optional logo element.
    pub fn with_logo(mut self) -> Self {
        self.nodes.insert(HostElement::Logo, Node::default());
        self
    }

    #[must_use]
    /// Drops an element, to model incomplete markup.
    pub fn without(mut self, element: HostElement) -> Self {
        self.nodes.remove(&element);
        self
    }

    #[must_use]
    /// Sets the side `resolve_position` reports.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Changes the side `resolve_position` reports, e.g. after the page scrolled.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    #[must_use]
    /// Current inline style value.
    pub fn style(&self, element: HostElement, property: &str) -> Option<&str> {
        self.nodes
            .get(&element)
            .and_then(|node| node.styles.get(property))
            .map(String::as_str)
    }

    /// Simulates the user typing into the input.
    pub fn type_text(&mut self, value: &str) {
        self.input_value = value.to_string();
    }

    #[must_use]
    /// Children of the result list, in order.
    pub fn results(&self) -> &[Markup] {
        &self.results
    }

    #[must_use]
    /// Inner HTML of the result list.
    pub fn result_list_html(&self) -> String {
        self.results.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    /// How many times geometry was consulted.
    pub fn position_queries(&self) -> usize {
        self.position_queries
    }

    #[must_use]
    /// Id of the element last scrolled into view.
    pub fn scrolled_to(&self) -> Option<&str> {
        self.scrolled_to.as_deref()
    }
}

impl Host for MemoryHost {
    fn contains(&self, element: HostElement) -> bool {
        self.nodes.contains_key(&element)
    }

    fn attribute(&self, element: HostElement, name: &str) -> Option<String> {
        self.nodes
            .get(&element)
            .and_then(|node| node.attributes.get(name))
            .cloned()
    }

    fn set_attribute(&mut self, element: HostElement, name: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn remove_attribute(&mut self, element: HostElement, name: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.attributes.shift_remove(name);
        }
    }

    fn set_style(&mut self, element: HostElement, property: &str, value: Option<&str>) {
        if let Some(node) = self.nodes.get_mut(&element) {
            match value {
                Some(value) => {
                    node.styles.insert(property.to_string(), value.to_string());
                }
                None => {
                    node.styles.shift_remove(property);
                }
            }
        }
    }

    fn input_value(&self) -> String {
        self.input_value.clone()
    }

    fn set_input_value(&mut self, value: &str) {
        self.input_value = value.to_string();
    }

    fn clear_results(&mut self) {
        self.results.clear();
    }

    fn append_result(&mut self, fragment: Markup) {
        self.results.push(fragment);
    }

    fn resolve_position(&mut self) -> Position {
        self.position_queries += 1;
        self.position
    }

    fn unique_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}{}", self.next_id)
    }

    fn scroll_into_view(&mut self, id: &str) {
        self.scrolled_to = Some(id.to_string());
    }
}
