//! Turn one result update into list markup plus the display order the engine must adopt.
//!
//! Each root page gets a non-interactive heading entry; every result under it gets an entry
//! numbered by its position in display order (not its position in the relevance-ordered input).
//! The same walk produces the reordered result list, so index `N` in the markup and index `N`
//! in [`RenderOutput::order`] always name the same result.

use crate::grouping::group;
use crate::markup::{escape_text, Markup};
use crate::props::RenderProps;
use crate::result::Hierarchical;

/// Caller-supplied result renderer: `(result, props, display index) -> markup`.
pub type ResultRenderer<R> = Box<dyn Fn(&R, &RenderProps, usize) -> Markup>;

/// Caller-supplied text extractor: `(result, display index if rendering) -> text`.
pub type ValueExtractor<R> = Box<dyn Fn(&R, Option<usize>) -> String>;

#[derive(Debug)]
/// Fragments to append to the result list and the results in the order they were emitted.
pub struct RenderOutput<R> {
    /// Headings and result entries, in document order.
    pub fragments: Vec<Markup>,
    /// Results in display order.
    pub order: Vec<R>,
}

#[must_use]
/// Heading entry for a root page. Not selectable and not counted in the index space.
pub fn root_heading(name: &str) -> Markup {
    Markup::Html(format!(
        "<li class=\"search-root-item\"><div class=\"search-root\">{}</div></li>",
        escape_text(name)
    ))
}

#[must_use]
/// Built-in renderer: a list item wrapping the extracted value.
///
/// The value is inserted as HTML so backends can return highlighted snippets.
pub fn default_render<R>(
    value: &ValueExtractor<R>,
    result: &R,
    props: &RenderProps,
    index: usize,
) -> Markup {
    Markup::Html(format!("<li {props}>{}</li>", value(result, Some(index))))
}

#[must_use]
/// Group `results`, then emit a heading per root and an entry per result in display order.
pub fn render_results<R, F>(
    results: &[R],
    selected_index: Option<usize>,
    base_class: &str,
    render: F,
) -> RenderOutput<R>
where
    R: Hierarchical + Clone,
    F: Fn(&R, &RenderProps, usize) -> Markup,
{
    let grouped = group(results);
    let mut fragments = Vec::with_capacity(results.len() + grouped.roots.len());
    let mut order = Vec::with_capacity(results.len());

    for (root_name, node) in &grouped.roots {
        fragments.push(root_heading(root_name));
        for &result in node.sections.values().flatten() {
            let index = order.len();
            let props = RenderProps::new(index, selected_index, base_class);
            fragments.push(render(result, &props, index));
            order.push(result.clone());
        }
    }

    RenderOutput { fragments, order }
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
