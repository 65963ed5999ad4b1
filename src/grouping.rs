//! Regroup score-ordered results into the section tree the dropdown displays.
//!
//! Results arrive ordered by relevance, but users read them grouped by the site section they
//! belong to. Grouping buckets each result under its root page (`hierarchy[0]`) and then under
//! its second-level heading (`hierarchy[1]`, or the root itself for a page without nested
//! headings). Both levels keep first-seen order, so the only ordering signal is arrival order.
//!
//! The display order produced by [`GroupedView::flatten`] is the order the engine must use when
//! it resolves a selected index back to a result.

use crate::result::Hierarchical;
use indexmap::IndexMap;

const UNNAMED: &str = "";

#[derive(Debug, PartialEq)]
/// Results sharing a root page, bucketed by second-level heading in first-seen order.
pub struct SectionNode<'a, R> {
    /// Root page title (`hierarchy[0]`).
    pub name: &'a str,
    /// Second-level heading -> results in arrival order.
    pub sections: IndexMap<&'a str, Vec<&'a R>>,
}

impl<'a, R> SectionNode<'a, R> {
    /// Second-level heading names in first-seen order.
    pub fn second_level_order(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.sections.keys().copied()
    }

    #[must_use]
    /// Number of results under this root.
    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    #[must_use]
    /// True if no results are stored under this root.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, PartialEq)]
/// The two-level section tree built from one result update.
pub struct GroupedView<'a, R> {
    /// Root title -> section node, in first-seen order.
    pub roots: IndexMap<&'a str, SectionNode<'a, R>>,
}

#[derive(Debug, PartialEq)]
/// A result paired with its position in display order.
pub struct FlattenedResult<'a, R> {
    /// Contiguous 0-based display index.
    pub index: usize,
    /// The grouped result.
    pub result: &'a R,
}

impl<'a, R> GroupedView<'a, R> {
    /// Root titles in first-seen order.
    pub fn root_order(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.roots.keys().copied()
    }

    #[must_use]
    /// Total number of grouped results.
    pub fn len(&self) -> usize {
        self.roots.values().map(SectionNode::len).sum()
    }

    #[must_use]
    /// True when nothing was grouped.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    #[must_use]
    /// Walk roots, then headings, then results, numbering each result from zero.
    pub fn flatten(&self) -> Vec<FlattenedResult<'a, R>> {
        self.roots
            .values()
            .flat_map(|node| node.sections.values())
            .flatten()
            .copied()
            .enumerate()
            .map(|(index, result)| FlattenedResult { index, result })
            .collect()
    }
}

/// Root and second-level keys for a result.
///
/// A single-element hierarchy uses its only entry for both keys, so a root page hit forms its
/// own one-result group under its own name.
fn section_keys<R: Hierarchical>(result: &R) -> (&str, &str) {
    match result.hierarchy() {
        [] => {
            tracing::warn!("result without hierarchy grouped under an unnamed root");
            (UNNAMED, UNNAMED)
        }
        [root] => (root.as_str(), root.as_str()),
        [root, second, ..] => (root.as_str(), second.as_str()),
    }
}

#[must_use]
/// Group results by root page and second-level heading, preserving arrival order.
pub fn group<R: Hierarchical>(results: &[R]) -> GroupedView<'_, R> {
    let mut roots: IndexMap<&str, SectionNode<'_, R>> = IndexMap::new();

    for result in results {
        let (root_name, second_name) = section_keys(result);
        roots
            .entry(root_name)
            .or_insert_with(|| SectionNode {
                name: root_name,
                sections: IndexMap::new(),
            })
            .sections
            .entry(second_name)
            .or_default()
            .push(result);
    }

    GroupedView { roots }
}

#[cfg(test)]
#[path = "tests/grouping.rs"]
mod tests;
