use super::group;
use crate::result::{Hierarchical, SearchResult};

fn hit(hierarchy: &[&str], title: &str) -> SearchResult {
    SearchResult::new(hierarchy.iter().copied(), title)
}

fn titles(results: &[SearchResult]) -> Vec<String> {
    group(results)
        .flatten()
        .into_iter()
        .map(|flat| flat.result.title.clone())
        .collect()
}

#[test]
fn test_docs_and_api_scenario() {
    let results = vec![
        hit(&["Docs", "Install"], "1"),
        hit(&["Docs", "Install"], "2"),
        hit(&["API"], "3"),
    ];

    let grouped = group(&results);

    assert_eq!(grouped.root_order().collect::<Vec<_>>(), vec!["Docs", "API"]);

    let docs = &grouped.roots["Docs"];
    assert_eq!(docs.second_level_order().collect::<Vec<_>>(), vec!["Install"]);
    let install: Vec<&str> = docs.sections["Install"]
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(install, vec!["1", "2"]);

    let api = &grouped.roots["API"];
    assert_eq!(api.second_level_order().collect::<Vec<_>>(), vec!["API"]);
    assert_eq!(api.sections["API"][0].title, "3");

    let flat = grouped.flatten();
    let pairs: Vec<(usize, &str)> = flat
        .iter()
        .map(|f| (f.index, f.result.title.as_str()))
        .collect();
    assert_eq!(pairs, vec![(0, "1"), (1, "2"), (2, "3")]);
}

#[test]
fn test_results_regroup_behind_first_seen_root() {
    // Relevance order interleaves two roots; display order must not.
    let results = vec![
        hit(&["Guide", "Install"], "g1"),
        hit(&["API", "Search"], "a1"),
        hit(&["Guide", "Configure"], "g2"),
        hit(&["API", "Search"], "a2"),
        hit(&["Guide", "Install"], "g3"),
    ];

    assert_eq!(titles(&results), vec!["g1", "g3", "g2", "a1", "a2"]);

    let grouped = group(&results);
    assert_eq!(
        grouped.roots["Guide"].second_level_order().collect::<Vec<_>>(),
        vec!["Install", "Configure"]
    );
}

#[test]
fn test_unrelated_root_order_does_not_reorder_siblings() {
    let forward = vec![
        hit(&["A", "x"], "a1"),
        hit(&["B", "y"], "b1"),
        hit(&["A", "x"], "a2"),
        hit(&["C"], "c1"),
        hit(&["A", "z"], "a3"),
    ];
    let shuffled = vec![
        hit(&["C"], "c1"),
        hit(&["A", "x"], "a1"),
        hit(&["A", "x"], "a2"),
        hit(&["B", "y"], "b1"),
        hit(&["A", "z"], "a3"),
    ];

    fn only_a(results: &[SearchResult]) -> Vec<String> {
        titles(results)
            .into_iter()
            .filter(|t| t.starts_with('a'))
            .collect()
    }

    assert_eq!(only_a(&forward), vec!["a1", "a2", "a3"]);
    assert_eq!(only_a(&forward), only_a(&shuffled));
}

#[test]
fn test_single_level_hierarchy_is_its_own_section() {
    let results = vec![hit(&["Overview"], "page"), hit(&["Overview", "Intro"], "heading")];

    let grouped = group(&results);
    let overview = &grouped.roots["Overview"];

    assert_eq!(
        overview.second_level_order().collect::<Vec<_>>(),
        vec!["Overview", "Intro"],
        "Root page hit should sit in a section named after the page"
    );
    assert_eq!(overview.len(), 2);
}

#[test]
fn test_deeper_levels_do_not_split_sections() {
    let results = vec![
        hit(&["Guide", "Install", "Linux"], "linux"),
        hit(&["Guide", "Install", "macOS"], "mac"),
    ];

    let grouped = group(&results);
    assert_eq!(grouped.roots["Guide"].sections["Install"].len(), 2);
}

#[test]
fn test_grouping_is_idempotent() {
    let results = vec![
        hit(&["Docs", "Install"], "1"),
        hit(&["API"], "2"),
        hit(&["Docs", "Usage"], "3"),
    ];

    assert_eq!(group(&results), group(&results));
}

#[test]
fn test_empty_input() {
    let results: Vec<SearchResult> = Vec::new();
    let grouped = group(&results);

    assert!(grouped.is_empty());
    assert!(grouped.flatten().is_empty());
}

struct Bare(Vec<String>);

impl Hierarchical for Bare {
    fn hierarchy(&self) -> &[String] {
        &self.0
    }
}

#[test]
fn test_missing_hierarchy_degrades_to_unnamed_root() {
    let results = vec![Bare(vec![]), Bare(vec!["Docs".to_string()])];

    let grouped = group(&results);

    assert_eq!(grouped.root_order().collect::<Vec<_>>(), vec!["", "Docs"]);
    assert_eq!(grouped.len(), 2);
}
