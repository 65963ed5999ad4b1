use super::{Options, SiteSearch};
use crate::config::Config;
use crate::engine::{Engine, LocalEngine};
use crate::error::Error;
use crate::host::{Host, HostElement, MemoryHost};
use crate::markup::Markup;
use crate::presentation::Position;
use crate::result::SearchResult;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

type Dropdown = SiteSearch<SearchResult, MemoryHost, LocalEngine<SearchResult>>;

fn corpus() -> Vec<SearchResult> {
    vec![
        SearchResult::new(["Guide", "Install"], "g1"),
        SearchResult::new(["API", "Search"], "a1"),
        SearchResult::new(["Guide", "Configure"], "g2"),
        SearchResult::new(["API", "Search"], "a2"),
        SearchResult::new(["Guide", "Install"], "g3"),
    ]
}

fn search(query: &str) -> Vec<SearchResult> {
    corpus()
        .into_iter()
        .filter(|result| result.title.starts_with(query))
        .collect()
}

fn mount_with(host: MemoryHost, options: Options<SearchResult>) -> Dropdown {
    SiteSearch::with_search(host, search, options).unwrap()
}

fn mount() -> Dropdown {
    mount_with(MemoryHost::new(), Options::default())
}

fn type_query(dropdown: &mut Dropdown, query: &str) {
    dropdown.host_mut().type_text(query);
    dropdown.handle_input(Instant::now());
}

fn titles(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.title.as_str()).collect()
}

fn input_attr(dropdown: &Dropdown, name: &str) -> Option<String> {
    dropdown.host().attribute(HostElement::Input, name)
}

fn submissions() -> (Rc<RefCell<Vec<String>>>, Options<SearchResult>) {
    let submitted: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = Rc::clone(&submitted);
    let options = Options::default()
        .on_submit(move |result: &SearchResult| sink.borrow_mut().push(result.title.clone()));
    (submitted, options)
}

#[test]
fn test_missing_required_elements() {
    for element in [
        HostElement::Root,
        HostElement::Input,
        HostElement::ResultList,
        HostElement::ResultContainer,
    ] {
        let host = MemoryHost::new().without(element);
        let mounted = SiteSearch::with_search(host, search, Options::default());
        assert!(
            matches!(mounted, Err(Error::MissingElement(missing)) if missing == element),
            "mounting without {element} should fail"
        );
    }
}

#[test]
fn test_logo_is_optional() {
    assert!(!mount().has_logo());
    assert!(mount_with(MemoryHost::new().with_logo(), Options::default()).has_logo());
}

#[test]
fn test_initialize_wires_accessibility() {
    let dropdown = mount();
    let host = dropdown.host();

    assert_eq!(host.style(HostElement::Root, "position"), Some("relative"));
    assert_eq!(input_attr(&dropdown, "role").as_deref(), Some("combobox"));
    assert_eq!(input_attr(&dropdown, "autocomplete").as_deref(), Some("off"));
    assert_eq!(
        input_attr(&dropdown, "aria-autocomplete").as_deref(),
        Some("list")
    );
    assert_eq!(input_attr(&dropdown, "aria-expanded").as_deref(), Some("false"));
    assert_eq!(
        host.attribute(HostElement::ResultList, "role").as_deref(),
        Some("listbox")
    );
    assert_eq!(
        host.attribute(HostElement::ResultList, "id").as_deref(),
        Some("redis-sitesearch-result-list-1")
    );
    assert_eq!(
        input_attr(&dropdown, "aria-owns").as_deref(),
        Some("redis-sitesearch-result-list-1")
    );
    assert_eq!(
        host.style(HostElement::ResultContainer, "position"),
        Some("absolute")
    );
    assert_eq!(
        host.style(HostElement::ResultContainer, "visibility"),
        Some("hidden")
    );
    assert_eq!(
        host.attribute(HostElement::Root, "data-expanded").as_deref(),
        Some("false")
    );
}

#[test]
fn test_existing_list_id_is_kept() {
    let mut host = MemoryHost::new();
    host.set_attribute(HostElement::ResultList, "id", "docs-results");

    let dropdown = mount_with(host, Options::default());

    assert_eq!(input_attr(&dropdown, "aria-owns").as_deref(), Some("docs-results"));
}

#[test]
fn test_engine_indices_follow_display_order() {
    let mut dropdown = mount();

    type_query(&mut dropdown, "");

    assert_eq!(
        titles(dropdown.engine().results()),
        vec!["g1", "g3", "g2", "a1", "a2"]
    );
    let html = dropdown.host().result_list_html();
    let g2 = html.find(">g2</li>").unwrap();
    let before = &html[..g2];
    assert!(before.ends_with(r#"data-result-index="2" tabindex="2" role="option""#));
}

#[test]
fn test_click_submits_the_entry_on_screen() {
    let (submitted, options) = submissions();
    let mut dropdown = mount_with(MemoryHost::new(), options);
    type_query(&mut dropdown, "");

    dropdown.handle_result_click(3);

    assert_eq!(*submitted.borrow(), vec!["a1"]);
    assert_eq!(dropdown.host().input_value(), "a1");
    assert!(!dropdown.state().expanded);
    assert!(dropdown.host().results().is_empty());
}

#[test]
fn test_enter_submits_highlighted_entry() {
    let (submitted, options) = submissions();
    let mut dropdown = mount_with(MemoryHost::new(), options);
    type_query(&mut dropdown, "");

    let first = dropdown.handle_key_down("ArrowDown");
    dropdown.handle_key_down("ArrowDown");
    dropdown.handle_key_down("ArrowDown");

    assert!(first.prevents_default());
    assert_eq!(
        input_attr(&dropdown, "aria-activedescendant").as_deref(),
        Some("redis-sitesearch-result-2")
    );
    assert_eq!(dropdown.host().scrolled_to(), Some("redis-sitesearch-result-2"));

    dropdown.handle_key_down("Enter");

    assert_eq!(*submitted.borrow(), vec!["g2"]);
    assert_eq!(dropdown.host().input_value(), "g2");
    assert!(!dropdown.state().expanded);
    assert_eq!(input_attr(&dropdown, "aria-expanded").as_deref(), Some("false"));
}

#[test]
fn test_enter_without_highlight_keeps_results_open() {
    let (submitted, options) = submissions();
    let mut dropdown = mount_with(MemoryHost::new(), options);
    type_query(&mut dropdown, "g");

    dropdown.handle_key_down("Enter");

    assert!(submitted.borrow().is_empty());
    assert!(dropdown.state().expanded);
    assert_eq!(dropdown.engine().results().len(), 3);
}

#[test]
fn test_auto_select_highlights_first_entry() {
    let config = Config {
        auto_select: true,
        ..Config::default()
    };
    let mut dropdown = mount_with(MemoryHost::new(), Options::default().config(config));

    type_query(&mut dropdown, "a");

    assert_eq!(dropdown.engine().selected_index(), Some(0));
    assert_eq!(
        input_attr(&dropdown, "aria-activedescendant").as_deref(),
        Some("redis-sitesearch-result-0")
    );
    assert!(dropdown
        .host()
        .result_list_html()
        .contains(r#"aria-selected="true""#));
}

#[test]
fn test_escape_clears_and_hides() {
    let mut dropdown = mount();
    type_query(&mut dropdown, "a");
    assert!(dropdown.state().expanded);

    dropdown.handle_key_down("Escape");

    assert_eq!(dropdown.host().input_value(), "");
    assert!(!dropdown.state().expanded);
    assert_eq!(
        dropdown.host().style(HostElement::ResultContainer, "visibility"),
        Some("hidden")
    );
}

#[test]
fn test_document_click_outside_hides() {
    let mut dropdown = mount();
    type_query(&mut dropdown, "a");

    dropdown.handle_document_click(true);
    assert!(dropdown.state().expanded);

    dropdown.handle_document_click(false);
    assert!(!dropdown.state().expanded);
    assert!(dropdown.engine().results().is_empty());
}

#[test]
fn test_no_matches_hide_the_panel() {
    let mut dropdown = mount();
    type_query(&mut dropdown, "zzz");

    assert!(!dropdown.state().expanded);
    assert!(!dropdown.state().loading);
    assert!(dropdown.host().results().is_empty());
}

#[test]
fn test_position_resolved_once_per_open_cycle() {
    let mut dropdown = mount();
    type_query(&mut dropdown, "");
    assert_eq!(dropdown.host().position_queries(), 1);
    assert_eq!(dropdown.state().position, Some(Position::Below));

    dropdown.handle_key_down("ArrowDown");
    dropdown.handle_key_down("ArrowDown");
    assert_eq!(dropdown.host().position_queries(), 1);

    dropdown.hide_results();
    dropdown.host_mut().set_position(Position::Above);
    dropdown.handle_focus();

    assert_eq!(dropdown.host().position_queries(), 2);
    assert_eq!(
        dropdown
            .host()
            .attribute(HostElement::Root, "data-position")
            .as_deref(),
        Some("above")
    );
    assert_eq!(
        dropdown.host().style(HostElement::ResultContainer, "bottom"),
        Some("100%")
    );
}

#[test]
fn test_debounced_input_waits_for_poll() {
    let config = Config {
        debounce_time: 100,
        ..Config::default()
    };
    let mut dropdown = mount_with(MemoryHost::new(), Options::default().config(config));
    let start = Instant::now();

    dropdown.host_mut().type_text("g");
    dropdown.handle_input(start);
    dropdown.host_mut().type_text("g2");
    dropdown.handle_input(start + Duration::from_millis(50));

    assert!(!dropdown.state().expanded);
    assert!(!dropdown.poll(start + Duration::from_millis(100)));

    let deadline = dropdown.next_deadline().unwrap();
    assert!(dropdown.poll(deadline));
    assert!(dropdown.state().expanded);
    assert_eq!(titles(dropdown.engine().results()), vec!["g2"]);
    assert_eq!(dropdown.next_deadline(), None);
}

#[test]
fn test_debounced_input_reads_text_when_it_fires() {
    let config = Config {
        debounce_time: 100,
        ..Config::default()
    };
    let queries: Rc<RefCell<Vec<String>>> = Rc::default();
    let log = Rc::clone(&queries);
    let recording_search = move |query: &str| {
        log.borrow_mut().push(query.to_string());
        search(query)
    };
    let mut dropdown = SiteSearch::with_search(
        MemoryHost::new(),
        recording_search,
        Options::default().config(config),
    )
    .unwrap();
    let start = Instant::now();

    dropdown.host_mut().type_text("g");
    dropdown.handle_input(start);
    dropdown.handle_key_down("Escape");
    assert_eq!(dropdown.host().input_value(), "");

    let deadline = dropdown.next_deadline().unwrap();
    assert!(dropdown.poll(deadline));

    assert_eq!(*queries.borrow(), vec![""]);
    assert_eq!(dropdown.engine().results().len(), corpus().len());
}

#[test]
fn test_on_update_receives_display_order() {
    let seen: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = Rc::clone(&seen);
    let options = Options::default().on_update(move |results: &[SearchResult], _| {
        *sink.borrow_mut() = results.iter().map(|r| r.title.clone()).collect();
    });
    let mut dropdown = mount_with(MemoryHost::new(), options);

    type_query(&mut dropdown, "");

    assert_eq!(*seen.borrow(), vec!["g1", "g3", "g2", "a1", "a2"]);
}

#[test]
fn test_custom_renderer_and_base_class() {
    let config = Config {
        base_class: "docs".to_string(),
        ..Config::default()
    };
    let options = Options::default()
        .config(config)
        .render_result(|result: &SearchResult, props, _| {
            Markup::Element(props.element("li").inner_html(result.title.to_uppercase()))
        });
    let mut dropdown = mount_with(MemoryHost::new(), options);

    type_query(&mut dropdown, "a");

    assert_eq!(dropdown.base_class(), "docs");
    assert_eq!(
        dropdown.host().result_list_html(),
        concat!(
            r#"<li class="search-root-item"><div class="search-root">API</div></li>"#,
            r#"<li id="docs-result-0" class="docs-result" data-result-index="0" tabindex="0" role="option">A1</li>"#,
            r#"<li id="docs-result-1" class="docs-result" data-result-index="1" tabindex="1" role="option">A2</li>"#,
        )
    );
}

#[test]
fn test_mouse_down_on_results_keeps_focus() {
    let mut dropdown = mount();
    assert!(dropdown.handle_result_mouse_down());
}
