//! The dropdown itself: mounts onto a host, forwards events to the engine, renders updates.
//!
//! `SiteSearch` splits into the engine and a view. Engine operations receive the view as their
//! [`EngineCallbacks`], so renders and presentation transitions happen while the engine call is
//! running. Each render also records the display order it produced; once the engine call returns,
//! that order is handed back through [`Engine::set_results`]. The engine therefore always
//! resolves index `N` to the `N`th entry the user sees, and the two orders are reconciled exactly
//! once per render.

use crate::config::Config;
use crate::debounce::Debouncer;
use crate::dispatch::{dispatch, Key, KeyOutcome};
use crate::engine::{Engine, EngineCallbacks, LocalEngine};
use crate::error::{Error, Result};
use crate::host::{Host, HostElement};
use crate::markup::Markup;
use crate::presentation::{sync_host, PresentationState, Transition};
use crate::props::{result_id, RenderProps};
use crate::render::{default_render, render_results, ResultRenderer, ValueExtractor};
use crate::result::Hierarchical;
use std::fmt;
use std::time::Instant;

/// Attributes that turn the input into an accessible combobox.
const INPUT_ATTRIBUTES: [(&str, &str); 8] = [
    ("role", "combobox"),
    ("autocomplete", "off"),
    ("autocapitalize", "off"),
    ("autocorrect", "off"),
    ("spellcheck", "false"),
    ("aria-autocomplete", "list"),
    ("aria-haspopup", "listbox"),
    ("aria-expanded", "false"),
];

/// Structural styles for the positioned result wrapper.
const CONTAINER_STYLES: [(&str, &str); 4] = [
    ("position", "absolute"),
    ("z-index", "1"),
    ("width", "100%"),
    ("box-sizing", "border-box"),
];

/// Callbacks and settings for a [`SiteSearch`].
pub struct Options<R> {
    config: Config,
    on_submit: Box<dyn FnMut(&R)>,
    on_update: Box<dyn FnMut(&[R], Option<usize>)>,
    get_result_value: ValueExtractor<R>,
    render_result: Option<ResultRenderer<R>>,
}

impl<R: 'static> Options<R> {
    #[must_use]
    /// Options using `get_result_value` to turn a result into text.
    ///
    /// The extractor receives the display index while rendering and `None` when filling the
    /// input after a selection.
    pub fn new(get_result_value: impl Fn(&R, Option<usize>) -> String + 'static) -> Self {
        Self {
            config: Config::default(),
            on_submit: Box::new(|_| {}),
            on_update: Box::new(|_, _| {}),
            get_result_value: Box::new(get_result_value),
            render_result: None,
        }
    }

    #[must_use]
    /// Replace the configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    /// Called with the committed result when the user submits.
    pub fn on_submit(mut self, on_submit: impl FnMut(&R) + 'static) -> Self {
        self.on_submit = Box::new(on_submit);
        self
    }

    #[must_use]
    /// Called after every render with the results in display order.
    pub fn on_update(mut self, on_update: impl FnMut(&[R], Option<usize>) + 'static) -> Self {
        self.on_update = Box::new(on_update);
        self
    }

    #[must_use]
    /// Replace the built-in list item renderer.
    pub fn render_result(
        mut self,
        render_result: impl Fn(&R, &RenderProps, usize) -> Markup + 'static,
    ) -> Self {
        self.render_result = Some(Box::new(render_result));
        self
    }
}

impl<R: fmt::Display + 'static> Default for Options<R> {
    fn default() -> Self {
        Self::new(|result: &R, _| result.to_string())
    }
}

/// Host, presentation state and caller callbacks; the engine's view of the dropdown.
struct View<R, H> {
    host: H,
    state: PresentationState,
    base_class: String,
    on_submit: Box<dyn FnMut(&R)>,
    on_update: Box<dyn FnMut(&[R], Option<usize>)>,
    get_result_value: ValueExtractor<R>,
    render_result: Option<ResultRenderer<R>>,
    reconciled: Option<Vec<R>>,
}

impl<R: Hierarchical + Clone, H: Host> View<R, H> {
    fn transition(&mut self, transition: Transition) {
        self.state = self.state.apply(transition);
        tracing::debug!(?transition, state = ?self.state, "presentation transition");
        sync_host(&mut self.host, self.state);
    }

    fn render(&mut self, results: &[R], selected_index: Option<usize>) {
        self.host.clear_results();

        let base_class = self.base_class.as_str();
        let output = if let Some(render) = &self.render_result {
            render_results(results, selected_index, base_class, render)
        } else {
            let value = &self.get_result_value;
            render_results(results, selected_index, base_class, |result, props, index| {
                default_render(value, result, props, index)
            })
        };
        tracing::debug!(
            results = output.order.len(),
            fragments = output.fragments.len(),
            ?selected_index,
            "rendered results"
        );

        for fragment in output.fragments {
            self.host.append_result(fragment);
        }

        let active = selected_index
            .map(|index| result_id(&self.base_class, index))
            .unwrap_or_default();
        self.host
            .set_attribute(HostElement::Input, "aria-activedescendant", &active);

        if self.state.reset_position_pending {
            let position = self.host.resolve_position();
            self.transition(Transition::PositionResolved(position));
        }

        if !active.is_empty() {
            self.host.scroll_into_view(&active);
        }

        (self.on_update)(&output.order, selected_index);
        self.reconciled = Some(output.order);
    }
}

impl<R: Hierarchical + Clone, H: Host> EngineCallbacks<R> for View<R, H> {
    fn set_value(&mut self, result: Option<&R>) {
        let value = result
            .map(|result| (self.get_result_value)(result, None))
            .unwrap_or_default();
        self.host.set_input_value(&value);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.host.set_attribute(HostElement::Input, name, value);
    }

    fn on_update(&mut self, results: &[R], selected_index: Option<usize>) {
        self.render(results, selected_index);
    }

    fn on_submit(&mut self, result: &R) {
        (self.on_submit)(result);
    }

    fn on_show(&mut self) {
        self.transition(Transition::Show);
    }

    fn on_hide(&mut self) {
        self.transition(Transition::Hide);
    }

    fn on_loading(&mut self) {
        self.transition(Transition::Loading);
    }

    fn on_loaded(&mut self) {
        self.transition(Transition::Loaded);
    }
}

/// A grouped, accessible result dropdown mounted on a host input.
pub struct SiteSearch<R, H, E> {
    engine: E,
    view: View<R, H>,
    debouncer: Debouncer,
    has_logo: bool,
}

impl<R, H, E> SiteSearch<R, H, E>
where
    R: Hierarchical + Clone,
    H: Host,
    E: Engine<R>,
{
    /// Mount the dropdown on `host`, driving `engine`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] if the host lacks the root, the input, the result list
    /// or the result container.
    pub fn new(host: H, engine: E, options: Options<R>) -> Result<Self> {
        if let Some(missing) = HostElement::ALL
            .into_iter()
            .find(|element| element.is_required() && !host.contains(*element))
        {
            return Err(Error::MissingElement(missing));
        }
        let has_logo = host.contains(HostElement::Logo);

        let Options {
            config,
            on_submit,
            on_update,
            get_result_value,
            render_result,
        } = options;

        let mut search = Self {
            engine,
            view: View {
                host,
                state: PresentationState::default(),
                base_class: config.base_class.clone(),
                on_submit,
                on_update,
                get_result_value,
                render_result,
                reconciled: None,
            },
            debouncer: Debouncer::new(config.debounce()),
            has_logo,
        };
        search.initialize();
        tracing::debug!(base_class = %config.base_class, has_logo, "site search mounted");
        Ok(search)
    }

    /// Set up accessibility attributes and structural styles.
    fn initialize(&mut self) {
        let host = &mut self.view.host;
        host.set_style(HostElement::Root, "position", Some("relative"));

        for (name, value) in INPUT_ATTRIBUTES {
            host.set_attribute(HostElement::Input, name, value);
        }

        host.set_attribute(HostElement::ResultList, "role", "listbox");
        let list_id = match host.attribute(HostElement::ResultList, "id") {
            Some(id) if !id.is_empty() => id,
            _ => {
                let id = host.unique_id(&format!("{}-result-list-", self.view.base_class));
                host.set_attribute(HostElement::ResultList, "id", &id);
                id
            }
        };
        host.set_attribute(HostElement::Input, "aria-owns", &list_id);

        for (property, value) in CONTAINER_STYLES {
            host.set_style(HostElement::ResultContainer, property, Some(value));
        }

        sync_host(host, self.view.state);
    }

    /// Run an engine operation with the view as its callbacks, then reconcile the engine's
    /// result order with whatever was rendered.
    fn run<T>(&mut self, op: impl FnOnce(&mut E, &mut View<R, H>) -> T) -> T {
        let outcome = op(&mut self.engine, &mut self.view);
        if let Some(order) = self.view.reconciled.take() {
            self.engine.set_results(order);
        }
        outcome
    }

    /// The input's text changed at `now`.
    ///
    /// With a debounce configured, the engine is called once [`SiteSearch::poll`] runs after the
    /// delay has passed without further input, with the input's text at that moment.
    pub fn handle_input(&mut self, now: Instant) {
        if self.debouncer.push(now) {
            self.deliver_input();
        }
    }

    /// Deliver a debounced input whose delay has elapsed. Returns whether one was delivered.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = self.debouncer.poll(now);
        if due {
            self.deliver_input();
        }
        due
    }

    fn deliver_input(&mut self) {
        let value = self.view.host.input_value();
        self.run(|engine, ui| engine.handle_input(&value, ui));
    }

    #[must_use]
    /// When the host should next call [`SiteSearch::poll`].
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// The input gained focus.
    pub fn handle_focus(&mut self) {
        let value = self.view.host.input_value();
        self.run(|engine, ui| engine.handle_focus(&value, ui));
    }

    /// A key was pressed while the input has focus.
    pub fn handle_key_down(&mut self, key: &str) -> KeyOutcome {
        let key = Key::from_name(key);
        self.run(|engine, ui| dispatch::<R, E>(key, engine, ui))
    }

    /// A click landed somewhere in the document. Clicks outside the root close the dropdown.
    pub fn handle_document_click(&mut self, inside_root: bool) {
        if inside_root {
            return;
        }
        self.run(|engine, ui| engine.hide_results(ui));
    }

    /// Mouse pressed on the result list. Returns whether the default action should be prevented.
    pub fn handle_result_mouse_down(&mut self) -> bool {
        self.engine.handle_result_mouse_down()
    }

    /// The entry carrying `data-result-index = index` was clicked.
    pub fn handle_result_click(&mut self, index: usize) {
        self.run(|engine, ui| engine.handle_result_click(index, ui));
    }

    /// Hide the results, e.g. when the host closes its search overlay.
    pub fn hide_results(&mut self) {
        self.run(|engine, ui| engine.hide_results(ui));
    }

    #[must_use]
    /// Current presentation state.
    pub fn state(&self) -> PresentationState {
        self.view.state
    }

    #[must_use]
    /// The host the dropdown is mounted on.
    pub fn host(&self) -> &H {
        &self.view.host
    }

    /// Mutable access to the host, e.g. to type into the input.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.view.host
    }

    #[must_use]
    /// The engine being driven.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[must_use]
    /// Whether the host markup carries the optional logo element.
    pub fn has_logo(&self) -> bool {
        self.has_logo
    }

    #[must_use]
    /// Prefix used for generated ids and classes.
    pub fn base_class(&self) -> &str {
        &self.view.base_class
    }
}

impl<R, H> SiteSearch<R, H, LocalEngine<R>>
where
    R: Hierarchical + Clone,
    H: Host,
{
    /// Mount the dropdown with a [`LocalEngine`] around `search`, honouring `auto_select` from
    /// the options' configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] if the host markup is incomplete.
    pub fn with_search(
        host: H,
        search: impl FnMut(&str) -> Vec<R> + 'static,
        options: Options<R>,
    ) -> Result<Self> {
        let engine = LocalEngine::new(search, options.config.auto_select);
        Self::new(host, engine, options)
    }
}

#[cfg(test)]
#[path = "tests/site_search.rs"]
mod tests;
