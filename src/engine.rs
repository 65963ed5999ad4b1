//! The autocomplete engine contract and a local reference engine.
//!
//! The engine owns searching and the selected index. It talks back to the dropdown only through
//! [`EngineCallbacks`], and the dropdown hands it the display order after every render through
//! [`Engine::set_results`]. Nothing else crosses the boundary, so the two sides can evolve
//! independently.

/// Notifications and host writes the engine issues while handling an event.
pub trait EngineCallbacks<R> {
    /// Put a result's text into the input, or clear it with `None`.
    fn set_value(&mut self, result: Option<&R>);
    /// Set an attribute on the input (e.g. `aria-expanded`).
    fn set_attribute(&mut self, name: &str, value: &str);
    /// Results or selection changed; the dropdown re-renders.
    fn on_update(&mut self, results: &[R], selected_index: Option<usize>);
    /// The user committed a result.
    fn on_submit(&mut self, result: &R);
    /// Results should become visible.
    fn on_show(&mut self);
    /// Results should be hidden.
    fn on_hide(&mut self);
    /// A search started.
    fn on_loading(&mut self);
    /// A search finished.
    fn on_loaded(&mut self);
}

/// Operations the dropdown drives on the engine.
pub trait Engine<R> {
    /// Results in the order the engine resolves indices against.
    fn results(&self) -> &[R];

    /// Highlighted result, if any.
    fn selected_index(&self) -> Option<usize>;

    /// The highlighted result, resolved against [`Engine::results`].
    fn selected_result(&self) -> Option<&R> {
        self.selected_index().and_then(|index| self.results().get(index))
    }

    /// Replace the result order with the display order produced by the last render.
    ///
    /// Called once the engine operation that triggered the render has returned, so results read
    /// back through [`Engine::results`] inside that same operation are still in the engine's own
    /// order. Index lookups from later events see the display order.
    fn set_results(&mut self, results: Vec<R>);

    /// The input text changed.
    fn handle_input(&mut self, value: &str, ui: &mut dyn EngineCallbacks<R>);

    /// The input gained focus.
    fn handle_focus(&mut self, value: &str, ui: &mut dyn EngineCallbacks<R>);

    /// Move the highlight to `requested`, which may be out of range.
    fn handle_arrows(&mut self, requested: isize, ui: &mut dyn EngineCallbacks<R>);

    /// Mouse pressed on the result list. Returns whether the default action (blurring the
    /// input) should be prevented.
    fn handle_result_mouse_down(&mut self) -> bool {
        true
    }

    /// The entry with display index `index` was clicked.
    fn handle_result_click(&mut self, index: usize, ui: &mut dyn EngineCallbacks<R>);

    /// Commit the highlighted result into the input and close.
    fn select_result(&mut self, ui: &mut dyn EngineCallbacks<R>);

    /// Close the dropdown and forget the current results.
    fn hide_results(&mut self, ui: &mut dyn EngineCallbacks<R>);
}

/// Synchronous search function used by [`LocalEngine`].
pub type SearchFn<R> = Box<dyn FnMut(&str) -> Vec<R>>;

/// Engine that runs a synchronous search on every input and focus event.
pub struct LocalEngine<R> {
    search: SearchFn<R>,
    auto_select: bool,
    results: Vec<R>,
    selected_index: Option<usize>,
}

impl<R> LocalEngine<R> {
    #[must_use]
    /// Creates an engine around `search`. With `auto_select`, the first result is highlighted
    /// whenever new results arrive.
    pub fn new(search: impl FnMut(&str) -> Vec<R> + 'static, auto_select: bool) -> Self {
        Self {
            search: Box::new(search),
            auto_select,
            results: Vec::new(),
            selected_index: None,
        }
    }

    fn update_results(&mut self, value: &str, ui: &mut dyn EngineCallbacks<R>) {
        ui.on_loading();
        self.results = (self.search)(value);
        ui.on_loaded();

        if self.results.is_empty() {
            self.hide_all(ui);
            return;
        }

        self.selected_index = self.auto_select.then_some(0);
        ui.on_update(&self.results, self.selected_index);
        ui.set_attribute("aria-expanded", "true");
        ui.on_show();
    }

    fn hide_all(&mut self, ui: &mut dyn EngineCallbacks<R>) {
        self.selected_index = None;
        self.results.clear();
        ui.set_attribute("aria-expanded", "false");
        ui.set_attribute("aria-activedescendant", "");
        ui.on_update(&self.results, None);
        ui.on_hide();
    }

    fn commit(&mut self, ui: &mut dyn EngineCallbacks<R>) {
        if let Some(result) = self.selected_index.and_then(|i| self.results.get(i)) {
            ui.set_value(Some(result));
        }
        self.hide_all(ui);
    }
}

impl<R: Clone> Engine<R> for LocalEngine<R> {
    fn results(&self) -> &[R] {
        &self.results
    }

    fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    fn set_results(&mut self, results: Vec<R>) {
        self.results = results;
    }

    fn handle_input(&mut self, value: &str, ui: &mut dyn EngineCallbacks<R>) {
        self.update_results(value, ui);
    }

    fn handle_focus(&mut self, value: &str, ui: &mut dyn EngineCallbacks<R>) {
        self.update_results(value, ui);
    }

    fn handle_arrows(&mut self, requested: isize, ui: &mut dyn EngineCallbacks<R>) {
        let Ok(count) = isize::try_from(self.results.len()) else {
            return;
        };
        if count == 0 {
            return;
        }
        // Wraps in both directions.
        self.selected_index = usize::try_from(requested.rem_euclid(count)).ok();
        ui.on_update(&self.results, self.selected_index);
    }

    fn handle_result_click(&mut self, index: usize, ui: &mut dyn EngineCallbacks<R>) {
        let Some(result) = self.results.get(index).cloned() else {
            tracing::debug!(index, "click on a result index that is not rendered");
            return;
        };
        self.selected_index = Some(index);
        self.commit(ui);
        ui.on_submit(&result);
    }

    fn select_result(&mut self, ui: &mut dyn EngineCallbacks<R>) {
        self.commit(ui);
    }

    fn hide_results(&mut self, ui: &mut dyn EngineCallbacks<R>) {
        self.hide_all(ui);
    }
}

#[cfg(test)]
#[path = "tests/engine.rs"]
mod tests;
