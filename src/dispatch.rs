//! Keyboard handling for the focused input.
//!
//! Keys map onto engine operations. The dispatcher never clamps indices and never touches the
//! result list; it only decides which engine call a key means and whether the browser's default
//! action for that key should be suppressed.

use crate::engine::{Engine, EngineCallbacks};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Keys the dropdown reacts to.
pub enum Key {
    /// Move the highlight up.
    ArrowUp,
    /// Move the highlight down.
    ArrowDown,
    /// Commit the highlight and let focus move on.
    Tab,
    /// Commit the highlight and submit it.
    Enter,
    /// Close and clear.
    Escape,
    /// Anything else.
    Other,
}

impl Key {
    #[must_use]
    /// Parse a `KeyboardEvent.key` value, including the legacy `Up`/`Down`/`Esc` names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "Tab" => Self::Tab,
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What the host should do with the key event after dispatch.
pub enum KeyOutcome {
    /// The dropdown did nothing; the default action proceeds.
    Ignored,
    /// The dropdown acted on the key.
    Handled {
        /// Suppress the default action (e.g. caret movement or page scroll).
        prevent_default: bool,
    },
}

impl KeyOutcome {
    #[must_use]
    /// True if the host should call `preventDefault` or equivalent.
    pub fn prevents_default(self) -> bool {
        matches!(
            self,
            Self::Handled {
                prevent_default: true
            }
        )
    }
}

fn signed_index(index: Option<usize>) -> isize {
    index
        .and_then(|index| isize::try_from(index).ok())
        .unwrap_or(-1)
}

/// Route `key` to the engine.
///
/// Enter with nothing highlighted is ignored so that pressing Enter on a fresh query does not
/// close the dropdown. Otherwise Enter commits and then submits the committed result.
pub fn dispatch<R, E>(key: Key, engine: &mut E, ui: &mut dyn EngineCallbacks<R>) -> KeyOutcome
where
    R: Clone,
    E: Engine<R> + ?Sized,
{
    tracing::debug!(?key, selected = ?engine.selected_index(), "key dispatch");
    match key {
        Key::ArrowUp | Key::ArrowDown => {
            let current = signed_index(engine.selected_index());
            let requested = if key == Key::ArrowUp {
                current - 1
            } else {
                current + 1
            };
            engine.handle_arrows(requested, ui);
            KeyOutcome::Handled {
                prevent_default: true,
            }
        }
        Key::Tab => {
            engine.select_result(ui);
            KeyOutcome::Handled {
                prevent_default: false,
            }
        }
        Key::Enter => {
            let Some(selected) = engine.selected_result().cloned() else {
                return KeyOutcome::Ignored;
            };
            engine.select_result(ui);
            ui.on_submit(&selected);
            KeyOutcome::Handled {
                prevent_default: false,
            }
        }
        Key::Escape => {
            engine.hide_results(ui);
            ui.set_value(None);
            KeyOutcome::Handled {
                prevent_default: false,
            }
        }
        Key::Other => KeyOutcome::Ignored,
    }
}

#[cfg(test)]
#[path = "tests/dispatch.rs"]
mod tests;
