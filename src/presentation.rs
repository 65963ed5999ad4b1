//! Presentation state of the dropdown and its projection onto the host.
//!
//! The dropdown has four flags worth showing to the page: whether it is expanded, whether a
//! search is in flight, which side of the input it drops towards, and whether that side must
//! be recomputed at the next render. The state is a plain value; every event produces a new
//! value through [`PresentationState::apply`], and [`sync_host`] mirrors the value onto host
//! attributes and styles.
//!
//! ```text
//!            Show                      Hide
//! collapsed -------> expanded -----------------> collapsed
//!                    (render: resolve position     (position reset pending)
//!                     once if pending)
//! ```

use crate::host::{Host, HostElement};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Side of the input the result panel opens towards.
pub enum Position {
    /// Panel sits above the input, anchored by its bottom edge.
    Above,
    /// Panel sits below the input, anchored by its top edge.
    Below,
}

impl Position {
    #[must_use]
    /// Attribute value used for `data-position`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Above => "above",
            Self::Below => "below",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Events that move the presentation state.
pub enum Transition {
    /// Engine has results to show.
    Show,
    /// Engine closed the dropdown.
    Hide,
    /// A search started.
    Loading,
    /// A search finished.
    Loaded,
    /// Geometry decided the drop direction for this open cycle.
    PositionResolved(Position),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Flags mirrored onto the host root and result container.
pub struct PresentationState {
    /// Results panel is visible and interactive.
    pub expanded: bool,
    /// A search is in flight.
    pub loading: bool,
    /// Drop direction, unset until the first render.
    pub position: Option<Position>,
    /// Drop direction must be recomputed at the next render.
    pub reset_position_pending: bool,
}

impl Default for PresentationState {
    fn default() -> Self {
        Self {
            expanded: false,
            loading: false,
            position: None,
            reset_position_pending: true,
        }
    }
}

impl PresentationState {
    #[must_use]
    /// Returns the state after `transition`. Applying a transition twice equals applying it once.
    pub fn apply(self, transition: Transition) -> Self {
        match transition {
            Transition::Show => Self {
                expanded: true,
                ..self
            },
            // The input may move while hidden, so the next open recomputes the side.
            Transition::Hide => Self {
                expanded: false,
                reset_position_pending: true,
                ..self
            },
            Transition::Loading => Self {
                loading: true,
                ..self
            },
            Transition::Loaded => Self {
                loading: false,
                ..self
            },
            Transition::PositionResolved(position) => Self {
                position: Some(position),
                reset_position_pending: false,
                ..self
            },
        }
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Mirror `state` onto the host: data attributes on the root, visibility and anchoring on the
/// result container.
pub fn sync_host<H: Host + ?Sized>(host: &mut H, state: PresentationState) {
    host.set_attribute(HostElement::Root, "data-expanded", flag(state.expanded));
    host.set_attribute(HostElement::Root, "data-loading", flag(state.loading));
    match state.position {
        Some(position) => host.set_attribute(HostElement::Root, "data-position", position.as_str()),
        None => host.remove_attribute(HostElement::Root, "data-position"),
    }

    let container = HostElement::ResultContainer;
    host.set_style(
        container,
        "visibility",
        Some(if state.expanded { "visible" } else { "hidden" }),
    );
    host.set_style(
        container,
        "pointer-events",
        Some(if state.expanded { "auto" } else { "none" }),
    );
    if state.position == Some(Position::Below) {
        host.set_style(container, "bottom", None);
        host.set_style(container, "top", Some("100%"));
    } else {
        host.set_style(container, "top", None);
        host.set_style(container, "bottom", Some("100%"));
    }
}

#[cfg(test)]
#[path = "tests/presentation.rs"]
mod tests;
