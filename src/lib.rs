//! sitesearch: a grouped, accessible search-result dropdown.
//!
//! Results come back from a search backend ordered by relevance, each with a breadcrumb of the
//! site sections it lives in. The dropdown groups them by root page and second-level heading,
//! renders them as ARIA listbox options, and keeps the engine's idea of "result N" in step with
//! the Nth entry on screen.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod debounce;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod grouping;
pub mod host;
pub mod logging;
pub mod markup;
pub mod presentation;
pub mod props;
pub mod render;
pub mod result;
pub mod site_search;

pub use config::Config;
pub use dispatch::{Key, KeyOutcome};
pub use engine::{Engine, EngineCallbacks, LocalEngine};
pub use error::{Error, Result};
pub use grouping::{group, FlattenedResult, GroupedView, SectionNode};
pub use host::{Host, HostElement, MemoryHost};
pub use markup::{Element, Markup};
pub use presentation::{Position, PresentationState, Transition};
pub use props::RenderProps;
pub use result::{Hierarchical, SearchResult};
pub use site_search::{Options, SiteSearch};
