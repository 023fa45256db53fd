//! Core of the opportunity zone advisor.
//!
//! A property profile goes in, a list of investment ideas comes back from an
//! [`IdeaFetcher`], and picking one of them yields canned actionable steps and
//! local resources. Everything here produces content and positions; drawing
//! them is the job of a [`Presenter`].

pub mod config;
pub mod content;
pub mod error;
pub mod fetch;
pub mod model;
pub mod pipeline;
pub mod selection;
pub mod tooltip;

// Re-export commonly used types for easier testing
pub use config::{AdvisorConfig, FetcherConfig, FetcherKind, TooltipConfig};
pub use error::{ConfigError, FetchFailure, SelectionError};
pub use fetch::{CannedIdeaFetcher, HttpIdeaFetcher, IdeaFetcher};
pub use model::{FormFields, Idea, PropertyProfile};
pub use pipeline::{AdvisorState, Presenter, SubmissionOutcome, SubmissionPipeline, TriggerControl};
pub use selection::{IdeaList, Selection, SelectionState};
pub use tooltip::{Rect, Size, TooltipLayout, TooltipPosition, TooltipPositioner, Viewport};
