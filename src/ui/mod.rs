//! Presentation helpers: view models, formatting and text rendering.
//!
//! Nothing here feeds back into the search state; the layer only reads it.
//!
//! ```text
//! SearchState → compute_viewmodel → SearchViewModel → render → text
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: view model types
//! - [`format`]: thousands separators and price strings
//! - [`renderer`]: plain-text renderer

pub mod format;
pub mod renderer;
pub mod viewmodel;

pub use format::{format_number, format_price};
pub use renderer::{render, render_summary, render_to_string};
pub use viewmodel::{BookItem, ResultSummary, SearchViewModel, ViewStatus};
