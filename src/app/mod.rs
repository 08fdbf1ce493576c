//! Application layer: search state, events and the store.
//!
//! This module is the search-result state machine. It sits between the UI,
//! which emits intent events, and the fetch collaborator, which reports fetch
//! outcomes.
//!
//! # Architecture
//!
//! Data flows in one direction:
//!
//! ```text
//! UI intent / fetch outcome → Event → apply → SearchState → view model
//!                                  ↓
//!                        Action (FetchBooks, CancelFetch) → fetch collaborator
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side-effect commands emitted by the store
//! - [`handler`]: the `Event` type and the pure transition function
//! - [`state`]: the state record and view model computation
//! - [`store`]: owned container with request-identity bookkeeping
//!
//! # Example
//!
//! ```rust
//! use get_my_books::app::{Event, SearchStore};
//! use get_my_books::SortOrder;
//!
//! let mut store = SearchStore::new(10);
//! store.dispatch(Event::SortBooks(SortOrder::TitleAsc));
//! assert_eq!(store.state().order, SortOrder::TitleAsc);
//! ```

pub mod actions;
pub mod handler;
pub mod state;
pub mod store;


pub use actions::Action;
pub use handler::{apply, query_event, Event};
pub use state::SearchState;
pub use store::SearchStore;
