//! Fetch collaborator: sources, page collection and the request protocol.
//!
//! The search state never performs I/O. It asks for books by emitting
//! [`Action::FetchBooks`](crate::app::Action::FetchBooks) and receives the
//! outcome as a [`FetchResponse`]. This module provides the pieces in
//! between.
//!
//! - `messages`: request/response protocol and the paged wire format
//! - `source`: the [`BookSource`] trait and the JSON-backed [`CatalogSource`]
//! - `collector`: multi-page collection and the synchronous action driver

pub mod collector;
pub mod messages;
pub mod source;

#[cfg(test)]
mod tests;

pub use collector::{fetch_all, run_actions, DEFAULT_MAX_PAGES};
pub use messages::{BookPage, FetchRequest, FetchResponse, PageMeta};
pub use source::{BookSource, CatalogSource, DEFAULT_SOURCE_PAGE_SIZE};
