//! Infrastructure helpers for filesystem interactions.

pub mod paths;

pub use paths::expand_tilde;
