//! Structured logging through `tracing`.
//!
//! Every layer logs with `tracing` macros: a debug span per dispatched event,
//! debug events for state changes, stale responses and fetch progress, and
//! warnings for failed fetches. This module installs the subscriber that
//! turns them into output.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust
//! use get_my_books::observability::init_tracing;
//! use get_my_books::Config;
//!
//! init_tracing(&Config::default());
//! tracing::info!("search core ready");
//! ```

mod init;

pub use init::init_tracing;
