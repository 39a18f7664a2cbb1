//! # fc-core
//!
//! Core types and error definitions for fiscal-calendar.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace – the error hierarchy, the injectable [`Settings`], and the
//! bounded least-recently-used cache the holiday service keeps its yearly
//! catalogs in.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Bounded least-recently-used cache.
pub mod cache;

/// Error types and the `ensure!` macro.
pub mod errors;

/// Engine settings (cache capacity, default look-ahead window).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use cache::LruCache;
pub use errors::{Error, Result};
pub use settings::Settings;
