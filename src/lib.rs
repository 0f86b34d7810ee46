//! Candidate roster management with faceted filtering and write-through
//! persistence.
//!
//! The crate exposes a single component, the candidate store, plus the
//! ambient configuration and telemetry plumbing an embedding application
//! needs to wire it up. There is no server or CLI surface; presentation
//! layers call the store's operations directly and render its derived view.

pub mod candidates;
pub mod config;
pub mod error;
pub mod telemetry;
