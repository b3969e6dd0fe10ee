//! Process-wide log setup for the price service.
//!
//! Events are written as JSON lines to stdout. The filter comes from
//! `RUST_LOG`, falling back to [`DEFAULT_FILTER`].

pub mod subscriber;

pub use subscriber::DEFAULT_FILTER;

/// Install the JSON subscriber. Later calls are no-ops.
pub fn init() {
    subscriber::install();
}
