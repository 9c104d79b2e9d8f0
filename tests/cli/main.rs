//! Integration tests for the msgram CLI
//!
//! These tests run the msgram binary against the fixtures in `tests/fixtures`.

mod components;
mod metrics;
mod misc;
mod preconfig;
mod response;
