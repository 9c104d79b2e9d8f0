//! MeasureSoftGram Core Library
//!
//! Reading and validation of weighted quality pre-configurations and of Sonar
//! metric exports.

pub mod config;
pub mod error;
pub mod format;
pub mod loader;
pub mod logging;
pub mod preconfig;
pub mod records;
pub mod response;
pub mod sonar;
pub mod weights;
