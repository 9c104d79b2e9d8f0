//! CLI commands for msgram

pub mod components;
pub mod dispatch;
pub mod metrics;
pub mod preconfig;
pub mod response;
