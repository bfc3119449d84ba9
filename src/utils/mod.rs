//! Configuration and process-level utilities.

/// Tracing subscriber setup.
pub mod logging;
/// `omniroute.toml` loading, validation and hot reload.
pub mod toml_config;
