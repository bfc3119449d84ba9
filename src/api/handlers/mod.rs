//! API request handlers.
//!
//! This module contains all HTTP request handlers organized by functionality.

/// Stateless assistant reply for the browser widget.
pub mod assistant;
/// Role cards and dashboard projections.
pub mod catalog;
/// Server-held conversation handlers.
pub mod conversations;
/// Health check.
pub mod health;
