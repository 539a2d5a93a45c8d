//! # Palabra Server
//!
//! HTTP edge for the palabra dictionary: a JSON API under `/api` plus a
//! small embedded client page served from `/`.
//!
//! ## Architecture
//!
//! - **config**: CLI flags with environment fallbacks
//! - **app**: router assembly and shared request state
//! - **handlers**: one module per resource
//! - **error**: the `{"error": ...}` envelope every failure uses
//! - **ui**: the embedded client page

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod ui;

/// Server version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
