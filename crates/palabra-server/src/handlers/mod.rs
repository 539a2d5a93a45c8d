//! HTTP handlers, one module per resource.

pub mod health;
pub mod translate;
pub mod words;
