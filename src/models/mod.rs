//! Server-side models that are not part of the dashboard domain.

pub mod config;
