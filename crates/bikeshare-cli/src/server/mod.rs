//! HTTP JSON service over a loaded dataset.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
