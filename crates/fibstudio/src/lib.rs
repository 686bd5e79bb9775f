//! Fibonacci Studio library: application logic for the `fibstudio` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
