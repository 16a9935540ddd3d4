//! CLI library components for the table schema validator.

pub mod commands;
pub mod logging;
pub mod sample;
pub mod summary;
