//! CLI library components for the offer event cleaner.

pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
