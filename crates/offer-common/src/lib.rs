//! Shared utilities for the offer event cleaner crates.
//!
//! This crate provides the Polars `AnyValue` helpers every pipeline stage
//! uses to read cells as text or numbers.

pub mod polars;

pub use polars::{
    any_to_f64, any_to_i64, any_to_string, column_strings, format_numeric, parse_f64, parse_i64,
};
