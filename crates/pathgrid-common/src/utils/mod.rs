//! Utility modules shared across Pathgrid crates.

pub mod error;
