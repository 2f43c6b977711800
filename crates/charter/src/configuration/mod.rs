//! Configuration management for the chart command.
//!
//! This module provides centralized configuration handling for axis layout,
//! drawing characters, themes, and color output.

mod config;

pub use config::*;
