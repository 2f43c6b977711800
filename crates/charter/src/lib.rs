//! Unicode charts for the terminal.
//!
//! This crate computes readable tick values and labels for a data range, lays
//! them out along a fixed-width x axis, and draws the axis either into a
//! ratatui buffer or as ANSI-colored text.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod errors;

pub use application::printer;
pub use application::render::{AxisRows, AxisWidget};
pub use configuration::{ColorChoice, Config, ConfigKey};
pub use domain::models::{
    AxisCell, Characters, StyleRole, Theme, ThemeName, Ticks, XAxis, XAxisBuilder,
};
pub use errors::{ChartError, ChartResult};
