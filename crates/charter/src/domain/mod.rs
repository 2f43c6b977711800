//! Core chart logic.
//!
//! Tick math and axis layout live here, independent of how the axis is
//! eventually drawn.

pub mod models;
pub mod services;
