//! Turning a laid out axis into something a terminal can show.

pub mod printer;
pub mod render;
