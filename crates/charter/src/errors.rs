//! Error types for chart construction.
//!
//! Every failure while computing ticks or laying out an axis surfaces as a
//! [`ChartError`]. Configuration and command-line plumbing wrap these in
//! `anyhow` at the edges.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("min_data must be less than or equal to max_data (got {min} and {max})")]
    InvalidRange { min: f64, max: f64 },
    #[error("Data bounds must be finite numbers (got {min} and {max})")]
    NonFiniteData { min: f64, max: f64 },
    #[error("{values} ticks and {labels} tick labels were provided. They should be equal.")]
    TickLabelMismatch { values: usize, labels: usize },
    #[error("Ticks must be in ascending order. {left} is greater than {right}")]
    DescendingTicks { left: f64, right: f64 },
    #[error("Ticks must be distinct. {value} appears more than once")]
    DuplicateTicks { value: f64 },
    #[error("At least {required} tick values are required, {provided} were provided")]
    NotEnoughTicks { required: usize, provided: usize },
    #[error("Ticks for the range {min} to {max} cannot be represented as finite numbers")]
    UnrepresentableRange { min: f64, max: f64 },
    #[error("{count} ticks were requested, at most {limit} are supported")]
    TooManyTicks { count: f64, limit: usize },
}

pub type ChartResult<T> = Result<T, ChartError>;
