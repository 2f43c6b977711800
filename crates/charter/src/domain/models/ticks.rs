#[cfg(test)]
#[path = "ticks_test.rs"]
mod tests;

use serde::Serialize;

use crate::domain::services::tick_math;
use crate::errors::ChartError;
use crate::errors::ChartResult;

/// Tick values and labels for one axis dimension.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Ticks {
    pub min_data: f64,
    pub max_data: f64,
    pub max_ticks: usize,
    /// Tick values in ascending order.
    pub tick_values: Vec<f64>,
    pub tick_labels: Vec<String>,
    /// SI prefix power of the largest tick.
    pub axis_power: i32,
    /// Subtracted from every tick value before it is labeled.
    pub axis_subtractor: f64,
    /// Power of ten every label is divided by after subtraction.
    pub tick_divisor_power: i32,
    pub axis_subtractor_label: Option<String>,
}

impl Ticks {
    pub fn new(min_data: f64, max_data: f64, max_ticks: usize) -> ChartResult<Ticks> {
        return Ticks::custom(min_data, max_data, max_ticks, None, None);
    }

    /// Builds ticks, using the given values or labels in place of the
    /// computed ones. Empty vectors count as absent.
    pub fn custom(
        min_data: f64,
        max_data: f64,
        max_ticks: usize,
        tick_values: Option<Vec<f64>>,
        tick_labels: Option<Vec<String>>,
    ) -> ChartResult<Ticks> {
        if !min_data.is_finite() || !max_data.is_finite() {
            return Err(ChartError::NonFiniteData {
                min: min_data,
                max: max_data,
            });
        }
        if max_data < min_data {
            return Err(ChartError::InvalidRange {
                min: min_data,
                max: max_data,
            });
        }

        let max_ticks = max_ticks.max(2);
        let tick_values = match tick_values {
            Some(values) if !values.is_empty() => values,
            _ => tick_math::tick_values(min_data, max_data, max_ticks)?,
        };
        let last_tick = tick_values.last().copied().unwrap_or(max_data);

        let axis_power = tick_math::find_closest_prefix_power(last_tick);
        let (axis_subtractor, tick_divisor_power) =
            tick_math::axis_label_adjustors(&tick_values)?;

        let tick_labels = match tick_labels {
            Some(labels) if !labels.is_empty() => labels,
            _ => tick_math::make_tick_labels(&tick_values, axis_subtractor, tick_divisor_power),
        };

        if tick_values.len() != tick_labels.len() {
            return Err(ChartError::TickLabelMismatch {
                values: tick_values.len(),
                labels: tick_labels.len(),
            });
        }

        let axis_subtractor_label = if axis_subtractor == 0.0 {
            None
        } else {
            Some(format!(
                "{:.2}{}",
                axis_subtractor / tick_math::pow10(axis_power),
                tick_math::metric_prefix(axis_power).unwrap_or_default()
            ))
        };

        tracing::debug!(
            min_data,
            max_data,
            max_ticks,
            number_of_ticks = tick_values.len(),
            axis_subtractor,
            tick_divisor_power,
            "ticks"
        );

        return Ok(Ticks {
            min_data,
            max_data,
            max_ticks,
            tick_values,
            tick_labels,
            axis_power,
            axis_subtractor,
            tick_divisor_power,
            axis_subtractor_label,
        });
    }

    pub fn len(&self) -> usize {
        return self.tick_values.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.tick_values.is_empty();
    }

    /// Pairs of tick value and label, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &str)> {
        return self
            .tick_values
            .iter()
            .copied()
            .zip(self.tick_labels.iter().map(String::as_str));
    }
}
