//! Tick placement and label formatting.
//!
//! Tick values are chosen so the spacing between them is 1, 2 or 5 times a
//! power of ten. Labels are scaled to an SI prefix, and when ticks sit close
//! together relative to their magnitude a common offset is subtracted so the
//! labels stay short.

#[cfg(test)]
#[path = "tick_math_test.rs"]
mod tests;

use crate::errors::ChartError;
use crate::errors::ChartResult;

const PREFIXES: [(i32, &str); 16] = [
    (24, "Y"),
    (21, "Z"),
    (18, "E"),
    (15, "P"),
    (12, "T"),
    (9, "G"),
    (6, "M"),
    (3, "k"),
    (-3, "m"),
    (-6, "μ"),
    (-9, "n"),
    (-12, "p"),
    (-15, "f"),
    (-18, "a"),
    (-21, "z"),
    (-24, "y"),
];

const RANGE_LIMITS: [f64; 3] = [1.5, 3.0, 7.0];
const SPACING_LIMITS: [f64; 3] = [1.0, 2.0, 5.0];
const NICE_TERMS: [f64; 3] = [1.0, 2.0, 5.0];

/// Upper bound on the number of computed ticks.
pub const MAX_TICKS: usize = 100_000;

/// Relative distance under which a step is snapped up to the next power of ten.
const STEP_SNAP_TOLERANCE: f64 = 0.001;

pub fn pow10(power: i32) -> f64 {
    return 10f64.powf(f64::from(power));
}

fn place(number: f64) -> i32 {
    return number.abs().log10().floor() as i32;
}

/// Closest power of ten that has an SI prefix, clamped to `[-24, 24]`.
pub fn find_closest_prefix_power(number: f64) -> i32 {
    if number == 0.0 {
        return 0;
    }

    return (place(number).div_euclid(3) * 3).clamp(-24, 24);
}

pub fn metric_prefix(power: i32) -> Option<&'static str> {
    return PREFIXES
        .iter()
        .find(|(prefix_power, _)| *prefix_power == power)
        .map(|(_, prefix)| *prefix);
}

/// Smallest distance between two neighbouring ticks.
///
/// Ticks must be in ascending order. Floating point noise that leaves a step
/// just below a power of ten (`9.99999e-6` instead of `1e-5`) is rounded off.
pub fn min_step_size(tick_values: &[f64]) -> ChartResult<f64> {
    if tick_values.len() < 2 {
        return Err(ChartError::NotEnoughTicks {
            required: 2,
            provided: tick_values.len(),
        });
    }

    let (mut left_tick, mut right_tick) = (tick_values[0], tick_values[1]);
    for pair in tick_values.windows(2).skip(1) {
        if pair[1] - pair[0] < right_tick - left_tick {
            (left_tick, right_tick) = (pair[0], pair[1]);
        }
    }

    let mut min_tick_step = right_tick - left_tick;
    if min_tick_step < 0.0 {
        return Err(ChartError::DescendingTicks {
            left: left_tick,
            right: right_tick,
        });
    }

    if min_tick_step != 0.0 {
        let next_place_up = pow10(place(min_tick_step) + 1);
        if (next_place_up - min_tick_step) / min_tick_step < STEP_SNAP_TOLERANCE {
            min_tick_step = next_place_up;
        }
    }

    return Ok(min_tick_step);
}

/// Returns `(axis_subtractor, tick_divisor_power)`.
///
/// Every tick label is the tick value minus `axis_subtractor`, divided by ten
/// to the `tick_divisor_power`.
pub fn axis_label_adjustors(tick_values: &[f64]) -> ChartResult<(f64, i32)> {
    let (Some(&first), Some(&last)) = (tick_values.first(), tick_values.last()) else {
        return Ok((0.0, 0));
    };

    let axis_divisor_power = find_closest_prefix_power(last);
    if tick_values.len() <= 1 {
        return Ok((0.0, axis_divisor_power));
    }

    let min_step = min_step_size(tick_values)?;
    if min_step == 0.0 {
        let value = tick_values
            .windows(2)
            .find(|pair| pair[0] == pair[1])
            .map_or(first, |pair| pair[0]);
        return Err(ChartError::DuplicateTicks { value });
    }

    let step_place = place(min_step);
    if axis_divisor_power - step_place <= 2 {
        return Ok((0.0, axis_divisor_power));
    }

    let axis_range_place = place(last - first);
    let tick_place = if axis_range_place - step_place > 2 {
        step_place
    } else {
        axis_range_place
    };
    let rounding = pow10(tick_place + 1);
    let axis_subtractor = (last / rounding).floor() * rounding;
    let tick_divisor_power = find_closest_prefix_power(pow10(tick_place));

    tracing::trace!(
        axis_subtractor,
        tick_divisor_power,
        step_place,
        axis_range_place,
        "axis label adjustors"
    );

    return Ok((axis_subtractor, tick_divisor_power));
}

pub fn make_tick_labels(
    tick_values: &[f64],
    axis_subtractor: f64,
    tick_divisor_power: i32,
) -> Vec<String> {
    let prefix = metric_prefix(tick_divisor_power).unwrap_or_default();
    let divisor = pow10(tick_divisor_power);

    return tick_values
        .iter()
        .map(|tick| format!("{:.2}{prefix}", (tick - axis_subtractor) / divisor))
        .collect();
}

/// Rounds `number` to an intuitive form.
///
/// The leading term of `number` (its value scaled into `[1, 10)`) is located
/// in `limits`, and replaced by the matching entry of `rounding_terms`, or by
/// 10 when it lies past the last limit. `allow_equal` decides whether a
/// leading term equal to a limit still rounds to that limit's term.
pub fn round_number(
    number: f64,
    limits: &[f64],
    rounding_terms: &[f64],
    allow_equal: bool,
) -> f64 {
    let power = number.log10().floor() as i32;
    let leading_term = number / pow10(power);
    let limit_index = if allow_equal {
        limits.partition_point(|limit| *limit < leading_term)
    } else {
        limits.partition_point(|limit| *limit <= leading_term)
    };
    let rounded_lead = rounding_terms.get(limit_index).copied().unwrap_or(10.0);

    return rounded_lead * pow10(power);
}

/// Tick positions in ascending order covering `[min_data, max_data]`.
///
/// Fails when the rounded range or the tick spacing leaves the finite `f64`
/// range, or when more than [`MAX_TICKS`] ticks would be needed.
pub fn tick_values(min_data: f64, max_data: f64, max_ticks: usize) -> ChartResult<Vec<f64>> {
    if max_data == min_data {
        return Ok(vec![min_data]);
    }

    let rounded_range = round_number(max_data - min_data, &RANGE_LIMITS, &NICE_TERMS, false);
    let spacing = rounded_range / (max_ticks.max(2) - 1) as f64;
    let tick_spacing = round_number(spacing, &SPACING_LIMITS, &NICE_TERMS, true);
    let first_tick = (min_data / tick_spacing).floor() * tick_spacing;
    let last_tick = (max_data / tick_spacing).ceil() * tick_spacing;

    let finite = [rounded_range, tick_spacing, first_tick, last_tick]
        .iter()
        .all(|number| number.is_finite());
    if !finite || tick_spacing <= 0.0 {
        return Err(ChartError::UnrepresentableRange {
            min: min_data,
            max: max_data,
        });
    }

    let count = ((last_tick - first_tick) / tick_spacing).ceil() + 1.0;
    if !count.is_finite() || count > MAX_TICKS as f64 {
        return Err(ChartError::TooManyTicks {
            count,
            limit: MAX_TICKS,
        });
    }
    let number_of_ticks = count as usize;

    tracing::trace!(tick_spacing, number_of_ticks, "tick values");

    return Ok((0..number_of_ticks)
        .map(|factor| first_tick + factor as f64 * tick_spacing)
        .collect());
}
