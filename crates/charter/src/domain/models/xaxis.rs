#[cfg(test)]
#[path = "xaxis_test.rs"]
mod tests;

use super::AxisCell;
use super::Characters;
use super::Fragment;
use super::Justify;
use super::Overflow;
use super::StyleRole;
use super::Ticks;
use crate::errors::ChartResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    LeftPadding,
    Tick,
    TickMargin,
    RightPadding,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisColumn {
    pub kind: ColumnKind,
    pub width: usize,
}

/// A horizontal axis laid out across a fixed number of characters.
///
/// Each tick takes `2 * tick_padding + 1` characters with the tick mark in
/// the middle. Ticks are separated by at least `min_tick_margin` characters
/// when the width allows it, and whatever space is left over is split between
/// the left and right padding.
#[derive(Clone, Debug, PartialEq)]
pub struct XAxis {
    pub ticks: Ticks,
    pub width: usize,
    pub tick_padding: usize,
    pub tick_margin: usize,
    pub left_padding: usize,
    pub right_padding: usize,
    /// Character offsets of the tick marks on the axis line.
    pub tick_positions: Vec<usize>,
    pub columns: Vec<AxisColumn>,
}

#[derive(Clone, Debug, Default)]
pub struct XAxisBuilder {
    min_data: f64,
    max_data: f64,
    tick_padding: usize,
    min_tick_margin: usize,
    width: usize,
    tick_values: Option<Vec<f64>>,
    tick_labels: Option<Vec<String>>,
}

impl XAxisBuilder {
    pub fn tick_padding(mut self, tick_padding: usize) -> Self {
        self.tick_padding = tick_padding;
        return self;
    }

    pub fn min_tick_margin(mut self, min_tick_margin: usize) -> Self {
        self.min_tick_margin = min_tick_margin;
        return self;
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        return self;
    }

    pub fn tick_values(mut self, tick_values: Option<Vec<f64>>) -> Self {
        self.tick_values = tick_values;
        return self;
    }

    pub fn tick_labels(mut self, tick_labels: Option<Vec<String>>) -> Self {
        self.tick_labels = tick_labels;
        return self;
    }

    pub fn build(self) -> ChartResult<XAxis> {
        return XAxis::new(self);
    }
}

impl XAxis {
    pub fn builder(min_data: f64, max_data: f64) -> XAxisBuilder {
        return XAxisBuilder {
            min_data,
            max_data,
            ..Default::default()
        };
    }

    fn new(props: XAxisBuilder) -> ChartResult<XAxis> {
        let width = i64::try_from(props.width).unwrap_or(i64::MAX);
        let tick_padding = i64::try_from(props.tick_padding).unwrap_or(i64::MAX);
        let min_tick_margin = i64::try_from(props.min_tick_margin).unwrap_or(i64::MAX);
        let tick_width = tick_padding.saturating_mul(2).saturating_add(1);

        let max_ticks = (width - tick_width)
            .div_euclid(tick_width.saturating_add(min_tick_margin))
            .saturating_add(1);
        let ticks = Ticks::custom(
            props.min_data,
            props.max_data,
            max_ticks.max(0) as usize,
            props.tick_values,
            props.tick_labels,
        )?;

        let number_of_ticks = ticks.len() as i64;
        let total_tick_space = number_of_ticks.saturating_mul(tick_width);
        let mut tick_margin = 0;
        if number_of_ticks > 1 {
            tick_margin = width
                .saturating_sub(total_tick_space)
                .div_euclid(number_of_ticks - 1)
                .max(0);
        }
        let total_taken_space = total_tick_space
            .saturating_add(tick_margin.saturating_mul((number_of_ticks - 1).max(0)));
        let extra_space = width.saturating_sub(total_taken_space).max(0);
        let left_padding = extra_space / 2;
        let right_padding = extra_space - left_padding;

        let step = tick_margin.saturating_add(tick_width);
        let tick_positions = (0..number_of_ticks)
            .map(|factor| {
                tick_padding
                    .saturating_add(left_padding)
                    .saturating_add(factor.saturating_mul(step))
            })
            .take_while(|position| *position <= width)
            .map(|position| position as usize)
            .collect::<Vec<usize>>();

        let columns = make_columns(
            ticks.len(),
            tick_width as usize,
            left_padding as usize,
            right_padding as usize,
            tick_margin as usize,
        );

        tracing::debug!(
            width,
            number_of_ticks,
            tick_margin,
            left_padding,
            right_padding,
            "xaxis layout"
        );

        return Ok(XAxis {
            ticks,
            width: props.width,
            tick_padding: props.tick_padding,
            tick_margin: tick_margin as usize,
            left_padding: left_padding as usize,
            right_padding: right_padding as usize,
            tick_positions,
            columns,
        });
    }

    pub fn number_of_xticks(&self) -> usize {
        return self.ticks.len();
    }

    /// The axis line, one cell per column.
    pub fn xline(&self, characters: &Characters, show_ticks: bool) -> Vec<AxisCell> {
        let xline_character = characters.xline.as_str();
        let xtick_character = if show_ticks {
            characters.xtick.as_str()
        } else {
            xline_character
        };
        let tick_side = xline_character.repeat(self.tick_padding);

        return self
            .columns
            .iter()
            .map(|column| match column.kind {
                ColumnKind::Tick => AxisCell::assemble(
                    vec![
                        Fragment::new(&tick_side, StyleRole::XAxis),
                        Fragment::new(xtick_character, StyleRole::XTickLabel),
                        Fragment::new(&tick_side, StyleRole::XAxis),
                    ],
                    Overflow::Crop,
                ),
                _ => AxisCell::styled(
                    &xline_character.repeat(column.width),
                    StyleRole::XAxis,
                    Overflow::Crop,
                ),
            })
            .collect();
    }

    /// The row of tick labels, one cell per column.
    pub fn xtick_labels(&self, characters: &Characters) -> Vec<AxisCell> {
        let spacing_character = characters.xtick_spacing.as_str();
        let mut tick_labels = self.ticks.tick_labels.iter();

        return self
            .columns
            .iter()
            .map(|column| match column.kind {
                ColumnKind::Tick => AxisCell::styled(
                    tick_labels.next().map_or("", String::as_str),
                    StyleRole::XTickLabel,
                    Overflow::Ellipsis,
                )
                .justify(Justify::Center),
                _ => AxisCell::styled(
                    &spacing_character.repeat(column.width),
                    StyleRole::XTickSpacing,
                    Overflow::Crop,
                ),
            })
            .collect();
    }
}

fn make_columns(
    number_of_ticks: usize,
    tick_width: usize,
    left_padding: usize,
    right_padding: usize,
    tick_margin: usize,
) -> Vec<AxisColumn> {
    let mut columns = vec![AxisColumn {
        kind: ColumnKind::LeftPadding,
        width: left_padding,
    }];

    for column_number in 0..(2 * number_of_ticks).saturating_sub(1) {
        columns.push(if column_number % 2 == 0 {
            AxisColumn {
                kind: ColumnKind::Tick,
                width: tick_width,
            }
        } else {
            AxisColumn {
                kind: ColumnKind::TickMargin,
                width: tick_margin,
            }
        });
    }

    columns.push(AxisColumn {
        kind: ColumnKind::RightPadding,
        width: right_padding,
    });

    return columns;
}
