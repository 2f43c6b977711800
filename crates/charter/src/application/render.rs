#[cfg(test)]
#[path = "render_test.rs"]
mod tests;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Widget;

use crate::domain::models::AxisCell;
use crate::domain::models::Characters;
use crate::domain::models::Justify;
use crate::domain::models::Overflow;
use crate::domain::models::StyleRole;
use crate::domain::models::Theme;
use crate::domain::models::XAxis;

/// The rows that make up a drawn x axis: the axis line, the tick labels, and
/// the subtracted offset when the labels are relative to one.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisRows {
    pub xline: Vec<AxisCell>,
    pub xtick_labels: Vec<AxisCell>,
    pub subtractor: Option<AxisCell>,
    column_widths: Vec<usize>,
}

impl AxisRows {
    pub fn new(xaxis: &XAxis, characters: &Characters, show_ticks: bool) -> AxisRows {
        let subtractor = xaxis
            .ticks
            .axis_subtractor_label
            .as_ref()
            .map(|label| {
                return AxisCell::styled(
                    &format!("+{label}"),
                    StyleRole::XTickLabel,
                    Overflow::Ellipsis,
                )
                .justify(Justify::Right);
            });

        return AxisRows {
            xline: xaxis.xline(characters, show_ticks),
            xtick_labels: xaxis.xtick_labels(characters),
            subtractor,
            column_widths: xaxis.columns.iter().map(|column| column.width).collect(),
        };
    }

    /// Total width of the rows, which exceeds the axis width when the ticks
    /// do not fit.
    pub fn width(&self) -> usize {
        return self.column_widths.iter().sum();
    }

    pub fn height(&self) -> usize {
        return 2 + usize::from(self.subtractor.is_some());
    }

    pub fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![
            self.row_line(&self.xline, theme),
            self.row_line(&self.xtick_labels, theme),
        ];
        if let Some(subtractor) = &self.subtractor {
            lines.push(cell_line(subtractor, self.width(), theme));
        }

        return lines;
    }

    fn row_line(&self, cells: &[AxisCell], theme: &Theme) -> Line<'static> {
        let spans = cells
            .iter()
            .zip(&self.column_widths)
            .flat_map(|(cell, width)| cell_spans(cell, *width, theme))
            .collect::<Vec<Span<'static>>>();

        return Line::from(spans);
    }
}

fn cell_spans(cell: &AxisCell, width: usize, theme: &Theme) -> Vec<Span<'static>> {
    return cell
        .fit(width)
        .into_iter()
        .map(|fragment| Span::styled(fragment.content, theme.style(fragment.role)))
        .collect();
}

fn cell_line(cell: &AxisCell, width: usize, theme: &Theme) -> Line<'static> {
    return Line::from(cell_spans(cell, width, theme));
}

/// Draws [`AxisRows`] into a ratatui buffer, one row per line, clipped to the
/// render area.
pub struct AxisWidget<'a> {
    rows: &'a AxisRows,
    theme: &'a Theme,
}

impl<'a> AxisWidget<'a> {
    pub fn new(rows: &'a AxisRows, theme: &'a Theme) -> AxisWidget<'a> {
        return AxisWidget { rows, theme };
    }
}

impl Widget for AxisWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        for (offset, line) in self
            .rows
            .lines(self.theme)
            .iter()
            .enumerate()
            .take(usize::from(area.height))
        {
            buf.set_line(area.x, area.y + offset as u16, line, area.width);
        }
    }
}
