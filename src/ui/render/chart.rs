//! Bar chart painting.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::core::{gridline_rows, layout, BAR_GLYPH_WIDTH};
use crate::theme::Theme;

use super::helpers::{draw_hline, put_char, put_string};

const BAR_CHAR: char = '║';
const GRID_CHAR: char = '_';

/// Paint one value snapshot into `area`.
///
/// Gridlines go down first, beneath the bars; each bar is a
/// two-cell-wide column anchored to the rectangle bottom, with its raw
/// value printed directly beneath it. Bars whose index is in `highlight`
/// use the attention color. Degenerate snapshots (empty, all-zero)
/// paint flat or not at all; they never divide by zero.
pub fn render_chart(
    buf: &mut Buffer,
    area: Rect,
    values: &[u64],
    highlight: &[usize],
    theme: &Theme,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let grid_style = Style::default().fg(theme.grid);
    for row in gridline_rows(area) {
        draw_hline(buf, area.left(), area.right(), row, GRID_CHAR, grid_style);
    }

    let chart = layout(area, values);
    let bottom = area.bottom();
    let label_style = Style::default().fg(theme.label);
    for (i, bar) in chart.bars.iter().enumerate() {
        let color = if highlight.contains(&i) {
            theme.bar_highlight
        } else {
            theme.bar
        };
        let bar_style = Style::default().fg(color);
        for dx in 0..BAR_GLYPH_WIDTH {
            let x = bar.x.saturating_add(dx);
            for y in bottom.saturating_sub(bar.height)..bottom {
                put_char(buf, x, y, BAR_CHAR, bar_style);
            }
        }
        put_string(buf, bar.x, bottom, &bar.value.to_string(), label_style);
    }
}
