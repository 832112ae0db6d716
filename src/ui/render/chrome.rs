//! Frame chrome: border, key legend, status line.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::ui::app::App;

use super::helpers::{draw_hline, put_char, put_string};

/// Paint the outer border, the legend bar, and the two status strings
/// into the full frame `area`.
///
/// The legend sits between two horizontal dividers below the top border;
/// each entry's trailing `┃` is tied into the dividers with `┳`/`┻`
/// tees, and the divider lines extend to the right edge after the last
/// entry. The bottom border row carries `chart N of M` on the left and
/// the selected algorithm's name on the right.
pub fn render_chrome(buf: &mut Buffer, area: Rect, app: &App) {
    if area.width < 2 || area.height < 4 {
        return;
    }
    let style = Style::default().fg(app.theme().chrome);
    let left = area.left();
    let right = area.right() - 1;
    let top = area.top();
    let bottom = area.bottom() - 1;

    // Corners and side rails.
    put_char(buf, left, top, '┏', style);
    put_char(buf, left, top + 1, '┃', style);
    put_char(buf, left, top + 2, '┣', style);
    for y in top + 3..bottom {
        put_char(buf, left, y, '┃', style);
        put_char(buf, right, y, '┃', style);
    }
    put_char(buf, left, bottom, '┗', style);
    put_char(buf, right, top, '┓', style);
    put_char(buf, right, top + 1, '┃', style);
    put_char(buf, right, top + 2, '┫', style);
    put_char(buf, right, bottom, '┛', style);
    draw_hline(buf, left + 1, right - 1, bottom, '━', style);

    // Legend entries between the two divider rows.
    let row = top + 1;
    let mut column = left + 1;
    for item in app.legend() {
        let text = format!(" {} = {} ┃", item.key, item.action);
        put_string(buf, column, row, &text, style);
        let divider = column + text.chars().count() as u16 - 1;
        draw_hline(buf, column, divider, row + 1, '━', style);
        draw_hline(buf, column, divider, row - 1, '━', style);
        column = divider;
        put_char(buf, column, row + 1, '┻', style);
        put_char(buf, column, row - 1, '┳', style);
        column += 1;
    }
    // Close the frame to the right of the last entry.
    if column + 1 < right {
        draw_hline(buf, column, right - 1, top, '━', style);
        draw_hline(buf, column, right - 1, top + 2, '━', style);
    }

    // Status strings on the bottom border.
    let status = format!(" chart {} of {} ", app.page() + 1, app.chart_count());
    put_string(buf, left + 1, bottom, &status, style);
    let name = format!(" {} SORT ", app.kind().label());
    let x = right.saturating_sub(name.chars().count() as u16);
    put_string(buf, x, bottom, &name, style);
}
