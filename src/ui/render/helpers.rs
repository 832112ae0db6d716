//! Low-level cell painting helpers.
//!
//! All painters go through these so writes that fall outside the buffer
//! (the accepted bar-stride overflow, tiny terminals) are dropped
//! instead of panicking.

use ratatui::buffer::Buffer;
use ratatui::style::Style;

/// Set one cell, dropping writes outside the buffer area.
pub(crate) fn put_char(buf: &mut Buffer, x: u16, y: u16, ch: char, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(ch).set_style(style);
    }
}

/// Print a string, clipped at the buffer's right edge.
pub(crate) fn put_string(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style) {
    let area = buf.area;
    if y < area.top() || y >= area.bottom() || x < area.left() || x >= area.right() {
        return;
    }
    let max = (area.right() - x) as usize;
    buf.set_stringn(x, y, text, max, style);
}

/// Draw a horizontal run of `ch` from `x0` to `x1` inclusive.
pub(crate) fn draw_hline(buf: &mut Buffer, x0: u16, x1: u16, y: u16, ch: char, style: Style) {
    for x in x0..=x1 {
        put_char(buf, x, y, ch, style);
    }
}
