//! Bar chart geometry.
//!
//! Pure layout math for the renderer: per-bar scale and placement, plus
//! gridline rows. Painting happens elsewhere; everything here is
//! deterministic and testable without a terminal.

use ratatui::layout::Rect;

/// Horizontal offset of the first bar from the rectangle's left edge.
pub const BAR_X_INSET: u16 = 3;
/// Fixed distance between consecutive bar columns.
pub const BAR_STRIDE: u16 = 4;
/// Width of the painted bar glyph run.
pub const BAR_GLYPH_WIDTH: u16 = 2;
/// Number of horizontal reference lines drawn beneath the bars.
pub const GRIDLINE_COUNT: u16 = 10;

/// Placement of a single bar column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarColumn {
    /// Leftmost cell column of the bar.
    pub x: u16,
    /// Bar height in cells, anchored to the rectangle bottom.
    pub height: u16,
    /// The raw, unscaled value (printed as the bar's label).
    pub value: u64,
}

/// Computed geometry for one snapshot in one rectangle.
#[derive(Debug, Clone, Default)]
pub struct ChartLayout {
    /// Advisory bar width (`max(1, width / len)`). Placement uses the
    /// fixed stride instead, so long snapshots overflow the rectangle to
    /// the right; the painter drops out-of-frame cells.
    pub bar_width: u16,
    /// One entry per snapshot value, left to right.
    pub bars: Vec<BarColumn>,
}

/// Compute bar placement for `values` inside `area`.
///
/// Heights scale by `area.height / max(values)`, so the tallest bar
/// exactly fills the rectangle height. An empty snapshot yields an
/// empty layout and an all-zero snapshot yields flat bars; neither
/// divides by zero.
pub fn layout(area: Rect, values: &[u64]) -> ChartLayout {
    if values.is_empty() {
        return ChartLayout::default();
    }

    let bar_width = ((area.width as usize / values.len()) as u16).max(1);

    let max = values.iter().copied().max().unwrap_or(0);
    let bars = values
        .iter()
        .enumerate()
        .map(|(i, &value)| BarColumn {
            x: bar_x(area, i),
            height: scaled_height(value, max, area.height),
            value,
        })
        .collect();

    ChartLayout { bar_width, bars }
}

/// `value * height / max`, truncated. The tallest bar comes out at
/// exactly `height`; an all-zero snapshot stays flat instead of
/// dividing by zero.
fn scaled_height(value: u64, max: u64, height: u16) -> u16 {
    if max == 0 {
        return 0;
    }
    (u128::from(value) * u128::from(height) / u128::from(max)) as u16
}

/// Horizontal position of bar `i`: `area.x + 3 + 4*i`, saturated at the
/// cell grid's edge for absurdly long snapshots.
fn bar_x(area: Rect, i: usize) -> u16 {
    let x = u32::from(area.x) + u32::from(BAR_X_INSET) + u32::from(BAR_STRIDE) * i as u32;
    x.try_into().unwrap_or(u16::MAX)
}

/// Rows for the evenly spaced reference lines, bottom-up.
///
/// Spacing is `ceil(height / 10)`; rows that would land above the
/// rectangle are skipped.
pub fn gridline_rows(area: Rect) -> Vec<u16> {
    if area.height == 0 {
        return Vec::new();
    }
    let bottom = area.y + area.height;
    let step = area.height.div_ceil(GRIDLINE_COUNT);
    (0..GRIDLINE_COUNT)
        .filter_map(|i| bottom.checked_sub(1 + i * step))
        .filter(|&row| row >= area.y)
        .collect()
}
