//! Chart: one series bound to a fixed drawing rectangle.

use ratatui::layout::Rect;

use super::Series;

/// One chart page: a [`Series`] plus the drawing rectangle it was bound
/// to at session start.
///
/// The chart knows nothing about ordering or animation; it owns the raw
/// data and hands out value snapshots. Layout is derived per render from
/// whatever snapshot is passed in, which is not necessarily the chart's
/// own stored series (it is the live algorithm array while animating).
#[derive(Debug, Clone)]
pub struct Chart {
    series: Series,
    area: Rect,
}

impl Chart {
    /// Wrap a series. The drawing rectangle is bound later, once the
    /// terminal dimensions are known.
    pub fn new(series: Series) -> Self {
        Self {
            series,
            area: Rect::default(),
        }
    }

    /// Bind the chart to its drawing rectangle. Called exactly once, at
    /// session start.
    pub(crate) fn bind(&mut self, area: Rect) {
        self.area = area;
    }

    /// The drawing rectangle this chart renders into.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// The raw, unmodified value snapshot.
    pub fn values(&self) -> &[u64] {
        self.series.values()
    }

    /// Land a finished (or interrupted) animation's array in the series.
    pub(crate) fn set_values(&mut self, values: Vec<u64>) {
        self.series.set_values(values);
    }
}
