//! Full-frame painting.
//!
//! The render path is invoked only by the owner loop, always for a
//! complete frame: chrome first, then the resolved value snapshot
//! through the chart painter. Painting is cell-level into the ratatui
//! buffer because the chart is a character surface, not a widget tree.

mod chart;
mod chrome;
mod helpers;

pub use chart::render_chart;
pub use chrome::render_chrome;

use ratatui::Frame;

use super::app::App;

/// Paint one complete frame: border, legend, status line, and the
/// current page's chart from the already-resolved `snapshot`.
pub fn render(frame: &mut Frame, app: &App, snapshot: &[u64]) {
    let buf = frame.buffer_mut();
    render_chrome(buf, app.frame_area(), app);
    render_chart(buf, app.chart_area(), snapshot, &[], app.theme());
}
