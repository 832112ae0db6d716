//! Color set for the dashboard.

use ratatui::style::Color;

/// The colors used by the chart and frame painters.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Bars outside the highlight set.
    pub bar: Color,
    /// Bars whose index is in the highlight set.
    pub bar_highlight: Color,
    /// Value labels beneath the bars.
    pub label: Color,
    /// Horizontal reference lines.
    pub grid: Color,
    /// Border, legend, and status text.
    pub chrome: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bar: Color::Rgb(255, 255, 255),
            bar_highlight: Color::Rgb(255, 0, 0),
            label: Color::Rgb(0, 255, 0),
            grid: Color::Rgb(50, 50, 50),
            chrome: Color::Rgb(255, 255, 255),
        }
    }
}
