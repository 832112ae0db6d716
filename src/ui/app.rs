//! Session state and the command-driven state machine.

use ratatui::layout::{Rect, Size};
use thiserror::Error;
use tracing::debug;

use crate::core::{Chart, Series};
use crate::sort::{sorted_copy, SortAlgorithm, SortKind};
use crate::theme::Theme;

/// Session sequencing misuse. These are programming errors and fail
/// loudly instead of silently corrupting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// `start` was called on an already started session.
    #[error("session already started")]
    AlreadyStarted,
    /// A command or render was issued before `start`.
    #[error("session not started")]
    NotStarted,
    /// The session was created with no series to chart.
    #[error("chart collection is empty")]
    NoCharts,
}

/// A state-machine command, produced by the input dispatcher and the
/// animation ticker, consumed by [`App::apply`] on the owner thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Advance to the next chart page, wrapping around.
    NextPage,
    /// Retreat to the previous chart page, wrapping around.
    PrevPage,
    /// Flip the static sorted view.
    ToggleSorted,
    /// Cycle to the next sorting algorithm.
    NextAlgorithm,
    /// Begin animating the current page under the selected algorithm.
    StartAnimation,
    /// Advance a running animation by one algorithm step.
    Step,
    /// End the session.
    Quit,
}

/// One legend entry: a key and what it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpItem {
    /// The key the user presses.
    pub key: char,
    /// Short description shown in the legend bar.
    pub action: &'static str,
}

/// The default key legend matching the input dispatcher's bindings.
pub fn default_legend() -> Vec<HelpItem> {
    vec![
        HelpItem { key: 'n', action: "next chart" },
        HelpItem { key: 'b', action: "prev chart" },
        HelpItem { key: 's', action: "toggle sorted" },
        HelpItem { key: 'a', action: "start animation" },
        HelpItem { key: 'p', action: "pick algorithm" },
    ]
}

/// Application state: the single source of truth for the session.
///
/// Owned by one thread. All mutation goes through [`App::apply`], so a
/// state change and the repaint that follows are atomic with respect to
/// the input and animation threads, which only produce [`Command`]s.
#[derive(Debug)]
pub struct App {
    charts: Vec<Chart>,
    page: usize,
    sorted_view: bool,
    kind: SortKind,
    /// Live algorithm instance. `Some` if and only if animating.
    algorithm: Option<Box<dyn SortAlgorithm>>,
    legend: Vec<HelpItem>,
    theme: Theme,
    frame_area: Rect,
    started: bool,
    /// Whether the display needs a repaint.
    pub dirty: bool,
    /// Whether the session should end.
    pub should_quit: bool,
}

impl App {
    /// Create a session over `series`, one chart page per series.
    ///
    /// The legend is the immutable configuration the frame chrome
    /// renders; pass [`default_legend`] unless the key bindings differ.
    pub fn new(
        series: Vec<Series>,
        kind: SortKind,
        legend: Vec<HelpItem>,
        theme: Theme,
    ) -> Result<Self, SessionError> {
        if series.is_empty() {
            return Err(SessionError::NoCharts);
        }
        Ok(Self {
            charts: series.into_iter().map(Chart::new).collect(),
            page: 0,
            sorted_view: false,
            kind,
            algorithm: None,
            legend,
            theme,
            frame_area: Rect::default(),
            started: false,
            dirty: false,
            should_quit: false,
        })
    }

    /// Capture the terminal dimensions and bind every chart to the
    /// shared drawing rectangle. Must be called exactly once before any
    /// command or render.
    pub fn start(&mut self, size: Size) -> Result<(), SessionError> {
        if self.started {
            return Err(SessionError::AlreadyStarted);
        }
        self.frame_area = Rect::new(0, 0, size.width, size.height);
        let area = chart_area(size);
        for chart in &mut self.charts {
            chart.bind(area);
        }
        self.started = true;
        self.dirty = true;
        debug!(cols = size.width, rows = size.height, "session started");
        Ok(())
    }

    /// Apply one command. Page, toggle, algorithm, and start-animation
    /// commands are ignored while an animation is running.
    pub fn apply(&mut self, cmd: Command) -> Result<(), SessionError> {
        if !self.started {
            return Err(SessionError::NotStarted);
        }
        debug!(?cmd, animating = self.is_animating(), "apply");
        match cmd {
            Command::NextPage => {
                if !self.is_animating() {
                    self.page = (self.page + 1) % self.charts.len();
                    self.dirty = true;
                }
            }
            Command::PrevPage => {
                if !self.is_animating() {
                    self.page = (self.page + self.charts.len() - 1) % self.charts.len();
                    self.dirty = true;
                }
            }
            Command::ToggleSorted => {
                if !self.is_animating() {
                    self.sorted_view = !self.sorted_view;
                    self.dirty = true;
                }
            }
            Command::NextAlgorithm => {
                if !self.is_animating() {
                    self.kind = self.kind.next();
                    self.dirty = true;
                }
            }
            Command::StartAnimation => {
                if !self.is_animating() {
                    let values = self.charts[self.page].values();
                    self.algorithm = Some(self.kind.stepper(values));
                    self.dirty = true;
                }
            }
            Command::Step => self.step_animation(),
            Command::Quit => {
                // Abort a running animation, landing whatever it reached.
                self.finish_animation();
                self.should_quit = true;
            }
        }
        Ok(())
    }

    /// Resolve which value snapshot feeds the renderer: the live
    /// algorithm array while animating, the sorted copy when the sorted
    /// view is on, the raw series otherwise.
    pub fn render_snapshot(&self) -> Result<Vec<u64>, SessionError> {
        if !self.started {
            return Err(SessionError::NotStarted);
        }
        let chart = &self.charts[self.page];
        if let Some(algorithm) = &self.algorithm {
            Ok(algorithm.values().to_vec())
        } else if self.sorted_view {
            Ok(sorted_copy(chart.values()))
        } else {
            Ok(chart.values().to_vec())
        }
    }

    /// One animation step: advance the algorithm; on completion, land
    /// the sorted array in the chart and stop animating. A tick arriving
    /// after completion is ignored.
    fn step_animation(&mut self) {
        let Some(algorithm) = self.algorithm.as_mut() else {
            return;
        };
        algorithm.step();
        if algorithm.is_sorted() {
            debug!(page = self.page, "animation finished");
            self.finish_animation();
        }
        self.dirty = true;
    }

    /// Write the working array back into the current chart and clear the
    /// animating state. No-op when not animating.
    fn finish_animation(&mut self) {
        if let Some(algorithm) = self.algorithm.take() {
            self.charts[self.page].set_values(algorithm.into_values());
        }
    }

    /// Whether an animation is in progress.
    pub fn is_animating(&self) -> bool {
        self.algorithm.is_some()
    }

    /// Reset the repaint flag after drawing.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Current page index.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of chart pages.
    pub fn chart_count(&self) -> usize {
        self.charts.len()
    }

    /// Whether the static sorted view is on.
    pub fn sorted_view(&self) -> bool {
        self.sorted_view
    }

    /// The selected sorting algorithm kind.
    pub fn kind(&self) -> SortKind {
        self.kind
    }

    /// All chart pages, in order.
    pub fn charts(&self) -> &[Chart] {
        &self.charts
    }

    /// The legend entries the frame chrome renders.
    pub fn legend(&self) -> &[HelpItem] {
        &self.legend
    }

    /// The active color set.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The full terminal area captured at start.
    pub fn frame_area(&self) -> Rect {
        self.frame_area
    }

    /// The shared chart drawing rectangle.
    pub fn chart_area(&self) -> Rect {
        self.charts[self.page].area()
    }
}

/// The chart rectangle for a terminal of `size`: from (2, 4) to two
/// cells short of the right edge and the bottom row, leaving room for
/// the border, the legend bar, and the label row.
fn chart_area(size: Size) -> Rect {
    Rect::new(
        2,
        4,
        size.width.saturating_sub(4),
        size.height.saturating_sub(6),
    )
}
