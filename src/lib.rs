//! barscope - a terminal bar-chart dashboard with sorting animations.
//!
//! A TUI application that renders integer series as bar charts, pages
//! through them, and animates sorting algorithms step by step.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use barscope::prelude::*;
//!
//! let series: Series = "3,1,4,1,5".parse()?;
//! let sorted = barscope::sort::sorted_copy(series.values());
//! ```

#![deny(missing_docs)]

pub mod core;
pub mod logging;
pub mod prelude;
pub mod sort;
pub mod theme;
pub mod ui;
