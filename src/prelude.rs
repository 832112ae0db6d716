//! Common re-exports for convenient importing.
//!
//! # Example
//!
//! ```rust,ignore
//! use barscope::prelude::*;
//! ```

pub use crate::core::{Chart, ParseSeriesError, Series};
pub use crate::sort::{sorted_copy, SortAlgorithm, SortKind};
pub use crate::theme::Theme;
pub use crate::ui::{App, Command, HelpItem, SessionError};
