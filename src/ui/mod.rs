//! Terminal UI: session state, input dispatch, animation pacing,
//! rendering.

mod animation;
mod app;
mod input;
pub mod render;

pub use animation::Ticker;
pub use app::{default_legend, App, Command, HelpItem, SessionError};
pub use input::spawn_input;
pub use render::render;
