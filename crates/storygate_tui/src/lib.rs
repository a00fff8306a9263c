//! Terminal reader for branching stories.
//!
//! Shows the story one scene at a time, reveals new text clause by clause,
//! and lets the reader pick the red or blue option at each level. Built
//! with ratatui for rendering.

mod app;
mod events;
mod narrator;
mod runner;
mod ui;

pub use app::{App, AppMode, PathOverview, SectionView};
pub use events::{Event, EventHandler};
pub use narrator::{Narrator, RevealEvent, RevealRequest};
pub use runner::{handle_key, run_tui};
pub use storygate_error::{TuiError, TuiErrorKind, TuiResult};
pub use ui::draw;
