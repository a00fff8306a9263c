//! Storygate - branching red/blue stories
//!
//! A story is a TOML document of fragments: an opening, an ending, one
//! decision point per level and any number of branches keyed by the
//! choices that lead to them (`R` for red, `B` for blue). A reader starts
//! at level one, picks red or blue at each level, and reaches the ending
//! once every level is decided.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use storygate::{Choice, NavigationState, PathNavigator, StoryRepository};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = StoryRepository::from_file("docs/FM_STORY.toml")?;
//! let navigator = PathNavigator::new(&repository);
//!
//! let mut state = NavigationState::new(6);
//! state.apply_choice(Choice::Red)?;
//!
//! for (heading, fragment) in navigator.scene(&state).sections() {
//!     println!("{heading}: {}", fragment.title());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Cargo Features
//!
//! - `tui` - Terminal reader with paced text reveal (default)
//!
//! # Architecture
//!
//! Storygate is organized as a workspace with focused crates:
//!
//! - `storygate_error` - Error types
//! - `storygate_core` - Choices, paths and story fragments
//! - `storygate_narrative` - Story repository, navigation, reveal and configuration
//! - `storygate_tui` - Terminal reader
//!
//! This crate (`storygate`) re-exports everything for convenience.

pub use storygate_core::*;
pub use storygate_error::*;
pub use storygate_narrative::*;

#[cfg(feature = "tui")]
pub use storygate_tui::{App, AppMode, Narrator, run_tui};
