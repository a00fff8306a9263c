//! Story engine for Storygate.
//!
//! This crate turns a TOML story document into a path-indexed story graph and
//! drives one reader's walk through it.
//!
//! # Features
//!
//! - **Story repository**: parse and validate `[FM_CHOICE]`, `[FM_STORY]`,
//!   `[FM_START]` and `[FM_NOEND]` sections
//! - **Path navigation**: exact-match lookups and path enumeration
//! - **Session state**: a two-option state machine with a terminal level
//! - **Paced reveal**: clause-by-clause text streams
//! - **Configuration**: layered TOML configuration
//!
//! # Example
//!
//! ```rust,no_run
//! use storygate_core::Choice;
//! use storygate_narrative::{NavigationState, PathNavigator, StorygateConfig, shared_repository};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StorygateConfig::load()?;
//! let repository = shared_repository(&config)?;
//! let navigator = PathNavigator::new(repository);
//!
//! let mut state = NavigationState::new(config.story.max_level);
//! state.apply_choice(Choice::Red)?;
//! for (kind, fragment) in navigator.scene(&state).sections() {
//!     println!("{}: {}", kind, fragment.title());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod navigator;
mod repository;
mod reveal;
mod scene;
mod shared;
mod state;
mod toml_parser;
mod tree;

pub use config::{
    DEFAULT_MAX_LEVEL, DEFAULT_REVEAL_DELAY_MS, PathsConfig, RevealConfig, StoryConfig,
    StorygateConfig, TuiConfig,
};
pub use navigator::PathNavigator;
pub use repository::StoryRepository;
pub use reveal::{Reveal, RevealStream, segment};
pub use scene::{PathEntry, Scene, SectionKind, Step};
pub use shared::shared_repository;
pub use state::NavigationState;
pub use tree::{PathTree, SessionStats};
