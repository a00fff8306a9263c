//! Error types for Storygate.
//!
//! This crate provides the error types used throughout the Storygate workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use storygate_error::{LoadError, LoadErrorKind, StorygateResult};
//!
//! fn open_story() -> StorygateResult<String> {
//!     Err(LoadError::new(LoadErrorKind::NotFound("story.toml".to_string())))?
//! }
//!
//! match open_story() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod json;
mod load;
mod navigation;
#[cfg(feature = "tui")]
mod tui;

pub use config::ConfigError;
pub use error::{StorygateError, StorygateErrorKind, StorygateResult};
pub use json::JsonError;
pub use load::{LoadError, LoadErrorKind};
pub use navigation::{NavigationError, NavigationErrorKind};
#[cfg(feature = "tui")]
pub use tui::{TuiError, TuiErrorKind, TuiResult};
