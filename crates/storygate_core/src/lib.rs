//! Core data types for Storygate.
//!
//! This crate provides the vocabulary shared by every Storygate crate: the two
//! options a reader can pick, the path those picks spell out, and the story
//! fragments shown along the way.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod choice;
mod fragment;
mod path;

pub use choice::Choice;
pub use fragment::{StoryFragment, StoryFragmentBuilder, StoryFragmentBuilderError};
pub use path::StoryPath;
