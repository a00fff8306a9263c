//! The two options offered at every level.

use serde::{Deserialize, Serialize};

/// One of the two options a reader can pick at a decision level.
///
/// # Examples
///
/// ```
/// use storygate_core::Choice;
///
/// assert_eq!(Choice::Red.as_char(), 'R');
/// assert_eq!(Choice::from_char('B'), Some(Choice::Blue));
/// assert_eq!(format!("{}", Choice::Blue), "Blue");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Choice {
    /// Encoded as `R`
    Red,
    /// Encoded as `B`
    Blue,
}

impl Choice {
    /// Path character for this choice.
    pub fn as_char(self) -> char {
        match self {
            Choice::Red => 'R',
            Choice::Blue => 'B',
        }
    }

    /// Decode a path character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'R' => Some(Choice::Red),
            'B' => Some(Choice::Blue),
            _ => None,
        }
    }

    /// Default caption when a level has none authored.
    pub fn label(self) -> &'static str {
        match self {
            Choice::Red => "Red door",
            Choice::Blue => "Blue door",
        }
    }

    /// The other option.
    pub fn toggled(self) -> Self {
        match self {
            Choice::Red => Choice::Blue,
            Choice::Blue => Choice::Red,
        }
    }
}
