//! Choice paths encoded as strings over `{R, B}`.

use crate::Choice;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use storygate_error::{NavigationError, NavigationErrorKind};

/// An ordered sequence of choices, encoded one character per choice.
///
/// The empty path is the start of the story. Its depth is its length.
///
/// # Examples
///
/// ```
/// use storygate_core::{Choice, StoryPath};
///
/// let mut path = StoryPath::new();
/// path.push(Choice::Red);
/// path.push(Choice::Blue);
/// assert_eq!(path.as_str(), "RB");
/// assert_eq!(path.depth(), 2);
///
/// assert!("RXB".parse::<StoryPath>().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "String", into = "String")]
pub struct StoryPath(String);

impl StoryPath {
    /// The empty path.
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Append one choice.
    pub fn push(&mut self, choice: Choice) {
        self.0.push(choice.as_char());
    }

    /// Copy of this path extended by one choice.
    pub fn child(&self, choice: Choice) -> Self {
        let mut next = self.clone();
        next.push(choice);
        next
    }

    /// Discard every choice.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Encoded form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of choices made.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no choice has been made.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Depth in the story tree (same as [`len`](Self::len)).
    pub fn depth(&self) -> usize {
        self.len()
    }

    /// Decoded choices, oldest first.
    pub fn choices(&self) -> impl Iterator<Item = Choice> + '_ {
        self.0.chars().filter_map(Choice::from_char)
    }

    /// How many times `choice` was picked.
    pub fn count(&self, choice: Choice) -> usize {
        self.choices().filter(|c| *c == choice).count()
    }

    /// Whether `s` is a non-empty string over `{R, B}`.
    pub fn is_branch_key(s: &str) -> bool {
        !s.is_empty() && s.chars().all(|c| Choice::from_char(c).is_some())
    }
}

impl FromStr for StoryPath {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().all(|c| Choice::from_char(c).is_some()) {
            Ok(Self(s.to_string()))
        } else {
            Err(NavigationError::new(NavigationErrorKind::InvalidPath(
                s.to_string(),
            )))
        }
    }
}

impl TryFrom<String> for StoryPath {
    type Error = NavigationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StoryPath> for String {
    fn from(path: StoryPath) -> Self {
        path.0
    }
}

impl AsRef<str> for StoryPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromIterator<Choice> for StoryPath {
    fn from_iter<I: IntoIterator<Item = Choice>>(iter: I) -> Self {
        Self(iter.into_iter().map(Choice::as_char).collect())
    }
}
