//! Per-session navigation state.
//!
//! A session is one reader's walk through the story. Its only data is the
//! path of choices made so far; the level is always derived from it.

use serde::Serialize;
use storygate_core::{Choice, StoryPath};
use storygate_error::{NavigationError, NavigationErrorKind};
use tracing::debug;

/// Where one reader is in the story.
///
/// `level == path.len() + 1` holds for every reachable value, because the
/// level is computed rather than stored. The session is terminal once the
/// level passes `max_level`.
///
/// # Examples
///
/// ```
/// use storygate_core::Choice;
/// use storygate_narrative::NavigationState;
///
/// let mut state = NavigationState::new(6);
/// state.apply_choice(Choice::Red).unwrap();
/// state.apply_choice(Choice::Blue).unwrap();
/// assert_eq!(state.path().as_str(), "RB");
/// assert_eq!(state.level(), 3);
///
/// state.reset();
/// assert_eq!(state.level(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NavigationState {
    path: StoryPath,
    max_level: usize,
}

impl NavigationState {
    /// Fresh session at level 1 with an empty path.
    pub fn new(max_level: usize) -> Self {
        Self {
            path: StoryPath::new(),
            max_level,
        }
    }

    /// Session positioned at the end of `path`.
    ///
    /// # Errors
    ///
    /// Returns `Terminal` if `path` is longer than `max_level`, since no
    /// sequence of choices could have produced it.
    pub fn from_path(path: StoryPath, max_level: usize) -> Result<Self, NavigationError> {
        if path.len() > max_level {
            return Err(NavigationError::new(NavigationErrorKind::Terminal {
                level: path.len(),
                max_level,
            }));
        }
        Ok(Self { path, max_level })
    }

    /// Choices made so far.
    pub fn path(&self) -> &StoryPath {
        &self.path
    }

    /// Current 1-indexed level.
    pub fn level(&self) -> usize {
        self.path.len() + 1
    }

    /// Last decision level.
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// Whether every level has been decided.
    pub fn is_terminal(&self) -> bool {
        self.level() > self.max_level
    }

    /// Whether a choice can still be applied.
    pub fn can_choose(&self) -> bool {
        !self.is_terminal()
    }

    /// Fraction of levels decided, in `[0.0, 1.0]`.
    pub fn progress(&self) -> f32 {
        if self.max_level == 0 {
            return 1.0;
        }
        (self.path.len() as f32 / self.max_level as f32).min(1.0)
    }

    /// Decoded history, oldest first.
    pub fn choices(&self) -> impl Iterator<Item = Choice> + '_ {
        self.path.choices()
    }

    /// Record a choice and advance one level.
    ///
    /// The transition does not look at the story: a path may advance into a
    /// region with no authored fragment.
    ///
    /// # Errors
    ///
    /// Returns `Terminal` and leaves the state untouched once every level
    /// has been decided.
    pub fn apply_choice(&mut self, choice: Choice) -> Result<usize, NavigationError> {
        if self.is_terminal() {
            return Err(NavigationError::new(NavigationErrorKind::Terminal {
                level: self.level(),
                max_level: self.max_level,
            }));
        }
        self.path.push(choice);
        debug!(%choice, path = %self.path, level = self.level(), "Applied choice");
        Ok(self.level())
    }

    /// Abandon the run and return to level 1.
    pub fn reset(&mut self) {
        debug!(discarded = %self.path, "Resetting session");
        self.path.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = NavigationState::new(6);
        assert!(state.path().is_empty());
        assert_eq!(state.level(), 1);
        assert!(state.can_choose());
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn test_choice_encoding() {
        let mut state = NavigationState::new(6);
        state.apply_choice(Choice::Red).unwrap();
        assert_eq!(state.path().as_str(), "R");
        state.apply_choice(Choice::Blue).unwrap();
        assert_eq!(state.path().as_str(), "RB");
        assert_eq!(state.level(), state.path().len() + 1);
    }

    #[test]
    fn test_terminal_guard_leaves_state_untouched() {
        let mut state = NavigationState::new(2);
        state.apply_choice(Choice::Blue).unwrap();
        state.apply_choice(Choice::Blue).unwrap();
        assert!(state.is_terminal());

        let err = state.apply_choice(Choice::Red).unwrap_err();
        assert_eq!(
            err.kind,
            NavigationErrorKind::Terminal {
                level: 3,
                max_level: 2
            }
        );
        assert_eq!(state.path().as_str(), "BB");
        assert_eq!(state.level(), 3);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = NavigationState::new(6);
        state.apply_choice(Choice::Red).unwrap();
        for _ in 0..3 {
            state.reset();
            assert_eq!(state, NavigationState::new(6));
        }
    }

    #[test]
    fn test_from_path_rejects_overlong() {
        let path: StoryPath = "RRR".parse().unwrap();
        assert!(NavigationState::from_path(path.clone(), 2).is_err());
        let state = NavigationState::from_path(path, 3).unwrap();
        assert!(state.is_terminal());
    }
}
