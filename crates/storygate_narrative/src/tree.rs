//! Text summaries of a session: the path tree and run statistics.

use crate::NavigationState;
use serde::Serialize;
use std::fmt;
use storygate_core::Choice;

/// Renders the choices made so far as a small ASCII tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathTree;

impl PathTree {
    /// One line per decided level, then the pending level or the full path.
    ///
    /// # Examples
    ///
    /// ```
    /// use storygate_core::Choice;
    /// use storygate_narrative::{NavigationState, PathTree};
    ///
    /// let mut state = NavigationState::new(6);
    /// state.apply_choice(Choice::Red).unwrap();
    /// let tree = PathTree::render(&state);
    /// assert!(tree.contains("Level 1: Red"));
    /// assert!(tree.contains("Level 2: [choosing]"));
    /// ```
    pub fn render(state: &NavigationState) -> String {
        let mut tree = String::new();
        tree.push_str("Story path\n");
        tree.push_str("════════════\n");
        tree.push_str("Start\n");

        for (index, choice) in state.choices().enumerate() {
            let indent = "  ".repeat(index + 1);
            tree.push_str(&format!(
                "{}├─ Level {}: {}\n",
                indent,
                index + 1,
                marker(choice)
            ));
        }

        if state.can_choose() {
            let indent = "  ".repeat(state.level());
            tree.push_str(&format!(
                "{}├─ Level {}: [choosing]\n",
                indent,
                state.level()
            ));
        } else {
            tree.push_str("  └─ Story complete\n");
            tree.push_str(&format!("     Full path: {}\n", state.path()));
        }

        tree.push_str("════════════\n");
        tree
    }

    /// Single-line form: `start → R → B → ?`.
    pub fn compact(state: &NavigationState) -> String {
        let mut line = String::from("start");
        for choice in state.choices() {
            line.push_str(" → ");
            line.push(choice.as_char());
        }
        if state.can_choose() {
            line.push_str(" → ?");
        }
        line
    }
}

fn marker(choice: Choice) -> &'static str {
    match choice {
        Choice::Red => "Red",
        Choice::Blue => "Blue",
    }
}

/// Counters describing one run.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
pub struct SessionStats {
    /// Levels decided so far
    decided: usize,
    /// Last decision level
    max_level: usize,
    /// Encoded path
    path: String,
    /// Percentage of levels decided
    progress_percent: f32,
    /// Red picks
    red_count: usize,
    /// Blue picks
    blue_count: usize,
    /// Whether the ending was reached
    complete: bool,
}

impl SessionStats {
    /// Snapshot `state`.
    pub fn from_state(state: &NavigationState) -> Self {
        Self {
            decided: state.path().len(),
            max_level: state.max_level(),
            path: state.path().to_string(),
            progress_percent: state.progress() * 100.0,
            red_count: state.path().count(Choice::Red),
            blue_count: state.path().count(Choice::Blue),
            complete: state.is_terminal(),
        }
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Decided: {}/{}", self.decided, self.max_level)?;
        let path = if self.path.is_empty() {
            "none"
        } else {
            self.path.as_str()
        };
        writeln!(f, "Path: {}", path)?;
        writeln!(f, "Progress: {:.1}%", self.progress_percent)?;
        writeln!(f, "Red: {}", self.red_count)?;
        writeln!(f, "Blue: {}", self.blue_count)?;
        let status = if self.complete { "complete" } else { "in progress" };
        write!(f, "Status: {}", status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(path: &str, max_level: usize) -> NavigationState {
        NavigationState::from_path(path.parse().unwrap(), max_level).unwrap()
    }

    #[test]
    fn test_compact() {
        assert_eq!(PathTree::compact(&state("", 6)), "start → ?");
        assert_eq!(PathTree::compact(&state("RB", 6)), "start → R → B → ?");
        assert_eq!(PathTree::compact(&state("RB", 2)), "start → R → B");
    }

    #[test]
    fn test_tree_when_complete() {
        let tree = PathTree::render(&state("RBB", 3));
        assert!(tree.contains("Level 3: Blue"));
        assert!(tree.contains("Full path: RBB"));
        assert!(!tree.contains("[choosing]"));
    }

    #[test]
    fn test_stats() {
        let stats = SessionStats::from_state(&state("RRB", 6));
        assert_eq!(*stats.red_count(), 2);
        assert_eq!(*stats.blue_count(), 1);
        assert_eq!(*stats.progress_percent(), 50.0);
        assert!(!stats.complete());
        let text = stats.to_string();
        assert!(text.contains("Decided: 3/6"));
        assert!(text.contains("Progress: 50.0%"));
    }
}
