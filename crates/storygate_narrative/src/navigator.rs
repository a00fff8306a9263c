//! Read-side lookups over a story repository.

use crate::{NavigationState, PathEntry, Scene, Step, StoryRepository};
use storygate_core::{Choice, StoryFragment};
use tracing::{debug, instrument};

/// Path-indexed view of a [`StoryRepository`].
///
/// The branch mapping doubles as the tree's adjacency structure: a path is
/// reachable only if that exact string is an authored key, and lookups never
/// fall back to a shorter prefix.
///
/// # Examples
///
/// ```
/// use storygate_narrative::{PathNavigator, StoryRepository};
///
/// let repository: StoryRepository = r#"
///     [FM_STORY."R"]
///     title = "Red"
///     story = "..."
///     [FM_STORY."RB"]
///     title = "Red, then blue"
///     story = "..."
///     [FM_START]
///     title = "Start"
///     story = "..."
///     [FM_NOEND]
///     title = "End"
///     story = "..."
/// "#.parse().unwrap();
///
/// let navigator = PathNavigator::new(&repository);
/// assert!(navigator.fragment_for_path("RB").is_some());
/// assert!(navigator.fragment_for_path("B").is_none());
/// assert_eq!(navigator.enumerate_paths(6), vec!["R", "RB"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathNavigator<'a> {
    repository: &'a StoryRepository,
}

impl<'a> PathNavigator<'a> {
    /// Wrap a repository.
    pub fn new(repository: &'a StoryRepository) -> Self {
        Self { repository }
    }

    /// The wrapped repository.
    pub fn repository(&self) -> &'a StoryRepository {
        self.repository
    }

    /// Decision-point fragment for `level`; absent past the authored levels.
    pub fn fragment_for_level(&self, level: usize) -> Option<&'a StoryFragment> {
        self.repository.choice(level)
    }

    /// Branch fragment for exactly `path`. No prefix fallback.
    pub fn fragment_for_path(&self, path: &str) -> Option<&'a StoryFragment> {
        self.repository.branch(path)
    }

    /// Every authored path of length at most `max_depth`, ascending.
    ///
    /// A path is listed iff it is itself an authored key; an authored
    /// ancestor is not required. Results are sorted byte-wise, so
    /// `"B" < "R" < "RB" < "RR"`.
    #[instrument(skip(self))]
    pub fn enumerate_paths(&self, max_depth: usize) -> Vec<String> {
        // keys come out of the BTreeMap already in byte-wise order
        let paths: Vec<String> = self
            .repository
            .branch_paths()
            .filter(|path| path.len() <= max_depth)
            .map(str::to_string)
            .collect();
        debug!(count = paths.len(), "Enumerated paths");
        paths
    }

    /// Enumerated paths with the session's own path marked.
    pub fn path_listing(&self, max_depth: usize, state: &NavigationState) -> Vec<PathEntry> {
        let here = state.path().as_str();
        self.enumerate_paths(max_depth)
            .into_iter()
            .map(|path| PathEntry {
                current: path == here,
                path,
            })
            .collect()
    }

    /// Everything the reader shows for `state`.
    #[instrument(skip_all, fields(path = %state.path(), level = state.level()))]
    pub fn scene<'s>(&self, state: &'s NavigationState) -> Scene<'s>
    where
        'a: 's,
    {
        let path = state.path().as_str();
        let step = if state.is_terminal() {
            Step::Ending(self.repository.no_end())
        } else {
            Step::Choose {
                level: state.level(),
                prompt: self.fragment_for_level(state.level()),
            }
        };
        Scene {
            start: self.repository.start(),
            root_choice: self.repository.root_choice(),
            path,
            branch: self.fragment_for_path(path),
            step,
        }
    }

    /// Caption for `choice` at the session's current level, if authored.
    pub fn caption(&self, state: &NavigationState, choice: Choice) -> Option<&'a str> {
        if state.is_terminal() {
            return None;
        }
        self.fragment_for_level(state.level())
            .and_then(|fragment| fragment.caption(choice))
    }
}
