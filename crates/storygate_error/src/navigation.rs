//! Navigation error types.

/// Specific error conditions for navigation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum NavigationErrorKind {
    /// A choice was applied after every level had been decided
    #[display("No choices remain: level {} is past the last level {}", level, max_level)]
    Terminal {
        /// Level the session was at
        level: usize,
        /// Configured last level
        max_level: usize,
    },
    /// A path string contained something other than 'R' and 'B'
    #[display("Invalid path '{}': only 'R' and 'B' are allowed", _0)]
    InvalidPath(String),
}

/// Error type for navigation operations.
///
/// # Examples
///
/// ```
/// use storygate_error::{NavigationError, NavigationErrorKind};
///
/// let err = NavigationError::new(NavigationErrorKind::InvalidPath("RX".to_string()));
/// assert!(format!("{}", err).contains("RX"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Navigation Error: {} at line {} in {}", kind, line, file)]
pub struct NavigationError {
    /// The specific error condition
    pub kind: NavigationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl NavigationError {
    /// Create a new NavigationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: NavigationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
