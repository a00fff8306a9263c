//! Story document load errors.

/// Specific error conditions while loading a story document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum LoadErrorKind {
    /// The story document does not exist
    #[display("Story file not found: {}", _0)]
    NotFound(String),
    /// The story document exists but could not be read
    #[display("Failed to read story file: {}", _0)]
    Read(String),
    /// The document is not valid TOML
    #[display("Failed to parse TOML: {}", _0)]
    Parse(String),
    /// A required top-level section is absent
    #[display("Missing required section [{}]", _0)]
    MissingSection(String),
    /// The document parsed but its shape is wrong
    #[display("Malformed story document: {}", _0)]
    Malformed(String),
}

/// Error type for story loading.
///
/// # Examples
///
/// ```
/// use storygate_error::{LoadError, LoadErrorKind};
///
/// let err = LoadError::new(LoadErrorKind::MissingSection("FM_START".to_string()));
/// assert!(format!("{}", err).contains("FM_START"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Load Error: {} at line {} in {}", kind, line, file)]
pub struct LoadError {
    /// The specific error condition
    pub kind: LoadErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl LoadError {
    /// Create a new LoadError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: LoadErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether the story document was missing altogether.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, LoadErrorKind::NotFound(_))
    }
}
