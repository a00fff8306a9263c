//! Top-level error wrapper types.

use crate::{ConfigError, JsonError, LoadError, NavigationError};
#[cfg(feature = "tui")]
use crate::TuiError;

/// Every error condition Storygate can report.
///
/// # Examples
///
/// ```
/// use storygate_error::{StorygateError, LoadError, LoadErrorKind};
///
/// let load_err = LoadError::new(LoadErrorKind::Parse("expected `]`".to_string()));
/// let err: StorygateError = load_err.into();
/// assert!(format!("{}", err).contains("TOML"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StorygateErrorKind {
    /// Story document could not be loaded
    #[from(LoadError)]
    Load(LoadError),
    /// Navigation rejected a transition
    #[from(NavigationError)]
    Navigation(NavigationError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Command output could not be serialized
    #[from(JsonError)]
    Json(JsonError),
    /// Terminal reader error
    #[cfg(feature = "tui")]
    #[from(TuiError)]
    Tui(TuiError),
}

/// Storygate error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storygate_error::{ConfigError, StorygateResult};
///
/// fn might_fail() -> StorygateResult<()> {
///     Err(ConfigError::new("Missing story path"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storygate Error: {}", _0)]
pub struct StorygateError(Box<StorygateErrorKind>);

impl StorygateError {
    /// Create a new error from a kind.
    pub fn new(kind: StorygateErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StorygateErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to StorygateErrorKind
impl<T> From<T> for StorygateError
where
    T: Into<StorygateErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Storygate operations.
pub type StorygateResult<T> = std::result::Result<T, StorygateError>;
