//! Process-wide story repository.
//!
//! The story document is static, so it is parsed at most once per process
//! and shared read-only by every session. A failed load is cached too: the
//! process has to be restarted with a valid document.

use crate::{StoryRepository, StorygateConfig};
use std::path::PathBuf;
use std::sync::OnceLock;
use storygate_error::LoadError;
use tracing::{debug, warn};

struct Loaded {
    path: PathBuf,
    result: Result<StoryRepository, LoadError>,
}

static REPOSITORY: OnceLock<Loaded> = OnceLock::new();

/// Repository shared by every session in the process.
///
/// The first call loads the document named by `config`; later calls return
/// the same result without touching the filesystem.
///
/// # Errors
///
/// Returns the error from the first load attempt, if it failed.
pub fn shared_repository(config: &StorygateConfig) -> Result<&'static StoryRepository, LoadError> {
    let loaded = REPOSITORY.get_or_init(|| {
        debug!(path = %config.story.path.display(), "Loading shared story repository");
        Loaded {
            path: config.story.path.clone(),
            result: StoryRepository::load(config),
        }
    });

    if loaded.path != config.story.path {
        warn!(
            loaded = %loaded.path.display(),
            requested = %config.story.path.display(),
            "Story repository already loaded from a different path"
        );
    }

    loaded.result.as_ref().map_err(Clone::clone)
}
