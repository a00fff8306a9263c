//! Configuration resolution from command-line flags.

use super::commands::Cli;
use storygate::{StorygateConfig, StorygateResult};
use tracing::debug;

/// Configuration for this invocation.
///
/// `--config` replaces the layered defaults; `--story` overrides the story
/// path either way.
pub fn resolve_config(cli: &Cli) -> StorygateResult<StorygateConfig> {
    let config = match &cli.config {
        Some(path) => StorygateConfig::from_file(path)?,
        None => StorygateConfig::load()?,
    };
    let config = match &cli.story {
        Some(story) => config.with_story_path(story),
        None => config,
    };
    debug!(story = %config.story.path.display(), "Configuration resolved");
    Ok(config)
}
