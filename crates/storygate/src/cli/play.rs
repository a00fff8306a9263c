//! Terminal reader launch command.

use storygate::{StorygateConfig, StorygateResult};

/// Launch the terminal reader.
///
/// A story that fails to load is shown inside the reader rather than
/// reported here.
#[cfg(feature = "tui")]
pub fn launch_reader(config: &StorygateConfig) -> StorygateResult<()> {
    use storygate::{run_tui, shared_repository};

    tracing::info!(story = %config.story.path.display(), "Launching reader");
    let handle = tokio::runtime::Handle::current();
    let repository = shared_repository(config);
    tokio::task::block_in_place(|| run_tui(repository, config, handle))?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
pub fn launch_reader(_config: &StorygateConfig) -> StorygateResult<()> {
    eprintln!("Error: TUI feature not enabled. Rebuild with --features tui");
    std::process::exit(1);
}
