//! Path listing command.

use super::commands::OutputFormat;
use storygate::{
    JsonError, NavigationState, PathEntry, PathNavigator, StoryPath, StorygateConfig,
    StorygateResult, shared_repository,
};

/// List authored paths up to `max_depth`, marking `at` if given.
pub fn handle_paths(
    config: &StorygateConfig,
    max_depth: Option<usize>,
    at: Option<&str>,
    format: OutputFormat,
) -> StorygateResult<()> {
    let repository = shared_repository(config)?;
    let depth = max_depth.unwrap_or(config.paths.max_depth);
    let here: StoryPath = at.unwrap_or_default().parse()?;
    let state = NavigationState::from_path(here, config.story.max_level)?;

    let listing = PathNavigator::new(repository).path_listing(depth, &state);
    match format {
        OutputFormat::Human => print!("{}", render_human(&listing, depth)),
        OutputFormat::Json => println!("{}", render_json(&listing)?),
    }
    Ok(())
}

/// One path per line, the current one marked.
pub fn render_human(listing: &[PathEntry], depth: usize) -> String {
    let mut out = String::new();
    for entry in listing {
        if entry.current {
            out.push_str(&format!("> {}  (you are here)\n", entry.path));
        } else {
            out.push_str(&format!("  {}\n", entry.path));
        }
    }
    out.push_str(&format!(
        "{} paths (max depth {})\n",
        listing.len(),
        depth
    ));
    out
}

/// Listing as a JSON array of `{ path, current }` objects.
pub fn render_json(listing: &[PathEntry]) -> StorygateResult<String> {
    Ok(serde_json::to_string_pretty(listing).map_err(|e| JsonError::new(e.to_string()))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Vec<PathEntry> {
        vec![
            PathEntry {
                path: "B".to_string(),
                current: false,
            },
            PathEntry {
                path: "R".to_string(),
                current: true,
            },
        ]
    }

    #[test]
    fn test_human_listing() {
        let out = render_human(&listing(), 6);
        assert_eq!(out, "  B\n> R  (you are here)\n2 paths (max depth 6)\n");
    }

    #[test]
    fn test_json_listing() {
        let out = render_json(&listing()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[1]["path"], "R");
        assert_eq!(value[1]["current"], true);
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }
}
