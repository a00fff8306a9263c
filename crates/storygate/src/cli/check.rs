//! Story document validation command.

use storygate::{StoryRepository, StorygateConfig, StorygateResult, shared_repository};

/// Load the story and print what it contains.
pub fn handle_check(config: &StorygateConfig) -> StorygateResult<()> {
    let repository = shared_repository(config)?;
    print!("{}", render_summary(repository, config.story.max_level));
    Ok(())
}

/// Summary of a loaded story.
pub fn render_summary(repository: &StoryRepository, max_level: usize) -> String {
    let mut out = String::new();
    if let Some(path) = repository.source_path() {
        out.push_str(&format!("Story: {}\n", path.display()));
    }
    out.push_str(&format!("Opening: {}\n", repository.start().title()));
    out.push_str(&format!("Ending: {}\n", repository.no_end().title()));
    out.push_str(&format!(
        "Levels: {} authored, {} playable\n",
        repository.level_count(),
        max_level
    ));
    out.push_str(&format!("Branches: {}\n", repository.branch_count()));

    let deepest = repository.branch_paths().map(str::len).max().unwrap_or(0);
    out.push_str(&format!("Deepest branch: {}\n", deepest));

    let missing: Vec<String> = (1..=max_level)
        .filter(|level| repository.choice(*level).is_none())
        .map(|level| level.to_string())
        .collect();
    if !missing.is_empty() {
        out.push_str(&format!("Levels without a prompt: {}\n", missing.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_missing_levels() {
        let repository: StoryRepository = r#"
[FM_CHOICE."1"]
title = "One"
story = "one"

[FM_STORY."RBR"]
title = "Deep"
story = "deep"

[FM_START]
title = "Opening"
story = "start"

[FM_NOEND]
title = "Closing"
story = "end"
"#
        .parse()
        .unwrap();

        let summary = render_summary(&repository, 3);
        assert!(summary.contains("Opening: Opening"));
        assert!(summary.contains("Levels: 1 authored, 3 playable"));
        assert!(summary.contains("Branches: 1"));
        assert!(summary.contains("Deepest branch: 3"));
        assert!(summary.contains("Levels without a prompt: 2, 3"));
    }
}
