//! Shared fixtures for story engine tests.

#![allow(dead_code)]

use std::path::PathBuf;
use storygate_narrative::StoryRepository;

/// Path to the six-level fixture document.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/six_levels.toml")
}

/// The six-level fixture, parsed.
pub fn fixture() -> StoryRepository {
    StoryRepository::from_file(fixture_path()).unwrap()
}

/// Minimal document with the given branch keys.
pub fn with_branches(keys: &[&str]) -> StoryRepository {
    let mut doc = String::from(
        r#"
[FM_START]
title = "Start"
story = "start"

[FM_NOEND]
title = "End"
story = "end"
"#,
    );
    for key in keys {
        doc.push_str(&format!(
            "\n[FM_STORY.\"{key}\"]\ntitle = \"Branch {key}\"\nstory = \"story {key}\"\n"
        ));
    }
    doc.parse().unwrap()
}
