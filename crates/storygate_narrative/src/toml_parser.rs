//! TOML deserialization structures for story documents.
//!
//! The sections are kept as raw tables here so that shape problems can be
//! reported as descriptive `Malformed` errors instead of generic serde ones.

use serde::Deserialize;
use std::collections::BTreeMap;
use storygate_core::StoryFragment;
use tracing::{debug, instrument, warn};

/// Section holding the per-level decision fragments.
pub const CHOICE_SECTION: &str = "FM_CHOICE";
/// Section holding fragments keyed by path.
pub const STORY_SECTION: &str = "FM_STORY";
/// Section holding the opening fragment.
pub const START_SECTION: &str = "FM_START";
/// Section holding the ending fragment.
pub const NOEND_SECTION: &str = "FM_NOEND";

/// Root structure of a story document.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlStoryFile {
    #[serde(rename = "FM_CHOICE", default)]
    pub choices: BTreeMap<String, toml::Value>,
    #[serde(rename = "FM_STORY", default)]
    pub branches: BTreeMap<String, toml::Value>,
    #[serde(rename = "FM_START")]
    pub start: Option<toml::Value>,
    #[serde(rename = "FM_NOEND")]
    pub no_end: Option<toml::Value>,
}

/// Fields of one fragment table.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlFragment {
    pub title: String,
    pub story: String,
    pub red: Option<String>,
    pub blue: Option<String>,
}

impl From<TomlFragment> for StoryFragment {
    fn from(raw: TomlFragment) -> Self {
        StoryFragment::with_captions(raw.title, raw.story, raw.red, raw.blue)
    }
}

/// Interpret a value as a fragment table.
///
/// `context` names the entry in error messages, e.g. `FM_STORY."RB"`.
#[instrument(skip(value))]
pub fn fragment_from_value(value: &toml::Value, context: &str) -> Result<StoryFragment, String> {
    if !value.is_table() {
        return Err(format!(
            "{} must be a table with 'title' and 'story', found {}",
            context,
            value.type_str()
        ));
    }
    let raw = value
        .clone()
        .try_into::<TomlFragment>()
        .map_err(|e| format!("{}: {}", context, e))?;
    debug!(title = %raw.title, "Parsed fragment");
    Ok(raw.into())
}

/// Keys of `[FM_CHOICE]` that describe the container itself.
const ROOT_FIELDS: [&str; 4] = ["title", "story", "red", "blue"];

/// Split `[FM_CHOICE]` into its own root fragment and its numbered levels.
///
/// Non-numeric keys other than the root fields are ignored.
#[instrument(skip(choices), fields(entries = choices.len()))]
pub fn split_choices(
    choices: &BTreeMap<String, toml::Value>,
) -> Result<(Option<StoryFragment>, BTreeMap<usize, StoryFragment>), String> {
    let mut levels = BTreeMap::new();
    let mut seen: BTreeMap<usize, &str> = BTreeMap::new();
    let mut root = toml::Table::new();

    for (key, value) in choices {
        if is_level_key(key) {
            let level: usize = key
                .parse()
                .map_err(|e| format!("{}.\"{}\": {}", CHOICE_SECTION, key, e))?;
            if level == 0 {
                return Err(format!("{}.\"{}\": levels start at 1", CHOICE_SECTION, key));
            }
            if let Some(first) = seen.insert(level, key) {
                return Err(format!(
                    "{}: keys \"{}\" and \"{}\" both name level {}",
                    CHOICE_SECTION, first, key, level
                ));
            }
            let context = format!("{}.\"{}\"", CHOICE_SECTION, key);
            levels.insert(level, fragment_from_value(value, &context)?);
        } else if ROOT_FIELDS.contains(&key.as_str()) {
            root.insert(key.clone(), value.clone());
        } else {
            warn!(key = %key, "Ignoring unrecognised key in [FM_CHOICE]");
        }
    }

    let root = if root.is_empty() {
        None
    } else {
        Some(fragment_from_value(&toml::Value::Table(root), CHOICE_SECTION)?)
    };

    Ok((root, levels))
}

/// Whether `key` is a pure non-negative integer string.
pub fn is_level_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> TomlStoryFile {
        toml::from_str(s).unwrap()
    }

    #[test]
    fn test_level_keys() {
        assert!(is_level_key("1"));
        assert!(is_level_key("06"));
        assert!(!is_level_key(""));
        assert!(!is_level_key("-1"));
        assert!(!is_level_key("one"));
    }

    #[test]
    fn test_split_choices_separates_root() {
        let file = parse(
            r#"
            [FM_CHOICE]
            title = "Where it begins"
            story = "Six doors."

            [FM_CHOICE."1"]
            title = "First door"
            story = "Pick."
            red = "Fight"
            blue = "Flee"
            "#,
        );
        let (root, levels) = split_choices(&file.choices).unwrap();
        assert_eq!(root.unwrap().title(), "Where it begins");
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[&1].red(), Some("Fight"));
    }

    #[test]
    fn test_level_must_be_table() {
        let file = parse(
            r#"
            [FM_CHOICE]
            "2" = "not a table"
            "#,
        );
        let err = split_choices(&file.choices).unwrap_err();
        assert!(err.contains("FM_CHOICE.\"2\""));
        assert!(err.contains("string"));
    }

    #[test]
    fn test_level_zero_rejected() {
        let file = parse(
            r#"
            [FM_CHOICE."0"]
            title = "Zero"
            story = "Nope"
            "#,
        );
        assert!(split_choices(&file.choices).is_err());
    }

    #[test]
    fn test_level_spelled_twice_rejected() {
        let file = parse(
            r#"
            [FM_CHOICE."6"]
            title = "Six"
            story = "Last door."

            [FM_CHOICE."06"]
            title = "Also six"
            story = "Another last door."
            "#,
        );
        let err = split_choices(&file.choices).unwrap_err();
        assert!(err.contains("\"06\""));
        assert!(err.contains("\"6\""));
        assert!(err.contains("level 6"));
    }

    #[test]
    fn test_missing_story_field() {
        let table: toml::Table = toml::from_str("title = \"Only a title\"").unwrap();
        let value = toml::Value::Table(table);
        let err = fragment_from_value(&value, "FM_START").unwrap_err();
        assert!(err.contains("FM_START"));
        assert!(err.contains("story"));
    }
}
