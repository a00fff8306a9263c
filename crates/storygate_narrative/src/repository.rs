//! In-memory story repository.

use crate::StorygateConfig;
use crate::toml_parser::{
    self, CHOICE_SECTION, NOEND_SECTION, START_SECTION, STORY_SECTION, TomlStoryFile,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use storygate_core::{StoryFragment, StoryPath};
use storygate_error::{LoadError, LoadErrorKind};
use tracing::{debug, info, instrument, warn};

/// Every fragment of one story document, immutable once loaded.
///
/// # Example TOML Structure
///
/// ```toml
/// [FM_CHOICE]
/// title = "Six doors"
/// story = "Every door asks the same question."
///
/// [FM_CHOICE."1"]
/// title = "The first door"
/// story = "It hums."
/// red = "Open it"
/// blue = "Walk past"
///
/// [FM_STORY."R"]
/// title = "Inside"
/// story = "The humming stops."
///
/// [FM_START]
/// title = "Arrival"
/// story = "You wake in a corridor."
///
/// [FM_NOEND]
/// title = "No ending"
/// story = "The corridor goes on."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct StoryRepository {
    /// Opening fragment (`[FM_START]`)
    start: StoryFragment,

    /// Fragment shown once every level is decided (`[FM_NOEND]`)
    no_end: StoryFragment,

    /// Fragment carried by the `[FM_CHOICE]` container itself
    #[getter(skip)]
    root_choice: Option<StoryFragment>,

    /// Decision-point fragments by 1-indexed level
    choices_by_level: BTreeMap<usize, StoryFragment>,

    /// Branch fragments by exact path key
    branches_by_path: BTreeMap<String, StoryFragment>,

    /// File the repository was read from, if any
    #[getter(skip)]
    source_path: Option<PathBuf>,
}

impl StoryRepository {
    /// Loads the story document named by the configuration.
    ///
    /// Levels beyond `story.max_level` and gaps in the level sequence are
    /// logged, not rejected.
    ///
    /// # Errors
    ///
    /// See [`from_file`](Self::from_file).
    #[instrument(skip_all, fields(path = %config.story.path.display(), max_level = config.story.max_level))]
    pub fn load(config: &StorygateConfig) -> Result<Self, LoadError> {
        let repository = Self::from_file(&config.story.path)?;
        repository.check_levels(config.story.max_level);
        Ok(repository)
    }

    /// Loads a story document from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist (`NotFound`)
    /// - The file cannot be read
    /// - The TOML is invalid
    /// - A required section is missing or an entry has the wrong shape
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LoadError::new(LoadErrorKind::NotFound(path.display().to_string()))
            } else {
                LoadError::new(LoadErrorKind::Read(format!("{}: {}", path.display(), e)))
            }
        })?;

        let mut repository: Self = content.parse()?;
        repository.source_path = Some(path.to_path_buf());
        info!(
            levels = repository.level_count(),
            branches = repository.branch_count(),
            "Loaded story document"
        );
        Ok(repository)
    }

    /// Parse a story document from a TOML string.
    #[instrument(skip_all, fields(len = s.len()))]
    pub fn from_toml_str(s: &str) -> Result<Self, LoadError> {
        let file: TomlStoryFile =
            toml::from_str(s).map_err(|e| LoadError::new(LoadErrorKind::Parse(e.to_string())))?;

        let start = Self::required(file.start.as_ref(), START_SECTION)?;
        let no_end = Self::required(file.no_end.as_ref(), NOEND_SECTION)?;

        let (root_choice, choices_by_level) = toml_parser::split_choices(&file.choices)
            .map_err(|e| LoadError::new(LoadErrorKind::Malformed(e)))?;

        let mut branches_by_path = BTreeMap::new();
        for (key, value) in &file.branches {
            if !StoryPath::is_branch_key(key) {
                return Err(LoadError::new(LoadErrorKind::Malformed(format!(
                    "{}.\"{}\": path keys may only contain 'R' and 'B'",
                    STORY_SECTION, key
                ))));
            }
            let context = format!("{}.\"{}\"", STORY_SECTION, key);
            let fragment = toml_parser::fragment_from_value(value, &context)
                .map_err(|e| LoadError::new(LoadErrorKind::Malformed(e)))?;
            branches_by_path.insert(key.clone(), fragment);
        }

        debug!(
            levels = choices_by_level.len(),
            branches = branches_by_path.len(),
            has_root_choice = root_choice.is_some(),
            "Parsed story document"
        );

        Ok(Self {
            start,
            no_end,
            root_choice,
            choices_by_level,
            branches_by_path,
            source_path: None,
        })
    }

    fn required(value: Option<&toml::Value>, section: &str) -> Result<StoryFragment, LoadError> {
        let value = value
            .ok_or_else(|| LoadError::new(LoadErrorKind::MissingSection(section.to_string())))?;
        toml_parser::fragment_from_value(value, section)
            .map_err(|e| LoadError::new(LoadErrorKind::Malformed(e)))
    }

    /// Log levels that navigation can never reach or that leave a hole.
    fn check_levels(&self, max_level: usize) {
        for level in self.choices_by_level.keys().filter(|l| **l > max_level) {
            warn!(level, max_level, "Level is beyond the last playable level");
        }
        for level in 1..=max_level {
            if !self.choices_by_level.contains_key(&level) {
                warn!(level, "No {} entry for level", CHOICE_SECTION);
            }
        }
    }

    /// Fragment carried by the `[FM_CHOICE]` container, if authored.
    pub fn root_choice(&self) -> Option<&StoryFragment> {
        self.root_choice.as_ref()
    }

    /// File the repository was read from.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Decision-point fragment for a level.
    pub fn choice(&self, level: usize) -> Option<&StoryFragment> {
        self.choices_by_level.get(&level)
    }

    /// Branch fragment for an exact path key.
    pub fn branch(&self, path: &str) -> Option<&StoryFragment> {
        self.branches_by_path.get(path)
    }

    /// Whether `path` is an authored branch key.
    pub fn contains_branch(&self, path: &str) -> bool {
        self.branches_by_path.contains_key(path)
    }

    /// Authored branch keys in ascending order.
    pub fn branch_paths(&self) -> impl Iterator<Item = &str> {
        self.branches_by_path.keys().map(String::as_str)
    }

    /// Number of authored levels.
    pub fn level_count(&self) -> usize {
        self.choices_by_level.len()
    }

    /// Number of authored branches.
    pub fn branch_count(&self) -> usize {
        self.branches_by_path.len()
    }
}

impl FromStr for StoryRepository {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_toml_str(s)
    }
}
