//! Story fragments.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A titled block of narrative text.
///
/// Decision-point fragments also carry captions for the red and blue options.
///
/// # Examples
///
/// ```
/// use storygate_core::StoryFragment;
///
/// let fragment = StoryFragment::builder()
///     .title("The Door")
///     .story("Two handles, one red, one blue.")
///     .red("Pull the red handle")
///     .build()
///     .unwrap();
///
/// assert_eq!(fragment.title(), "The Door");
/// assert_eq!(fragment.red(), Some("Pull the red handle"));
/// assert_eq!(fragment.blue(), None);
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct StoryFragment {
    /// Heading shown above the text
    title: String,

    /// Narrative text
    story: String,

    /// Caption for the red option
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[getter(skip)]
    red: Option<String>,

    /// Caption for the blue option
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[getter(skip)]
    blue: Option<String>,
}

impl StoryFragment {
    /// Creates a new fragment builder.
    pub fn builder() -> StoryFragmentBuilder {
        StoryFragmentBuilder::default()
    }

    /// Fragment with a title and text and no captions.
    pub fn new(title: impl Into<String>, story: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            story: story.into(),
            red: None,
            blue: None,
        }
    }

    /// Fragment with optional captions for both options.
    pub fn with_captions(
        title: impl Into<String>,
        story: impl Into<String>,
        red: Option<String>,
        blue: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            story: story.into(),
            red,
            blue,
        }
    }

    /// Caption for the red option, if authored.
    pub fn red(&self) -> Option<&str> {
        self.red.as_deref()
    }

    /// Caption for the blue option, if authored.
    pub fn blue(&self) -> Option<&str> {
        self.blue.as_deref()
    }

    /// Caption for `choice`, if authored.
    pub fn caption(&self, choice: crate::Choice) -> Option<&str> {
        match choice {
            crate::Choice::Red => self.red(),
            crate::Choice::Blue => self.blue(),
        }
    }
}
