//! What a reader sees for one navigation state.

use serde::Serialize;
use storygate_core::StoryFragment;

/// The next thing a session is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Step<'a> {
    /// A decision is pending at `level`; `prompt` is absent when the level
    /// has no authored content.
    Choose {
        /// Level awaiting a decision
        level: usize,
        /// Decision-point fragment for that level
        prompt: Option<&'a StoryFragment>,
    },
    /// Every level is decided; show the ending.
    Ending(&'a StoryFragment),
}

impl<'a> Step<'a> {
    /// The fragment attached to this step, if any.
    pub fn fragment(&self) -> Option<&'a StoryFragment> {
        match self {
            Step::Choose { prompt, .. } => *prompt,
            Step::Ending(fragment) => Some(fragment),
        }
    }

    /// Whether choice controls should be offered.
    ///
    /// A level with no authored prompt offers nothing: the story has run
    /// out of decisions there.
    pub fn offers_choice(&self) -> bool {
        matches!(self, Step::Choose { prompt: Some(_), .. })
    }
}

/// Every fragment the reader shows for one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scene<'a> {
    /// Opening fragment
    pub start: &'a StoryFragment,
    /// Fragment carried by the choices container, if authored
    pub root_choice: Option<&'a StoryFragment>,
    /// Path the scene was built for
    pub path: &'a str,
    /// Branch fragment for `path`, if authored
    pub branch: Option<&'a StoryFragment>,
    /// Pending decision or ending
    pub step: Step<'a>,
}

/// Role of a section within a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum SectionKind {
    /// Opening fragment
    #[display("The beginning")]
    Start,
    /// Choices container fragment
    #[display("Where the choices begin")]
    RootChoice,
    /// Branch for the current path
    #[display("Your path")]
    Branch,
    /// Decision prompt for the current level
    #[display("Decision")]
    Prompt,
    /// Ending fragment
    #[display("Finale")]
    Ending,
}

impl<'a> Scene<'a> {
    /// Present fragments in display order.
    ///
    /// Absent fragments are skipped.
    pub fn sections(&self) -> Vec<(SectionKind, &'a StoryFragment)> {
        let mut sections = vec![(SectionKind::Start, self.start)];
        if let Some(root) = self.root_choice {
            sections.push((SectionKind::RootChoice, root));
        }
        if let Some(branch) = self.branch {
            sections.push((SectionKind::Branch, branch));
        }
        match self.step {
            Step::Choose {
                prompt: Some(prompt),
                ..
            } => sections.push((SectionKind::Prompt, prompt)),
            Step::Choose { prompt: None, .. } => {}
            Step::Ending(ending) => sections.push((SectionKind::Ending, ending)),
        }
        sections
    }

    /// Whether the session has reached the ending.
    pub fn is_ending(&self) -> bool {
        matches!(self.step, Step::Ending(_))
    }
}

/// One line of the path overview.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PathEntry {
    /// Authored path key
    pub path: String,
    /// Whether this is the reader's current path
    pub current: bool,
}
