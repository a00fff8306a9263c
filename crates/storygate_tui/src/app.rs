//! Application state and core TUI types.

use crate::{RevealEvent, RevealRequest};
use storygate_core::Choice;
use storygate_error::{LoadError, NavigationErrorKind};
use storygate_narrative::{
    NavigationState, PathEntry, PathNavigator, SectionKind, StoryRepository, StorygateConfig,
};
use tracing::{debug, instrument, warn};

/// Application mode determines which view is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AppMode {
    /// Story pane with choice controls
    Reading,
    /// Overlay listing every authored path
    PathList,
}

/// One section of the story pane and how much of it is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    /// Role of the section
    pub kind: SectionKind,
    /// Fragment title
    pub title: String,
    /// Full fragment text
    pub text: String,
    /// Text revealed so far
    pub revealed: String,
}

impl SectionView {
    fn same_content(&self, other: &SectionView) -> bool {
        self.kind == other.kind && self.title == other.title && self.text == other.text
    }

    /// Whether the whole text is showing.
    pub fn is_complete(&self) -> bool {
        self.revealed.len() >= self.text.len()
    }
}

/// What the path overlay shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathOverview {
    /// Rows in view
    pub entries: Vec<PathEntry>,
    /// Authored paths in the whole listing
    pub total: usize,
    /// Rows scrolled past above the view
    pub hidden_before: usize,
    /// Rows below the view
    pub hidden_after: usize,
}

/// Main application state.
pub struct App<'a> {
    /// Current mode
    pub mode: AppMode,
    /// Loaded story, absent when loading failed
    repository: Option<&'a StoryRepository>,
    /// Load failure shown in place of the story
    load_error: Option<String>,
    /// Navigation state for this session
    state: NavigationState,
    /// Option under the cursor
    selected: Choice,
    /// Sections of the current scene
    sections: Vec<SectionView>,
    /// Bumped on every scene change; older reveal events are ignored
    epoch: u64,
    /// Whether a paced reveal is in flight
    revealing: bool,
    /// Reveal waiting to be started by the runner
    reveal_request: Option<RevealRequest>,
    /// Whether text is paced or shown at once
    reveal_enabled: bool,
    /// Deepest path listed in the overlay
    path_depth: usize,
    /// Most paths listed in the overlay
    path_limit: usize,
    /// First overlay row shown
    pub path_scroll: usize,
    /// Status message to display
    pub status_message: String,
    /// Whether to quit the application
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create a session over a load result.
    ///
    /// A failed load leaves the app usable for rendering chrome and the
    /// error, with no story sections and no choices.
    #[instrument(skip_all)]
    pub fn new(repository: Result<&'a StoryRepository, LoadError>, config: &StorygateConfig) -> Self {
        let (repository, load_error) = match repository {
            Ok(repository) => (Some(repository), None),
            Err(e) => {
                warn!(error = %e, "Story unavailable");
                (None, Some(e.kind.to_string()))
            }
        };

        let mut app = Self {
            mode: AppMode::Reading,
            repository,
            load_error,
            state: NavigationState::new(config.story.max_level),
            selected: Choice::Red,
            sections: Vec::new(),
            epoch: 0,
            revealing: false,
            reveal_request: None,
            reveal_enabled: config.reveal.enabled && config.reveal.delay_ms > 0,
            path_depth: config.paths.max_depth,
            path_limit: config.paths.display_limit,
            path_scroll: 0,
            status_message: String::from("Choose a door"),
            should_quit: false,
        };
        app.refresh_scene();
        app
    }

    /// Navigation state of this session.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Option under the cursor.
    pub fn selected(&self) -> Choice {
        self.selected
    }

    /// Sections of the current scene.
    pub fn sections(&self) -> &[SectionView] {
        &self.sections
    }

    /// Load failure, if the story could not be read.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Current reveal epoch.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether a paced reveal is still running.
    pub fn is_revealing(&self) -> bool {
        self.revealing
    }

    /// Whether the red/blue controls should be shown.
    ///
    /// False at the ending and at any level without an authored prompt.
    pub fn offers_choice(&self) -> bool {
        self.repository.is_some_and(|repository| {
            PathNavigator::new(repository)
                .scene(&self.state)
                .step
                .offers_choice()
        })
    }

    /// Caption for `choice` at the current level, falling back to the
    /// option's own label when the prompt names none.
    pub fn caption(&self, choice: Choice) -> &'a str {
        self.repository
            .and_then(|repository| PathNavigator::new(repository).caption(&self.state, choice))
            .unwrap_or_else(|| choice.label())
    }

    /// Every authored path up to the configured depth.
    pub fn path_listing(&self) -> Vec<PathEntry> {
        match self.repository {
            Some(repository) => {
                PathNavigator::new(repository).path_listing(self.path_depth, &self.state)
            }
            None => Vec::new(),
        }
    }

    /// The overlay's window onto the listing: at most the configured
    /// number of rows, starting at the scroll position.
    pub fn path_overview(&self) -> PathOverview {
        let listing = self.path_listing();
        let total = listing.len();
        let start = self.path_scroll.min(total);
        let entries: Vec<PathEntry> = listing
            .into_iter()
            .skip(start)
            .take(self.path_limit)
            .collect();
        let hidden_after = total - start - entries.len();
        PathOverview {
            entries,
            total,
            hidden_before: start,
            hidden_after,
        }
    }

    /// Move the cursor to `choice`.
    pub fn select(&mut self, choice: Choice) {
        if self.offers_choice() {
            self.selected = choice;
        }
    }

    /// Move the cursor to the other option.
    pub fn toggle_selection(&mut self) {
        self.select(self.selected.toggled());
    }

    /// Commit the option under the cursor.
    ///
    /// Does nothing unless choice controls are on offer.
    #[instrument(skip(self), fields(path = %self.state.path(), choice = %self.selected))]
    pub fn confirm(&mut self) {
        if self.repository.is_none() {
            return;
        }
        if !self.offers_choice() && self.state.can_choose() {
            self.status_message = String::from("No choices here. Press n to start over");
            return;
        }
        match self.state.apply_choice(self.selected) {
            Ok(level) => {
                debug!(level, "Choice applied");
                self.status_message = if self.state.is_terminal() {
                    String::from("All choices made")
                } else if !self.offers_choice() {
                    String::from("The story has no further choices")
                } else {
                    format!("{} chosen", self.selected)
                };
                self.selected = Choice::Red;
                self.refresh_scene();
            }
            Err(e) => {
                if let NavigationErrorKind::Terminal { .. } = e.kind {
                    self.status_message = String::from("All choices made. Press n to start over");
                } else {
                    self.status_message = e.kind.to_string();
                }
            }
        }
    }

    /// Start the story over from level one.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        if self.repository.is_none() {
            return;
        }
        self.state.reset();
        self.selected = Choice::Red;
        self.mode = AppMode::Reading;
        self.status_message = String::from("Back at the gate");
        self.refresh_scene();
    }

    /// Show the rest of every section now.
    ///
    /// Bumps the epoch so chunks still in flight are ignored.
    pub fn finish_reveal(&mut self) {
        self.epoch += 1;
        self.revealing = false;
        self.reveal_request = None;
        for section in &mut self.sections {
            section.revealed.clone_from(&section.text);
        }
    }

    /// Apply a reveal event, ignoring events from an older scene.
    pub fn apply_reveal(&mut self, event: RevealEvent) {
        if event.epoch() != self.epoch {
            debug!(stale = event.epoch(), current = self.epoch, "Dropping stale reveal event");
            return;
        }
        match event {
            RevealEvent::Chunk { section, text, .. } => {
                if let Some(view) = self.sections.get_mut(section) {
                    view.revealed.push_str(&text);
                }
            }
            RevealEvent::Finished { .. } => self.finish_reveal(),
        }
    }

    /// Hand the pending reveal to the runner.
    pub fn take_reveal_request(&mut self) -> Option<RevealRequest> {
        self.reveal_request.take()
    }

    /// Toggle the path list overlay.
    ///
    /// Opening scrolls just far enough to keep the reader's own path in view.
    pub fn toggle_path_list(&mut self) {
        self.mode = match self.mode {
            AppMode::Reading => AppMode::PathList,
            AppMode::PathList => AppMode::Reading,
        };
        self.path_scroll = 0;
        if self.mode == AppMode::PathList && self.path_limit > 0 {
            let current = self.path_listing().iter().position(|entry| entry.current);
            if let Some(index) = current {
                self.path_scroll = (index + 1).saturating_sub(self.path_limit);
            }
        }
    }

    /// Scroll the path list overlay.
    pub fn scroll_paths(&mut self, down: bool) {
        if down {
            let last = self.path_listing().len().saturating_sub(self.path_limit);
            self.path_scroll = (self.path_scroll + 1).min(last);
        } else {
            self.path_scroll = self.path_scroll.saturating_sub(1);
        }
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Rebuild the sections for the current state and queue a reveal for
    /// the ones that changed.
    fn refresh_scene(&mut self) {
        let Some(repository) = self.repository else {
            return;
        };
        let scene = PathNavigator::new(repository).scene(&self.state);

        let previous = std::mem::take(&mut self.sections);
        let mut pending = Vec::new();
        for (index, (kind, fragment)) in scene.sections().into_iter().enumerate() {
            let mut view = SectionView {
                kind,
                title: fragment.title().clone(),
                text: fragment.story().clone(),
                revealed: String::new(),
            };
            let unchanged = previous.iter().any(|old| old.same_content(&view));
            if unchanged || !self.reveal_enabled {
                view.revealed.clone_from(&view.text);
            } else {
                pending.push((index, view.text.clone()));
            }
            self.sections.push(view);
        }

        self.epoch += 1;
        self.revealing = !pending.is_empty();
        self.reveal_request = if pending.is_empty() {
            None
        } else {
            Some(RevealRequest {
                epoch: self.epoch,
                sections: pending,
            })
        };
        debug!(epoch = self.epoch, sections = self.sections.len(), "Scene refreshed");
    }
}
