//! Scene printing command.

use storygate::{
    Choice, NavigationState, PathNavigator, PathTree, SessionStats, StoryPath, StorygateConfig,
    StorygateResult, Step, shared_repository,
};

/// Print the scene reached by `path`, without pacing.
pub fn handle_show(config: &StorygateConfig, path: &str) -> StorygateResult<()> {
    let repository = shared_repository(config)?;
    let path: StoryPath = path.parse()?;
    let state = NavigationState::from_path(path, config.story.max_level)?;
    print!("{}", render_scene(&PathNavigator::new(repository), &state));
    Ok(())
}

/// Scene for `state` as plain text.
pub fn render_scene(navigator: &PathNavigator<'_>, state: &NavigationState) -> String {
    let scene = navigator.scene(state);
    let mut out = String::new();
    out.push_str(&format!("Path: {}\n", PathTree::compact(state)));

    for (kind, fragment) in scene.sections() {
        out.push_str(&format!("\n== {} ==\n", kind));
        out.push_str(&format!("{}\n", fragment.title()));
        out.push_str(&format!("{}\n", fragment.story()));
    }

    out.push('\n');
    match scene.step {
        Step::Choose { level, prompt: None } => {
            out.push_str(&format!("Level {} of {}\n", level, state.max_level()));
            out.push_str("No choices at this level\n");
        }
        Step::Choose { level, .. } => {
            out.push_str(&format!("Level {} of {}\n", level, state.max_level()));
            for choice in [Choice::Red, Choice::Blue] {
                let caption = navigator
                    .caption(state, choice)
                    .unwrap_or_else(|| choice.label());
                out.push_str(&format!("  [{}] {}\n", choice.as_char(), caption));
            }
        }
        Step::Ending(_) => {
            out.push_str("All choices made\n");
        }
    }

    out.push('\n');
    out.push_str(&SessionStats::from_state(state).to_string());
    out.push('\n');
    out
}
