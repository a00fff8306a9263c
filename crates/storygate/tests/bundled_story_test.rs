//! The story shipped in docs/ loads and plays through with the bundled
//! configuration.

use std::path::PathBuf;
use storygate::{
    Choice, NavigationState, PathNavigator, StoryRepository, StorygateConfig, segment,
};

fn bundled_story() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/FM_STORY.toml")
}

fn config() -> StorygateConfig {
    StorygateConfig::default().with_story_path(bundled_story())
}

#[test]
fn test_bundled_story_covers_every_level() {
    let config = config();
    let repository = StoryRepository::load(&config).unwrap();

    assert!(repository.root_choice().is_some());
    for level in 1..=config.story.max_level {
        let prompt = repository.choice(level).unwrap();
        assert!(prompt.red().is_some(), "level {level} lacks a red caption");
        assert!(prompt.blue().is_some(), "level {level} lacks a blue caption");
    }
}

#[test]
fn test_bundled_story_plays_to_the_end() {
    let config = config();
    let repository = StoryRepository::load(&config).unwrap();
    let navigator = PathNavigator::new(&repository);
    let mut state = NavigationState::new(config.story.max_level);

    while state.can_choose() {
        assert!(navigator.scene(&state).step.offers_choice());
        state.apply_choice(Choice::Red).unwrap();
    }

    let scene = navigator.scene(&state);
    assert!(scene.is_ending());
    assert_eq!(state.path().as_str(), "RRRRRR");
}

#[test]
fn test_bundled_story_paths_are_sorted() {
    let repository = StoryRepository::load(&config()).unwrap();
    let paths = PathNavigator::new(&repository).enumerate_paths(2);
    assert_eq!(paths, vec!["B", "BB", "BR", "R", "RB", "RR"]);
}

#[test]
fn test_bundled_text_segments() {
    let repository = StoryRepository::load(&config()).unwrap();
    let opening = repository.start().story();
    let chunks = segment(opening);
    assert!(chunks.len() > 10);
    assert_eq!(chunks.concat(), opening.trim_start());
}
