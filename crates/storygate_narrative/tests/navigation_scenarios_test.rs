//! End-to-end navigation over the six-level fixture.

mod common;

use storygate_core::Choice;
use storygate_error::NavigationErrorKind;
use storygate_narrative::{NavigationState, PathNavigator, SectionKind, Step};

#[test]
fn test_first_choice_shows_branch_and_next_prompt() {
    let repository = common::fixture();
    let navigator = PathNavigator::new(&repository);
    let mut state = NavigationState::new(6);

    assert_eq!(state.apply_choice(Choice::Red).unwrap(), 2);
    assert_eq!(state.path().as_str(), "R");

    let scene = navigator.scene(&state);
    assert_eq!(scene.branch.map(|f| f.title().as_str()), Some("Humming"));
    match scene.step {
        Step::Choose { level, prompt } => {
            assert_eq!(level, 2);
            assert_eq!(prompt.map(|f| f.title().as_str()), Some("The second door"));
        }
        Step::Ending(_) => panic!("expected a pending decision"),
    }
    assert_eq!(navigator.caption(&state, Choice::Blue), Some("Listen"));
}

#[test]
fn test_two_red_choices_resolve_authored_branch() {
    let repository = common::fixture();
    let navigator = PathNavigator::new(&repository);
    let mut state = NavigationState::new(6);

    state.apply_choice(Choice::Red).unwrap();
    state.apply_choice(Choice::Red).unwrap();

    assert_eq!(state.path().as_str(), "RR");
    assert_eq!(state.level(), 3);
    assert_eq!(
        navigator
            .fragment_for_path(state.path().as_str())
            .map(|f| f.title().as_str()),
        Some("The knock answered")
    );
    assert_eq!(
        navigator.scene(&state).branch.map(|f| f.title().as_str()),
        Some("The knock answered")
    );
}

#[test]
fn test_six_choices_reach_the_ending() {
    let repository = common::fixture();
    let navigator = PathNavigator::new(&repository);
    let mut state = NavigationState::new(6);

    for choice in [
        Choice::Red,
        Choice::Blue,
        Choice::Red,
        Choice::Red,
        Choice::Blue,
        Choice::Blue,
    ] {
        assert!(!state.is_terminal());
        state.apply_choice(choice).unwrap();
    }

    assert_eq!(state.level(), 7);
    assert!(state.is_terminal());
    assert_eq!(state.path().as_str(), "RBRRBB");

    let scene = navigator.scene(&state);
    assert!(scene.is_ending());
    assert!(!scene.step.offers_choice());
    assert!(scene.branch.is_none());
    assert_eq!(
        scene.step.fragment().map(|f| f.title().as_str()),
        Some("No ending")
    );
    assert_eq!(navigator.caption(&state, Choice::Red), None);
}

#[test]
fn test_choice_after_ending_is_rejected() {
    let mut state = NavigationState::from_path("RRRRRR".parse().unwrap(), 6).unwrap();

    let err = state.apply_choice(Choice::Blue).unwrap_err();
    assert!(matches!(err.kind, NavigationErrorKind::Terminal { .. }));
    assert_eq!(state.path().as_str(), "RRRRRR");
    assert_eq!(state.level(), 7);
}

#[test]
fn test_unauthored_path_has_no_branch() {
    let repository = common::fixture();
    let navigator = PathNavigator::new(&repository);
    let state = NavigationState::from_path("BB".parse().unwrap(), 6).unwrap();

    let scene = navigator.scene(&state);
    assert!(scene.branch.is_none());
    let kinds: Vec<SectionKind> = scene.sections().into_iter().map(|(k, _)| k).collect();
    assert_eq!(
        kinds,
        vec![SectionKind::Start, SectionKind::RootChoice, SectionKind::Prompt]
    );
}

#[test]
fn test_restart_returns_to_level_one() {
    let mut state = NavigationState::new(6);
    state.apply_choice(Choice::Blue).unwrap();
    state.apply_choice(Choice::Red).unwrap();
    state.reset();

    assert_eq!(state.level(), 1);
    assert!(state.path().is_empty());
}

#[test]
fn test_path_listing_marks_current_path() {
    let repository = common::fixture();
    let navigator = PathNavigator::new(&repository);
    let state = NavigationState::from_path("RB".parse().unwrap(), 6).unwrap();

    let listing = navigator.path_listing(6, &state);
    let paths: Vec<&str> = listing.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, vec!["B", "R", "RB", "RR"]);
    let current: Vec<&str> = listing
        .iter()
        .filter(|e| e.current)
        .map(|e| e.path.as_str())
        .collect();
    assert_eq!(current, vec!["RB"]);
}

#[test]
fn test_enumerated_paths_are_all_authored() {
    let repository = common::with_branches(&["R", "RR", "RRB", "B", "BRRRRRR"]);
    let navigator = PathNavigator::new(&repository);

    for depth in 0..8 {
        for path in navigator.enumerate_paths(depth) {
            assert!(path.len() <= depth);
            assert!(navigator.fragment_for_path(&path).is_some());
        }
    }
    assert_eq!(navigator.enumerate_paths(6), vec!["B", "R", "RR", "RRB"]);
}
