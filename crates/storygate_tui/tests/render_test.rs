//! Rendering tests against an in-memory terminal.

use ratatui::{Terminal, backend::TestBackend};
use storygate_error::{LoadError, LoadErrorKind};
use storygate_narrative::{StoryRepository, StorygateConfig};
use storygate_tui::{App, draw};

const STORY: &str = r#"
[FM_CHOICE."1"]
title = "Crossroads"
story = "Two roads."
red = "Go north"
blue = "Go south"

[FM_START]
title = "Morning"
story = "The sun is up."

[FM_NOEND]
title = "Evening"
story = "The sun is down."
"#;

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn config(max_level: usize) -> StorygateConfig {
    let mut config = StorygateConfig::default();
    config.story.max_level = max_level;
    config
}

#[test]
fn test_reading_view_shows_scene_and_choices() {
    let repository: StoryRepository = STORY.parse().unwrap();
    let mut app = App::new(Ok(&repository), &config(6));
    app.finish_reveal();

    let screen = render(&app);
    assert!(screen.contains("level 1 of 6"));
    assert!(screen.contains("Morning"));
    assert!(screen.contains("Crossroads"));
    assert!(screen.contains("Go north"));
    assert!(screen.contains("Go south"));
}

#[test]
fn test_unrevealed_text_is_hidden() {
    let repository: StoryRepository = STORY.parse().unwrap();
    let app = App::new(Ok(&repository), &config(6));

    let screen = render(&app);
    assert!(!screen.contains("The sun is up."));
}

#[test]
fn test_ending_hides_choice_controls() {
    let repository: StoryRepository = STORY.parse().unwrap();
    let mut app = App::new(Ok(&repository), &config(1));
    app.confirm();
    app.finish_reveal();

    let screen = render(&app);
    assert!(screen.contains("all choices made"));
    assert!(screen.contains("Evening"));
    assert!(!screen.contains("Go north"));
    assert!(!screen.contains("Enter: Confirm"));
}

#[test]
fn test_load_error_renders_inline() {
    let err = LoadError::new(LoadErrorKind::NotFound("missing.toml".to_string()));
    let app = App::new(Err(err), &config(6));

    let screen = render(&app);
    assert!(screen.contains("Storygate"));
    assert!(screen.contains("Story unavailable"));
    assert!(screen.contains("missing.toml"));
    assert!(!screen.contains("Enter: Confirm"));
}

#[test]
fn test_path_overlay_marks_current_path() {
    let repository: StoryRepository = format!(
        "{STORY}\n[FM_STORY.\"R\"]\ntitle = \"North\"\nstory = \"Cold.\"\n"
    )
    .parse()
    .unwrap();
    let mut app = App::new(Ok(&repository), &config(6));
    app.confirm();
    app.toggle_path_list();

    let screen = render(&app);
    assert!(screen.contains("Authored paths"));
    assert!(screen.contains("R  <- you are here"));
}

#[test]
fn test_path_overlay_reports_hidden_paths() {
    let mut doc = String::from(STORY);
    for depth in 1..=4u32 {
        for bits in 0..(1u32 << depth) {
            let key: String = (0..depth)
                .rev()
                .map(|i| if bits >> i & 1 == 0 { 'B' } else { 'R' })
                .collect();
            doc.push_str(&format!(
                "\n[FM_STORY.\"{key}\"]\ntitle = \"{key}\"\nstory = \"{key}\"\n"
            ));
        }
    }
    let repository: StoryRepository = doc.parse().unwrap();
    let mut app = App::new(Ok(&repository), &config(6));
    app.toggle_path_list();

    let screen = render(&app);
    assert!(screen.contains("Authored paths: 30 total"));
    assert!(screen.contains("... 10 more paths"));
}
