//! TUI runner - main loop and terminal lifecycle.

use crate::{App, AppMode, Event, EventHandler, Narrator};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use storygate_core::Choice;
use storygate_error::{LoadError, TuiError, TuiErrorKind, TuiResult};
use storygate_narrative::{Reveal, StoryRepository, StorygateConfig};
use tokio::runtime::Handle;
use tracing::{info, instrument};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Run the reader until the user quits.
///
/// Reveals are spawned onto `handle`; this function itself blocks, so call
/// it from a blocking thread.
///
/// # Arguments
///
/// * `repository` - Loaded story, or the error to show in its place
/// * `config` - Pacing, depth and tick settings
/// * `handle` - Runtime that drives the paced reveal
#[instrument(skip_all)]
pub fn run_tui(
    repository: Result<&StoryRepository, LoadError>,
    config: &StorygateConfig,
    handle: Handle,
) -> TuiResult<()> {
    let mut terminal = setup_terminal()?;

    let mut app = App::new(repository, config);
    let mut narrator = Narrator::new(handle, Reveal::from_config(&config.reveal));
    let events = EventHandler::new(config.tui.tick_rate_ms);

    let result = main_loop(&mut terminal, &mut app, &mut narrator, &events);
    let restored = restore_terminal(&mut terminal);
    info!("Reader closed");

    result.and(restored)
}

fn main_loop(
    terminal: &mut CrosstermTerminal,
    app: &mut App<'_>,
    narrator: &mut Narrator,
    events: &EventHandler,
) -> TuiResult<()> {
    while !app.should_quit {
        if !app.is_revealing() {
            narrator.cancel();
        }
        if let Some(request) = app.take_reveal_request() {
            narrator.start(request);
        }
        for event in narrator.drain() {
            app.apply_reveal(event);
        }

        terminal
            .draw(|f| crate::ui::draw(f, app))
            .map_err(|e| TuiError::new(TuiErrorKind::Rendering(format!("Failed to draw: {}", e))))?;

        match events.next()? {
            Some(Event::Key(key)) => handle_key(app, key),
            Some(Event::Tick) | Some(Event::Resize) | None => {}
        }
    }
    Ok(())
}

fn setup_terminal() -> TuiResult<CrosstermTerminal> {
    enable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to enable raw mode: {}",
            e
        )))
    })?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to setup terminal: {}",
            e
        )))
    })?;

    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to create terminal: {}",
            e
        )))
    })
}

fn restore_terminal(terminal: &mut CrosstermTerminal) -> TuiResult<()> {
    disable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to disable raw mode: {}",
            e
        )))
    })?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to cleanup terminal: {}",
            e
        )))
    })?;
    terminal.show_cursor().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to show cursor: {}",
            e
        )))
    })
}

/// Handle a single key press.
pub fn handle_key(app: &mut App<'_>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('q') => app.quit(),
        KeyCode::Esc if app.mode == AppMode::PathList => app.toggle_path_list(),
        KeyCode::Esc => app.quit(),
        KeyCode::Char('p') => app.toggle_path_list(),
        KeyCode::Up | KeyCode::Char('k') if app.mode == AppMode::PathList => {
            app.scroll_paths(false)
        }
        KeyCode::Down | KeyCode::Char('j') if app.mode == AppMode::PathList => {
            app.scroll_paths(true)
        }
        KeyCode::Char(' ') => app.finish_reveal(),
        KeyCode::Char('n') => app.restart(),
        _ if app.mode == AppMode::PathList => {}
        KeyCode::Left | KeyCode::Char('r') => app.select(Choice::Red),
        KeyCode::Right | KeyCode::Char('b') => app.select(Choice::Blue),
        KeyCode::Tab => app.toggle_selection(),
        KeyCode::Enter => {
            if app.is_revealing() {
                app.finish_reveal();
            }
            app.confirm();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn repository() -> StoryRepository {
        r#"
[FM_CHOICE."1"]
title = "Door"
story = "Knock or leave?"

[FM_CHOICE."2"]
title = "Hall"
story = "Stairs or cellar?"

[FM_START]
title = "Start"
story = "Once."

[FM_NOEND]
title = "End"
story = "Done."
"#
        .parse()
        .unwrap()
    }

    #[test]
    fn test_keys_drive_navigation() {
        let repository = repository();
        let mut app = App::new(Ok(&repository), &StorygateConfig::default());

        handle_key(&mut app, key(KeyCode::Right));
        assert_eq!(app.selected(), Choice::Blue);
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Char('r')));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.state().path().as_str(), "BR");

        handle_key(&mut app, key(KeyCode::Char('n')));
        assert!(app.state().path().is_empty());
    }

    #[test]
    fn test_path_list_swallows_choice_keys() {
        let repository = repository();
        let mut app = App::new(Ok(&repository), &StorygateConfig::default());

        handle_key(&mut app, key(KeyCode::Char('p')));
        assert_eq!(app.mode, AppMode::PathList);
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.state().path().is_empty());

        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, AppMode::Reading);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_keys() {
        let repository = repository();
        let mut app = App::new(Ok(&repository), &StorygateConfig::default());
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
