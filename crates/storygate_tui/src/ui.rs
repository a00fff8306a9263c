//! UI rendering for TUI.

use crate::app::{App, AppMode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use storygate_core::Choice;
use storygate_narrative::{PathTree, SessionStats};

/// Draw the main UI.
#[tracing::instrument(skip_all, level = "trace")]
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(34)])
        .split(chunks[1]);

    match app.load_error() {
        Some(error) => draw_load_error(f, error, body[0]),
        None => draw_story(f, app, body[0]),
    }
    draw_sidebar(f, app, body[1]);

    if app.mode == AppMode::PathList {
        draw_path_list(f, app, chunks[1]);
    }

    draw_status_bar(f, app, chunks[2]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let state = app.state();
    let title = if app.load_error().is_some() {
        String::from("Storygate")
    } else if state.is_terminal() {
        String::from("Storygate - all choices made")
    } else {
        format!("Storygate - level {} of {}", state.level(), state.max_level())
    };
    let header = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn draw_load_error(f: &mut Frame, error: &str, area: Rect) {
    let message = Paragraph::new(error)
        .block(Block::default().borders(Borders::ALL).title("Story unavailable"))
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true });
    f.render_widget(message, area);
}

fn draw_story(f: &mut Frame, app: &App, area: Rect) {
    let chunks = if app.offers_choice() {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0)])
            .split(area)
    };

    let mut lines = Vec::new();
    for section in app.sections() {
        if section.revealed.is_empty() && !section.is_complete() {
            continue;
        }
        lines.push(Line::from(Span::styled(
            section.kind.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            section.title.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(section.revealed.lines().map(|line| Line::from(line.to_string())));
        lines.push(Line::default());
    }

    let story = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Story"))
        .wrap(Wrap { trim: false });
    f.render_widget(story, chunks[0]);

    if app.offers_choice() {
        draw_choices(f, app, chunks[1]);
    }
}

fn draw_choices(f: &mut Frame, app: &App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (choice, area, color) in [
        (Choice::Red, halves[0], Color::Red),
        (Choice::Blue, halves[1], Color::Blue),
    ] {
        let mut style = Style::default().fg(color);
        if app.selected() == choice {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        let button = Paragraph::new(app.caption(choice))
            .block(Block::default().borders(Borders::ALL))
            .style(style)
            .alignment(Alignment::Center);
        f.render_widget(button, area);
    }
}

fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(8)])
        .split(area);

    let tree = Paragraph::new(PathTree::render(app.state()))
        .block(Block::default().borders(Borders::ALL).title("Path"));
    f.render_widget(tree, chunks[0]);

    let stats = Paragraph::new(SessionStats::from_state(app.state()).to_string())
        .block(Block::default().borders(Borders::ALL).title("Stats"));
    f.render_widget(stats, chunks[1]);
}

fn draw_path_list(f: &mut Frame, app: &App, area: Rect) {
    let area = centered(area, 60, 80);
    let overview = app.path_overview();
    let current = overview.entries.iter().position(|entry| entry.current);

    let mut items: Vec<ListItem> = overview
        .entries
        .into_iter()
        .map(|entry| {
            if entry.current {
                ListItem::new(format!("{}  <- you are here", entry.path)).style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(entry.path)
            }
        })
        .collect();
    if overview.total == 0 {
        items.push(ListItem::new("No authored paths"));
    }

    // counts live in the border so a short terminal never clips them
    let mut title = format!("Authored paths: {} total", overview.total);
    if overview.hidden_before > 0 {
        title.push_str(&format!(", {} above", overview.hidden_before));
    }
    let mut block = Block::default().borders(Borders::ALL).title(title);
    if overview.hidden_after > 0 {
        block = block.title_bottom(format!("... {} more paths", overview.hidden_after));
    }

    f.render_widget(Clear, area);
    let mut state = ListState::default().with_selected(current);
    f.render_stateful_widget(List::new(items).block(block), area, &mut state);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.mode {
        AppMode::PathList => "↑↓: Scroll | P/Esc: Close | Q: Quit",
        AppMode::Reading if app.offers_choice() => {
            "←→/R/B: Select | Enter: Confirm | Space: Skip | N: Restart | P: Paths | Q: Quit"
        }
        AppMode::Reading => "N: Restart | P: Paths | Q: Quit",
    };

    let status_text = format!("{} | {}", app.status_message, help_text);
    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
