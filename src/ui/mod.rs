//! UI rendering for the dashboard.
//!
//! One screen: a header bar, a 2x2 grid of widget panels, and a footer with
//! the keymap. Every frame renders with the active [`Theme`]; the activity
//! panel's area is recorded on the `App` so clicks can be hit-tested
//! against it.

mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::widgets::Presence;

/// Render the full UI.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let theme = app.theme;

    // Paint the themed background before anything else.
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    render_panels(frame, app, chunks[1]);
    render_footer(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let mode = if app.dark_mode { "dark" } else { "light" };
    let header = Line::from(vec![
        Span::styled(
            " pulse ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("· user presence and activity", Style::default().fg(theme.dim)),
        Span::raw("  "),
        Span::styled(format!("[{} mode]", mode), Style::default().fg(theme.dim)),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn render_panels(frame: &mut Frame, app: &mut App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_user_panel(frame, app, top[0]);
    render_pointer_panel(frame, app, top[1]);
    render_idle_panel(frame, app, bottom[0]);
    render_activity_panel(frame, app, bottom[1]);
}

fn panel_block(title: &str, theme: Theme) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(theme.text),
        ))
}

fn hidden_panel(frame: &mut Frame, theme: Theme, area: Rect, title: &str, key: char) {
    let block = panel_block(title, theme);
    let body = Paragraph::new(Line::from(Span::styled(
        format!("hidden · press {} to show", key),
        Style::default().fg(theme.dim),
    )))
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(body, area);
}

fn render_user_panel(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    if !app.user_card.is_mounted() {
        hidden_panel(frame, theme, area, "User", '1');
        return;
    }

    let lines: Vec<Line> = if app.user_card.is_loading() {
        vec![Line::from(Span::styled(
            "loading...",
            Style::default().fg(theme.dim),
        ))]
    } else if let Some(user) = app.user_card.user() {
        vec![
            Line::from(vec![
                Span::styled("Name: ", Style::default().fg(theme.dim)),
                Span::styled(user.name.clone(), Style::default().fg(theme.accent)),
            ]),
            Line::from(vec![
                Span::styled("Email: ", Style::default().fg(theme.dim)),
                Span::styled(user.email.clone(), Style::default().fg(theme.accent)),
            ]),
        ]
    } else {
        vec![Line::from(Span::styled(
            "no data",
            Style::default().fg(theme.dim),
        ))]
    };

    let body = Paragraph::new(lines).block(panel_block("User", theme));
    frame.render_widget(body, area);
}

fn render_pointer_panel(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    if !app.pointer.is_mounted() {
        hidden_panel(frame, theme, area, "Mouse", '2');
        return;
    }

    let line = match app.pointer.position() {
        Some((column, row)) => Line::from(vec![
            Span::styled("x: ", Style::default().fg(theme.dim)),
            Span::styled(column.to_string(), Style::default().fg(theme.accent)),
            Span::styled("  y: ", Style::default().fg(theme.dim)),
            Span::styled(row.to_string(), Style::default().fg(theme.accent)),
        ]),
        None => Line::from(Span::styled(
            "move the mouse...",
            Style::default().fg(theme.dim),
        )),
    };

    let body = Paragraph::new(line).block(panel_block("Mouse", theme));
    frame.render_widget(body, area);
}

fn render_idle_panel(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    if !app.idle.is_mounted() {
        hidden_panel(frame, theme, area, "Presence", '3');
        return;
    }

    let badge = match app.idle.presence() {
        Presence::Active => Span::styled(
            "● active",
            Style::default()
                .fg(theme.active)
                .add_modifier(Modifier::BOLD),
        ),
        Presence::Idle => Span::styled(
            "○ idle",
            Style::default().fg(theme.idle).add_modifier(Modifier::BOLD),
        ),
    };

    let lines = vec![
        Line::from(badge),
        Line::from(Span::styled(
            "goes idle after 3s without input",
            Style::default().fg(theme.dim),
        )),
    ];

    let body = Paragraph::new(lines).block(panel_block("Presence", theme));
    frame.render_widget(body, area);
}

fn render_activity_panel(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.theme;
    if !app.activity.is_mounted() {
        app.activity_area = None;
        hidden_panel(frame, theme, area, "Activity", '4');
        return;
    }

    // Remember where the panel landed so clicks can be hit-tested.
    app.activity_area = Some(area);

    let lines = vec![
        Line::from(vec![
            Span::styled("clicks: ", Style::default().fg(theme.dim)),
            Span::styled(
                app.activity.count().to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "click this panel",
            Style::default().fg(theme.dim),
        )),
    ];

    let body = Paragraph::new(lines).block(panel_block("Activity", theme));
    frame.render_widget(body, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let footer = Line::from(Span::styled(
        " q quit · d dark mode · 1-4 toggle panels",
        Style::default().fg(theme.dim),
    ));
    frame.render_widget(Paragraph::new(footer), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryPreferences, MockHttpClient};
    use crate::users::{UserClient, UserRecord};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn create_test_app() -> App {
        let client = UserClient::with_endpoint(
            Arc::new(MockHttpClient::new()),
            "https://api.test/users/1",
        );
        App::new(client, Box::new(InMemoryPreferences::new()))
    }

    fn render_to_text(app: &mut App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

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

    #[test]
    fn test_renders_loading_state() {
        let mut app = create_test_app();
        app.user_card.mount();
        let text = render_to_text(&mut app);
        assert!(text.contains("loading..."));
    }

    #[test]
    fn test_renders_loaded_user() {
        let mut app = create_test_app();
        let generation = app.user_card.mount();
        app.user_card.complete(
            generation,
            UserRecord {
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
            },
        );

        let text = render_to_text(&mut app);
        assert!(text.contains("Name: John Doe"));
        assert!(text.contains("Email: john@example.com"));
        assert!(!text.contains("loading..."));
    }

    #[test]
    fn test_renders_no_data_after_failure() {
        let mut app = create_test_app();
        let generation = app.user_card.mount();
        app.user_card.fail(generation);

        let text = render_to_text(&mut app);
        assert!(text.contains("no data"));
    }

    #[test]
    fn test_renders_hidden_panels() {
        let mut app = create_test_app();
        let text = render_to_text(&mut app);
        assert!(text.contains("hidden"));
    }

    #[test]
    fn test_records_activity_area_for_hit_testing() {
        let mut app = create_test_app();
        app.activity.mount();
        assert!(app.activity_area.is_none());

        render_to_text(&mut app);
        assert!(app.activity_area.is_some());
    }

    #[test]
    fn test_renders_pointer_position() {
        let mut app = create_test_app();
        app.pointer.mount();
        app.pointer.record_move(12, 7);

        let text = render_to_text(&mut app);
        assert!(text.contains("12"));
        assert!(text.contains("7"));
    }
}
