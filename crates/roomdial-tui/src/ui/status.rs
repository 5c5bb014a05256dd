//! Status bar
//!
//! Displays connection status, transient messages, and key hints.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use roomdial_app::{App, ConnectionState};

const IDLE_HINTS: &str = "Tab next | Space toggle | Enter connect | Esc quit";
const CONNECTING_HINTS: &str = "Esc cancel";

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let connection_status = match app.connection_state() {
        ConnectionState::Disconnected => {
            Span::styled("Disconnected", Style::default().fg(Color::Red))
        },
        ConnectionState::Connecting => {
            Span::styled("Connecting...", Style::default().fg(Color::Yellow))
        },
        ConnectionState::Connected { session } => Span::styled(
            format!("Connected ({})", session.room_name),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    };

    let message = app
        .status_message()
        .map_or_else(String::new, |message| format!(" | {message}"));

    let hints = if app.is_connecting() { CONNECTING_HINTS } else { IDLE_HINTS };

    let status_line = Line::from(vec![
        Span::raw(" "),
        connection_status,
        Span::styled(message, Style::default().fg(Color::Gray)),
        Span::styled(format!(" | {hints}"), Style::default().fg(Color::Gray)),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
