//! Error alert
//!
//! Modal popup shown while a disconnect reason is present. Displays
//! the stringified error; Enter or Esc dismisses it.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use roomdial_app::App;

const ALERT_WIDTH: u16 = 56;
const ALERT_HEIGHT: u16 = 6;

/// Render the error alert over the current frame.
pub fn render(frame: &mut Frame, app: &App) {
    let Some(error) = app.latest_error() else {
        return;
    };

    let area = centered_rect(frame.area(), ALERT_WIDTH, ALERT_HEIGHT);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Connection Error ")
        .style(Style::default().fg(Color::Red));

    let body = vec![
        Line::from(Span::styled(error.to_owned(), Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled("Press Enter to dismiss", Style::default().fg(Color::DarkGray))),
    ];

    let paragraph = Paragraph::new(body).block(block).wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// Center a fixed-size rect within `outer`, clamped to its bounds.
fn centered_rect(outer: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(outer.width);
    let height = height.min(outer.height);
    let x = outer.x + (outer.width.saturating_sub(width)) / 2;
    let y = outer.y + (outer.height.saturating_sub(height)) / 2;
    Rect { x, y, width, height }
}
