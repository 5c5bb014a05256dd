//! Recent connections panel
//!
//! Lists prior successful connections, most recently updated first.
//! The panel is only rendered while the history is non-empty.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use roomdial_app::App;

use crate::input::{FormRow, FormState};

const E2EE_MARKER: &str = " *";

/// Render the recent connections panel.
pub fn render(frame: &mut Frame, app: &App, form: &FormState, area: Rect) {
    let focused = form.focused(app);

    let items: Vec<ListItem> = app
        .history()
        .sorted_by_updated()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let (prefix, style) = if focused == FormRow::History(index) {
                ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            } else {
                ("  ", Style::default())
            };

            let marker = if entry.e2ee { E2EE_MARKER } else { "" };

            ListItem::new(Line::from(vec![
                Span::raw(prefix),
                Span::styled(entry.room_name.clone(), style),
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::styled(entry.url.clone(), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(" Recent ");
    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}
