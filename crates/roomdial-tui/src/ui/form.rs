//! Setup form
//!
//! Displays the credential fields, the room option toggles, and the
//! connect/cancel control, with the focused row highlighted.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use roomdial_app::{App, TextField, Toggle};

use crate::input::{FormRow, FormState};

const FOCUS_PREFIX: &str = "> ";
const BLUR_PREFIX: &str = "  ";
const LABEL_WIDTH: usize = 12;
const BORDER_OFFSET: u16 = 1;

/// Render the setup form.
pub fn render(frame: &mut Frame, app: &App, form: &FormState, area: Rect) {
    let focused = form.focused(app);
    let mut items: Vec<ListItem> = Vec::new();

    for field in TextField::ALL {
        items.push(field_item(app, field, focused == FormRow::Field(field)));
    }
    for toggle in Toggle::ALL {
        items.push(toggle_item(app, toggle, focused == FormRow::Toggle(toggle)));
    }
    items.push(action_item(app, focused == FormRow::Action));

    let block = Block::default().borders(Borders::ALL).title(" Roomdial ");
    let list = List::new(items).block(block);

    frame.render_widget(list, area);
    position_cursor(frame, app, form, area);
}

fn field_item(app: &App, field: TextField, focused: bool) -> ListItem<'static> {
    let (prefix, style) = row_style(focused);
    let label = format!("{:<LABEL_WIDTH$}", field.label());
    let value = app.options().field(field).to_owned();

    ListItem::new(Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(label, style),
        Span::raw(" "),
        Span::raw(value),
    ]))
}

fn toggle_item(app: &App, toggle: Toggle, focused: bool) -> ListItem<'static> {
    let (prefix, style) = row_style(focused);
    let mark = if app.options().toggle_value(toggle) { "[x]" } else { "[ ]" };

    ListItem::new(Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(format!("{mark} {}", toggle.label()), style),
    ]))
}

fn action_item(app: &App, focused: bool) -> ListItem<'static> {
    let (prefix, _) = row_style(focused);
    let (label, color) = if app.is_connecting() {
        ("[ Cancel ]", Color::Yellow)
    } else {
        ("[ Connect ]", Color::Green)
    };

    let mut style = Style::default().fg(color);
    if focused {
        style = style.add_modifier(Modifier::BOLD);
    }

    ListItem::new(Line::from(vec![Span::raw(prefix), Span::styled(label, style)]))
}

fn row_style(focused: bool) -> (&'static str, Style) {
    if focused {
        (FOCUS_PREFIX, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    } else {
        (BLUR_PREFIX, Style::default())
    }
}

/// Place the terminal cursor inside the focused text field.
fn position_cursor(frame: &mut Frame, app: &App, form: &FormState, area: Rect) {
    if app.is_connecting() || app.should_show_disconnect_reason() {
        return;
    }
    let FormRow::Field(field) = form.focused(app) else {
        return;
    };
    let Some(row_index) = TextField::ALL.iter().position(|f| *f == field) else {
        return;
    };

    let value_offset = (FOCUS_PREFIX.len() + LABEL_WIDTH + 1) as u16;
    // The cursor is a byte offset; the column is counted in chars.
    let value = app.options().field(field);
    let cursor_byte = form.cursor().min(value.len());
    let cursor_offset =
        value.char_indices().take_while(|(start, _)| *start < cursor_byte).count() as u16;

    let max_x = area.x.saturating_add(area.width).saturating_sub(BORDER_OFFSET + 1);
    let cursor_x = area
        .x
        .saturating_add(BORDER_OFFSET)
        .saturating_add(value_offset)
        .saturating_add(cursor_offset)
        .min(max_x);
    let cursor_y = area.y.saturating_add(BORDER_OFFSET).saturating_add(row_index as u16);

    frame.set_cursor_position((cursor_x, cursor_y));
}
