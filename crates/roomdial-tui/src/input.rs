//! Input state and key handling for the setup form.
//!
//! This module owns the form focus and text cursor and translates key
//! events into [`App`] API calls. The focusable rows are the three
//! text fields, the six option toggles, the connect/cancel control,
//! and one row per recent connection.

use roomdial_app::{App, AppAction, KeyInput, TextField, Toggle};

/// A focusable row of the setup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    /// Editable text field.
    Field(TextField),
    /// Boolean room option.
    Toggle(Toggle),
    /// The connect/cancel control.
    Action,
    /// Recent-connections entry, by display index.
    History(usize),
}

/// Input state for the setup form.
///
/// Manages the focused row and the text cursor within the focused
/// field. Handles all character-level key events.
#[derive(Debug, Default)]
pub struct FormState {
    /// Index into [`FormState::rows`].
    focus: usize,
    /// Cursor position within the focused text field.
    cursor: usize,
}

impl FormState {
    /// Create a new form state focused on the URL field.
    pub fn new() -> Self {
        Self::default()
    }

    /// All focusable rows for the current app state.
    pub fn rows(app: &App) -> Vec<FormRow> {
        let mut rows = Vec::new();
        rows.extend(TextField::ALL.into_iter().map(FormRow::Field));
        rows.extend(Toggle::ALL.into_iter().map(FormRow::Toggle));
        rows.push(FormRow::Action);
        rows.extend((0..app.history().len()).map(FormRow::History));
        rows
    }

    /// The currently focused row.
    pub fn focused(&self, app: &App) -> FormRow {
        let rows = Self::rows(app);
        let index = self.focus.min(rows.len().saturating_sub(1));
        rows.get(index).copied().unwrap_or(FormRow::Action)
    }

    /// Current cursor position within the focused text field.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Handle a key input event.
    ///
    /// Returns actions to process (may be empty for input-only keys,
    /// or contain connect/cancel/quit intents).
    pub fn handle_key(&mut self, key: KeyInput, app: &mut App) -> Vec<AppAction> {
        // The error alert is modal: it swallows input until dismissed.
        if app.should_show_disconnect_reason() {
            return match key {
                KeyInput::Enter | KeyInput::Esc => app.dismiss_error(),
                _ => vec![],
            };
        }

        // While connecting, only the cancel control is live.
        if app.is_connecting() {
            return match key {
                KeyInput::Enter | KeyInput::Esc => app.cancel_connect(),
                _ => vec![],
            };
        }

        match key {
            KeyInput::Esc => app.quit(),
            KeyInput::Tab | KeyInput::Down => {
                self.focus_move(app, 1);
                vec![AppAction::Render]
            },
            KeyInput::Up => {
                self.focus_move(app, -1);
                vec![AppAction::Render]
            },
            KeyInput::Enter => self.activate(app),
            KeyInput::Char(c) => self.handle_char(c, app),
            KeyInput::Backspace => self.edit_field(app, |field, cursor| {
                if let Some((start, _)) = field[..*cursor].char_indices().next_back() {
                    field.remove(start);
                    *cursor = start;
                }
            }),
            KeyInput::Delete => self.edit_field(app, |field, cursor| {
                if *cursor < field.len() {
                    field.remove(*cursor);
                }
            }),
            KeyInput::Left => self.edit_field(app, |field, cursor| {
                *cursor =
                    field[..*cursor].char_indices().next_back().map_or(0, |(start, _)| start);
            }),
            KeyInput::Right => self.edit_field(app, |field, cursor| {
                if let Some(c) = field[*cursor..].chars().next() {
                    *cursor = cursor.saturating_add(c.len_utf8());
                }
            }),
            KeyInput::Home => self.edit_field(app, |_, cursor| {
                *cursor = 0;
            }),
            KeyInput::End => self.edit_field(app, |field, cursor| {
                *cursor = field.len();
            }),
        }
    }

    /// Move focus by `step` rows, wrapping around.
    fn focus_move(&mut self, app: &App, step: isize) {
        let rows = Self::rows(app);
        let len = rows.len() as isize;
        let current = (self.focus.min(rows.len().saturating_sub(1))) as isize;
        let next = (current + step).rem_euclid(len) as usize;
        self.focus = next;

        // Entering a text field places the cursor at its end.
        if let Some(FormRow::Field(field)) = rows.get(next) {
            self.cursor = app.options().field(*field).len();
        }
    }

    /// Activate the focused row.
    fn activate(&mut self, app: &mut App) -> Vec<AppAction> {
        match self.focused(app) {
            // Enter in a text field submits the form.
            FormRow::Field(_) | FormRow::Action => app.connect(),
            FormRow::Toggle(toggle) => {
                app.options_mut().toggle(toggle);
                vec![AppAction::Render]
            },
            FormRow::History(index) => app.connect_from_history(index),
        }
    }

    /// Handle a printable character on the focused row.
    fn handle_char(&mut self, c: char, app: &mut App) -> Vec<AppAction> {
        match self.focused(app) {
            FormRow::Field(field) => {
                let value = app.options_mut().field_mut(field);
                let cursor = snap_to_char_boundary(value, self.cursor);
                value.insert(cursor, c);
                self.cursor = cursor.saturating_add(c.len_utf8());
                vec![AppAction::Render]
            },
            FormRow::Toggle(toggle) if c == ' ' => {
                app.options_mut().toggle(toggle);
                vec![AppAction::Render]
            },
            FormRow::Action if c == ' ' => app.connect(),
            FormRow::History(_) if c == 'x' || c == 'X' => {
                let actions = app.clear_history();
                self.focus = 0;
                actions
            },
            _ => vec![],
        }
    }

    /// Apply an edit to the focused text field, if any.
    fn edit_field(
        &mut self,
        app: &mut App,
        edit: impl FnOnce(&mut String, &mut usize),
    ) -> Vec<AppAction> {
        let FormRow::Field(field) = self.focused(app) else {
            return vec![];
        };
        let value = app.options_mut().field_mut(field);
        self.cursor = snap_to_char_boundary(value, self.cursor);
        edit(value, &mut self.cursor);
        vec![AppAction::Render]
    }
}

/// Snap a byte offset down to the nearest char boundary of `value`.
///
/// The cursor is a byte index; field values can be replaced out from
/// under it (sandbox fill, history reconnect), so every edit clamps
/// first.
fn snap_to_char_boundary(value: &str, offset: usize) -> usize {
    let mut offset = offset.min(value.len());
    while !value.is_char_boundary(offset) {
        offset = offset.saturating_sub(1);
    }
    offset
}
