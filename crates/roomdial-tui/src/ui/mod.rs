//! UI rendering
//!
//! Rendering functions that convert App state into terminal output
//! using ratatui widgets. All functions are pure (no I/O), taking
//! state and returning widget trees.

mod alert;
mod form;
mod history;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};
use roomdial_app::App;

use crate::input::FormState;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App, form: &FormState) {
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(MAIN_AREA_MIN_HEIGHT), Constraint::Length(STATUS_HEIGHT)])
        .split(frame.area());

    let [main_area, status_area] = chunks.as_ref() else {
        return;
    };

    render_main_area(frame, app, form, *main_area);
    status::render(frame, app, *status_area);

    if app.should_show_disconnect_reason() {
        alert::render(frame, app);
    }
}

/// Render the main area (setup form + recent connections).
///
/// The recent panel is absent entirely while the history is empty.
fn render_main_area(frame: &mut Frame, app: &App, form: &FormState, area: Rect) {
    const FORM_MIN_WIDTH: u16 = 40;
    const HISTORY_WIDTH: u16 = 34;

    if app.history().is_empty() {
        form::render(frame, app, form, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(FORM_MIN_WIDTH), Constraint::Length(HISTORY_WIDTH)])
        .split(area);

    let [form_area, history_area] = chunks.as_ref() else {
        return;
    };

    form::render(frame, app, form, *form_area);
    history::render(frame, app, form, *history_area);
}
