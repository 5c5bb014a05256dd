//! Application state machine.
//!
//! This module defines the [`App`] state machine, which manages the
//! interactive state of the connection setup screen completely
//! decoupled from I/O and engine mechanics.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`]
//! inputs and produces [`crate::AppAction`] instructions for the
//! runtime to execute.
//!
//! # Responsibilities
//!
//! - Holds the editable room options (URL, token, E2EE key, toggles).
//! - Tracks high-level connection state for UI feedback.
//! - Records successful connections in the recent-connections store.
//! - Surfaces connect failures through a single dismissable alert.

use crate::{
    AppAction, AppEvent, ConnectionHistory, ConnectionState, RoomOptions,
    history::ConnectionHistoryEntry,
};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone, Default)]
pub struct App {
    /// Connection state.
    state: ConnectionState,
    /// Editable room options.
    options: RoomOptions,
    /// Recent successful connections.
    history: ConnectionHistory,
    /// Reason for the most recent failure or disconnect. Drives the
    /// error alert while `Some`.
    latest_error: Option<String>,
    /// Transient status message. `None` if no message.
    status_message: Option<String>,
}

impl App {
    /// Create a new App with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Tick => vec![],
            AppEvent::Resize(..) => vec![AppAction::Render],
            AppEvent::Connected { session } => {
                if self.state != ConnectionState::Connecting {
                    // Stale completion from a cancelled attempt.
                    return vec![];
                }
                self.history.update(&session, self.options.e2ee, &self.options.e2ee_key);
                self.latest_error = None;
                self.status_message = Some(format!("Connected to {}", session.room_name));
                self.state = ConnectionState::Connected { session };
                vec![AppAction::Render]
            },
            AppEvent::ConnectFailed { reason } => {
                if self.state != ConnectionState::Connecting {
                    return vec![];
                }
                self.state = ConnectionState::Disconnected;
                self.latest_error = Some(reason);
                vec![AppAction::Render]
            },
            AppEvent::Disconnected { reason } => {
                self.state = ConnectionState::Disconnected;
                if let Some(reason) = reason {
                    self.latest_error = Some(reason);
                }
                vec![AppAction::Render]
            },
            AppEvent::SandboxReady { details } => {
                if self.state != ConnectionState::Disconnected {
                    return vec![];
                }
                self.options.url = details.server_url;
                self.options.token = details.participant_token;
                self.connect()
            },
            AppEvent::SandboxFailed { reason } => {
                // Best-effort convenience path: no user-visible error.
                tracing::debug!(%reason, "sandbox credential fetch failed");
                vec![]
            },
        }
    }

    /// Initiate a connection attempt with the current options.
    ///
    /// Ignored while an attempt is already in flight.
    pub fn connect(&mut self) -> Vec<AppAction> {
        if self.state == ConnectionState::Connecting {
            return vec![];
        }
        self.state = ConnectionState::Connecting;
        self.status_message = None;
        vec![AppAction::Connect, AppAction::Render]
    }

    /// Reconnect to a recent entry, by index into the display order
    /// of [`App::history`] (most-recently-updated first).
    ///
    /// Applies the entry's URL, token, and E2EE settings to the
    /// options, then connects.
    pub fn connect_from_history(&mut self, index: usize) -> Vec<AppAction> {
        let Some(entry) = self.history.sorted_by_updated().get(index).copied().cloned() else {
            return vec![];
        };
        self.apply_history_entry(&entry);
        self.connect()
    }

    fn apply_history_entry(&mut self, entry: &ConnectionHistoryEntry) {
        self.options.url = entry.url.clone();
        self.options.token = entry.token.clone();
        self.options.e2ee = entry.e2ee;
        self.options.e2ee_key = entry.e2ee_key.clone();
    }

    /// Abort the in-flight connection attempt.
    ///
    /// Ignored unless an attempt is in flight.
    pub fn cancel_connect(&mut self) -> Vec<AppAction> {
        if self.state != ConnectionState::Connecting {
            return vec![];
        }
        self.state = ConnectionState::Disconnected;
        self.status_message = Some("Cancelled".into());
        vec![AppAction::CancelConnect, AppAction::Render]
    }

    /// Remove all recent connections. No confirmation.
    pub fn clear_history(&mut self) -> Vec<AppAction> {
        self.history.remove_all();
        vec![AppAction::Render]
    }

    /// Dismiss the error alert.
    pub fn dismiss_error(&mut self) -> Vec<AppAction> {
        self.latest_error = None;
        vec![AppAction::Render]
    }

    /// Clear the URL and token fields. Called once on mount before
    /// the sandbox auto-connect is armed.
    pub fn clear_credentials(&mut self) {
        self.options.url.clear();
        self.options.token.clear();
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    /// Current connection state.
    pub fn connection_state(&self) -> &ConnectionState {
        &self.state
    }

    /// `true` while a connect attempt is in flight (the cancel
    /// control is shown instead of the connect control).
    pub fn is_connecting(&self) -> bool {
        self.state == ConnectionState::Connecting
    }

    /// Editable room options.
    pub fn options(&self) -> &RoomOptions {
        &self.options
    }

    /// Mutable room options, for form editing.
    pub fn options_mut(&mut self) -> &mut RoomOptions {
        &mut self.options
    }

    /// Recent successful connections.
    pub fn history(&self) -> &ConnectionHistory {
        &self.history
    }

    /// Reason for the most recent failure. `None` if no error.
    pub fn latest_error(&self) -> Option<&str> {
        self.latest_error.as_deref()
    }

    /// `true` while the error alert should be shown.
    pub fn should_show_disconnect_reason(&self) -> bool {
        self.latest_error.is_some()
    }

    /// Transient status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConnectionDetails, SessionInfo};

    fn session(url: &str, token: &str) -> SessionInfo {
        SessionInfo {
            url: url.into(),
            token: token.into(),
            room_name: "demo".into(),
            participant_identity: "user-0001".into(),
        }
    }

    fn connecting_app() -> App {
        let mut app = App::new();
        app.options_mut().url = "wss://a".into();
        app.options_mut().token = "t1".into();
        let _ = app.connect();
        app
    }

    #[test]
    fn api_connect() {
        let mut app = App::new();
        let actions = app.connect();

        assert!(matches!(actions.as_slice(), [AppAction::Connect, AppAction::Render]));
        assert!(app.is_connecting());
    }

    #[test]
    fn connect_while_connecting_is_ignored() {
        let mut app = connecting_app();
        let actions = app.connect();

        assert!(actions.is_empty());
    }

    #[test]
    fn api_cancel_only_while_connecting() {
        let mut app = App::new();
        assert!(app.cancel_connect().is_empty());

        let mut app = connecting_app();
        let actions = app.cancel_connect();
        assert!(matches!(actions.as_slice(), [AppAction::CancelConnect, AppAction::Render]));
        assert!(!app.is_connecting());
    }

    #[test]
    fn connected_records_history_entry() {
        let mut app = connecting_app();
        let _ = app.handle(AppEvent::Connected { session: session("wss://a", "t1") });

        assert!(matches!(app.connection_state(), ConnectionState::Connected { .. }));
        assert_eq!(app.history().len(), 1);
    }

    #[test]
    fn stale_connected_is_dropped() {
        let mut app = connecting_app();
        let _ = app.cancel_connect();
        let actions = app.handle(AppEvent::Connected { session: session("wss://a", "t1") });

        assert!(actions.is_empty());
        assert!(matches!(app.connection_state(), ConnectionState::Disconnected));
        assert!(app.history().is_empty());
    }

    #[test]
    fn connect_failure_raises_alert() {
        let mut app = connecting_app();
        assert!(!app.should_show_disconnect_reason());

        let _ = app.handle(AppEvent::ConnectFailed { reason: "token rejected".into() });

        assert!(app.should_show_disconnect_reason());
        assert_eq!(app.latest_error(), Some("token rejected"));
        assert!(matches!(app.connection_state(), ConnectionState::Disconnected));
    }

    #[test]
    fn dismiss_clears_alert() {
        let mut app = connecting_app();
        let _ = app.handle(AppEvent::ConnectFailed { reason: "boom".into() });
        let _ = app.dismiss_error();

        assert!(!app.should_show_disconnect_reason());
    }

    #[test]
    fn sandbox_ready_populates_fields_and_connects() {
        let mut app = App::new();
        let actions = app.handle(AppEvent::SandboxReady {
            details: ConnectionDetails {
                server_url: "wss://x".into(),
                participant_token: "tok".into(),
            },
        });

        assert_eq!(app.options().url, "wss://x");
        assert_eq!(app.options().token, "tok");
        assert!(matches!(actions.as_slice(), [AppAction::Connect, AppAction::Render]));
    }

    #[test]
    fn sandbox_ready_ignored_unless_disconnected() {
        let mut app = connecting_app();
        let actions = app.handle(AppEvent::SandboxReady {
            details: ConnectionDetails {
                server_url: "wss://x".into(),
                participant_token: "tok".into(),
            },
        });

        assert!(actions.is_empty());
        assert_eq!(app.options().url, "wss://a");
    }

    #[test]
    fn sandbox_failure_is_silent() {
        let mut app = App::new();
        let actions = app.handle(AppEvent::SandboxFailed { reason: "HTTP 500".into() });

        assert!(actions.is_empty());
        assert!(app.options().url.is_empty());
        assert!(!app.should_show_disconnect_reason());
    }

    #[test]
    fn api_connect_from_history() {
        let mut app = connecting_app();
        let _ = app.handle(AppEvent::Connected { session: session("wss://a", "t1") });
        let _ = app.handle(AppEvent::Disconnected { reason: None });

        app.options_mut().url = "wss://typed".into();
        let actions = app.connect_from_history(0);

        assert!(matches!(actions.as_slice(), [AppAction::Connect, AppAction::Render]));
        assert_eq!(app.options().url, "wss://a");
        assert_eq!(app.options().token, "t1");
    }

    #[test]
    fn connect_from_history_with_bad_index_is_ignored() {
        let mut app = App::new();
        assert!(app.connect_from_history(3).is_empty());
    }

    #[test]
    fn api_clear_history() {
        let mut app = connecting_app();
        let _ = app.handle(AppEvent::Connected { session: session("wss://a", "t1") });
        let _ = app.clear_history();

        assert!(app.history().is_empty());
    }

    #[test]
    fn clear_credentials_keeps_e2ee_key() {
        let mut app = App::new();
        app.options_mut().url = "wss://a".into();
        app.options_mut().token = "t1".into();
        app.options_mut().e2ee_key = "secret".into();

        app.clear_credentials();

        assert!(app.options().url.is_empty());
        assert!(app.options().token.is_empty());
        assert_eq!(app.options().e2ee_key, "secret");
    }
}
