//! Observable application state types.
//!
//! This module defines the data structures that represent the setup
//! screen's current view of the world, such as [`RoomOptions`] and
//! [`ConnectionState`].
//!
//! These structures serve as the "View Model" for the screen. They
//! contain the subset of session state necessary for rendering the UI
//! without exposing the media and encryption machinery of the
//! underlying engine.

use serde::Deserialize;

/// Connection state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionState {
    /// No session and no attempt in flight.
    #[default]
    Disconnected,
    /// Connection attempt in progress.
    Connecting,
    /// Connected with a live session.
    Connected {
        /// Descriptor of the live session.
        session: SessionInfo,
    },
}

/// Descriptor of a live session, produced by the room engine when a
/// connect attempt succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    /// Server URL the session is attached to.
    pub url: String,
    /// Participant token used to join.
    pub token: String,
    /// Name of the joined room.
    pub room_name: String,
    /// Identity assigned to the local participant.
    pub participant_identity: String,
}

/// Room connection options edited by the setup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomOptions {
    /// Server URL (`ws://` or `wss://`).
    pub url: String,
    /// Participant access token.
    pub token: String,
    /// Shared key for end-to-end encryption.
    pub e2ee_key: String,
    /// Subscribe to remote tracks automatically.
    pub auto_subscribe: bool,
    /// Encrypt media end-to-end with [`RoomOptions::e2ee_key`].
    pub e2ee: bool,
    /// Publish simulcast layers.
    pub simulcast: bool,
    /// Adapt received video quality to the rendered size.
    pub adaptive_stream: bool,
    /// Pause publishing layers without subscribers.
    pub dynacast: bool,
    /// Report connection statistics.
    pub report_stats: bool,
}

impl Default for RoomOptions {
    fn default() -> Self {
        Self {
            url: String::new(),
            token: String::new(),
            e2ee_key: String::new(),
            auto_subscribe: true,
            e2ee: false,
            simulcast: true,
            adaptive_stream: true,
            dynacast: true,
            report_stats: false,
        }
    }
}

impl RoomOptions {
    /// Current value of a text field.
    pub fn field(&self, field: TextField) -> &str {
        match field {
            TextField::Url => &self.url,
            TextField::Token => &self.token,
            TextField::E2eeKey => &self.e2ee_key,
        }
    }

    /// Mutable value of a text field.
    pub fn field_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Url => &mut self.url,
            TextField::Token => &mut self.token,
            TextField::E2eeKey => &mut self.e2ee_key,
        }
    }

    /// Current value of a toggle.
    pub fn toggle_value(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::AutoSubscribe => self.auto_subscribe,
            Toggle::E2ee => self.e2ee,
            Toggle::Simulcast => self.simulcast,
            Toggle::AdaptiveStream => self.adaptive_stream,
            Toggle::Dynacast => self.dynacast,
            Toggle::ReportStats => self.report_stats,
        }
    }

    /// Flip a toggle.
    pub fn toggle(&mut self, toggle: Toggle) {
        let value = match toggle {
            Toggle::AutoSubscribe => &mut self.auto_subscribe,
            Toggle::E2ee => &mut self.e2ee,
            Toggle::Simulcast => &mut self.simulcast,
            Toggle::AdaptiveStream => &mut self.adaptive_stream,
            Toggle::Dynacast => &mut self.dynacast,
            Toggle::ReportStats => &mut self.report_stats,
        };
        *value = !*value;
    }
}

/// Editable text fields of the setup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    /// Server URL field.
    Url,
    /// Participant token field.
    Token,
    /// End-to-end encryption key field.
    E2eeKey,
}

impl TextField {
    /// All text fields in display order.
    pub const ALL: [TextField; 3] = [TextField::Url, TextField::Token, TextField::E2eeKey];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            TextField::Url => "Server URL",
            TextField::Token => "Token",
            TextField::E2eeKey => "E2EE Key",
        }
    }
}

/// Boolean room options toggled from the setup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Subscribe to remote tracks automatically.
    AutoSubscribe,
    /// Encrypt media end-to-end.
    E2ee,
    /// Publish simulcast layers.
    Simulcast,
    /// Adapt received video quality to the rendered size.
    AdaptiveStream,
    /// Pause publishing layers without subscribers.
    Dynacast,
    /// Report connection statistics.
    ReportStats,
}

impl Toggle {
    /// All toggles in display order.
    pub const ALL: [Toggle; 6] = [
        Toggle::AutoSubscribe,
        Toggle::E2ee,
        Toggle::Simulcast,
        Toggle::AdaptiveStream,
        Toggle::Dynacast,
        Toggle::ReportStats,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Toggle::AutoSubscribe => "Auto-Subscribe",
            Toggle::E2ee => "Enable E2EE",
            Toggle::Simulcast => "Simulcast",
            Toggle::AdaptiveStream => "AdaptiveStream",
            Toggle::Dynacast => "Dynacast",
            Toggle::ReportStats => "Report stats",
        }
    }
}

/// Credentials issued by the sandbox token service.
///
/// Decoded from the JSON body of a successful sandbox response and
/// used once to populate the URL and token fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionDetails {
    /// Server URL to connect to.
    pub server_url: String,
    /// Participant token for the demo room.
    pub participant_token: String,
}
