//! Application input events.
//!
//! This module defines [`AppEvent`], the comprehensive set of inputs
//! that drive the [`crate::App`] state machine.
//!
//! Events originate from two distinct sources:
//! - Terminal notifications (resize) and system ticks. Keyboard input
//!   stays in the frontend input layer, which calls the [`crate::App`]
//!   API methods directly.
//! - Completions of background work (connect attempts, the sandbox
//!   credential fetch) delivered by the driver.

use crate::state::{ConnectionDetails, SessionInfo};

/// Events processed by the App state machine.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// A connect attempt succeeded.
    Connected {
        /// Descriptor of the established session.
        session: SessionInfo,
    },

    /// A connect attempt failed.
    ConnectFailed {
        /// Engine-reported failure reason.
        reason: String,
    },

    /// The session ended or the attempt was aborted.
    Disconnected {
        /// Reason for the disconnect, `None` for a local cancel.
        reason: Option<String>,
    },

    /// The sandbox credential fetch succeeded.
    SandboxReady {
        /// Credentials to populate the form with.
        details: ConnectionDetails,
    },

    /// The sandbox credential fetch failed.
    SandboxFailed {
        /// Failure description, logged and otherwise swallowed.
        reason: String,
    },
}
