//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents
//! instructions produced by the [`crate::App`] state machine for the
//! runtime to execute.

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Start a connection attempt with the current room options.
    Connect,

    /// Abort the in-flight connection attempt.
    CancelConnect,
}
