//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from
//! specific I/O implementations. Each frontend implements the trait to
//! provide platform-specific I/O, while the generic [`crate::Runtime`]
//! handles all orchestration.

use std::{future::Future, ops::Add, time::Duration};

use crate::{App, AppAction, RoomOptions};

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This
/// ensures the same orchestration code runs in the production TUI and
/// in simulation.
///
/// Connect attempts and the sandbox fetch are started here and run in
/// the background; their completions come back as
/// [`crate::AppEvent`]s through [`Driver::poll_event`].
///
/// # Associated Types
///
/// - [`Error`](Driver::Error): Platform-specific error type
/// - [`Instant`](Driver::Instant): Time representation (real or virtual)
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Time instant type. Enables virtual time in simulation.
    type Instant: Copy + Ord + Send + Sync + Add<Duration, Output = Self::Instant>;

    /// Poll for the next input event and feed it to the app.
    ///
    /// Returns the actions the app produced, empty if no event was
    /// ready within the driver's tick interval.
    fn poll_event(
        &mut self,
        app: &mut App,
    ) -> impl Future<Output = Result<Vec<AppAction>, Self::Error>> + Send;

    /// Start a connection attempt with the given options.
    ///
    /// Completion arrives later as [`crate::AppEvent::Connected`] or
    /// [`crate::AppEvent::ConnectFailed`].
    fn begin_connect(&mut self, options: RoomOptions);

    /// Abort the in-flight connection attempt, if any.
    fn cancel_connect(&mut self);

    /// Start the sandbox credential fetch.
    ///
    /// Completion arrives later as [`crate::AppEvent::SandboxReady`]
    /// or [`crate::AppEvent::SandboxFailed`].
    fn begin_sandbox_fetch(&mut self);

    /// Current time instant.
    fn now(&self) -> Self::Instant;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Stop background work and clean up resources.
    fn stop(&mut self);
}
