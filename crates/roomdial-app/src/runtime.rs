//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating
//! between:
//! - [`App`]: setup-screen state machine
//! - [`Driver`]: platform-specific I/O
//!
//! It also owns the mount-time auto-connect sequence: credentials are
//! cleared, a fixed delay is armed, and when it elapses with the app
//! still disconnected the sandbox credential fetch is started. The
//! pending delay dies with the loop, so tearing the screen down
//! before it elapses cancels the sequence.

use std::time::Duration;

use crate::{App, AppAction, ConnectionState, Driver};

/// Delay between mount and the sandbox auto-connect attempt.
pub const AUTO_CONNECT_DELAY: Duration = Duration::from_secs(10);

/// Generic runtime that orchestrates App and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
pub struct Runtime<D: Driver> {
    driver: D,
    app: App,
    sandbox_deadline: Option<D::Instant>,
}

impl<D: Driver> Runtime<D> {
    /// Create a new runtime with the given driver.
    pub fn new(driver: D) -> Self {
        Self { driver, app: App::new(), sandbox_deadline: None }
    }

    /// Run the main event loop.
    ///
    /// This is the core orchestration loop that:
    /// 1. Clears credentials and arms the auto-connect delay
    /// 2. Polls for input events from the driver
    /// 3. Executes the actions the app produces
    /// 4. Starts the sandbox fetch once the delay elapses
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(&mut self) -> Result<(), D::Error> {
        self.app.clear_credentials();
        self.sandbox_deadline = Some(self.driver.now() + AUTO_CONNECT_DELAY);
        self.driver.render(&self.app)?;

        loop {
            let actions = self.driver.poll_event(&mut self.app).await?;
            if self.process_actions(actions)? {
                break;
            }
            self.poll_auto_connect();
        }

        self.driver.stop();
        Ok(())
    }

    /// Process actions returned by the App.
    ///
    /// Returns `true` if the application should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Quit => return Ok(true),
                AppAction::Connect => {
                    // A connect supersedes the pending auto-connect.
                    self.sandbox_deadline = None;
                    self.driver.begin_connect(self.app.options().clone());
                },
                AppAction::CancelConnect => self.driver.cancel_connect(),
            }
        }
        Ok(false)
    }

    /// Start the sandbox fetch once the armed delay has elapsed.
    ///
    /// Skipped entirely if the app is no longer disconnected by then.
    fn poll_auto_connect(&mut self) {
        let Some(deadline) = self.sandbox_deadline else {
            return;
        };
        if self.driver.now() < deadline {
            return;
        }
        self.sandbox_deadline = None;

        if *self.app.connection_state() == ConnectionState::Disconnected {
            self.driver.begin_sandbox_fetch();
        } else {
            tracing::debug!("skipping sandbox auto-connect, already connecting or connected");
        }
    }

    /// Get a reference to the App.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the App.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Get a reference to the driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
