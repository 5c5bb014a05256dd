//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm
//! for keyboard events and ratatui for rendering. Connect attempts
//! and the sandbox fetch run as background tasks whose completions
//! flow back through an internal channel.

use std::{
    io::{self, Stdout, stdout},
    time::Instant,
};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use roomdial_app::{App, AppAction, AppEvent, Driver, KeyInput, RoomOptions};
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::{SandboxClient, engine, input::FormState, ui};

const EVENT_CHANNEL_CAPACITY: usize = 32;
const TICK_INTERVAL_MS: u64 = 100;

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm) and rendering (ratatui), and owns
/// the form input state plus the background tasks for the simulated
/// engine dial and the sandbox credential fetch.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    form: FormState,
    sandbox: SandboxClient,
    events_tx: mpsc::Sender<AppEvent>,
    events_rx: mpsc::Receiver<AppEvent>,
    connect_task: Option<tokio::task::AbortHandle>,
}

impl TerminalDriver {
    /// Create a new terminal driver.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be put into raw mode.
    pub fn new(sandbox: SandboxClient) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();
        let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

        Ok(Self {
            terminal,
            event_stream,
            form: FormState::new(),
            sandbox,
            events_tx,
            events_rx,
            connect_task: None,
        })
    }

    /// Convert crossterm `KeyCode` to `KeyInput`.
    fn convert_key(code: KeyCode) -> Option<KeyInput> {
        match code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Delete => Some(KeyInput::Delete),
            KeyCode::Tab => Some(KeyInput::Tab),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Up => Some(KeyInput::Up),
            KeyCode::Down => Some(KeyInput::Down),
            KeyCode::Home => Some(KeyInput::Home),
            KeyCode::End => Some(KeyInput::End),
            _ => None,
        }
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;
    type Instant = Instant;

    async fn poll_event(&mut self, app: &mut App) -> Result<Vec<AppAction>, TerminalError> {
        let timeout = tokio::time::Duration::from_millis(TICK_INTERVAL_MS);

        tokio::select! {
            biased;

            // Terminal events
            maybe_event = self.event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                        match Self::convert_key(key_event.code) {
                            Some(key_input) => Ok(self.form.handle_key(key_input, app)),
                            None => Ok(vec![]),
                        }
                    },
                    Some(Ok(Event::Resize(cols, rows))) => {
                        Ok(app.handle(AppEvent::Resize(cols, rows)))
                    },
                    Some(Err(e)) => Err(TerminalError::Io(e)),
                    _ => Ok(vec![]),
                }
            }

            // Background completions (engine dial, sandbox fetch)
            Some(event) = self.events_rx.recv() => {
                Ok(app.handle(event))
            }

            // Tick timeout
            () = tokio::time::sleep(timeout) => {
                Ok(app.handle(AppEvent::Tick))
            }
        }
    }

    fn begin_connect(&mut self, options: RoomOptions) {
        if let Some(task) = self.connect_task.take() {
            task.abort();
        }

        let tx = self.events_tx.clone();
        let task = tokio::spawn(async move {
            let event = match engine::connect(&options).await {
                Ok(session) => AppEvent::Connected { session },
                Err(e) => AppEvent::ConnectFailed { reason: e.to_string() },
            };
            if tx.send(event).await.is_err() {
                tracing::warn!("driver channel closed before connect completion");
            }
        });
        self.connect_task = Some(task.abort_handle());
    }

    fn cancel_connect(&mut self) {
        if let Some(task) = self.connect_task.take() {
            task.abort();
        }
    }

    fn begin_sandbox_fetch(&mut self) {
        let tx = self.events_tx.clone();
        let sandbox = self.sandbox.clone();

        tokio::spawn(async move {
            let event = match sandbox.fetch().await {
                Ok(details) => AppEvent::SandboxReady { details },
                Err(e) => AppEvent::SandboxFailed { reason: e.to_string() },
            };
            if tx.send(event).await.is_err() {
                tracing::warn!("driver channel closed before sandbox completion");
            }
        });
    }

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn render(&mut self, app: &App) -> Result<(), TerminalError> {
        let form = &self.form;
        self.terminal.draw(|frame| {
            ui::render(frame, app, form);
        })?;
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(task) = self.connect_task.take() {
            task.abort();
        }
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.stop();
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
