//! Application layer for Roomdial
//!
//! Pure state machine and generic runtime for the connection setup
//! screen, enabling deterministic testing with the same code that runs
//! against a real terminal.
//!
//! # Components
//!
//! - [`App`]: setup-screen state machine (options form, connection
//!   state, recent connections, error surface)
//! - [`Driver`]: trait for platform-specific I/O abstraction
//! - [`Runtime`]: generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod driver;
mod event;
mod history;
mod input;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::App;
pub use driver::Driver;
pub use event::AppEvent;
pub use history::{ConnectionHistory, ConnectionHistoryEntry};
pub use input::KeyInput;
pub use runtime::{AUTO_CONNECT_DELAY, Runtime};
pub use state::{
    ConnectionDetails, ConnectionState, RoomOptions, SessionInfo, TextField, Toggle,
};
