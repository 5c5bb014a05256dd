//! Terminal UI for Roomdial
//!
//! A thin shell over [`roomdial_app::Driver`] that provides
//! terminal-specific I/O. All orchestration logic lives in the
//! generic [`roomdial_app::Runtime`].
//!
//! This crate handles terminal rendering, form input, the simulated
//! room engine, and the sandbox credential fetch.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod engine;
pub mod input;
pub mod sandbox;
pub mod terminal;
pub mod ui;

pub use roomdial_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
pub use sandbox::SandboxClient;
pub use terminal::{TerminalDriver, TerminalError};
