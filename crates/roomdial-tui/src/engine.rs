//! In-process simulated room engine.
//!
//! The real media engine is an external collaborator; this stand-in
//! validates the room options and produces a session after a short
//! dial delay so the setup screen exercises real state transitions
//! against a live event loop.

use std::time::Duration;

use rand::Rng;
use roomdial_app::{RoomOptions, SessionInfo};
use thiserror::Error;

/// Simulated dial latency.
const DIAL_DELAY: Duration = Duration::from_millis(400);

/// Errors reported by the simulated engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// URL missing or not a websocket URL.
    #[error("invalid server URL: {0:?}")]
    InvalidUrl(String),

    /// Token empty.
    #[error("participant token is empty")]
    MissingToken,

    /// E2EE enabled without a key.
    #[error("E2EE is enabled but the key is empty")]
    MissingE2eeKey,
}

/// Dial the room described by `options`.
///
/// # Errors
///
/// Returns an error if the options fail validation.
pub async fn connect(options: &RoomOptions) -> Result<SessionInfo, EngineError> {
    validate(options)?;
    tokio::time::sleep(DIAL_DELAY).await;

    let identity: u16 = rand::rng().random();
    Ok(SessionInfo {
        url: options.url.clone(),
        token: options.token.clone(),
        room_name: room_name_from_url(&options.url),
        participant_identity: format!("user-{identity:04x}"),
    })
}

fn validate(options: &RoomOptions) -> Result<(), EngineError> {
    if !(options.url.starts_with("ws://") || options.url.starts_with("wss://")) {
        return Err(EngineError::InvalidUrl(options.url.clone()));
    }
    if options.token.is_empty() {
        return Err(EngineError::MissingToken);
    }
    if options.e2ee && options.e2ee_key.is_empty() {
        return Err(EngineError::MissingE2eeKey);
    }
    Ok(())
}

/// Room name derived from the URL host. The real engine reports the
/// name from the token grants instead.
fn room_name_from_url(url: &str) -> String {
    let stripped = url.trim_start_matches("wss://").trim_start_matches("ws://");
    let host = stripped.split(['/', ':']).next().unwrap_or(stripped);
    if host.is_empty() { "room".into() } else { host.to_owned() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(url: &str, token: &str) -> RoomOptions {
        RoomOptions { url: url.into(), token: token.into(), ..RoomOptions::default() }
    }

    #[test]
    fn rejects_non_websocket_url() {
        let result = validate(&options("https://a.example", "tok"));
        assert!(matches!(result, Err(EngineError::InvalidUrl(_))));
    }

    #[test]
    fn rejects_empty_token() {
        let result = validate(&options("wss://a.example", ""));
        assert!(matches!(result, Err(EngineError::MissingToken)));
    }

    #[test]
    fn rejects_e2ee_without_key() {
        let mut opts = options("wss://a.example", "tok");
        opts.e2ee = true;
        assert!(matches!(validate(&opts), Err(EngineError::MissingE2eeKey)));
    }

    #[test]
    fn room_name_is_url_host() {
        assert_eq!(room_name_from_url("wss://demo.example:443/rtc"), "demo.example");
        assert_eq!(room_name_from_url("ws://localhost:7880"), "localhost");
    }

    #[tokio::test]
    async fn connect_produces_session_echoing_options() {
        let session = connect(&options("wss://demo.example", "tok")).await.unwrap();

        assert_eq!(session.url, "wss://demo.example");
        assert_eq!(session.token, "tok");
        assert_eq!(session.room_name, "demo.example");
        assert!(session.participant_identity.starts_with("user-"));
    }
}
