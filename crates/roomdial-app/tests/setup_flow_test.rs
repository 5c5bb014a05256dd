//! Integration tests for the setup flow through the generic Runtime.
//!
//! A scripted driver with virtual time stands in for the terminal
//! frontend: user intents and background completions are played back
//! deterministically, and the oracle checks at the end verify the
//! resulting App state and the calls the runtime made.

use std::{collections::VecDeque, fmt, time::Duration};

use roomdial_app::{
    AUTO_CONNECT_DELAY, App, AppAction, AppEvent, ConnectionDetails, ConnectionState, Driver,
    RoomOptions, Runtime, SessionInfo,
};

/// Virtual time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct VirtualInstant(u128);

impl std::ops::Add<Duration> for VirtualInstant {
    type Output = VirtualInstant;

    fn add(self, rhs: Duration) -> VirtualInstant {
        VirtualInstant(self.0 + rhs.as_millis())
    }
}

/// Error type for the scripted driver. Never actually produced.
#[derive(Debug)]
struct ScriptError;

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "script error")
    }
}

impl std::error::Error for ScriptError {}

/// One scripted step, consumed per poll cycle.
enum Step {
    /// Advance virtual time, delivering a tick.
    Advance(Duration),
    /// Deliver a driver-side event to the app.
    Deliver(AppEvent),
    /// The user triggers a connect.
    Connect,
    /// The user triggers a cancel.
    Cancel,
}

/// How a scripted connect attempt resolves.
enum ConnectOutcome {
    /// Succeeds with a session echoing the requested options.
    Succeed,
    /// Fails with the given reason.
    Fail(String),
    /// Never resolves (for cancel tests).
    Hang,
}

/// Scripted driver: plays back steps and records runtime calls.
struct ScriptDriver {
    now: VirtualInstant,
    script: VecDeque<Step>,
    pending: VecDeque<AppEvent>,
    connect_outcome: ConnectOutcome,
    sandbox_response: Result<ConnectionDetails, String>,
    connect_calls: usize,
    cancel_calls: usize,
    sandbox_calls: usize,
    render_calls: usize,
}

impl ScriptDriver {
    fn new(script: Vec<Step>) -> Self {
        Self {
            now: VirtualInstant(0),
            script: script.into(),
            pending: VecDeque::new(),
            connect_outcome: ConnectOutcome::Succeed,
            sandbox_response: Ok(ConnectionDetails {
                server_url: "wss://x".into(),
                participant_token: "tok".into(),
            }),
            connect_calls: 0,
            cancel_calls: 0,
            sandbox_calls: 0,
            render_calls: 0,
        }
    }

    fn with_connect_outcome(mut self, outcome: ConnectOutcome) -> Self {
        self.connect_outcome = outcome;
        self
    }

    fn with_sandbox_response(mut self, response: Result<ConnectionDetails, String>) -> Self {
        self.sandbox_response = response;
        self
    }
}

impl Driver for ScriptDriver {
    type Error = ScriptError;
    type Instant = VirtualInstant;

    async fn poll_event(&mut self, app: &mut App) -> Result<Vec<AppAction>, ScriptError> {
        // Background completions drain before the script continues.
        if let Some(event) = self.pending.pop_front() {
            return Ok(app.handle(event));
        }

        match self.script.pop_front() {
            None => Ok(app.quit()),
            Some(Step::Advance(duration)) => {
                self.now = self.now + duration;
                Ok(app.handle(AppEvent::Tick))
            },
            Some(Step::Deliver(event)) => Ok(app.handle(event)),
            Some(Step::Connect) => Ok(app.connect()),
            Some(Step::Cancel) => Ok(app.cancel_connect()),
        }
    }

    fn begin_connect(&mut self, options: RoomOptions) {
        self.connect_calls += 1;
        match &self.connect_outcome {
            ConnectOutcome::Succeed => {
                self.pending.push_back(AppEvent::Connected {
                    session: SessionInfo {
                        url: options.url,
                        token: options.token,
                        room_name: "sandbox".into(),
                        participant_identity: "tester".into(),
                    },
                });
            },
            ConnectOutcome::Fail(reason) => {
                self.pending.push_back(AppEvent::ConnectFailed { reason: reason.clone() });
            },
            ConnectOutcome::Hang => {},
        }
    }

    fn cancel_connect(&mut self) {
        self.cancel_calls += 1;
    }

    fn begin_sandbox_fetch(&mut self) {
        self.sandbox_calls += 1;
        let event = match &self.sandbox_response {
            Ok(details) => AppEvent::SandboxReady { details: details.clone() },
            Err(reason) => AppEvent::SandboxFailed { reason: reason.clone() },
        };
        self.pending.push_back(event);
    }

    fn now(&self) -> VirtualInstant {
        self.now
    }

    fn render(&mut self, _app: &App) -> Result<(), ScriptError> {
        self.render_calls += 1;
        Ok(())
    }

    fn stop(&mut self) {}
}

async fn run_script(driver: ScriptDriver) -> Runtime<ScriptDriver> {
    let mut runtime = Runtime::new(driver);
    runtime.run().await.unwrap();
    runtime
}

#[tokio::test]
async fn mount_clears_credentials() {
    let mut runtime = Runtime::new(ScriptDriver::new(vec![]));
    runtime.app_mut().options_mut().url = "wss://stale".into();
    runtime.app_mut().options_mut().token = "stale-token".into();

    runtime.run().await.unwrap();

    assert!(runtime.app().options().url.is_empty());
    assert!(runtime.app().options().token.is_empty());
}

#[tokio::test]
async fn sandbox_success_populates_fields_and_connects_once() {
    let driver = ScriptDriver::new(vec![Step::Advance(AUTO_CONNECT_DELAY)]);
    let runtime = run_script(driver).await;

    assert_eq!(runtime.driver().sandbox_calls, 1);
    assert_eq!(runtime.driver().connect_calls, 1);
    assert!(runtime.driver().render_calls > 0);
    assert_eq!(runtime.app().options().url, "wss://x");
    assert_eq!(runtime.app().options().token, "tok");
    assert!(matches!(runtime.app().connection_state(), ConnectionState::Connected { .. }));
    assert_eq!(runtime.app().history().len(), 1);
}

#[tokio::test]
async fn sandbox_failure_leaves_fields_empty_and_never_connects() {
    let driver = ScriptDriver::new(vec![Step::Advance(AUTO_CONNECT_DELAY)])
        .with_sandbox_response(Err("HTTP 500".into()));
    let runtime = run_script(driver).await;

    assert_eq!(runtime.driver().sandbox_calls, 1);
    assert_eq!(runtime.driver().connect_calls, 0);
    assert!(runtime.app().options().url.is_empty());
    assert!(runtime.app().options().token.is_empty());
    assert!(!runtime.app().should_show_disconnect_reason());
    assert!(matches!(runtime.app().connection_state(), ConnectionState::Disconnected));
}

#[tokio::test]
async fn auto_connect_waits_for_the_full_delay() {
    let delay = AUTO_CONNECT_DELAY - Duration::from_secs(1);
    let driver = ScriptDriver::new(vec![Step::Advance(delay)]);
    let runtime = run_script(driver).await;

    assert_eq!(runtime.driver().sandbox_calls, 0);
}

#[tokio::test]
async fn user_connect_supersedes_auto_connect() {
    let driver = ScriptDriver::new(vec![Step::Connect, Step::Advance(AUTO_CONNECT_DELAY)]);
    let runtime = run_script(driver).await;

    assert_eq!(runtime.driver().connect_calls, 1);
    assert_eq!(runtime.driver().sandbox_calls, 0);
}

#[tokio::test]
async fn cancel_aborts_the_attempt() {
    let driver = ScriptDriver::new(vec![Step::Connect, Step::Cancel])
        .with_connect_outcome(ConnectOutcome::Hang);
    let runtime = run_script(driver).await;

    assert_eq!(runtime.driver().connect_calls, 1);
    assert_eq!(runtime.driver().cancel_calls, 1);
    assert!(!runtime.app().is_connecting());
    assert!(!runtime.app().should_show_disconnect_reason());
}

#[tokio::test]
async fn connect_failure_raises_the_alert() {
    let driver = ScriptDriver::new(vec![Step::Connect])
        .with_connect_outcome(ConnectOutcome::Fail("token expired".into()));
    let runtime = run_script(driver).await;

    assert!(runtime.app().should_show_disconnect_reason());
    assert_eq!(runtime.app().latest_error(), Some("token expired"));
    assert!(matches!(runtime.app().connection_state(), ConnectionState::Disconnected));
}

#[tokio::test]
async fn disconnect_with_reason_raises_the_alert() {
    let driver = ScriptDriver::new(vec![
        Step::Connect,
        Step::Deliver(AppEvent::Disconnected { reason: Some("server closed".into()) }),
    ]);
    let runtime = run_script(driver).await;

    assert!(runtime.app().should_show_disconnect_reason());
    assert_eq!(runtime.app().latest_error(), Some("server closed"));
}

#[tokio::test]
async fn reconnect_to_same_room_keeps_one_history_entry() {
    let driver = ScriptDriver::new(vec![
        Step::Connect,
        Step::Deliver(AppEvent::Disconnected { reason: None }),
        Step::Connect,
    ]);
    let runtime = run_script(driver).await;

    assert_eq!(runtime.driver().connect_calls, 2);
    assert_eq!(runtime.app().history().len(), 1);
}
