use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use log::LevelFilter;
use shortlist_core::{update, AppState, AppViewModel, Msg};
use shortlist_engine::{EngineConfig, ReqwestScoringClient, ScoringClient, SubmitError};
use shortlist_logging::{shortlist_debug, shortlist_info, LogDestination};

use crate::effects::EffectRunner;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("engine failed to start: {0}")]
    Engine(#[from] std::io::Error),
    #[error("scoring client unavailable: {0}")]
    Client(#[from] SubmitError),
}

/// Single owner of [`AppState`]. UI events and engine outcomes both arrive as
/// [`Msg`]s and are applied one at a time.
pub struct Session {
    state: AppState,
    runner: EffectRunner,
    msg_tx: mpsc::Sender<Msg>,
    msg_rx: mpsc::Receiver<Msg>,
}

impl Session {
    /// Process entry point: installs the global logger, then starts a session.
    /// Only the first logger installed in a process takes effect.
    pub fn start(
        config: EngineConfig,
        log_destination: LogDestination,
        level: LevelFilter,
    ) -> Result<Self, SessionError> {
        shortlist_logging::initialize(log_destination, level);
        shortlist_info!(
            "session starting: collaborator={} downloads={:?}",
            config.client.base_url,
            config.output_dir
        );
        Self::new(config)
    }

    /// Session talking to the scoring service described by `config.client`.
    pub fn new(config: EngineConfig) -> Result<Self, SessionError> {
        let client = ReqwestScoringClient::new(config.client.clone())?;
        Self::with_client(config, Arc::new(client))
    }

    pub fn with_client(
        config: EngineConfig,
        client: Arc<dyn ScoringClient>,
    ) -> Result<Self, SessionError> {
        let (msg_tx, msg_rx) = mpsc::channel();
        let runner = EffectRunner::new(&config, client, msg_tx.clone())?;
        Ok(Self {
            state: AppState::new(),
            runner,
            msg_tx,
            msg_rx,
        })
    }

    /// Sender for posting messages from other threads; they are applied by
    /// [`Session::process_pending`] or [`Session::wait_until`].
    pub fn sender(&self) -> mpsc::Sender<Msg> {
        self.msg_tx.clone()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    /// Apply one message and run its effects. Returns a fresh view model if
    /// anything visible changed.
    pub fn dispatch(&mut self, msg: Msg) -> Option<AppViewModel> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        if !effects.is_empty() {
            shortlist_debug!("running {} effect(s)", effects.len());
            self.runner.run(effects);
        }

        let view = self.state.view();
        self.state.consume_dirty().then_some(view)
    }

    /// Drain queued messages; returns the latest view if any of them changed it.
    pub fn process_pending(&mut self) -> Option<AppViewModel> {
        let mut latest = None;
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(view) = self.dispatch(msg) {
                latest = Some(view);
            }
        }
        latest
    }

    /// Apply queued messages until `done` holds or `timeout` passes.
    pub fn wait_until(&mut self, timeout: Duration, done: impl Fn(&AppState) -> bool) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            if done(&self.state) {
                return true;
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            match self.msg_rx.recv_timeout(remaining) {
                Ok(msg) => {
                    self.dispatch(msg);
                }
                Err(_) => return done(&self.state),
            }
        }
    }
}
