use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use shortlist_core::{NotificationId, RequestId, ResumeFile};
use shortlist_logging::{shortlist_debug, shortlist_error, shortlist_warn};
use tokio::task::{AbortHandle, JoinError};

use crate::client::{ClientSettings, ScoringClient};
use crate::export::Clock;
use crate::{EngineEvent, FailureKind, SubmitError};

pub struct EngineConfig {
    pub client: ClientSettings,
    /// Directory that receives exports and per-entry downloads.
    pub output_dir: PathBuf,
    pub generated_at: Clock,
}

impl EngineConfig {
    pub fn default_with_output(output_dir: PathBuf) -> Self {
        Self {
            client: ClientSettings::default(),
            output_dir,
            generated_at: Arc::new(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}

impl Clone for EngineConfig {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            output_dir: self.output_dir.clone(),
            generated_at: Arc::clone(&self.generated_at),
        }
    }
}

enum EngineCommand {
    SubmitBatch {
        request_id: RequestId,
        resumes: Vec<ResumeFile>,
        job_description: String,
    },
    SubmitSingle {
        request_id: RequestId,
        resume: ResumeFile,
        job_description: String,
    },
    ScheduleDismiss {
        id: NotificationId,
        after: Duration,
    },
    CancelDismiss {
        id: NotificationId,
    },
}

/// Runs requests and timers on a background tokio runtime. Every submitted
/// request produces exactly one completion event, even if its task panics.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(
        client: Arc<dyn ScoringClient>,
        event_tx: mpsc::Sender<EngineEvent>,
    ) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("shortlist-engine-worker")
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::Builder::new()
            .name("shortlist-engine".to_string())
            .spawn(move || {
                let mut timers: HashMap<NotificationId, AbortHandle> = HashMap::new();
                while let Ok(command) = cmd_rx.recv() {
                    timers.retain(|_, handle| !handle.is_finished());
                    handle_command(&runtime, &client, &event_tx, &mut timers, command);
                }
                shortlist_debug!("engine command channel closed");
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn submit_batch(
        &self,
        request_id: RequestId,
        resumes: Vec<ResumeFile>,
        job_description: String,
    ) {
        self.send(EngineCommand::SubmitBatch {
            request_id,
            resumes,
            job_description,
        });
    }

    pub fn submit_single(&self, request_id: RequestId, resume: ResumeFile, job_description: String) {
        self.send(EngineCommand::SubmitSingle {
            request_id,
            resume,
            job_description,
        });
    }

    pub fn schedule_dismiss(&self, id: NotificationId, after: Duration) {
        self.send(EngineCommand::ScheduleDismiss { id, after });
    }

    pub fn cancel_dismiss(&self, id: NotificationId) {
        self.send(EngineCommand::CancelDismiss { id });
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            shortlist_error!("engine thread is gone; command dropped");
        }
    }
}

fn handle_command(
    runtime: &tokio::runtime::Runtime,
    client: &Arc<dyn ScoringClient>,
    event_tx: &mpsc::Sender<EngineEvent>,
    timers: &mut HashMap<NotificationId, AbortHandle>,
    command: EngineCommand,
) {
    match command {
        EngineCommand::SubmitBatch {
            request_id,
            resumes,
            job_description,
        } => {
            let client = Arc::clone(client);
            let task = runtime.spawn(async move {
                client.analyze_batch(&resumes, &job_description).await
            });
            let event_tx = event_tx.clone();
            runtime.spawn(async move {
                let result = task.await.unwrap_or_else(|err| Err(aborted(request_id, err)));
                let _ = event_tx.send(EngineEvent::BatchCompleted { request_id, result });
            });
        }
        EngineCommand::SubmitSingle {
            request_id,
            resume,
            job_description,
        } => {
            let client = Arc::clone(client);
            let task = runtime.spawn(async move {
                client.analyze_single(&resume, &job_description).await
            });
            let event_tx = event_tx.clone();
            runtime.spawn(async move {
                let result = task.await.unwrap_or_else(|err| Err(aborted(request_id, err)));
                let _ = event_tx.send(EngineEvent::SingleCompleted { request_id, result });
            });
        }
        EngineCommand::ScheduleDismiss { id, after } => {
            let event_tx = event_tx.clone();
            let timer = runtime.spawn(async move {
                tokio::time::sleep(after).await;
                let _ = event_tx.send(EngineEvent::DismissDue { id });
            });
            if let Some(previous) = timers.insert(id, timer.abort_handle()) {
                previous.abort();
            }
        }
        EngineCommand::CancelDismiss { id } => {
            if let Some(timer) = timers.remove(&id) {
                timer.abort();
            }
        }
    }
}

fn aborted(request_id: RequestId, err: JoinError) -> SubmitError {
    shortlist_warn!("request {} did not finish: {}", request_id, err);
    SubmitError::new(FailureKind::Aborted, err.to_string())
}
