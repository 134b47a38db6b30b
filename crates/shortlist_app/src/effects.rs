use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use shortlist_core::{Effect, Msg, RequestId, SubmitFailure};
use shortlist_engine::{
    entry_download_filename, DirectoryDownloadSink, EngineConfig, EngineEvent, EngineHandle,
    Exporter, ScoringClient, SubmitError,
};
use shortlist_logging::{shortlist_debug, shortlist_info, shortlist_warn};

/// Executes effects produced by `update` and feeds their outcomes back as
/// messages on `msg_tx`.
pub struct EffectRunner {
    engine: EngineHandle,
    exporter: Exporter,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(
        config: &EngineConfig,
        client: Arc<dyn ScoringClient>,
        msg_tx: mpsc::Sender<Msg>,
    ) -> io::Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();
        let engine = EngineHandle::new(client, event_tx)?;
        let exporter = Exporter::new(
            Arc::new(DirectoryDownloadSink::new(config.output_dir.clone())),
            Arc::clone(&config.generated_at),
        );
        spawn_event_loop(event_rx, msg_tx.clone())?;
        Ok(Self {
            engine,
            exporter,
            msg_tx,
        })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitBatch {
                    request_id,
                    resumes,
                    job_description,
                } => {
                    shortlist_info!(
                        "SubmitBatch request_id={} files={} jd_chars={}",
                        request_id,
                        resumes.len(),
                        job_description.chars().count()
                    );
                    self.engine
                        .submit_batch(request_id, resumes, job_description);
                }
                Effect::SubmitSingle {
                    request_id,
                    resume,
                    job_description,
                } => {
                    shortlist_info!(
                        "SubmitSingle request_id={} file={}",
                        request_id,
                        resume.name
                    );
                    self.engine
                        .submit_single(request_id, resume, job_description);
                }
                Effect::ExportBatch { format, results } => {
                    let filename = format.filename().to_string();
                    let result = self
                        .exporter
                        .export_batch(format, &results)
                        .map(|path| shortlist_debug!("export written to {:?}", path))
                        .map_err(|err| {
                            shortlist_warn!("export {} failed: {}", filename, err);
                            err.to_string()
                        });
                    self.send(Msg::ExportFinished { filename, result });
                }
                Effect::DownloadEntry { entry } => {
                    let filename = entry_download_filename(&entry.filename);
                    let result = self
                        .exporter
                        .download_entry(&entry)
                        .map(|_| ())
                        .map_err(|err| {
                            shortlist_warn!("download {} failed: {}", filename, err);
                            err.to_string()
                        });
                    self.send(Msg::EntryDownloaded { filename, result });
                }
                Effect::ScheduleDismiss { id, after } => self.engine.schedule_dismiss(id, after),
                Effect::CancelDismiss { id } => self.engine.cancel_dismiss(id),
            }
        }
    }

    fn send(&self, msg: Msg) {
        if self.msg_tx.send(msg).is_err() {
            shortlist_warn!("session inbox closed; message dropped");
        }
    }
}

fn spawn_event_loop(
    event_rx: mpsc::Receiver<EngineEvent>,
    msg_tx: mpsc::Sender<Msg>,
) -> io::Result<()> {
    thread::Builder::new()
        .name("shortlist-events".to_string())
        .spawn(move || {
            for event in event_rx {
                if msg_tx.send(map_event(event)).is_err() {
                    break;
                }
            }
        })?;
    Ok(())
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::BatchCompleted { request_id, result } => Msg::BatchCompleted {
            request_id,
            result: result.map_err(|err| to_failure(request_id, err)),
        },
        EngineEvent::SingleCompleted { request_id, result } => Msg::SingleCompleted {
            request_id,
            result: result.map_err(|err| to_failure(request_id, err)),
        },
        EngineEvent::DismissDue { id } => Msg::NotificationExpired { id },
    }
}

/// Only collaborator rejections keep their message; everything else reads as
/// a transport failure.
fn to_failure(request_id: RequestId, err: SubmitError) -> SubmitFailure {
    shortlist_warn!("request {} failed: {}", request_id, err);
    if err.is_rejection() {
        SubmitFailure::Rejected(err.message)
    } else {
        SubmitFailure::Transport
    }
}
