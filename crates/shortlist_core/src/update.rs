use shortlist_logging::{shortlist_debug, shortlist_warn};

use crate::validate::{validate_batch, validate_single};
use crate::{AppState, Effect, Form, Msg, NotificationLevel};

pub const NO_RESULTS_MESSAGE: &str = "No results to export.";
pub const SAMPLE_LOADED_MESSAGE: &str = "Sample job description loaded successfully!";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ResumesSelected(files) => {
            state.batch.resumes = files;
            state.mark_dirty();
            Vec::new()
        }
        Msg::JobDescriptionChanged(text) => {
            state.batch.job_description = text;
            state.mark_dirty();
            Vec::new()
        }
        Msg::BatchSubmitted => {
            // The submit control is disabled while a request is in flight.
            if state.is_batch_loading() {
                shortlist_debug!("batch submit ignored: request already in flight");
                return (state, Vec::new());
            }
            if let Err(err) = validate_batch(&state.batch.resumes, &state.batch.job_description) {
                let effect = state.notify(err.level(), err.to_string());
                return (state, vec![effect]);
            }
            let request_id = state.begin_batch();
            vec![Effect::SubmitBatch {
                request_id,
                resumes: state.batch.resumes.clone(),
                job_description: state.batch.job_description.clone(),
            }]
        }
        Msg::BatchCompleted { request_id, result } => {
            if !state.finish_batch(request_id) {
                shortlist_warn!("dropping batch response for stale request {}", request_id);
                return (state, Vec::new());
            }
            match result {
                Ok(set) => state.apply_batch_results(set),
                Err(failure) => state.apply_batch_failure(failure.message()),
            }
            Vec::new()
        }
        Msg::DetailOpened { index } => {
            if state.store.get(index).is_some() {
                state.batch.detail = Some(index);
                state.mark_dirty();
            } else {
                shortlist_warn!("detail requested for missing row {}", index);
            }
            Vec::new()
        }
        Msg::DetailClosed => {
            if state.batch.detail.take().is_some() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::EntryDownloadRequested { index } => match state.store.get(index) {
            Some(entry) => vec![Effect::DownloadEntry {
                entry: entry.clone(),
            }],
            None => {
                shortlist_warn!("download requested for missing row {}", index);
                Vec::new()
            }
        },
        Msg::EntryDownloaded { filename, result } => match result {
            Ok(()) => {
                shortlist_debug!("delivered {}", filename);
                Vec::new()
            }
            Err(err) => vec![state.notify(
                NotificationLevel::Danger,
                format!("Failed to download {filename}: {err}"),
            )],
        },
        Msg::ExportRequested(format) => {
            if state.store.is_empty() {
                vec![state.notify(NotificationLevel::Warning, NO_RESULTS_MESSAGE)]
            } else {
                vec![Effect::ExportBatch {
                    format,
                    results: state.store.all().to_vec(),
                }]
            }
        }
        Msg::ExportFinished { filename, result } => match result {
            Ok(()) => vec![state.notify(
                NotificationLevel::Success,
                format!("Successfully exported {filename}"),
            )],
            Err(err) => vec![state.notify(
                NotificationLevel::Danger,
                format!("Failed to export {filename}: {err}"),
            )],
        },
        Msg::SingleResumeSelected(file) => {
            state.single.resume = file;
            state.mark_dirty();
            Vec::new()
        }
        Msg::SingleJobDescriptionChanged(text) => {
            state.single.job_description = text;
            state.mark_dirty();
            Vec::new()
        }
        Msg::SingleSubmitted => {
            if state.is_single_loading() {
                shortlist_debug!("single submit ignored: request already in flight");
                return (state, Vec::new());
            }
            if let Err(err) =
                validate_single(state.single.resume.as_ref(), &state.single.job_description)
            {
                let effect = state.notify(err.level(), err.to_string());
                return (state, vec![effect]);
            }
            let Some(resume) = state.single.resume.clone() else {
                return (state, Vec::new());
            };
            let request_id = state.begin_single();
            vec![Effect::SubmitSingle {
                request_id,
                resume,
                job_description: state.single.job_description.clone(),
            }]
        }
        Msg::SingleCompleted { request_id, result } => {
            if !state.finish_single(request_id) {
                shortlist_warn!("dropping single response for stale request {}", request_id);
                return (state, Vec::new());
            }
            match result {
                Ok(analysis) => state.apply_single_result(analysis),
                Err(failure) => state.apply_single_failure(failure.message()),
            }
            Vec::new()
        }
        Msg::SampleJobDescriptionRequested { form, sample } => {
            let text = sample.text().to_string();
            match form {
                Form::Batch => state.batch.job_description = text,
                Form::Single => state.single.job_description = text,
            }
            vec![state.notify(NotificationLevel::Success, SAMPLE_LOADED_MESSAGE)]
        }
        Msg::NotificationExpired { id } => {
            state.drop_notification(id);
            Vec::new()
        }
        Msg::NotificationDismissed { id } => {
            if state.drop_notification(id) {
                vec![Effect::CancelDismiss { id }]
            } else {
                Vec::new()
            }
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
