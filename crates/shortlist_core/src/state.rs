use crate::notification::Notifications;
use crate::view_model::{
    batch_summary, project_detail, project_row, project_single, AppViewModel, BatchView,
    SelectedFileView, SingleView, SubmitButtonView, BATCH_BUSY_LABEL, BATCH_SUBMIT_LABEL,
    SINGLE_BUSY_LABEL, SINGLE_SUBMIT_LABEL,
};
use crate::{
    BatchResultSet, Effect, Notification, NotificationId, NotificationLevel, RequestId,
    ResultStore, ResumeFile, SingleAnalysis,
};

/// Which output panel of a form is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Panel {
    /// Nothing submitted yet.
    #[default]
    Empty,
    /// A request is in flight; results and errors are hidden.
    Loading,
    Results,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct BatchForm {
    pub(crate) resumes: Vec<ResumeFile>,
    pub(crate) job_description: String,
    pub(crate) panel: Panel,
    pub(crate) in_flight: Option<RequestId>,
    pub(crate) detail: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct SingleForm {
    pub(crate) resume: Option<ResumeFile>,
    pub(crate) job_description: String,
    pub(crate) panel: Panel,
    pub(crate) in_flight: Option<RequestId>,
    pub(crate) result: Option<SingleAnalysis>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub(crate) batch: BatchForm,
    pub(crate) single: SingleForm,
    pub(crate) store: ResultStore,
    pub(crate) notifications: Notifications,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &ResultStore {
        &self.store
    }

    pub fn notifications(&self) -> &[Notification] {
        self.notifications.items()
    }

    pub fn is_batch_loading(&self) -> bool {
        self.batch.in_flight.is_some()
    }

    pub fn is_single_loading(&self) -> bool {
        self.single.in_flight.is_some()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            batch: self.batch_view(),
            single: self.single_view(),
            notifications: self.notifications.items().to_vec(),
            dirty: self.dirty,
        }
    }

    fn batch_view(&self) -> BatchView {
        let loading = self.is_batch_loading();
        let results_visible = self.batch.panel == Panel::Results;
        BatchView {
            selected_files: self.batch.resumes.iter().map(SelectedFileView::from).collect(),
            job_description: self.batch.job_description.clone(),
            submit: SubmitButtonView {
                enabled: !loading,
                label: if loading {
                    BATCH_BUSY_LABEL
                } else {
                    BATCH_SUBMIT_LABEL
                },
            },
            busy: loading,
            error: match &self.batch.panel {
                Panel::Failed(message) => Some(message.clone()),
                _ => None,
            },
            results_visible,
            summary: results_visible.then(|| batch_summary(self.store.total_resumes())),
            rows: self
                .store
                .all()
                .iter()
                .enumerate()
                .map(|(index, result)| project_row(index, result))
                .collect(),
            detail: self
                .batch
                .detail
                .filter(|_| results_visible)
                .and_then(|index| self.store.get(index).map(|r| project_detail(index, r))),
        }
    }

    fn single_view(&self) -> SingleView {
        let loading = self.is_single_loading();
        SingleView {
            selected_file: self.single.resume.as_ref().map(SelectedFileView::from),
            job_description: self.single.job_description.clone(),
            submit: SubmitButtonView {
                enabled: !loading,
                label: if loading {
                    SINGLE_BUSY_LABEL
                } else {
                    SINGLE_SUBMIT_LABEL
                },
            },
            busy: loading,
            error: match &self.single.panel {
                Panel::Failed(message) => Some(message.clone()),
                _ => None,
            },
            result: match self.single.panel {
                Panel::Results => self.single.result.as_ref().map(project_single),
                _ => None,
            },
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) -> Effect {
        self.mark_dirty();
        self.notifications.push(level, message)
    }

    pub(crate) fn drop_notification(&mut self, id: NotificationId) -> bool {
        let removed = self.notifications.remove(id);
        if removed {
            self.mark_dirty();
        }
        removed
    }

    fn allocate_request_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.next_request_id
    }

    pub(crate) fn begin_batch(&mut self) -> RequestId {
        let id = self.allocate_request_id();
        self.batch.in_flight = Some(id);
        self.batch.panel = Panel::Loading;
        self.batch.detail = None;
        self.mark_dirty();
        id
    }

    /// Leave the loading state if `request_id` is the one in flight.
    pub(crate) fn finish_batch(&mut self, request_id: RequestId) -> bool {
        if self.batch.in_flight != Some(request_id) {
            return false;
        }
        self.batch.in_flight = None;
        self.mark_dirty();
        true
    }

    pub(crate) fn apply_batch_results(&mut self, set: BatchResultSet) {
        self.store.replace(set);
        self.batch.detail = None;
        self.batch.panel = Panel::Results;
        self.mark_dirty();
    }

    pub(crate) fn apply_batch_failure(&mut self, message: impl Into<String>) {
        self.batch.panel = Panel::Failed(message.into());
        self.mark_dirty();
    }

    pub(crate) fn begin_single(&mut self) -> RequestId {
        let id = self.allocate_request_id();
        self.single.in_flight = Some(id);
        self.single.panel = Panel::Loading;
        self.mark_dirty();
        id
    }

    pub(crate) fn finish_single(&mut self, request_id: RequestId) -> bool {
        if self.single.in_flight != Some(request_id) {
            return false;
        }
        self.single.in_flight = None;
        self.mark_dirty();
        true
    }

    pub(crate) fn apply_single_result(&mut self, analysis: SingleAnalysis) {
        self.single.result = Some(analysis);
        self.single.panel = Panel::Results;
        self.mark_dirty();
    }

    pub(crate) fn apply_single_failure(&mut self, message: impl Into<String>) {
        self.single.panel = Panel::Failed(message.into());
        self.mark_dirty();
    }
}
