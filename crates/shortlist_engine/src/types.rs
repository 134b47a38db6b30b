use std::fmt;

use shortlist_core::{BatchResultSet, NotificationId, RequestId, SingleAnalysis};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    BatchCompleted {
        request_id: RequestId,
        result: Result<BatchResultSet, SubmitError>,
    },
    SingleCompleted {
        request_id: RequestId,
        result: Result<SingleAnalysis, SubmitError>,
    },
    /// A notification's display time ran out.
    DismissDue { id: NotificationId },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct SubmitError {
    pub kind: FailureKind,
    pub message: String,
}

impl SubmitError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The collaborator answered, but with `success: false`.
    pub fn is_rejection(&self) -> bool {
        self.kind == FailureKind::Rejected
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    Network,
    Timeout,
    /// Body was not a valid response envelope.
    Malformed,
    Rejected,
    /// The request task panicked or was cancelled.
    Aborted,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Malformed => write!(f, "malformed response"),
            FailureKind::Rejected => write!(f, "rejected"),
            FailureKind::Aborted => write!(f, "aborted"),
        }
    }
}
