use std::sync::{mpsc, Arc};
use std::time::Duration;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use shortlist_core::{BatchResultSet, ResumeFile, SingleAnalysis};
use shortlist_engine::{EngineEvent, EngineHandle, FailureKind, ScoringClient, SubmitError};

/// Answers batches with an empty set of the right size and panics on single
/// requests.
struct FakeClient;

#[async_trait]
impl ScoringClient for FakeClient {
    async fn analyze_batch(
        &self,
        resumes: &[ResumeFile],
        _job_description: &str,
    ) -> Result<BatchResultSet, SubmitError> {
        if resumes.is_empty() {
            return Err(SubmitError::new(FailureKind::Rejected, "No files uploaded"));
        }
        Ok(BatchResultSet {
            total_resumes: resumes.len(),
            results: Vec::new(),
        })
    }

    async fn analyze_single(
        &self,
        _resume: &ResumeFile,
        _job_description: &str,
    ) -> Result<SingleAnalysis, SubmitError> {
        panic!("scoring blew up");
    }
}

fn engine() -> (EngineHandle, mpsc::Receiver<EngineEvent>) {
    let (event_tx, event_rx) = mpsc::channel();
    let handle = EngineHandle::new(Arc::new(FakeClient), event_tx).unwrap();
    (handle, event_rx)
}

const WAIT: Duration = Duration::from_secs(5);

#[test]
fn batch_completion_carries_request_id() {
    let (engine, events) = engine();
    engine.submit_batch(
        7,
        vec![ResumeFile::new("a.pdf", b"x".to_vec())],
        "desc".to_string(),
    );

    match events.recv_timeout(WAIT).unwrap() {
        EngineEvent::BatchCompleted { request_id, result } => {
            assert_eq!(request_id, 7);
            assert_eq!(result.unwrap().total_resumes, 1);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn collaborator_rejection_is_forwarded() {
    let (engine, events) = engine();
    engine.submit_batch(3, Vec::new(), "desc".to_string());

    match events.recv_timeout(WAIT).unwrap() {
        EngineEvent::BatchCompleted { result, .. } => {
            let err = result.unwrap_err();
            assert_eq!(err.kind, FailureKind::Rejected);
            assert_eq!(err.message, "No files uploaded");
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn panicking_request_still_completes() {
    let (engine, events) = engine();
    engine.submit_single(9, ResumeFile::new("a.pdf", b"x".to_vec()), "desc".to_string());

    match events.recv_timeout(WAIT).unwrap() {
        EngineEvent::SingleCompleted { request_id, result } => {
            assert_eq!(request_id, 9);
            assert_eq!(result.unwrap_err().kind, FailureKind::Aborted);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn dismiss_timer_fires_once() {
    let (engine, events) = engine();
    engine.schedule_dismiss(1, Duration::from_millis(20));

    assert_eq!(
        events.recv_timeout(WAIT).unwrap(),
        EngineEvent::DismissDue { id: 1 }
    );
    assert!(events.recv_timeout(Duration::from_millis(100)).is_err());
}

#[test]
fn cancelled_dismiss_timer_stays_silent() {
    let (engine, events) = engine();
    engine.schedule_dismiss(1, Duration::from_millis(150));
    engine.schedule_dismiss(2, Duration::from_millis(10));
    engine.cancel_dismiss(1);

    assert_eq!(
        events.recv_timeout(WAIT).unwrap(),
        EngineEvent::DismissDue { id: 2 }
    );
    assert!(events.recv_timeout(Duration::from_millis(400)).is_err());
}
