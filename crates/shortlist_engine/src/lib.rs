//! Shortlist engine: talks to the scoring service, runs timers and writes downloads.
mod client;
mod engine;
mod export;
mod filename;
mod persist;
mod types;

pub use client::{
    decode_envelope, ClientSettings, ReqwestScoringClient, ScoringClient, UNSPECIFIED_FAILURE,
};
pub use engine::{EngineConfig, EngineHandle};
pub use export::{
    build_batch_artifact, build_entry_artifact, encode_csv, encode_entry, encode_json, Clock,
    DownloadArtifact, ExportError, Exporter, CSV_HEADERS,
};
pub use filename::entry_download_filename;
pub use persist::{
    ensure_output_dir, AtomicFileWriter, DirectoryDownloadSink, DownloadSink, PersistError,
};
pub use types::{EngineEvent, FailureKind, SubmitError};
