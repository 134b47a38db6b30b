use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use shortlist_core::{AnalysisResult, BatchResultSet, ContactInfo, ExportFormat};
use shortlist_engine::{
    build_batch_artifact, build_entry_artifact, decode_envelope, encode_csv, encode_entry,
    encode_json, entry_download_filename, DirectoryDownloadSink, DownloadArtifact, DownloadSink,
    ExportError, Exporter, PersistError, CSV_HEADERS,
};
use tempfile::TempDir;

const STAMP: &str = "2024-03-01T12:00:00.000Z";

fn entry(filename: &str, score: f64) -> AnalysisResult {
    AnalysisResult {
        filename: filename.to_string(),
        match_score: score,
        contact_info: Some(ContactInfo {
            email: Some("dana@example.com".to_string()),
            phone: Some(String::new()),
            ..ContactInfo::default()
        }),
        common_skills: vec!["python".to_string(), "sql".to_string()],
        missing_skills: vec!["docker".to_string()],
        suggestions: "Say \"hello\", then list projects.".to_string(),
        ..AnalysisResult::default()
    }
}

fn read_csv(text: &str) -> Vec<Vec<String>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(text.as_bytes())
        .records()
        .map(|record| record.unwrap().iter().map(str::to_string).collect())
        .collect()
}

#[test]
fn csv_has_header_and_one_quoted_row_per_result() {
    let results = vec![entry("dana.pdf", 87.5), entry("eve, jr.pdf", 42.4)];
    let text = encode_csv(&results).unwrap();

    assert!(text.starts_with("\"Rank\",\"Filename\",\"Match Score\""));
    assert!(text.contains("\"Say \"\"hello\"\", then list projects.\""));

    let rows = read_csv(&text);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], CSV_HEADERS.iter().map(|h| h.to_string()).collect::<Vec<_>>());
    assert_eq!(
        rows[1],
        vec![
            "1",
            "dana.pdf",
            "88",
            "dana@example.com",
            "",
            "python; sql",
            "docker",
            "Say \"hello\", then list projects.",
        ]
    );
    assert_eq!(rows[2][0], "2");
    assert_eq!(rows[2][1], "eve, jr.pdf");
    assert_eq!(rows[2][2], "42");
}

#[test]
fn csv_leaves_missing_contact_blank() {
    let mut bare = entry("x.pdf", 10.0);
    bare.contact_info = None;
    let rows = read_csv(&encode_csv(&[bare]).unwrap());
    assert_eq!(rows[1][3], "");
    assert_eq!(rows[1][4], "");
}

#[test]
fn json_keeps_full_precision_of_built_results() {
    let text = encode_json(&[entry("dana.pdf", 87.456)], STAMP).unwrap();

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["analysis_date"], STAMP);
    assert_eq!(value["total_resumes"], 1);
    assert_eq!(value["results"][0]["match_score"], 87.456);
    assert_eq!(value["results"][0]["common_skills"][1], "sql");
    assert!(text.contains("\n  \"analysis_date\""));
}

#[test]
fn json_export_reproduces_decoded_results_exactly() {
    let results = serde_json::json!([
        {"filename": "a.pdf", "match_score": 87,
         "contact_info": {"email": "x@y.z"},
         "common_skills": ["rust"], "missing_skills": [], "suggestions": "",
         "experience_years": 6},
        {"filename": "b.pdf", "match_score": 41.25,
         "common_skills": null, "missing_skills": ["go"], "suggestions": "More Go."}
    ]);
    let body = serde_json::json!({
        "success": true,
        "data": {"total_resumes": 2, "results": results.clone()}
    })
    .to_string();
    let set: BatchResultSet = decode_envelope(&body).unwrap();

    let text = encode_json(&set.results, STAMP).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["results"], results);

    let entry_text = encode_entry(&set.results[0], STAMP).unwrap();
    assert!(entry_text.contains("\"match_score\": 87,"));
}

#[test]
fn null_score_and_filename_degrade_instead_of_failing_the_batch() {
    let body = r#"{"success": true, "data": {"total_resumes": 2, "results": [
        {"filename": null, "match_score": null, "contact_info": {"email": 42}},
        {"filename": "ok.pdf", "match_score": "high"}
    ]}}"#;
    let set: BatchResultSet = decode_envelope(body).unwrap();

    assert_eq!(set.results.len(), 2);
    assert_eq!(set.results[0].filename, "");
    assert_eq!(set.results[0].match_score, 0.0);
    assert_eq!(set.results[0].contact_info.as_ref().and_then(ContactInfo::email), None);
    assert_eq!(set.results[1].filename, "ok.pdf");
    assert_eq!(set.results[1].match_score, 0.0);
    assert_eq!(encode_csv(&set.results).unwrap().lines().count(), 3);
}

#[test]
fn entry_json_uses_fixed_field_names() {
    let text = encode_entry(&entry("dana.pdf", 71.25), STAMP).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "contact_info",
            "filename",
            "match_score",
            "matched_skills",
            "missing_skills",
            "suggestions",
            "timestamp",
        ]
    );
    assert_eq!(value["match_score"], 71.25);
    assert_eq!(value["matched_skills"][0], "python");
    assert_eq!(value["timestamp"], STAMP);
}

#[test]
fn artifacts_carry_fixed_names_and_types() {
    let results = vec![entry("dana.pdf", 50.0)];

    let csv = build_batch_artifact(ExportFormat::Csv, &results, STAMP).unwrap();
    assert_eq!(csv.filename, "batch_analysis_results.csv");
    assert_eq!(csv.content_type, "text/csv");

    let json = build_batch_artifact(ExportFormat::Json, &results, STAMP).unwrap();
    assert_eq!(json.filename, "batch_analysis_results.json");
    assert_eq!(json.content_type, "application/json");

    let single = build_entry_artifact(&results[0], STAMP).unwrap();
    assert_eq!(single.filename, "dana_analysis.json");
}

#[test]
fn empty_result_list_is_not_exported() {
    let err = build_batch_artifact(ExportFormat::Csv, &[], STAMP).unwrap_err();
    assert!(matches!(err, ExportError::NoResults));
}

#[test]
fn entry_filenames_strip_pdf_suffix_and_unsafe_characters() {
    assert_eq!(entry_download_filename("Jane Doe.PDF"), "Jane Doe_analysis.json");
    assert_eq!(entry_download_filename("cv.pdf.pdf"), "cv.pdf_analysis.json");
    assert_eq!(entry_download_filename("notes.docx"), "notes.docx_analysis.json");
    assert_eq!(entry_download_filename("a/b:c.pdf"), "a_b_c_analysis.json");
    assert_eq!(entry_download_filename(".pdf"), "resume_analysis.json");
    assert_eq!(entry_download_filename("con.pdf"), "con__analysis.json");
}

#[derive(Default)]
struct RecordingSink {
    delivered: Mutex<Vec<DownloadArtifact>>,
}

impl DownloadSink for RecordingSink {
    fn deliver(&self, artifact: &DownloadArtifact) -> Result<PathBuf, PersistError> {
        self.delivered.lock().unwrap().push(artifact.clone());
        Ok(PathBuf::from(&artifact.filename))
    }
}

#[test]
fn exporter_stamps_artifacts_with_clock() {
    let sink = Arc::new(RecordingSink::default());
    let exporter = Exporter::new(sink.clone(), Arc::new(|| STAMP.to_string()));

    exporter
        .export_batch(ExportFormat::Json, &[entry("dana.pdf", 1.0)])
        .unwrap();
    exporter.download_entry(&entry("dana.pdf", 1.0)).unwrap();

    let delivered = sink.delivered.lock().unwrap();
    assert_eq!(delivered.len(), 2);
    assert!(delivered[0].body.contains(STAMP));
    assert_eq!(delivered[1].filename, "dana_analysis.json");
    assert!(delivered[1].body.contains(STAMP));
}

#[test]
fn directory_sink_writes_and_replaces_files() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("downloads");
    let exporter = Exporter::new(
        Arc::new(DirectoryDownloadSink::new(out.clone())),
        Arc::new(|| STAMP.to_string()),
    );

    let first = exporter
        .export_batch(ExportFormat::Csv, &[entry("dana.pdf", 1.0)])
        .unwrap();
    let second = exporter
        .export_batch(ExportFormat::Csv, &[entry("eve.pdf", 2.0)])
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first, out.join("batch_analysis_results.csv"));
    let text = fs::read_to_string(&second).unwrap();
    assert!(text.contains("eve.pdf"));
    assert!(!text.contains("dana.pdf"));
    assert_eq!(fs::read_dir(&out).unwrap().count(), 1);
}
