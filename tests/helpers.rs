// Shared test helpers: scripted resolvers and run setup.
//
// Runs use fake resolvers so no test touches the network.

#![allow(dead_code)] // Not every test file uses every helper

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use dns_compare::{Config, FailureKind, RecordRequest, RecordResolver, ResolutionOutcome};

/// A resolver answering from a fixed table.
///
/// Records missing from the table fail with `NoRecords`.
pub struct FakeResolver {
    label: String,
    answers: HashMap<(String, String), ResolutionOutcome>,
}

impl FakeResolver {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            answers: HashMap::new(),
        }
    }

    pub fn answer(mut self, name: &str, record_type: &str, answers: &[&str]) -> Self {
        self.answers.insert(
            (name.to_string(), record_type.to_string()),
            ResolutionOutcome::from_answers(answers.iter().copied()),
        );
        self
    }

    pub fn fail(mut self, name: &str, record_type: &str, kind: FailureKind, reason: &str) -> Self {
        self.answers.insert(
            (name.to_string(), record_type.to_string()),
            ResolutionOutcome::failed(kind, reason),
        );
        self
    }
}

impl RecordResolver for FakeResolver {
    fn label(&self) -> &str {
        &self.label
    }

    async fn resolve(&self, request: &RecordRequest) -> ResolutionOutcome {
        self.answers
            .get(&(request.name.clone(), request.record_type.clone()))
            .cloned()
            .unwrap_or_else(|| {
                ResolutionOutcome::failed(
                    FailureKind::NoRecords,
                    "The DNS response does not contain an answer to the question",
                )
            })
    }
}

/// Writes `contents` as the records file inside `dir`.
pub fn write_records(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("records.csv");
    std::fs::write(&path, contents).expect("Failed to write records file");
    path
}

/// A quiet config reading `records` and writing under `dir/output`.
pub fn test_config(dir: &Path, records: PathBuf) -> Config {
    Config {
        endpoint_a: "192.0.2.1".to_string(),
        endpoint_b: "192.0.2.2".to_string(),
        records,
        output_dir: dir.join("output"),
        show_progress: false,
        ..Default::default()
    }
}

/// Reads an artifact, panicking with its path if it is missing.
pub fn read_artifact(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
}
