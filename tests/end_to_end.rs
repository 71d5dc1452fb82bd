//! End-to-end comparison runs against scripted resolvers.

mod helpers;

use dns_compare::{run_compare_with, FailureKind, RecordReader};
use helpers::{read_artifact, test_config, write_records, FakeResolver};
use tempfile::TempDir;

#[tokio::test]
async fn test_identical_answers() {
    let temp_dir = TempDir::new().unwrap();
    let records = write_records(temp_dir.path(), "example.com,A\n");
    let config = test_config(temp_dir.path(), records);

    let first = FakeResolver::new("192.0.2.1").answer("example.com", "A", &["93.184.216.34"]);
    let second = FakeResolver::new("192.0.2.2").answer("example.com", "A", &["93.184.216.34"]);

    let report = run_compare_with(&config, &first, &second).await.unwrap();

    assert_eq!(report.summary.records_tested, 1);
    assert_eq!(report.summary.mismatches, 0);
    assert_eq!(report.summary.exceptions, 0);
    assert_eq!(read_artifact(&report.artifacts.identical), "example.com\n");
    assert_eq!(read_artifact(&report.artifacts.problems), "");
    assert_eq!(read_artifact(&report.artifacts.errors), "");

    let run_log = read_artifact(&report.artifacts.run_log);
    assert!(run_log.contains("Starting DNS compare between 192.0.2.1 versus 192.0.2.2"));
    assert!(run_log.contains("example.com A: OK identical"));
    assert!(run_log.contains("Finished. 1 records tested, 0 mismatched, 0 exceptions."));
}

#[tokio::test]
async fn test_mismatched_answers() {
    let temp_dir = TempDir::new().unwrap();
    let records = write_records(temp_dir.path(), "example.com,A\n");
    let config = test_config(temp_dir.path(), records);

    let first = FakeResolver::new("192.0.2.1").answer("example.com", "A", &["93.184.216.34"]);
    let second = FakeResolver::new("192.0.2.2").answer("example.com", "A", &["93.184.216.35"]);

    let report = run_compare_with(&config, &first, &second).await.unwrap();

    assert_eq!(report.summary.records_tested, 1);
    assert_eq!(report.summary.mismatches, 1);
    assert_eq!(read_artifact(&report.artifacts.problems), "example.com,A\n");
    assert_eq!(read_artifact(&report.artifacts.identical), "");

    let errors = read_artifact(&report.artifacts.errors);
    assert!(errors.starts_with("example.com A:\n"));
    assert!(errors.contains("192.0.2.1: ['93.184.216.34']"));
    assert!(errors.contains("192.0.2.2: ['93.184.216.35']"));
}

#[tokio::test]
async fn test_skipped_and_malformed_rows() {
    let temp_dir = TempDir::new().unwrap();
    let records = write_records(
        temp_dir.path(),
        "\n# comment line\nonlyname\nexample.com,A\n",
    );
    let config = test_config(temp_dir.path(), records);

    let first = FakeResolver::new("192.0.2.1").answer("example.com", "A", &["93.184.216.34"]);
    let second = FakeResolver::new("192.0.2.2").answer("example.com", "A", &["93.184.216.34"]);

    let report = run_compare_with(&config, &first, &second).await.unwrap();

    assert_eq!(report.summary.records_tested, 1);
    assert_eq!(report.parse_errors, 1);

    let exceptions = read_artifact(&report.artifacts.exceptions);
    assert_eq!(exceptions.lines().count(), 1);
    assert!(exceptions.starts_with("Ignoring bad data at line 3:"));
    assert!(read_artifact(&report.artifacts.run_log).contains("Ignoring bad data at line 3:"));
}

#[tokio::test]
async fn test_answer_order_and_case_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let records = write_records(temp_dir.path(), "example.com,NS\n");
    let config = test_config(temp_dir.path(), records);

    let first = FakeResolver::new("192.0.2.1").answer(
        "example.com",
        "NS",
        &["a.iana-servers.net.", "B.IANA-SERVERS.NET."],
    );
    let second = FakeResolver::new("192.0.2.2").answer(
        "example.com",
        "NS",
        &["b.iana-servers.net.", "a.iana-servers.net."],
    );

    let report = run_compare_with(&config, &first, &second).await.unwrap();
    assert_eq!(report.summary.mismatches, 0);
}

#[tokio::test]
async fn test_one_sided_failure_is_mismatch_and_exception() {
    let temp_dir = TempDir::new().unwrap();
    let records = write_records(temp_dir.path(), "example.com,A\n");
    let config = test_config(temp_dir.path(), records);

    let first = FakeResolver::new("192.0.2.1").answer("example.com", "A", &["93.184.216.34"]);
    let second = FakeResolver::new("192.0.2.2").fail(
        "example.com",
        "A",
        FailureKind::Timeout,
        "request timed out",
    );

    let report = run_compare_with(&config, &first, &second).await.unwrap();

    assert_eq!(report.summary.mismatches, 1);
    assert_eq!(report.summary.exceptions, 1);
    assert_eq!(report.summary.failures.get(FailureKind::Timeout), 1);

    let exceptions = read_artifact(&report.artifacts.exceptions);
    assert_eq!(
        exceptions,
        "Exception from 192.0.2.2: example.com A: \"request timed out\"\n"
    );
    let errors = read_artifact(&report.artifacts.errors);
    assert!(errors.contains("192.0.2.2: ['bad response \"request timed out\"']"));
}

#[tokio::test]
async fn test_matching_failures_on_both_sides() {
    let temp_dir = TempDir::new().unwrap();
    let records = write_records(temp_dir.path(), "missing.example,A\nother.example,A\n");
    let config = test_config(temp_dir.path(), records);

    // Same reason on both sides for the first record, different for the second
    let first = FakeResolver::new("192.0.2.1")
        .fail("missing.example", "A", FailureKind::NxDomain, "no such domain")
        .fail("other.example", "A", FailureKind::Timeout, "request timed out");
    let second = FakeResolver::new("192.0.2.2")
        .fail("missing.example", "A", FailureKind::NxDomain, "no such domain")
        .fail("other.example", "A", FailureKind::NxDomain, "no such domain");

    let report = run_compare_with(&config, &first, &second).await.unwrap();

    assert_eq!(report.summary.records_tested, 2);
    assert_eq!(report.summary.exceptions, 4);
    assert_eq!(report.summary.mismatches, 1);
    assert_eq!(read_artifact(&report.artifacts.problems), "other.example,A\n");
}

#[tokio::test]
async fn test_problems_file_feeds_a_rerun() {
    let temp_dir = TempDir::new().unwrap();
    let records = write_records(
        temp_dir.path(),
        "example.com,A\nexample.org,MX\nexample.net,TXT\n",
    );
    let config = test_config(temp_dir.path(), records);

    let first = FakeResolver::new("192.0.2.1")
        .answer("example.com", "A", &["93.184.216.34"])
        .answer("example.org", "MX", &["10 mail.example.org."])
        .answer("example.net", "TXT", &["v=spf1 -all"]);
    let second = FakeResolver::new("192.0.2.2")
        .answer("example.com", "A", &["93.184.216.34"])
        .answer("example.org", "MX", &["20 mail.example.org."])
        .answer("example.net", "TXT", &["v=spf1 ~all"]);

    let report = run_compare_with(&config, &first, &second).await.unwrap();
    assert_eq!(report.summary.mismatches, 2);

    let rerun: Vec<_> = RecordReader::open(&report.artifacts.problems)
        .unwrap()
        .map(|row| row.unwrap())
        .map(|request| (request.name, request.record_type))
        .collect();
    assert_eq!(
        rerun,
        vec![
            ("example.org".to_string(), "MX".to_string()),
            ("example.net".to_string(), "TXT".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_problems_file_keeps_quoted_fields() {
    let temp_dir = TempDir::new().unwrap();
    let records = write_records(temp_dir.path(), "\"odd,name.example\",TXT\n");
    let config = test_config(temp_dir.path(), records);

    let first = FakeResolver::new("192.0.2.1").answer("odd,name.example", "TXT", &["one"]);
    let second = FakeResolver::new("192.0.2.2").answer("odd,name.example", "TXT", &["two"]);

    let report = run_compare_with(&config, &first, &second).await.unwrap();
    assert_eq!(report.summary.mismatches, 1);
    assert_eq!(
        read_artifact(&report.artifacts.problems),
        "\"odd,name.example\",TXT\n"
    );

    let rerun: Vec<_> = RecordReader::open(&report.artifacts.problems)
        .unwrap()
        .map(|row| row.unwrap())
        .map(|request| (request.name, request.record_type))
        .collect();
    assert_eq!(
        rerun,
        vec![("odd,name.example".to_string(), "TXT".to_string())]
    );
}

#[tokio::test]
async fn test_missing_records_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path(), temp_dir.path().join("missing.csv"));

    let first = FakeResolver::new("192.0.2.1");
    let second = FakeResolver::new("192.0.2.2");

    let result = run_compare_with(&config, &first, &second).await;
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Failed to open records file"));
}

#[tokio::test]
async fn test_empty_records_file() {
    let temp_dir = TempDir::new().unwrap();
    let records = write_records(temp_dir.path(), "");
    let config = test_config(temp_dir.path(), records);

    let first = FakeResolver::new("192.0.2.1");
    let second = FakeResolver::new("192.0.2.2");

    let report = run_compare_with(&config, &first, &second).await.unwrap();
    assert_eq!(report.summary.records_tested, 0);
    assert!(read_artifact(&report.artifacts.run_log)
        .contains("Finished. 0 records tested, 0 mismatched, 0 exceptions."));
}
