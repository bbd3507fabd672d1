use std::path::PathBuf;

use taskaudit_domain::{HostName, Outcome, Status};
use taskaudit_report::{HostEntry, ReportConfig, ReportError, ReportSink, SummaryEntry};
use taskaudit_report_fs::FsReportSink;

fn sink_in(dir: &tempfile::TempDir) -> FsReportSink {
    FsReportSink::new(ReportConfig {
        output_dir: dir.path().to_path_buf(),
        ..ReportConfig::default()
    })
}

fn host(name: &str) -> HostName {
    HostName::new(name).unwrap()
}

fn read(path: PathBuf) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[tokio::test]
async fn test_host_entry_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let sink = sink_in(&dir);

    let entry = HostEntry::new(host("web1"), "Install package", Outcome::new(Status::Pass, "ok"));
    sink.write_host_entry(&entry).await.unwrap();

    assert_eq!(
        read(dir.path().join("web1.csv")),
        "\nInstall package, PASS\n ok\n"
    );
}

#[tokio::test]
async fn test_host_entries_append() {
    let dir = tempfile::tempdir().unwrap();
    let sink = sink_in(&dir);

    sink.write_host_entry(&HostEntry::new(
        host("web1"),
        "Install package",
        Outcome::new(Status::Pass, "ok"),
    ))
    .await
    .unwrap();
    sink.write_host_entry(&HostEntry::new(
        host("web1"),
        "Check service",
        Outcome::new(Status::Fail, "timeout"),
    ))
    .await
    .unwrap();

    assert_eq!(
        read(dir.path().join("web1.csv")),
        "\nInstall package, PASS\n ok\n\nCheck service, FAIL\n timeout\n"
    );
}

#[tokio::test]
async fn test_hosts_get_separate_files() {
    let dir = tempfile::tempdir().unwrap();
    let sink = sink_in(&dir);

    for name in ["web1", "web2"] {
        sink.write_host_entry(&HostEntry::new(
            host(name),
            "Ping",
            Outcome::new(Status::Pass, name),
        ))
        .await
        .unwrap();
    }

    assert_eq!(read(dir.path().join("web1.csv")), "\nPing, PASS\n web1\n");
    assert_eq!(read(dir.path().join("web2.csv")), "\nPing, PASS\n web2\n");
}

#[tokio::test]
async fn test_summary_lines_append_with_quote() {
    let dir = tempfile::tempdir().unwrap();
    let sink = sink_in(&dir);

    sink.write_summary_entry(&SummaryEntry::new("Install package", host("web1"), Status::Pass))
        .await
        .unwrap();
    sink.write_summary_entry(&SummaryEntry::new("Install package", host("web2"), Status::Fail))
        .await
        .unwrap();

    assert_eq!(
        read(dir.path().join("summary_report.csv")),
        "\nInstall package, web1, PASS'\nInstall package, web2, FAIL'"
    );
}

#[tokio::test]
async fn test_summary_without_quote() {
    let dir = tempfile::tempdir().unwrap();
    let sink = FsReportSink::new(ReportConfig {
        output_dir: dir.path().to_path_buf(),
        summary_trailing_quote: false,
        ..ReportConfig::default()
    });

    sink.write_summary_entry(&SummaryEntry::new("Debug dump", host("db1"), Status::Verify))
        .await
        .unwrap();

    assert_eq!(
        read(dir.path().join("summary_report.csv")),
        "\nDebug dump, db1, VERIFY"
    );
}

#[tokio::test]
async fn test_existing_content_is_preserved() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("summary_report.csv"), "previous run").unwrap();
    let sink = sink_in(&dir);

    sink.write_summary_entry(&SummaryEntry::new("Ping", host("web1"), Status::Pass))
        .await
        .unwrap();

    assert_eq!(
        read(dir.path().join("summary_report.csv")),
        "previous run\nPing, web1, PASS'"
    );
}

#[tokio::test]
async fn test_missing_output_dir_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("reports");
    let sink = FsReportSink::new(ReportConfig {
        output_dir: missing.clone(),
        ..ReportConfig::default()
    });

    let result = sink
        .write_host_entry(&HostEntry::new(
            host("web1"),
            "Ping",
            Outcome::new(Status::Pass, ""),
        ))
        .await;

    match result {
        Err(ReportError::Io { path, source }) => {
            assert_eq!(path, missing.join("web1.csv"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Io error, got {other:?}"),
    }
    assert!(!missing.exists(), "output directory must not be created");
}
