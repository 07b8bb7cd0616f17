use gig_spark::logger;
use std::fs;
use tempfile::TempDir;

// Single test: the logger's enabled flag and log file are process-global,
// so the phases must run sequentially.
#[test]
fn test_log_file_respects_enabled_flag() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let log_path = temp_dir.path().join("gig-spark-test.log");

    logger::init().expect("Failed to initialize logger");
    logger::enable_logging();
    logger::set_log_file(log_path.to_str().expect("log path should be UTF-8"))
        .expect("Failed to set log file");

    log::debug!(target: "gig_spark::test", "keyword extraction started");

    let contents = fs::read_to_string(&log_path).expect("Failed to read log file");
    assert!(contents.contains("keyword extraction started"));

    // Disabled logging should write nothing further
    logger::disable_logging();
    log::debug!(target: "gig_spark::test", "this should not be written");

    let contents = fs::read_to_string(&log_path).expect("Failed to read log file");
    assert!(!contents.contains("this should not be written"));
}
