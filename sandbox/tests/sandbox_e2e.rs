//! End-to-end tests for the sandbox binary, driven through the probe.

use std::process::Command;
use std::time::Duration;

use probe::{ProbeConfig, ProbeOutcome};

const SANDBOX: &str = env!("CARGO_BIN_EXE_sandbox");
const WINDOW: Duration = Duration::from_millis(500);

#[test]
fn unknown_example_exits_nonzero_immediately() {
    let output = Command::new(SANDBOX)
        .args(["-e", "cube"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown example"));
    assert!(stderr.contains("triangle"));
}

#[tokio::test]
async fn empty_example_terminates_cleanly() {
    let config = ProbeConfig::builder()
        .program(SANDBOX)
        .scenario("empty")
        .observation_window(WINDOW)
        .build();

    let outcome = probe::run(&config).await.unwrap();
    assert_eq!(outcome, ProbeOutcome::Exited(0));
}

#[tokio::test]
async fn triangle_example_terminates_cleanly() {
    let config = ProbeConfig::builder()
        .program(SANDBOX)
        .scenario("triangle")
        .observation_window(WINDOW)
        .build();

    let outcome = probe::run(&config).await.unwrap();
    assert_eq!(outcome, ProbeOutcome::Exited(0));
}

#[tokio::test]
async fn renderer2d_example_terminates_cleanly() {
    let config = ProbeConfig::builder()
        .program(SANDBOX)
        .scenario("renderer2d")
        .observation_window(WINDOW)
        .build();

    let outcome = probe::run(&config).await.unwrap();
    assert_eq!(outcome, ProbeOutcome::Exited(0));
}
