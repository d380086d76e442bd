//! E2E Test Harness
//!
//! Scenario-oriented test runner for the sandbox example binary:
//! - Probes one sandbox process per scenario (spawn, dwell, terminate, wait)
//! - Optionally wraps every probe in the memory diagnostics tool
//! - Records case outcomes into a machine-readable run report
//!
//! A case passes iff the probed process exits with code 0; any other exit,
//! a death by signal, or a termination timeout fails it.

pub mod report;
pub mod scenarios;

// Main interfaces - re-exported at crate root for convenience
pub use report::{CaseReport, RunReport};
pub use scenarios::{ScenarioContext, TestScenarios};
