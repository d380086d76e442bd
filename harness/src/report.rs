//! Run Report
//!
//! Machine-readable summary of a harness run, one record per probed case.

use std::error::Error;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome record for a single probed scenario.
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub scenario: String,
    pub passed: bool,
    /// Human-readable terminal state ("exited with code 0", error text, ...).
    pub outcome: String,
    pub duration_ms: u64,
}

/// Summary of one harness invocation.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub diagnostics: bool,
    pub cases: Vec<CaseReport>,
}

impl RunReport {
    pub fn new(diagnostics: bool) -> Self {
        Self {
            started_at: Utc::now(),
            diagnostics,
            cases: Vec::new(),
        }
    }

    /// Record the outcome of one case
    pub fn record(&mut self, case: CaseReport) {
        self.cases.push(case);
    }

    pub fn all_passed(&self) -> bool {
        self.cases.iter().all(|case| case.passed)
    }

    /// Write the report as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_passed() {
        let mut report = RunReport::new(false);
        assert!(report.all_passed());

        report.record(CaseReport {
            scenario: "empty".to_string(),
            passed: true,
            outcome: "exited with code 0".to_string(),
            duration_ms: 10_600,
        });
        assert!(report.all_passed());

        report.record(CaseReport {
            scenario: "triangle".to_string(),
            passed: false,
            outcome: "exited with code 1".to_string(),
            duration_ms: 10_400,
        });
        assert!(!report.all_passed());
    }

    #[test]
    fn test_json_shape() {
        let mut report = RunReport::new(true);
        report.record(CaseReport {
            scenario: "empty".to_string(),
            passed: true,
            outcome: "exited with code 0".to_string(),
            duration_ms: 42,
        });

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["diagnostics"], true);
        assert_eq!(json["cases"][0]["scenario"], "empty");
        assert_eq!(json["cases"][0]["passed"], true);
        assert_eq!(json["cases"][0]["duration_ms"], 42);
    }

    #[test]
    fn test_write_json_roundtrip_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("report.json");

        let report = RunReport::new(false);
        report.write_json(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"cases\""));
    }
}
