//! Test Scenarios
//!
//! Clean, short scenario names mapping onto the sandbox examples

pub mod examples;

use std::path::PathBuf;
use std::time::Duration;

use crate::report::RunReport;

/// Per-run settings threaded into every probe invocation.
///
/// The diagnostics toggle is deliberately an explicit field rather than
/// ambient state: every case in a run sees the same value.
#[derive(Debug, Clone)]
pub struct ScenarioContext {
    /// Path to the sandbox example binary.
    pub sandbox: PathBuf,
    /// Wrap every probed process in the memory diagnostics tool.
    pub diagnostics: bool,
    /// Observation window for every probed process.
    pub observation_window: Duration,
}

pub struct TestScenarios {
    ctx: ScenarioContext,
}

impl TestScenarios {
    pub fn new(ctx: ScenarioContext) -> Self {
        Self { ctx }
    }

    /// Run a specific scenario by name
    pub async fn run_scenario(
        &self,
        name: &str,
        report: &mut RunReport,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match name {
            "empty" => examples::empty(&self.ctx, report).await,
            "triangle" => examples::triangle(&self.ctx, report).await,
            "renderer2d" => examples::renderer2d(&self.ctx, report).await,

            // Run all examples sequentially
            "all" => {
                examples::empty(&self.ctx, report).await?;
                tokio::time::sleep(Duration::from_secs(1)).await;
                examples::triangle(&self.ctx, report).await?;
                tokio::time::sleep(Duration::from_secs(1)).await;
                examples::renderer2d(&self.ctx, report).await
            }

            _ => Err(format!(
                "Unknown test scenario: '{}'. Available: {}",
                name,
                Self::available_scenarios().join(", ")
            )
            .into()),
        }
    }

    /// Get list of available scenarios
    pub fn available_scenarios() -> Vec<&'static str> {
        vec!["empty", "triangle", "renderer2d", "all"]
    }
}
