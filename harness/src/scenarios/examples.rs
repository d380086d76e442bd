//! Example Probes
//!
//! One case per sandbox example: launch it, let it run for the observation
//! window, terminate it and require a clean exit.

use std::time::Instant;

use probe::ProbeConfig;

use crate::report::{CaseReport, RunReport};
use crate::scenarios::ScenarioContext;

/// Probe the empty example (idle run loop)
pub async fn empty(
    ctx: &ScenarioContext,
    report: &mut RunReport,
) -> Result<(), Box<dyn std::error::Error>> {
    probe_example("empty", ctx, report).await
}

/// Probe the triangle example
pub async fn triangle(
    ctx: &ScenarioContext,
    report: &mut RunReport,
) -> Result<(), Box<dyn std::error::Error>> {
    probe_example("triangle", ctx, report).await
}

/// Probe the renderer2d example
pub async fn renderer2d(
    ctx: &ScenarioContext,
    report: &mut RunReport,
) -> Result<(), Box<dyn std::error::Error>> {
    probe_example("renderer2d", ctx, report).await
}

async fn probe_example(
    name: &str,
    ctx: &ScenarioContext,
    report: &mut RunReport,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("🧪 Example '{}' (diagnostics: {})", name, ctx.diagnostics);

    let config = ProbeConfig::builder()
        .program(&ctx.sandbox)
        .scenario(name)
        .diagnostics(ctx.diagnostics)
        .observation_window(ctx.observation_window)
        .build();

    let started = Instant::now();
    let result = probe::run(&config).await;
    let duration_ms = started.elapsed().as_millis() as u64;

    match result {
        Ok(outcome) if outcome.success() => {
            report.record(CaseReport {
                scenario: name.to_string(),
                passed: true,
                outcome: outcome.to_string(),
                duration_ms,
            });
            tracing::info!("✅ Example '{}': PASSED", name);
            Ok(())
        }
        Ok(outcome) => {
            report.record(CaseReport {
                scenario: name.to_string(),
                passed: false,
                outcome: outcome.to_string(),
                duration_ms,
            });
            tracing::error!("❌ Example '{}': {}", name, outcome);
            Err(format!("example '{name}' {outcome}").into())
        }
        Err(e) => {
            report.record(CaseReport {
                scenario: name.to_string(),
                passed: false,
                outcome: e.to_string(),
                duration_ms,
            });
            tracing::error!("❌ Example '{}' probe failed: {}", name, e);
            Err(e.into())
        }
    }
}
