//! E2E Test Runner
//!
//! Probes the sandbox example binary:
//! - Launches one sandbox process per scenario, optionally under valgrind
//! - Lets it run for a fixed observation window, then terminates it
//! - Asserts a clean exit and records outcomes into an optional JSON report

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use harness::{RunReport, ScenarioContext, TestScenarios};

#[derive(Parser)]
#[command(name = "harness")]
#[command(about = "E2E test harness for the sandbox example binary")]
struct Args {
    /// Test scenario to run
    #[arg(long, default_value = "all")]
    scenario: String,

    /// Run every probed process under the memory diagnostics wrapper
    #[arg(long)]
    diagnostics: bool,

    /// Path to the sandbox example binary
    #[arg(long, default_value = "./target/debug/sandbox")]
    sandbox: PathBuf,

    /// Observation window in seconds
    #[arg(long, default_value_t = 5.0)]
    window_secs: f64,

    /// Write a JSON run report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Enable verbose tracing output
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    init_harness_tracing(args.verbose);

    if args.window_secs <= 0.0 {
        return Err(format!("--window-secs must be positive, got {}", args.window_secs).into());
    }

    tracing::info!("🧪 Starting sandbox test harness");
    tracing::info!(
        "Scenario: {}, Window: {}s, Diagnostics: {}",
        args.scenario,
        args.window_secs,
        args.diagnostics
    );

    let ctx = ScenarioContext {
        sandbox: args.sandbox,
        diagnostics: args.diagnostics,
        observation_window: Duration::from_secs_f64(args.window_secs),
    };

    let scenarios = TestScenarios::new(ctx);
    let mut report = RunReport::new(args.diagnostics);

    let result = scenarios.run_scenario(&args.scenario, &mut report).await;

    if let Some(ref path) = args.report {
        report.write_json(path)?;
        tracing::info!("📄 Run report written to {}", path.display());
    }

    match result {
        Ok(()) => {
            tracing::info!("✅ Scenario '{}' completed successfully", args.scenario);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Scenario '{}' failed: {}", args.scenario, e);
            Err(e)
        }
    }
}

fn init_harness_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("harness=debug,probe=debug,info")
    } else {
        EnvFilter::new("harness=info,probe=info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
