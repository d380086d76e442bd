//! Sandbox example binary
//!
//! Runs one of the existing examples until terminated:
//!     - empty
//!     - triangle
//!     - renderer2d
//!
//! The process runs indefinitely and exits 0 on SIGTERM or SIGINT. The
//! `--leak` flag deliberately loses an allocation at startup so a leak-check
//! wrapper has something to find.

mod layers;

use std::time::Duration;

use clap::Parser;
use tokio::signal::unix::{signal, SignalKind};

use layers::{Layer, LayerKind, EXAMPLES};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Parser)]
#[command(name = "sandbox")]
#[command(about = "Runs one of the existing examples until terminated")]
struct Args {
    /// Example to run (empty, triangle, renderer2d)
    #[arg(short = 'e', long = "example", default_value = "empty")]
    example: String,

    /// Lose an allocation at startup (exercises leak diagnostics)
    #[arg(long)]
    leak: bool,

    /// Enable verbose tracing output
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    init_sandbox_tracing(args.verbose);

    let Some(kind) = LayerKind::parse(&args.example) else {
        eprintln!(
            "Unknown example: {}\n\nAvailable examples: {}",
            args.example,
            EXAMPLES.join(", ")
        );
        std::process::exit(1);
    };

    if args.leak {
        inject_leak();
    }

    tracing::info!("🏖️  Sandbox running example '{}'", args.example);

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut frame_timer = tokio::time::interval(FRAME_INTERVAL);

    let mut layer = Layer::new(kind);
    layer.on_attach();

    loop {
        tokio::select! {
            _ = sigterm.recv() => {
                tracing::info!("🛑 Received SIGTERM, shutting down");
                break;
            }
            _ = sigint.recv() => {
                tracing::info!("🛑 Received SIGINT, shutting down");
                break;
            }
            _ = frame_timer.tick() => {
                layer.on_update();
            }
        }
    }

    layer.on_detach();
    tracing::info!("✅ Sandbox exited cleanly after {} frames", layer.frames());
    Ok(())
}

/// Allocates a buffer and drops the only pointer to it, so a full leak check
/// reports it as definitely lost.
fn inject_leak() {
    let lost = vec![0u8; 4096];
    std::mem::forget(lost);
    tracing::warn!("💧 Injected a lost allocation of 4096 bytes");
}

fn init_sandbox_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("sandbox=trace")
    } else {
        EnvFilter::new("sandbox=info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
