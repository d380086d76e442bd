//! Process lifecycle probe
//!
//! Launches an external example binary with a scenario selector, optionally
//! under a memory-diagnostics wrapper, lets it run for a fixed observation
//! window, requests graceful termination and asserts a clean exit.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use probe::ProbeConfig;
//! use std::time::Duration;
//!
//! # async fn example() -> probe::ProbeResult<()> {
//! let config = ProbeConfig::builder()
//!     .program("./target/debug/sandbox")
//!     .scenario("triangle")
//!     .observation_window(Duration::from_secs(5))
//!     .build();
//!
//! let outcome = probe::run(&config).await?;
//! assert!(outcome.success());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod lifecycle;

// Main interfaces - re-exported at crate root for convenience
pub use config::{ProbeConfig, ProbeConfigBuilder, DEFAULT_OBSERVATION_WINDOW, SCENARIO_FLAG};
pub use diagnostics::DiagnosticsWrapper;
pub use error::{ProbeError, ProbeResult};
pub use lifecycle::{run, ProbeOutcome};
