//! Probe Configuration
//!
//! Configuration for a single probe invocation: which program to launch,
//! which scenario it should load, whether to wrap it in the memory
//! diagnostics tool and how long to let it run.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::diagnostics::DiagnosticsWrapper;

/// Selector flag the probed program expects in front of the scenario name.
pub const SCENARIO_FLAG: &str = "-e";

/// How long the probed program is allowed to run before the termination
/// request, and how long the probe then waits for it to exit.
pub const DEFAULT_OBSERVATION_WINDOW: Duration = Duration::from_secs(5);

/// Immutable configuration for one probe invocation.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Path to the probed program.
    pub program: PathBuf,
    /// Scenario identifier, passed verbatim after the selector flag.
    pub scenario: String,
    /// Wrap the program in the memory diagnostics tool.
    pub diagnostics: bool,
    /// Fixed dwell time before termination; also bounds the exit wait.
    pub observation_window: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("./target/debug/sandbox"),
            scenario: "empty".to_string(),
            diagnostics: false,
            observation_window: DEFAULT_OBSERVATION_WINDOW,
        }
    }
}

impl ProbeConfig {
    /// Create a new builder
    pub fn builder() -> ProbeConfigBuilder {
        ProbeConfigBuilder::new()
    }

    /// Arguments passed to the probed program itself.
    pub fn to_args(&self) -> Vec<String> {
        vec![SCENARIO_FLAG.to_string(), self.scenario.clone()]
    }

    /// The effective invocation: program plus argument vector, with the
    /// diagnostics wrapper prefixed when enabled.
    pub fn invocation(&self) -> (PathBuf, Vec<String>) {
        if self.diagnostics {
            DiagnosticsWrapper::default().wrap(&self.program, &self.to_args())
        } else {
            (self.program.clone(), self.to_args())
        }
    }

    /// Check if this configuration is valid
    pub fn is_valid(&self) -> bool {
        !self.scenario.is_empty()
            && self.program != Path::new("")
            && !self.observation_window.is_zero()
    }
}

/// Builder for [`ProbeConfig`].
pub struct ProbeConfigBuilder {
    config: ProbeConfig,
}

impl ProbeConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ProbeConfig::default(),
        }
    }

    /// Set the probed program path
    pub fn program<P: Into<PathBuf>>(mut self, program: P) -> Self {
        self.config.program = program.into();
        self
    }

    /// Set the scenario identifier
    pub fn scenario<S: Into<String>>(mut self, scenario: S) -> Self {
        self.config.scenario = scenario.into();
        self
    }

    /// Enable or disable the memory diagnostics wrapper
    pub fn diagnostics(mut self, enabled: bool) -> Self {
        self.config.diagnostics = enabled;
        self
    }

    /// Set the observation window
    pub fn observation_window(mut self, window: Duration) -> Self {
        self.config.observation_window = window;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ProbeConfig {
        self.config
    }
}

impl Default for ProbeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
