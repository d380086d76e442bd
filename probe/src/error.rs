//! Probe-specific error types

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("failed to spawn probed program {program}: {source}")]
    SpawnFailed {
        program: String,
        source: std::io::Error,
    },

    #[error("failed to signal probed program (pid {pid}): {source}")]
    SignalFailed { pid: i32, source: nix::Error },

    #[error("failed to wait for probed program: {source}")]
    WaitFailed { source: std::io::Error },

    #[error("probed program did not exit within {timeout:?} after termination request")]
    TerminationTimeout { timeout: Duration },
}

pub type ProbeResult<T> = Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display_names_bound() {
        let err = ProbeError::TerminationTimeout {
            timeout: Duration::from_secs(5),
        };

        assert!(err.to_string().contains("did not exit within"));
        assert!(err.to_string().contains("5s"));
    }

    #[test]
    fn test_spawn_display_names_program() {
        let err = ProbeError::SpawnFailed {
            program: "/opt/sandbox".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };

        assert!(err.to_string().contains("/opt/sandbox"));
    }
}
