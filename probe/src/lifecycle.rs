//! Probe lifecycle execution
//!
//! One probe invocation walks a single process through
//! NotStarted -> Running -> TerminationRequested -> Exited, strictly in
//! order. The dwell before the termination request is a fixed sleep, not a
//! readiness check, and the exit wait is bounded by the same window. A wait
//! that expires is surfaced as an error; the probe never escalates to a
//! forceful kill.

use std::os::unix::process::ExitStatusExt;
use std::process::{ExitStatus, Stdio};

use nix::errno::Errno;
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use tokio::process::{Child, Command};
use tokio::time::{sleep, timeout};
use tracing::{debug, warn};

use crate::config::ProbeConfig;
use crate::error::{ProbeError, ProbeResult};

/// Terminal state of one probed process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Process exited on its own accord with this code.
    Exited(i32),
    /// Process was reaped after dying to this signal.
    Signaled(i32),
}

impl ProbeOutcome {
    /// A probe passes iff the process exited cleanly.
    pub fn success(&self) -> bool {
        matches!(self, ProbeOutcome::Exited(0))
    }
}

impl From<ExitStatus> for ProbeOutcome {
    fn from(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => ProbeOutcome::Exited(code),
            None => ProbeOutcome::Signaled(status.signal().unwrap_or(0)),
        }
    }
}

impl std::fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeOutcome::Exited(code) => write!(f, "exited with code {code}"),
            ProbeOutcome::Signaled(sig) => write!(f, "killed by signal {sig}"),
        }
    }
}

/// Run one probe invocation to completion.
///
/// Spawns the configured program (through the diagnostics wrapper when
/// enabled), sleeps the full observation window, sends SIGTERM and waits up
/// to another observation window for the process to exit.
pub async fn run(config: &ProbeConfig) -> ProbeResult<ProbeOutcome> {
    let (program, args) = config.invocation();

    let mut cmd = Command::new(&program);
    cmd.args(&args).stdin(Stdio::null());

    let mut child = cmd.spawn().map_err(|source| ProbeError::SpawnFailed {
        program: program.display().to_string(),
        source,
    })?;

    debug!(
        "spawned {} {:?} (pid: {})",
        program.display(),
        args,
        child.id().unwrap_or(0)
    );

    // Fixed dwell, not a readiness check. The window elapses in full even if
    // the process has already exited; the exit code is collected afterwards.
    sleep(config.observation_window).await;

    request_termination(&child)?;

    match timeout(config.observation_window, child.wait()).await {
        Ok(Ok(status)) => {
            let outcome = ProbeOutcome::from(status);
            debug!("probed program {}", outcome);
            Ok(outcome)
        }
        Ok(Err(source)) => Err(ProbeError::WaitFailed { source }),
        Err(_) => {
            warn!(
                "probed program ignored termination request for {:?}",
                config.observation_window
            );
            Err(ProbeError::TerminationTimeout {
                timeout: config.observation_window,
            })
        }
    }
}

/// Send the graceful-termination request. A process that already exited
/// (ESRCH, or a handle that was reaped) is not an error; its exit code is
/// picked up by the wait that follows.
fn request_termination(child: &Child) -> ProbeResult<()> {
    let Some(raw_pid) = child.id() else {
        return Ok(());
    };
    let pid = Pid::from_raw(raw_pid as i32);

    match signal::kill(pid, Signal::SIGTERM) {
        Ok(()) => {
            debug!("sent SIGTERM to pid {pid}");
            Ok(())
        }
        Err(Errno::ESRCH) => {
            debug!("pid {pid} already gone before termination request");
            Ok(())
        }
        Err(source) => Err(ProbeError::SignalFailed {
            pid: pid.as_raw(),
            source,
        }),
    }
}
