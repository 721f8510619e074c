// src/types.rs

use std::fmt;

/// Outcome of one item, derived from its finished log.
///
/// - `Ok`: the failure marker does not occur in the log.
/// - `Failed`: the failure marker occurs somewhere in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    Failed,
}

impl Verdict {
    pub fn is_ok(self) -> bool {
        matches!(self, Verdict::Ok)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Ok => f.write_str("Ok"),
            Verdict::Failed => f.write_str("Failed"),
        }
    }
}

/// Exit status of a whole producer → consumer pipeline.
///
/// This is always the status of the last stage (the consumer), mirroring
/// `pipefail`-less shell semantics. Processes killed by a signal are mapped
/// to `128 + signal` like a POSIX shell reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStatus(pub i32);

impl PipelineStatus {
    /// Status recorded when a stage could not be launched at all.
    pub const NOT_LAUNCHED: PipelineStatus = PipelineStatus(127);

    pub fn code(self) -> i32 {
        self.0
    }

    pub fn success(self) -> bool {
        self.0 == 0
    }

    pub fn from_exit_status(status: std::process::ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return PipelineStatus(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return PipelineStatus(128 + signal);
            }
        }

        PipelineStatus(-1)
    }
}

impl fmt::Display for PipelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
