//! Verify-and-time harness pattern
//!
//! Every kernel runs under the same two-phase contract: self-verify against a
//! fixed fixture, hard-fail if the fixture mismatches, and only then execute
//! the timed workload. The sequencing lives here so it can be tested
//! independently of any kernel.

use std::fmt;
use std::time::{Duration, Instant};

/// A computed value disagreed with its hard-coded expected value.
///
/// Verification failures are never recovered: the kernel executable prints
/// the diagnostic to stderr and exits with status 1, since a kernel that
/// fails self-verification cannot produce meaningful timing data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationError {
    actual: String,
    expected: String,
}

impl VerificationError {
    pub fn new(actual: impl fmt::Display, expected: impl fmt::Display) -> Self {
        Self {
            actual: actual.to_string(),
            expected: expected.to_string(),
        }
    }

    pub fn actual(&self) -> &str {
        &self.actual
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }
}

impl fmt::Display for VerificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Diagnostic format shared by every kernel executable.
        write!(f, "{} != {}", self.actual, self.expected)
    }
}

impl std::error::Error for VerificationError {}

/// A workload result together with the wall-clock time it took to produce.
#[derive(Debug, Clone)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Elapsed time in seconds, the unit every report line uses.
    pub fn secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Measures wall-clock time around `workload` only. Inputs the kernel
/// pre-builds must be constructed before calling this.
pub fn time<T>(workload: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = workload();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// Runs the two-phase contract: `verify` first, then the timed workload.
///
/// A verification error short-circuits; the workload is not executed.
pub fn run<T>(
    verify: impl FnOnce() -> Result<(), VerificationError>,
    workload: impl FnOnce() -> T,
) -> Result<Timed<T>, VerificationError> {
    verify()?;
    tracing::debug!("verification passed, starting timed run");
    Ok(time(workload))
}
