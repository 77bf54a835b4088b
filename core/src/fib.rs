//! Recursive-Fibonacci kernel
//!
//! Naive exponential recursion with no memoization: the call count *is* the
//! benchmark load.

use crate::harness::VerificationError;

/// Workload depth used by the timed run.
pub const TIMED_N: u64 = 35;

const EXPECTED: [u64; 10] = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34];

/// The n-th Fibonacci number by direct recursion.
pub fn fib(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    fib(n - 1) + fib(n - 2)
}

/// Checks `fib` against the first ten Fibonacci numbers.
pub fn verify() -> Result<(), VerificationError> {
    for (i, &expected) in EXPECTED.iter().enumerate() {
        let actual = fib(i as u64);
        if actual != expected {
            return Err(VerificationError::new(actual, expected));
        }
    }
    tracing::debug!(n = TIMED_N, "fib fixture verified");
    Ok(())
}
