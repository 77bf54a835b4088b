//! Dense matrix-multiply kernel
//!
//! Square double-precision multiply with a transpose pre-pass: `D = A × B` is
//! computed as row-of-A dot row-of-transpose(B), so both operands are walked
//! row-major. That access pattern is the point of the benchmark and must not
//! be replaced by a naive column-striding triple loop.

use crate::harness::VerificationError;

/// Default workload dimension when the caller supplies none.
pub const DEFAULT_N: usize = 100;

const VERIFY_N: usize = 101;
const VERIFY_EXPECTED: f64 = -18.67;
const VERIFY_TOLERANCE: f64 = 0.1;

/// Square matrix in row-major storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<f64>,
}

impl Matrix {
    fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Sum over every element. Reports use this to keep the whole result
    /// matrix observable rather than a single cell.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}

/// Deterministic fixture generator: `M[i][j] = (seed/n/n) * (i-j) * (i+j)`.
pub fn build_matrix(n: usize, seed: f64) -> Matrix {
    let t = seed / n as f64 / n as f64;
    let mut m = Matrix::zeros(n);
    for i in 0..n {
        let fi = i as f64;
        for j in 0..n {
            let fj = j as f64;
            m.data[i * n + j] = t * (fi - fj) * (fi + fj);
        }
    }
    m
}

/// `D = A × B` via transpose pre-pass and row-major dot products.
pub fn matmul(a: &Matrix, b: &Matrix) -> Matrix {
    assert_eq!(a.n, b.n, "operands must share one square dimension");
    let n = a.n;

    // C = transpose(B), so column j of B becomes the contiguous row j of C.
    let mut c = Matrix::zeros(n);
    for i in 0..n {
        for j in 0..n {
            c.data[i * n + j] = b.data[j * n + i];
        }
    }

    let mut d = Matrix::zeros(n);
    for i in 0..n {
        let ai = a.row(i);
        for j in 0..n {
            let cj = c.row(j);
            let mut s = 0.0;
            for k in 0..n {
                s += ai[k] * cj[k];
            }
            d.data[i * n + j] = s;
        }
    }
    d
}

/// Builds the two seeded operands for the floored-even dimension and
/// multiplies them. Odd `n` floors down (101 → 100, 5 → 4), never up.
pub fn calc(n: usize) -> Matrix {
    let n = n / 2 * 2;
    let a = build_matrix(n, 1.0);
    let b = build_matrix(n, 2.0);
    matmul(&a, &b)
}

/// Checks the center element of `calc(101)` against the known value.
pub fn verify() -> Result<(), VerificationError> {
    let d = calc(VERIFY_N);
    let actual = d.get(d.n() / 2, d.n() / 2);
    if (actual - VERIFY_EXPECTED).abs() > VERIFY_TOLERANCE {
        return Err(VerificationError::new(actual, VERIFY_EXPECTED));
    }
    tracing::debug!(actual, "matmul fixture verified");
    Ok(())
}
