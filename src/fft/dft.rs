use std::f64::consts::PI;
use crate::utils::complex::{Complex, I};

/// Naive O(n²) transform straight from the definition. Kept as the oracle
/// the fast path is tested against.
pub fn dft (inputs: &[Complex]) -> Vec<Complex> {
    let n = inputs.len();

    (0..n)
        .map(|f| {
            inputs
                .iter()
                .enumerate()
                .map(|(i, x)| {
                    // minus is the forward-transform convention, same as the
                    // twiddle factors in the fast path
                    let exp = I * -2_f64 * PI * i as f64 * (f as f64 / n as f64);
                    let omega = exp.exp();
                    omega * *x
                })
                .fold(Complex::zero(), |a, b| a + b)
        })
        .collect()
}
