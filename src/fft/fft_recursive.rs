use std::f64::consts::PI;
use crate::utils::complex::{Complex, I};

/// Radix-2 decimation-in-time Cooley-Tukey transform.
///
/// The output always has power-of-two length: inputs of any other length are
/// zero-padded at the tail before transforming, which changes the frequency
/// resolution exactly as a physical zero-pad would. An empty input yields an
/// empty output, a single sample is its own spectrum.
pub fn fft_recursive(
    inputs: Vec<Complex>,
) -> Vec<Complex> {
    fn fft_inner(inputs: Vec<Complex>) -> Vec<Complex> {
        let n = inputs.len();
        if n == 1 {
            // because:
            // with a single sample the sum y_k=\sum_{j=0}^{n-1}{x[j]*e^{...}}
            // collapses to x[0] * e^0 = x[0], so the sequence is already
            // its own transform
            return inputs;
        }

        // divide
        let even = inputs
            .iter()
            .enumerate()
            .filter_map(|(i, x)| if i % 2 == 0 { Some(*x) } else { None })
            .collect::<Vec<_>>();
        let odd  = inputs
            .into_iter()
            .enumerate()
            .filter_map(|(i, x)| if i % 2 == 1 { Some(x) } else { None })
            .collect::<Vec<_>>();

        let even = fft_inner(even);
        let odd  = fft_inner(odd);

        // conquer
        let mut bins = vec![Complex::zero(); n];
        for k in 0..n/2 {
            // the half-size transforms give X_e and X_o with
            // `X_{k} = X_e[k] + o^k * X_o[k]`
            // and substituting k = k' + n/2 cancels the `^{+ n/2}` exponents
            // leaving the same expression with a minus:
            // `X_{k+n/2} = X_e[k] - o^k * X_o[k]`

            let exp = I * -2_f64 * PI * (k as f64 / n as f64);
            let omega = exp.exp();
            let omega_x_odd = omega * odd[k];
            bins[k] = even[k] + omega_x_odd;
            bins[k + n/2] = even[k] - omega_x_odd;
        }

        bins
    }

    let orig_n = inputs.len();
    if orig_n <= 1 {
        return inputs;
    }

    // pad the input with zeros if the input is not the size of the power two
    let n = orig_n.next_power_of_two();
    let inputs = inputs
        .into_iter()
        .chain(
            vec![Complex::zero(); n - orig_n]
        )
        .collect::<Vec<_>>();

    fft_inner(inputs)
}
