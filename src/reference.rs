//! Direct `O(N²)` DFT, for checking the fast transform against.
use num_complex::Complex;
use num_traits::{Float, FloatConst};

/// Computes `X[k] = Σ x[n]·exp(-2πi·n·k/N)` term by term.
///
/// Works for any length, including zero and non-powers of two.
pub fn dft<T: Float + FloatConst>(input: &[T]) -> Vec<Complex<T>> {
    let big_n = input.len();
    if big_n == 0 {
        return Vec::new();
    }
    let angle_mult = -T::TAU() / T::from(big_n).unwrap();

    (0..big_n)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .fold(Complex::new(T::zero(), T::zero()), |acc, (n, &x)| {
                    let (sin, cos) = (angle_mult * T::from((n * k) % big_n).unwrap()).sin_cos();
                    acc + Complex::new(cos, sin).scale(x)
                })
        })
        .collect()
}
