use num_complex::Complex;
use num_traits::{Float, FloatConst};

/// Twiddle factors for a doubling step that starts from `rows` rows.
///
/// Returns `exp(-iπ·j/rows)` for `j` in `0..rows`. Each factor is computed directly from its
/// angle instead of by repeated rotation, so the error does not grow with `rows`.
pub(crate) fn generate_twiddles<T: Float + FloatConst>(rows: usize) -> Vec<Complex<T>> {
    let angle_mult = -T::PI() / T::from(rows).unwrap();
    (0..rows)
        .map(|j| {
            let (sin, cos) = (angle_mult * T::from(j).unwrap()).sin_cos();
            Complex::new(cos, sin)
        })
        .collect()
}

/// Row-major `size × size` DFT matrix, `M[k][n] = exp(-2πi·n·k/size)`.
pub(crate) fn dft_matrix<T: Float + FloatConst>(size: usize) -> Vec<Complex<T>> {
    let angle_mult = -T::TAU() / T::from(size).unwrap();
    let mut matrix = Vec::with_capacity(size * size);
    for k in 0..size {
        for n in 0..size {
            // n·k mod size keeps the angle small for large matrices
            let (sin, cos) = (angle_mult * T::from((n * k) % size).unwrap()).sin_cos();
            matrix.push(Complex::new(cos, sin));
        }
    }
    matrix
}
