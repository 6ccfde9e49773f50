//! Bottom-up Cooley-Tukey FFT
//!
//! The recursive radix-2 identity
//!
//! ```text
//! X[k]       = E[k] + exp(-2πi·k/N)·O[k]
//! X[k + N/2] = E[k] - exp(-2πi·k/N)·O[k]
//! ```
//!
//! unrolled from the leaves up. Rather than recursing on even/odd halves of the input, every
//! sub-transform of the same size is kept as one column of a working matrix, so each level of
//! the recursion becomes a single pass over the whole matrix.
//!
//! ## Algorithm Overview
//!
//! 1. Base case: reshape the input into `R₀` rows and take the `R₀`-point DFT of every column
//!    (with the default `R₀ = 1` this is the identity)
//! 2. While the matrix has fewer than `N` rows, split its columns into even and odd halves and
//!    butterfly them into a matrix with twice the rows and half the columns
//! 3. The final `N × 1` matrix is the spectrum, row `k` holding frequency bin `k`
//!
use std::time::Instant;

use num_complex::Complex;

use crate::error::{validate_len, FftError};
use crate::kernels::combine;
use crate::matrix::WorkingMatrix;
use crate::observer::{Stage, StageObserver};
use crate::options::Options;
use crate::twiddles::generate_twiddles;
use crate::FftFloat;

/// Forward FFT of a real signal.
///
/// Returns the `N` complex DFT coefficients of `input`, in natural order.
///
/// # Errors
///
/// Returns [`FftError::EmptyInput`] if `input` is empty,
/// [`FftError::InvalidInputLength`] if its length is not a power of two, and
/// [`FftError::InvalidBaseRows`] if `opts.base_rows` is not a power of two.
pub fn fft_doubling<T: FftFloat, O: StageObserver>(
    input: &[T],
    opts: &Options,
    mut observer: O,
) -> Result<Vec<Complex<T>>, FftError> {
    validate_len(input.len())?;
    if !opts.base_rows.is_power_of_two() {
        return Err(FftError::InvalidBaseRows(opts.base_rows));
    }

    let big_n = input.len();
    let base_rows = opts.base_rows.min(big_n);

    let now = Instant::now();
    let mut matrix = WorkingMatrix::base_case(input, base_rows);
    observer.on_stage(Stage::BaseCase, matrix.rows(), now.elapsed());

    let mut step = 0;
    while matrix.rows() < big_n {
        let now = Instant::now();
        // Twiddles depend on the row count only, recomputed for each step
        let twiddles = generate_twiddles(matrix.rows());
        matrix = combine(&matrix, &twiddles, opts.parallel);
        observer.on_stage(Stage::Doubling(step), matrix.rows(), now.elapsed());
        step += 1;
    }

    debug_assert_eq!(matrix.cols(), 1);
    Ok(matrix.into_column_major())
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use utilities::{assert_complex_closeness, assert_float_closeness, gen_random_signal};

    use super::*;
    use crate::observer::{NoopObserver, StageTimings};
    use crate::reference::dft;

    fn max_norm(spectrum: &[Complex64]) -> f64 {
        spectrum.iter().map(|z| z.norm()).fold(0.0, f64::max)
    }

    fn random_signal(len: usize) -> Vec<f64> {
        let mut reals = vec![0.0; len];
        gen_random_signal(&mut reals);
        reals
    }

    fn run(input: &[f64]) -> Result<Vec<Complex64>, FftError> {
        fft_doubling(input, &Options::default(), NoopObserver)
    }

    #[test]
    fn matches_direct_dft() {
        for big_n in [1, 2, 4, 8, 16, 64] {
            let input = random_signal(big_n);
            let expected = dft(&input);
            let actual = run(&input).unwrap();
            assert_eq!(actual.len(), big_n);

            let scale = max_norm(&expected);
            for (z, e) in actual.iter().zip(expected.iter()) {
                assert_complex_closeness(*z, *e, scale, 1e-9);
            }
        }
    }

    #[test]
    fn known_vector() {
        let input = [1.0, 2.0, 3.0, 4.0, 7.0, 6.0, 9.0, 2.0];
        let expected = [
            (34.0, 0.0),
            (-10.2426, 7.4142),
            (-4.0, -2.0),
            (-1.7574, -4.5858),
            (6.0, 0.0),
            (-1.7574, 4.5858),
            (-4.0, 2.0),
            (-10.2426, -7.4142),
        ];

        let actual = run(&input).unwrap();
        for (z, (re, im)) in actual.iter().zip(expected) {
            assert_float_closeness(z.re, re, 1e-4);
            assert_float_closeness(z.im, im, 1e-4);
        }
    }

    #[test]
    fn single_element() {
        assert_eq!(run(&[5.0]).unwrap(), vec![Complex64::new(5.0, 0.0)]);
    }

    #[test]
    fn linearity() {
        let (a, b) = (2.5, -0.75);
        for big_n in [2, 8, 32, 256] {
            let x = random_signal(big_n);
            let y = random_signal(big_n);
            let mixed: Vec<f64> = x.iter().zip(&y).map(|(x, y)| a * x + b * y).collect();

            let fx = run(&x).unwrap();
            let fy = run(&y).unwrap();
            let f_mixed = run(&mixed).unwrap();

            let scale = max_norm(&f_mixed);
            for ((zx, zy), z) in fx.iter().zip(&fy).zip(&f_mixed) {
                assert_complex_closeness(*z, *zx * a + *zy * b, scale, 1e-9);
            }
        }
    }

    #[test]
    fn parseval() {
        for big_n in [1, 4, 16, 1024] {
            let input = random_signal(big_n);
            let spectrum = run(&input).unwrap();

            let time_energy: f64 = input.iter().map(|x| x * x).sum();
            let freq_energy: f64 = spectrum.iter().map(|z| z.norm_sqr()).sum();
            let expected = big_n as f64 * time_energy;
            assert_float_closeness(freq_energy / expected, 1.0, 1e-9);
        }
    }

    #[test]
    fn errors() {
        assert_eq!(run(&[]), Err(FftError::EmptyInput));
        for len in [3, 5, 6, 7] {
            let input = vec![1.0; len];
            assert_eq!(run(&input), Err(FftError::InvalidInputLength(len)));
            // Same input, same error
            assert_eq!(run(&input), Err(FftError::InvalidInputLength(len)));
        }
    }

    #[test]
    fn invalid_base_rows() {
        let input = [1.0, 2.0, 3.0, 4.0];
        for base_rows in [0, 3, 6] {
            let opts = Options::default().with_base_rows(base_rows);
            assert_eq!(
                fft_doubling(&input, &opts, NoopObserver),
                Err(FftError::InvalidBaseRows(base_rows))
            );
        }
        // An empty input is reported before the bad configuration
        let opts = Options::default().with_base_rows(3);
        assert_eq!(
            fft_doubling::<f64, _>(&[], &opts, NoopObserver),
            Err(FftError::EmptyInput)
        );
    }

    #[test]
    fn larger_base_case() {
        let input = random_signal(64);
        let expected = run(&input).unwrap();
        let scale = max_norm(&expected);

        // 128 is larger than the input and gets clamped to 64
        for base_rows in [2, 4, 8, 64, 128] {
            let opts = Options::default().with_base_rows(base_rows);
            let actual = fft_doubling(&input, &opts, NoopObserver).unwrap();
            for (z, e) in actual.iter().zip(&expected) {
                assert_complex_closeness(*z, *e, scale, 1e-9);
            }
        }
    }

    #[test]
    fn observer_sees_every_stage() {
        let input = random_signal(16);
        let mut timings = StageTimings::new();
        let with_observer = fft_doubling(&input, &Options::default(), &mut timings).unwrap();

        let stages: Vec<Stage> = timings.stages.iter().map(|(stage, _)| *stage).collect();
        assert_eq!(
            stages,
            vec![
                Stage::BaseCase,
                Stage::Doubling(0),
                Stage::Doubling(1),
                Stage::Doubling(2),
                Stage::Doubling(3),
            ]
        );
        assert_eq!(with_observer, run(&input).unwrap());

        let mut timings = StageTimings::new();
        let opts = Options::default().with_base_rows(4);
        fft_doubling(&input, &opts, &mut timings).unwrap();
        assert_eq!(timings.stages.len(), 3);
    }

    #[test]
    fn single_precision() {
        let input: Vec<f32> = (0..256).map(|i| ((i * 37) % 11) as f32 - 5.0).collect();
        let actual = fft_doubling(&input, &Options::default(), NoopObserver).unwrap();
        let input_64: Vec<f64> = input.iter().map(|&x| f64::from(x)).collect();
        let expected = dft(&input_64);
        let scale = max_norm(&expected);

        for (z, e) in actual.iter().zip(&expected) {
            let z = Complex64::new(f64::from(z.re), f64::from(z.im));
            assert_complex_closeness(z, *e, scale, 1e-4);
        }
    }
}
