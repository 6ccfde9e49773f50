pub extern crate rustfft;

// export rustfft to stackfft
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_complex::Complex;
use rustfft::num_traits::Float;
use rustfft::{FftNum, FftPlanner};

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Asserts that two complex numbers are approximately equal, relative to `scale`.
///
/// The error is measured as `|actual - expected| / max(scale, 1)`, so callers
/// comparing whole spectra usually pass the largest magnitude in the spectrum.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[track_caller]
pub fn assert_complex_closeness<T: Float + std::fmt::Display>(
    actual: Complex<T>,
    expected: Complex<T>,
    scale: T,
    epsilon: T,
) {
    let err = (actual - expected).norm() / scale.max(T::one());
    if err >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (relative error {err}, epsilon {epsilon})",
        );
    }
}

/// Generate a random, real, signal in the provided buffer
pub fn gen_random_signal<T>(reals: &mut [T])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for real in reals.iter_mut() {
        *real = uniform_dist.sample(&mut rng);
    }
}

/// Forward transform of a real signal with RustFFT, used as the ground truth in tests
pub fn rustfft_forward<T: FftNum>(reals: &[T]) -> Vec<Complex<T>> {
    let mut buffer: Vec<Complex<T>> = reals
        .iter()
        .map(|&re| Complex::new(re, T::zero()))
        .collect();

    if buffer.is_empty() {
        return buffer;
    }

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_random_signal() {
        let big_n = 1 << 16;
        let mut reals: Vec<f64> = vec![0.0; big_n];

        gen_random_signal(&mut reals);

        assert!(reals.iter().all(|x| (-1.0..1.0).contains(x)));
        let mean = reals.iter().sum::<f64>() / big_n as f64;
        assert_float_closeness(mean, 0.0, 0.05);
    }

    #[test]
    fn rustfft_dc_component() {
        let spectrum = rustfft_forward(&[1.0f64, 1.0, 1.0, 1.0]);
        assert_float_closeness(spectrum[0].re, 4.0, 1e-12);
        for z in &spectrum[1..] {
            assert_float_closeness(z.norm(), 0.0, 1e-12);
        }
    }
}
