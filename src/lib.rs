//! **stackfft** is a bottom-up, iterative implementation of the radix-2 Cooley-Tukey FFT
//! for real-valued signals whose length is a power of two.
//!
//! ```
//! use stackfft::fft_64;
//!
//! let spectrum = fft_64(&[1.0, 2.0, 3.0, 4.0, 7.0, 6.0, 9.0, 2.0]).unwrap();
//! assert_eq!(spectrum.len(), 8);
//! assert!((spectrum[0].re - 34.0).abs() < 1e-9);
//! ```
#![warn(
    missing_docs,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::correctness,
    clippy::suspicious
)]

use num_complex::Complex;
use num_traits::{Float, FloatConst};

use crate::algorithms::doubling::fft_doubling;

pub use crate::error::FftError;
pub use crate::observer::{LogObserver, NoopObserver, Stage, StageObserver, StageTimings};
pub use crate::options::Options;

mod algorithms;
mod error;
mod kernels;
mod matrix;
pub mod observer;
pub mod options;
pub mod reference;
mod twiddles;

/// Floating point types the transform can run on, i.e. `f32` and `f64`.
pub trait FftFloat: Float + FloatConst + Send + Sync + 'static {}

impl<T: Float + FloatConst + Send + Sync + 'static> FftFloat for T {}

/// FFT of a real signal with default [`Options`].
///
/// # Errors
///
/// See [`FftError`].
pub fn fft<T: FftFloat>(input: &[T]) -> Result<Vec<Complex<T>>, FftError> {
    fft_with_opts(input, &Options::default())
}

/// FFT of a real signal with the given [`Options`].
///
/// # Errors
///
/// See [`FftError`].
pub fn fft_with_opts<T: FftFloat>(
    input: &[T],
    opts: &Options,
) -> Result<Vec<Complex<T>>, FftError> {
    fft_doubling(input, opts, NoopObserver)
}

/// FFT of a real signal, reporting each stage to `observer`.
///
/// # Errors
///
/// See [`FftError`].
pub fn fft_with_opts_and_observer<T: FftFloat, O: StageObserver>(
    input: &[T],
    opts: &Options,
    observer: &mut O,
) -> Result<Vec<Complex<T>>, FftError> {
    fft_doubling(input, opts, observer)
}

macro_rules! impl_fft_for {
    ($func_name:ident, $precision:ty) => {
        /// FFT of a real signal
        ///
        /// Returns the `N` DFT coefficients of `input`, in natural order.
        ///
        /// # Errors
        ///
        /// Returns [`FftError::EmptyInput`] if `input` is empty and
        /// [`FftError::InvalidInputLength`] if its length is not a power of two.
        pub fn $func_name(input: &[$precision]) -> Result<Vec<Complex<$precision>>, FftError> {
            let opts = Options::guess_options(input.len());
            fft_doubling(input, &opts, NoopObserver)
        }
    };
}

impl_fft_for!(fft_64, f64);
impl_fft_for!(fft_32, f32);

macro_rules! impl_fft_with_opts_for {
    ($func_name:ident, $precision:ty) => {
        /// Same as [fft], but also accepts [`Options`] that control optimization strategies
        ///
        /// # Errors
        ///
        /// Returns [`FftError::EmptyInput`] if `input` is empty,
        /// [`FftError::InvalidInputLength`] if its length is not a power of two and
        /// [`FftError::InvalidBaseRows`] if `opts.base_rows` is not a power of two.
        pub fn $func_name(
            input: &[$precision],
            opts: &Options,
        ) -> Result<Vec<Complex<$precision>>, FftError> {
            fft_doubling(input, opts, NoopObserver)
        }
    };
}

impl_fft_with_opts_for!(fft_64_with_opts, f64);
impl_fft_with_opts_for!(fft_32_with_opts, f32);

macro_rules! impl_fft_with_opts_and_observer_for {
    ($func_name:ident, $precision:ty) => {
        /// Same as [fft], but also accepts [`Options`] and a [`StageObserver`] that is told how
        /// long every stage took
        ///
        /// # Errors
        ///
        /// See [`FftError`].
        pub fn $func_name<O: StageObserver>(
            input: &[$precision],
            opts: &Options,
            observer: &mut O,
        ) -> Result<Vec<Complex<$precision>>, FftError> {
            fft_doubling(input, opts, observer)
        }
    };
}

impl_fft_with_opts_and_observer_for!(fft_64_with_opts_and_observer, f64);
impl_fft_with_opts_and_observer_for!(fft_32_with_opts_and_observer, f32);
