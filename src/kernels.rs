//! Butterfly kernels for the doubling step.
//!
//! A doubling step turns a `rows × cols` working matrix into a `2·rows × cols/2` one:
//!
//! ```text
//! even = M[.., 0..cols/2]      odd = M[.., cols/2..cols]
//! top    = even + w ⊙ odd      (rows 0..rows)
//! bottom = even - w ⊙ odd      (rows rows..2·rows)
//! ```
//!
//! where `w[r] = exp(-iπ·r/rows)` is broadcast along row `r`. Output rows `r` and `rows + r`
//! depend only on input row `r`, so rows can be processed independently.
use num_complex::Complex;
use num_traits::Float;

use crate::matrix::WorkingMatrix;
use crate::FftFloat;

/// Butterflies of a single input row into its top and bottom output rows.
#[inline]
fn butterfly_row<T: Float>(
    w: Complex<T>,
    in_row: &[Complex<T>],
    top_row: &mut [Complex<T>],
    bottom_row: &mut [Complex<T>],
) {
    let (even, odd) = in_row.split_at(top_row.len());
    top_row
        .iter_mut()
        .zip(bottom_row.iter_mut())
        .zip(even.iter().zip(odd.iter()))
        .for_each(|((top, bottom), (&e, &o))| {
            let t = w * o;
            *top = e + t;
            *bottom = e - t;
        });
}

#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
fn combine_serial<T: Float>(
    src: &[Complex<T>],
    twiddles: &[Complex<T>],
    cols: usize,
    top: &mut [Complex<T>],
    bottom: &mut [Complex<T>],
) {
    let half = cols / 2;
    src.chunks_exact(cols)
        .zip(top.chunks_exact_mut(half))
        .zip(bottom.chunks_exact_mut(half))
        .zip(twiddles.iter())
        .for_each(|(((in_row, top_row), bottom_row), &w)| {
            butterfly_row(w, in_row, top_row, bottom_row);
        });
}

#[cfg(feature = "parallel")]
fn combine_parallel<T: FftFloat>(
    src: &[Complex<T>],
    twiddles: &[Complex<T>],
    cols: usize,
    top: &mut [Complex<T>],
    bottom: &mut [Complex<T>],
) {
    use rayon::prelude::*;

    let half = cols / 2;
    src.par_chunks_exact(cols)
        .zip(top.par_chunks_exact_mut(half))
        .zip(bottom.par_chunks_exact_mut(half))
        .zip(twiddles.par_iter())
        .for_each(|(((in_row, top_row), bottom_row), &w)| {
            butterfly_row(w, in_row, top_row, bottom_row);
        });
}

/// Performs one doubling step.
///
/// `twiddles` must hold one factor per row of `matrix`, and `matrix` must have at least
/// two columns.
#[allow(unused_variables)] // when `parallel` feature is disabled, the flag is ignored
pub(crate) fn combine<T: FftFloat>(
    matrix: &WorkingMatrix<T>,
    twiddles: &[Complex<T>],
    parallel: bool,
) -> WorkingMatrix<T> {
    let (rows, cols) = (matrix.rows(), matrix.cols());
    assert_eq!(twiddles.len(), rows);
    assert!(cols >= 2 && cols % 2 == 0);

    let mut data = vec![Complex::new(T::zero(), T::zero()); matrix.len()];
    let (top, bottom) = data.split_at_mut(matrix.len() / 2);

    #[cfg(feature = "parallel")]
    {
        if parallel {
            combine_parallel(matrix.as_slice(), twiddles, cols, top, bottom);
        } else {
            combine_serial(matrix.as_slice(), twiddles, cols, top, bottom);
        }
    }
    #[cfg(not(feature = "parallel"))]
    {
        combine_serial(matrix.as_slice(), twiddles, cols, top, bottom);
    }

    WorkingMatrix::from_parts(data, rows * 2, cols / 2)
}
