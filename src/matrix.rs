//! The working matrix of the transform.
//!
//! A `rows × cols` grid of partial DFT results stored row-major in one contiguous buffer.
//! Column `c` of a matrix with `rows` rows holds the `rows`-point DFT of the input samples
//! `c, c + cols, c + 2·cols, ...`; row `k` is frequency bin `k` of every one of those
//! sub-transforms.
use num_complex::Complex;
use num_traits::{Float, FloatConst};

use crate::twiddles::dft_matrix;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WorkingMatrix<T> {
    data: Vec<Complex<T>>,
    rows: usize,
    cols: usize,
}

impl<T: Float + FloatConst> WorkingMatrix<T> {
    /// Computes the base case: reshapes `input` into `rows` rows and multiplies it by the
    /// `rows`-point DFT matrix.
    ///
    /// `rows` must be a power of two no larger than `input.len()`.
    pub(crate) fn base_case(input: &[T], rows: usize) -> Self {
        debug_assert!(rows.is_power_of_two() && rows <= input.len());
        let cols = input.len() / rows;

        if rows == 1 {
            // The 1-point DFT is the identity
            let data = input.iter().map(|&x| Complex::new(x, T::zero())).collect();
            return Self { data, rows, cols };
        }

        let m = dft_matrix::<T>(rows);
        let mut data = vec![Complex::new(T::zero(), T::zero()); input.len()];
        for (k, out_row) in data.chunks_exact_mut(cols).enumerate() {
            let m_row = &m[k * rows..(k + 1) * rows];
            for (w, in_row) in m_row.iter().zip(input.chunks_exact(cols)) {
                for (acc, &x) in out_row.iter_mut().zip(in_row) {
                    *acc = *acc + w.scale(x);
                }
            }
        }

        Self { data, rows, cols }
    }
}

impl<T> WorkingMatrix<T> {
    pub(crate) fn from_parts(data: Vec<Complex<T>>, rows: usize, cols: usize) -> Self {
        assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn as_slice(&self) -> &[Complex<T>] {
        &self.data
    }

    /// Flattens the matrix column-major.
    ///
    /// Once the matrix is a single column this is the buffer itself.
    pub(crate) fn into_column_major(self) -> Vec<Complex<T>>
    where
        T: Copy,
    {
        if self.cols == 1 {
            return self.data;
        }
        let mut out = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            out.extend(self.data.iter().skip(c).step_by(self.cols).copied());
        }
        out
    }
}
