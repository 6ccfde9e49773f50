use thiserror::Error;

/// Errors the transform can return.
///
/// Every variant is a precondition failure detected before any work is done,
/// so a failed call never produces a partial spectrum.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FftError {
    /// The input signal has no samples.
    #[error("input signal is empty")]
    EmptyInput,
    /// The input length is not a power of two.
    #[error("input length {0} is not a power of two")]
    InvalidInputLength(usize),
    /// [`Options::base_rows`](crate::options::Options::base_rows) is zero or not a power of two.
    #[error("base case size {0} is not a power of two")]
    InvalidBaseRows(usize),
}

/// Checks that `len` is a valid transform length.
pub(crate) fn validate_len(len: usize) -> Result<(), FftError> {
    if len == 0 {
        return Err(FftError::EmptyInput);
    }
    if !len.is_power_of_two() {
        return Err(FftError::InvalidInputLength(len));
    }
    Ok(())
}
