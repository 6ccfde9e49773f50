//! FFT Algorithm Implementations
//!
//! ## Available Algorithms
//!
//! - **Doubling**: bottom-up radix-2 Cooley-Tukey. Starts from the DFTs of single samples
//!   (or of small strided groups, see [`Options::base_rows`](crate::options::Options::base_rows))
//!   and repeatedly merges pairs of half-size transforms until one `N`-point transform is
//!   left. Input and output are both in natural order, so no bit reversal is needed.

pub mod doubling;
