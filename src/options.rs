//! Knobs for the transform.

/// Options to tune the transform.
///
/// Calling FFT routines without specifying options will automatically select reasonable defaults.
///
/// You only need to tune these options if you are trying to squeeze maximum performance
/// out of a known hardware platform that you can benchmark at varying input sizes.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct Options {
    /// Number of rows of the working matrix after the base case, i.e. the size of the
    /// small DFTs computed directly before the doubling steps start.
    ///
    /// Must be a power of two. Values larger than the input length are clamped to it.
    /// The default of `1` makes the base case a plain reshape of the input.
    pub base_rows: usize,
    /// Split each doubling step across threads.
    ///
    /// Only has an effect when the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_rows: 1,
            parallel: false,
        }
    }
}

/// Below this size the thread pool overhead outweighs the gains of a parallel combine.
const PARALLEL_THRESHOLD: usize = 1 << 16;

impl Options {
    /// Picks options for a signal of `input_size` samples.
    pub fn guess_options(input_size: usize) -> Options {
        let mut options = Options::default();
        options.parallel = cfg!(feature = "parallel") && input_size >= PARALLEL_THRESHOLD;
        options
    }

    /// Sets [`Options::base_rows`].
    pub fn with_base_rows(mut self, base_rows: usize) -> Self {
        self.base_rows = base_rows;
        self
    }

    /// Sets [`Options::parallel`].
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
