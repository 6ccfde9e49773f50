//! Runs stackfft next to RustFFT and the direct DFT.
//!
//! ```text
//! RUST_LOG=debug cargo run --release --example compare -- 20
//! ```
//!
//! Without arguments only the 8-point sample signal is transformed. With `<n>`, a random
//! signal of `2^n` samples is transformed as well and its stage timings are logged.
use std::env;
use std::str::FromStr;

use stackfft::reference::dft;
use stackfft::{fft_64, fft_64_with_opts_and_observer, LogObserver, Options, StageTimings};
use utilities::{gen_random_signal, rustfft_forward};

fn compare_sample() -> Result<(), stackfft::FftError> {
    let input = [1.0, 2.0, 3.0, 4.0, 7.0, 6.0, 9.0, 2.0];

    let mut observer = LogObserver;
    let ours = fft_64_with_opts_and_observer(&input, &Options::default(), &mut observer)?;
    let theirs = rustfft_forward(&input);
    let direct = dft(&input);

    println!("{:>4} {:>28} {:>28} {:>28}", "k", "stackfft", "RustFFT", "direct DFT");
    for (k, ((a, b), c)) in ours.iter().zip(&theirs).zip(&direct).enumerate() {
        let a = format!("{:.8}{:+.8}i", a.re, a.im);
        let b = format!("{:.8}{:+.8}i", b.re, b.im);
        let c = format!("{:.8}{:+.8}i", c.re, c.im);
        println!("{k:>4} {a:>28} {b:>28} {c:>28}");
    }
    Ok(())
}

fn time_random(log_n: usize) -> Result<(), stackfft::FftError> {
    let big_n = 1 << log_n;
    let mut reals = vec![0.0; big_n];
    gen_random_signal(&mut reals);

    let opts = Options::guess_options(big_n);
    let mut timings = StageTimings::new();
    let now = std::time::Instant::now();
    fft_64_with_opts_and_observer(&reals, &opts, &mut timings)?;
    let elapsed = now.elapsed();

    for (stage, took) in &timings.stages {
        log::debug!("{stage}: {took:?}");
    }
    println!(
        "2^{log_n} samples: {elapsed:?} total, {:?} in stages",
        timings.total()
    );

    // The plain entry point must agree with the observed one
    let plain = fft_64(&reals)?;
    let max_diff = plain
        .iter()
        .zip(rustfft_forward(&reals))
        .map(|(a, b)| (a.re - b.re).abs().max((a.im - b.im).abs()))
        .fold(0.0, f64::max);
    println!("max deviation from RustFFT: {max_diff:e}");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    compare_sample()?;

    let args: Vec<String> = env::args().collect();
    if let Some(n) = args.get(1) {
        let log_n = usize::from_str(n)?;
        time_random(log_n)?;
    }
    Ok(())
}
