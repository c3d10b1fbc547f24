use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::debug;

use radix2_fft::fft::fft_recursive::fft_recursive;
use radix2_fft::utils::complex::Complex;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Signal {
    /// ones in the first half, zeros in the second
    Pulse,
    /// a single one followed by zeros
    Impulse,
    /// all ones
    Constant,
    /// ones at even indices, zeros at odd
    Alternating,
}

#[derive(Parser)]
#[command(about = "Transform a sample sequence with the radix-2 FFT and print the bins")]
struct Args {
    /// comma-separated real samples, e.g. "1,1,1,1,0,0,0,0"
    #[arg(long, conflicts_with_all = ["signal", "size"])]
    samples: Option<String>,

    /// generated test signal to transform
    #[arg(long, value_enum, default_value_t = Signal::Pulse)]
    signal: Signal,

    /// number of samples to generate
    #[arg(long, default_value_t = 8)]
    size: usize,

    /// also print |X[k]| per bin
    #[arg(long)]
    magnitudes: bool,
}

fn parse_samples(list: &str) -> Result<Vec<f64>> {
    list.split(',')
        .map(|s| {
            s.trim()
                .parse::<f64>()
                .with_context(|| format!("invalid sample {:?}", s.trim()))
        })
        .collect()
}

fn generate(signal: Signal, size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| match signal {
            Signal::Pulse => if i < size / 2 { 1_f64 } else { 0_f64 },
            Signal::Impulse => if i == 0 { 1_f64 } else { 0_f64 },
            Signal::Constant => 1_f64,
            Signal::Alternating => (i % 2) as f64,
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let samples = match &args.samples {
        Some(list) => parse_samples(list)?,
        None => generate(args.signal, args.size),
    };

    let inputs = samples
        .iter()
        .map(|x| Complex::new(*x, 0_f64))
        .collect::<Vec<_>>();

    let n = inputs.len();
    if n > 1 && !n.is_power_of_two() {
        debug!("padding {} samples to {}", n, n.next_power_of_two());
    }

    let start = Instant::now();
    let freqs = fft_recursive(inputs);
    debug!("transformed {} samples in {:?}", n, start.elapsed());

    println!("input signal: {:?}", samples);
    println!("fft result:");
    for (k, freq) in freqs.iter().enumerate() {
        if args.magnitudes {
            println!("  {}: {}  |X| = {:.4}", k, freq, freq.magnitude());
        } else {
            println!("  {}: {}", k, freq);
        }
    }

    Ok(())
}
