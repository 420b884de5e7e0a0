use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use statquiz::density::count_prominent_peaks;
use statquiz::generator::{generate, generate_with_kind};
use statquiz::types::DistributionKind;

/// Local maxima at or above this fraction of the curve peak count as
/// prominent in the per-shape summary.
const PEAK_FRACTION: f64 = 0.4;

struct Range {
    lo: f64,
    hi: f64,
}

impl Range {
    fn new() -> Range {
        Range {
            lo: f64::INFINITY,
            hi: f64::NEG_INFINITY,
        }
    }

    fn add(&mut self, v: f64) {
        if v < self.lo {
            self.lo = v;
        }
        if v > self.hi {
            self.hi = v;
        }
    }
}

struct ShapeTally {
    count: usize,
    mean: Range,
    median: Range,
    mode: Range,
    peaks_lo: usize,
    peaks_hi: usize,
}

impl ShapeTally {
    fn new() -> ShapeTally {
        ShapeTally {
            count: 0,
            mean: Range::new(),
            median: Range::new(),
            mode: Range::new(),
            peaks_lo: usize::MAX,
            peaks_hi: 0,
        }
    }
}

fn parse_shape(name: &str) -> Option<DistributionKind> {
    DistributionKind::ALL.iter().copied().find(|k| k.name() == name)
}

fn parse_args() -> (usize, u64, Option<DistributionKind>) {
    let args: Vec<String> = std::env::args().collect();
    let mut count = 100usize;
    let mut seed = 42u64;
    let mut shape: Option<DistributionKind> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" => {
                i += 1;
                if i < args.len() {
                    count = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --count value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--shape" => {
                i += 1;
                if i < args.len() {
                    shape = Some(parse_shape(&args[i]).unwrap_or_else(|| {
                        eprintln!(
                            "Unknown --shape value: {} (expected normal, skewed, bimodal or different_heights)",
                            args[i]
                        );
                        std::process::exit(1);
                    }));
                }
            }
            "--help" | "-h" => {
                println!("Usage: statquiz-sample [--count N] [--seed S] [--shape NAME]");
                println!();
                println!("Options:");
                println!("  --count N     Number of plots to generate (default: 100)");
                println!("  --seed S      RNG seed (default: 42)");
                println!("  --shape NAME  Fix the distribution shape (default: random per plot)");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Usage: statquiz-sample [--count N] [--seed S] [--shape NAME]");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    (count, seed, shape)
}

fn main() {
    let (count, seed, shape) = parse_args();

    println!("Statquiz sample run ({} plots)", count);
    if let Some(kind) = shape {
        println!("  Shape: {}", kind.name());
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut tallies: Vec<ShapeTally> = DistributionKind::ALL
        .iter()
        .map(|_| ShapeTally::new())
        .collect();

    let t0 = Instant::now();
    for _ in 0..count {
        let generated = match shape {
            Some(kind) => generate_with_kind(kind, &mut rng),
            None => generate(&mut rng),
        };
        let tally = &mut tallies[generated.kind as usize];
        tally.count += 1;
        tally.mean.add(generated.stats.mean);
        tally.median.add(generated.stats.median);
        tally.mode.add(generated.stats.mode);
        let peaks = count_prominent_peaks(&generated.curve, PEAK_FRACTION);
        tally.peaks_lo = tally.peaks_lo.min(peaks);
        tally.peaks_hi = tally.peaks_hi.max(peaks);
    }
    let elapsed = t0.elapsed();

    println!("  Elapsed:   {:.1} ms", elapsed.as_secs_f64() * 1000.0);
    println!(
        "  Per plot:  {:.2} ms",
        elapsed.as_secs_f64() * 1000.0 / count as f64
    );
    println!();

    println!("Shapes:");
    for kind in DistributionKind::ALL {
        let tally = &tallies[kind as usize];
        if tally.count == 0 {
            continue;
        }
        println!(
            "  {:<18} {:>5} plots  peaks [{}, {}]  mean [{:+.2}, {:+.2}]  median [{:+.2}, {:+.2}]  mode [{:+.2}, {:+.2}]",
            kind.name(),
            tally.count,
            tally.peaks_lo,
            tally.peaks_hi,
            tally.mean.lo,
            tally.mean.hi,
            tally.median.lo,
            tally.median.hi,
            tally.mode.lo,
            tally.mode.hi,
        );
    }
}
