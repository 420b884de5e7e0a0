//! Random dataset generation for the four plot shapes.
//!
//! | Kind | Sample composition |
//! |------|--------------------|
//! | `Normal` | 1000 x N(0, 1) |
//! | `Skewed` | 1000 x (Exp(rate 0.5) - 2) |
//! | `Bimodal` | 500 x N(-2, 1) + 500 x N(2, 1) |
//! | `DifferentHeights` | 300 x N(-1, 0.8) + 700 x N(2, 1) |
//!
//! All randomness flows through the caller's `SmallRng`, so a fixed seed
//! reproduces the full dataset, curve and statistics.

use rand::rngs::SmallRng;
use rand_distr::{Distribution, Exp, Normal};

use crate::constants::SAMPLE_SIZE;
use crate::density;
use crate::stats::{self, CentralTendency};
use crate::types::{DensityCurve, DistributionKind};

/// One plot-ready dataset: its shape, density curve and statistics.
#[derive(Debug, Clone)]
pub struct GeneratedDistribution {
    pub kind: DistributionKind,
    pub curve: DensityCurve,
    pub stats: CentralTendency,
}

fn gaussian(mean: f64, sd: f64) -> Normal<f64> {
    Normal::new(mean, sd).expect("valid gaussian parameters")
}

fn push_gaussian(sample: &mut Vec<f64>, count: usize, mean: f64, sd: f64, rng: &mut SmallRng) {
    let component = gaussian(mean, sd);
    for _ in 0..count {
        sample.push(component.sample(rng));
    }
}

/// Draw the raw [`SAMPLE_SIZE`]-value dataset for `kind`.
pub fn draw_sample(kind: DistributionKind, rng: &mut SmallRng) -> Vec<f64> {
    let mut sample = Vec::with_capacity(SAMPLE_SIZE);
    match kind {
        DistributionKind::Normal => {
            push_gaussian(&mut sample, SAMPLE_SIZE, 0.0, 1.0, rng);
        }
        DistributionKind::Skewed => {
            let exp = Exp::new(0.5).expect("valid exponential rate");
            for _ in 0..SAMPLE_SIZE {
                sample.push(exp.sample(rng) - 2.0);
            }
        }
        DistributionKind::Bimodal => {
            push_gaussian(&mut sample, SAMPLE_SIZE / 2, -2.0, 1.0, rng);
            push_gaussian(&mut sample, SAMPLE_SIZE / 2, 2.0, 1.0, rng);
        }
        DistributionKind::DifferentHeights => {
            push_gaussian(&mut sample, 3 * SAMPLE_SIZE / 10, -1.0, 0.8, rng);
            push_gaussian(&mut sample, 7 * SAMPLE_SIZE / 10, 2.0, 1.0, rng);
        }
    }
    sample
}

/// Generate a full dataset for a specific shape.
pub fn generate_with_kind(kind: DistributionKind, rng: &mut SmallRng) -> GeneratedDistribution {
    let sample = draw_sample(kind, rng);
    let curve = density::estimate(&sample);
    let stats = stats::central_tendency(&sample, &curve);
    GeneratedDistribution { kind, curve, stats }
}

/// Generate a full dataset for a uniformly random shape.
pub fn generate(rng: &mut SmallRng) -> GeneratedDistribution {
    generate_with_kind(DistributionKind::pick(rng), rng)
}
