//! Gaussian kernel density estimation on a fixed evaluation grid.
//!
//! One Gaussian kernel per sample value, with Scott's rule picking the
//! bandwidth from sample size and spread. The curve is evaluated on a
//! [`GRID_SIZE`]-point grid stretching [`GRID_MARGIN`] beyond the sample
//! range on both sides, so the visible tails are not clipped at the data
//! extremes.

use std::f64::consts::PI;

use crate::constants::{GRID_MARGIN, GRID_SIZE};
use crate::stats;
use crate::types::DensityCurve;

/// Scott's rule bandwidth: `n^(-1/5)` times the sample standard deviation
/// (`n - 1` denominator).
///
/// Falls back to the bare `n^(-1/5)` factor for degenerate samples whose
/// variance is zero, keeping the estimate finite.
pub fn scott_bandwidth(sample: &[f64]) -> f64 {
    let n = sample.len() as f64;
    let mean = stats::mean(sample);
    let variance = sample.iter().map(|&v| (v - mean) * (v - mean)).sum::<f64>() / (n - 1.0);
    let factor = n.powf(-0.2);
    let h = factor * variance.sqrt();
    if h > 0.0 {
        h
    } else {
        factor
    }
}

/// Estimate the density of `sample` on the evaluation grid.
///
/// The grid spans `[min - GRID_MARGIN, max + GRID_MARGIN]` with
/// [`GRID_SIZE`] evenly spaced points, both endpoints included.
/// `sample` must be nonempty and finite.
pub fn estimate(sample: &[f64]) -> DensityCurve {
    let lo = sample.iter().copied().fold(f64::INFINITY, f64::min) - GRID_MARGIN;
    let hi = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max) + GRID_MARGIN;
    let h = scott_bandwidth(sample);
    let norm = 1.0 / (sample.len() as f64 * h * (2.0 * PI).sqrt());
    let step = (hi - lo) / (GRID_SIZE as f64 - 1.0);

    let mut x = Vec::with_capacity(GRID_SIZE);
    let mut y = Vec::with_capacity(GRID_SIZE);
    for j in 0..GRID_SIZE {
        let xj = lo + step * j as f64;
        let mut sum = 0.0;
        for &s in sample {
            let u = (xj - s) / h;
            sum += (-0.5 * u * u).exp();
        }
        x.push(xj);
        y.push(norm * sum);
    }
    DensityCurve { x, y }
}

/// Two candidate maxima collapse into one peak when the valley between
/// them stays above this fraction of the lower maximum.
const VALLEY_MERGE_FRACTION: f64 = 0.9;

/// Count distinct local maxima whose height is at least `min_fraction` of
/// the global peak. Used to sanity-check multimodal shapes.
///
/// A smoothed curve can carry tiny wiggles at a summit where two grid
/// points tie to within rounding; neighboring maxima separated only by a
/// shallow dip (see [`VALLEY_MERGE_FRACTION`]) count as a single peak.
pub fn count_prominent_peaks(curve: &DensityCurve, min_fraction: f64) -> usize {
    let threshold = min_fraction * curve.peak();
    let y = &curve.y;
    let mut count = 0;
    let mut prev: Option<usize> = None;
    for i in 1..y.len().saturating_sub(1) {
        if !(y[i] > y[i - 1] && y[i] > y[i + 1] && y[i] >= threshold) {
            continue;
        }
        let distinct = match prev {
            None => true,
            Some(p) => {
                let valley = y[p + 1..i].iter().copied().fold(f64::INFINITY, f64::min);
                valley < VALLEY_MERGE_FRACTION * y[p].min(y[i])
            }
        };
        if distinct {
            count += 1;
        }
        prev = Some(i);
    }
    count
}
