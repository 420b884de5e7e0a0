//! Central tendency statistics for generated samples.

use crate::types::DensityCurve;

/// Mean, median and mode of one generated dataset.
///
/// Mean and median come from the raw sample. The mode is the x position of
/// the density curve's peak: a continuous sample has no repeated values, so
/// counting occurrences would be meaningless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralTendency {
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
}

/// Arithmetic mean. `data` must be nonempty.
pub fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Middle order statistic, averaging the two middle values for even
/// lengths. `data` must be nonempty and free of NaN.
pub fn median(data: &[f64]) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// All three statistics for a sample and its density estimate.
pub fn central_tendency(sample: &[f64], curve: &DensityCurve) -> CentralTendency {
    CentralTendency {
        mean: mean(sample),
        median: median(sample),
        mode: curve.mode(),
    }
}
