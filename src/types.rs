//! Core domain types shared across modules.

use rand::rngs::SmallRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One of the four dataset shapes the generator can produce.
///
/// The exact sample composition per kind lives in [`crate::generator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionKind {
    /// Single symmetric Gaussian.
    Normal,
    /// Right-skewed shifted exponential.
    Skewed,
    /// Two equally weighted Gaussian components.
    Bimodal,
    /// Two Gaussian components of unequal weight.
    DifferentHeights,
}

impl DistributionKind {
    /// All kinds, in a fixed order usable for indexing tallies.
    pub const ALL: [DistributionKind; 4] = [
        DistributionKind::Normal,
        DistributionKind::Skewed,
        DistributionKind::Bimodal,
        DistributionKind::DifferentHeights,
    ];

    /// Draw a kind uniformly at random.
    pub fn pick(rng: &mut SmallRng) -> DistributionKind {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Stable lowercase name, used by the sample CLI and logs.
    pub fn name(self) -> &'static str {
        match self {
            DistributionKind::Normal => "normal",
            DistributionKind::Skewed => "skewed",
            DistributionKind::Bimodal => "bimodal",
            DistributionKind::DifferentHeights => "different_heights",
        }
    }
}

/// Marker color, serialized lowercase as the frontend form submits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
}

impl Color {
    /// The palette in its unshuffled order.
    pub const ALL: [Color; 3] = [Color::Red, Color::Blue, Color::Green];

    /// Wire name of the color, identical to its serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
        }
    }
}

/// Which marker color stands for which statistic on one plot.
///
/// Returned by `/get_plot` as the answer key and echoed back by the client
/// inside the `/check_answer` body. Always a bijection: the three fields
/// hold three distinct colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorAssignment {
    pub mean: Color,
    pub median: Color,
    pub mode: Color,
}

/// A density estimate evaluated on a fixed grid.
///
/// `x` and `y` have equal length and `x` is strictly ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityCurve {
    /// Grid points the density was evaluated at.
    pub x: Vec<f64>,
    /// Estimated density at each grid point.
    pub y: Vec<f64>,
}

impl DensityCurve {
    /// Highest density value on the grid. The curve must be nonempty.
    pub fn peak(&self) -> f64 {
        self.y.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Grid point where the density peaks. Ties resolve to the first
    /// occurrence. The curve must be nonempty.
    pub fn mode(&self) -> f64 {
        let mut best = 0;
        for i in 1..self.y.len() {
            if self.y[i] > self.y[best] {
                best = i;
            }
        }
        self.x[best]
    }
}
