//! Answer-key shuffling and guess checking.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use serde::Deserialize;

use crate::types::{Color, ColorAssignment};

/// Shuffle the palette over the three statistics.
///
/// Every permutation is equally likely and the result is always a
/// bijection: each color names exactly one statistic.
pub fn assign_colors(rng: &mut SmallRng) -> ColorAssignment {
    let mut palette = Color::ALL;
    palette.shuffle(rng);
    ColorAssignment {
        mean: palette[0],
        median: palette[1],
        mode: palette[2],
    }
}

/// One submitted quiz answer: the user's per-statistic color guesses plus
/// the answer key the client echoes back from `/get_plot`.
///
/// Every field is optional. An absent guess counts as wrong; an absent
/// answer key is rejected by the handler before checking starts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerSubmission {
    #[serde(default)]
    pub mean: Option<String>,
    #[serde(default)]
    pub median: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub correct_answers: Option<ColorAssignment>,
}

/// Compare the guesses against the answer key, statistic by statistic in
/// mean, median, mode order, stopping at the first mismatch.
///
/// A guess matches only when it equals the assigned color's wire name
/// exactly; missing guesses and out-of-palette strings are mismatches.
pub fn check_answers(submission: &AnswerSubmission, correct: &ColorAssignment) -> bool {
    let pairs = [
        (submission.mean.as_deref(), correct.mean),
        (submission.median.as_deref(), correct.median),
        (submission.mode.as_deref(), correct.mode),
    ];
    pairs
        .iter()
        .all(|&(guess, expected)| guess == Some(expected.name()))
}
