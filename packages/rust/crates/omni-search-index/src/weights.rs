//! Weight calculator - relevance weight per bit position.
//!
//! A matched rare ngram says more about a result than a matched common one, so
//! weights grow with rarity rank. All weights are at least [`MIN_BIT_WEIGHT`],
//! which keeps any real ngram match above the tiebreaker bonus.

use std::collections::BTreeSet;

use crate::types::NgramPositions;

/// Weight of the most common bit.
pub const MIN_BIT_WEIGHT: f64 = 1.0;

/// Weights are rounded to this many decimals to keep the artifact small.
const WEIGHT_DECIMALS: i32 = 2;

/// Compute one weight per distinct bit position, ordered by position.
///
/// Only the rank of each position among the distinct positions matters; alias
/// ngrams sharing a position contribute a single weight. For `n` positions,
/// rank `r` gets `1 + ln(1 + r) / ln(1 + n)`, a value in `[1, 2)`.
#[must_use]
pub fn compute_bit_weights(positions: &NgramPositions) -> Vec<f64> {
    let distinct: BTreeSet<usize> = positions.values().copied().collect();
    let scale = ((distinct.len() + 1) as f64).ln();

    (0..distinct.len())
        .map(|rank| round(MIN_BIT_WEIGHT + ((rank + 1) as f64).ln() / scale))
        .collect()
}

fn round(value: f64) -> f64 {
    let factor = 10f64.powi(WEIGHT_DECIMALS);
    (value * factor).round() / factor
}
