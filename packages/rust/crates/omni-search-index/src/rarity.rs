//! Rarity compiler - global ngram → bit position assignment.
//!
//! Runs once over every record's ngram set before any fingerprint is encoded.
//! The most widespread ngram gets bit 0, so common ngrams pack into the first
//! bytes every fingerprint carries anyway, and rare ones push only the few
//! fingerprints that contain them to longer lengths.

use std::collections::{BTreeSet, HashMap};

use omni_tokenizer::{NgramSet, canonical_ngram};

use crate::types::NgramPositions;

/// Assign bit positions by descending document frequency.
///
/// Frequency is counted per canonical ngram (aliases merged), once per record.
/// Equal frequencies are ordered by ascending canonical text, which keeps the
/// table independent of record order. Every observed spelling maps to the
/// position of its canonical form.
#[must_use]
pub fn compile_ngrams(ngram_sets: &[NgramSet]) -> NgramPositions {
    let mut frequencies: HashMap<String, usize> = HashMap::new();
    let mut spellings: BTreeSet<&str> = BTreeSet::new();

    for ngrams in ngram_sets {
        let canonical: BTreeSet<_> = ngrams.iter().map(|n| canonical_ngram(n)).collect();
        for key in canonical {
            *frequencies.entry(key.into_owned()).or_default() += 1;
        }
        spellings.extend(ngrams.iter().map(String::as_str));
    }

    let mut ranked: Vec<(String, usize)> = frequencies.into_iter().collect();
    ranked.sort_unstable_by(|(a_key, a_count), (b_key, b_count)| {
        b_count.cmp(a_count).then_with(|| a_key.cmp(b_key))
    });

    let canonical_positions: HashMap<String, usize> = ranked
        .into_iter()
        .enumerate()
        .map(|(position, (key, _))| (key, position))
        .collect();

    let positions: NgramPositions = spellings
        .into_iter()
        .filter_map(|ngram| {
            canonical_positions
                .get(&*canonical_ngram(ngram))
                .map(|&position| (ngram.to_string(), position))
        })
        .collect();

    log::debug!(
        "compiled {} ngrams into {} bit positions from {} records",
        positions.len(),
        canonical_positions.len(),
        ngram_sets.len()
    );

    positions
}
