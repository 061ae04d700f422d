//! Fingerprint encoder - packs a record's ngrams into trimmed bytes.

use crate::types::NgramPositions;

/// Encode an ngram set as a little-endian bit vector.
///
/// Bit `p` lives in byte `p / 8` at bit `p % 8`. The vector ends at the byte
/// holding the highest set bit. Ngrams missing from `positions` are skipped.
#[must_use]
pub fn generate_fingerprint<I, S>(ngrams: I, positions: &NgramPositions) -> Vec<u8>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let bits: Vec<usize> = ngrams
        .into_iter()
        .filter_map(|ngram| positions.get(ngram.as_ref()).copied())
        .collect();

    let Some(&max_bit) = bits.iter().max() else {
        return Vec::new();
    };

    let mut bytes = vec![0u8; max_bit / 8 + 1];
    for bit in bits {
        bytes[bit / 8] |= 1 << (bit % 8);
    }
    bytes
}
