//! Index Assembler - runs the pipeline over all candidate records.
//!
//! Two phases with a hard ordering between them:
//!
//! 1. Reduce: tokenize every record, then compile the global bit table and
//!    weights from all ngram sets at once.
//! 2. Map: encode each record against the frozen table.
//!
//! Per-record work in both phases may run on the rayon pool; output order always
//! matches input order because clients address entries by offset.

use rayon::prelude::*;

use omni_tokenizer::NgramSet;

use crate::config::IndexConfig;
use crate::description::truncate_description;
use crate::fingerprint::generate_fingerprint;
use crate::rarity::compile_ngrams;
use crate::tiebreaker::compute_tiebreaker_bonus;
use crate::types::{CandidateRecord, Entry, NgramPositions, SearchIndex};
use crate::weights::compute_bit_weights;

/// Builds a [`SearchIndex`] from candidate records.
#[derive(Debug, Clone, Default)]
pub struct SearchIndexBuilder {
    config: IndexConfig,
}

impl SearchIndexBuilder {
    /// Create a builder with the given settings.
    #[must_use]
    pub fn new(config: IndexConfig) -> Self {
        Self { config }
    }

    /// Settings in use.
    #[must_use]
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Generate the index for `records`.
    #[must_use]
    pub fn build(&self, records: &[CandidateRecord]) -> SearchIndex {
        let ngram_sets: Vec<NgramSet> =
            self.map_ordered(records.len(), |i| records[i].search_key().ngrams());

        let ngrams = compile_ngrams(&ngram_sets);
        let weights = compute_bit_weights(&ngrams);

        let budget = self.config.description_budget;
        let entries = self.map_ordered(records.len(), |i| {
            build_entry(&records[i], &ngram_sets[i], &ngrams, budget)
        });

        log::info!(
            "generated search index: {} entries, {} ngrams, {} bit weights",
            entries.len(),
            ngrams.len(),
            weights.len()
        );

        SearchIndex {
            ngrams,
            weights,
            entries,
        }
    }

    fn map_ordered<T, F>(&self, len: usize, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send,
    {
        if self.config.parallel {
            (0..len).into_par_iter().map(f).collect()
        } else {
            (0..len).map(f).collect()
        }
    }
}

/// Generate an index with default settings.
#[must_use]
pub fn generate(records: &[CandidateRecord]) -> SearchIndex {
    SearchIndexBuilder::default().build(records)
}

/// Encode one record against the compiled table.
///
/// `ngrams` must be the record's own set as seen by [`compile_ngrams`].
#[must_use]
pub fn build_entry(
    record: &CandidateRecord,
    ngrams: &NgramSet,
    positions: &NgramPositions,
    description_budget: usize,
) -> Entry {
    Entry {
        fingerprint: generate_fingerprint(ngrams, positions),
        tiebreaker: compute_tiebreaker_bonus(
            &record.qualified_name,
            record.member_name(),
            &record.description_html,
        ),
        url: record.url.clone(),
        name: record.qualified_name.clone(),
        signature: record.member_signature.clone(),
        description: truncate_description(&record.description_html, description_budget),
    }
}
