//! omni-search-index - Precomputed symbol search index for static documentation
//!
//! Builds a compact artifact that lets a browser run typo- and substring-tolerant
//! lookup over qualified symbol names without a server:
//! - Ngram fingerprints per symbol, bit positions ordered by rarity
//! - Rarity-derived bit weights for scoring matched ngrams
//! - A bounded tiebreaker bonus per symbol
//! - Tag-aware truncated description HTML
//!
//! # Architecture (ODF-REP Compliant)
//!
//! ```text
//! omni-search-index/src/
//! ├── lib.rs          # Re-exports (this file)
//! ├── error.rs        # SearchIndexError
//! ├── types.rs        # CandidateRecord, Entry, SearchIndex
//! ├── catalog.rs      # Catalog, Namespace, Member → candidate records
//! ├── signature.rs    # Member signatures and page anchors
//! ├── rarity.rs       # Ngram → bit position compilation
//! ├── fingerprint.rs  # Bit packing per record
//! ├── weights.rs      # Bit weights by rarity rank
//! ├── tiebreaker.rs   # Tiebreaker bonus
//! ├── description.rs  # Description truncation
//! ├── assembler.rs    # SearchIndexBuilder pipeline
//! ├── config.rs       # IndexConfig (YAML)
//! └── output.rs       # JSON / ES module rendering
//! ```
//!
//! # Example
//!
//! ```rust
//! use omni_search_index::{Catalog, Member, Namespace, generate};
//!
//! let catalog = Catalog {
//!     namespaces: vec![
//!         Namespace::new("FooBar")
//!             .with_description("<p>This is <code>FooBar</code>.</p>")
//!             .with_member(Member::instance("hoge_fuga", "()")),
//!     ],
//! };
//! let index = generate(&catalog.candidate_records());
//! assert_eq!(index.entries.len(), 2);
//! ```

// ============================================================================
// Module Declarations (ODF-REP: Atomic Structure)
// ============================================================================

mod assembler;
mod catalog;
mod config;
mod description;
mod error;
mod fingerprint;
mod output;
mod rarity;
mod signature;
mod tiebreaker;
mod types;
mod weights;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use assembler::{SearchIndexBuilder, build_entry, generate};
pub use catalog::{Catalog, Member, NAMESPACE_DIR, Namespace, load_records};
pub use config::IndexConfig;
pub use description::{DEFAULT_DESCRIPTION_BUDGET, truncate_description};
pub use error::{Result, SearchIndexError};
pub use fingerprint::generate_fingerprint;
pub use output::{OutputFormat, write_index};
pub use rarity::compile_ngrams;
pub use signature::{CALL_SEQ_PARAMS, member_anchor, signature_for};
pub use tiebreaker::{MAX_TIEBREAKER_BONUS, compute_tiebreaker_bonus};
pub use types::{CandidateRecord, Entry, NgramPositions, SearchIndex};
pub use weights::{MIN_BIT_WEIGHT, compute_bit_weights};

pub use omni_tokenizer::{MemberKind, NgramSet, SearchKey, derive_ngrams};
