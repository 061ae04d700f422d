//! Type definitions for candidate records and the generated index.
//!
//! Core data structures shared by every pipeline stage.

use std::collections::BTreeMap;

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

use omni_tokenizer::{MemberKind, NAMESPACE_DELIMITER, SearchKey};

/// Ngram → bit position. Aliases share a position, so values may repeat.
pub type NgramPositions = BTreeMap<String, usize>;

/// One indexable symbol: a namespace, or a member of one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// Namespace path, e.g. `ActiveSupport::TimeZone`.
    pub qualified_name: String,
    /// Member signature such as `#find(id)` or `::now()`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_signature: Option<String>,
    /// Relative link to the symbol's documentation.
    pub url: String,
    /// Raw description HTML, possibly empty.
    #[serde(default)]
    pub description_html: String,
}

impl CandidateRecord {
    /// Record for a namespace.
    #[must_use]
    pub fn namespace(
        qualified_name: impl Into<String>,
        url: impl Into<String>,
        description_html: impl Into<String>,
    ) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            member_signature: None,
            url: url.into(),
            description_html: description_html.into(),
        }
    }

    /// Record for a member of `qualified_name`.
    #[must_use]
    pub fn member(
        qualified_name: impl Into<String>,
        member_signature: impl Into<String>,
        url: impl Into<String>,
        description_html: impl Into<String>,
    ) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            member_signature: Some(member_signature.into()),
            url: url.into(),
            description_html: description_html.into(),
        }
    }

    /// Signature without its parameter list, e.g. `#find` for `#find(id)`.
    fn signature_head(&self) -> Option<&str> {
        let signature = self.member_signature.as_deref()?;
        let sigil_len = sigil_len(signature);
        Some(
            signature[sigil_len..]
                .find('(')
                .map_or(signature, |idx| &signature[..sigil_len + idx]),
        )
    }

    /// Tokenizer key. The member kind comes from the signature sigil, so a
    /// singleton such as `Kernel::Integer` stays a member.
    #[must_use]
    pub fn search_key(&self) -> SearchKey<'_> {
        let member = self
            .member_signature
            .as_deref()
            .map(member_kind)
            .zip(self.member_name());
        SearchKey::new(&self.qualified_name, member)
    }

    /// Bare member name, e.g. `find` for `#find(id)`.
    #[must_use]
    pub fn member_name(&self) -> Option<&str> {
        self.signature_head()
            .map(|head| &head[sigil_len(head)..])
            .filter(|name| !name.is_empty())
    }
}

fn member_kind(signature: &str) -> MemberKind {
    if signature.starts_with(NAMESPACE_DELIMITER) {
        MemberKind::Singleton
    } else if signature.starts_with('.') {
        MemberKind::Dot
    } else {
        MemberKind::Instance
    }
}

fn sigil_len(signature: &str) -> usize {
    if signature.starts_with(NAMESPACE_DELIMITER) {
        NAMESPACE_DELIMITER.len()
    } else if signature.starts_with(['#', '.']) {
        1
    } else {
        0
    }
}

/// One index row.
///
/// Serialized as `[fingerprint, tiebreaker, url, name, signature?, description?]`.
/// Absent trailing fields are dropped; an absent signature followed by a present
/// description is written as `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Packed ngram bits, trailing zero bytes trimmed.
    pub fingerprint: Vec<u8>,
    /// Score nudge, always below the smallest bit weight.
    pub tiebreaker: f64,
    /// Relative documentation link.
    pub url: String,
    /// Namespace name.
    pub name: String,
    /// Member signature, if the record is a member.
    pub signature: Option<String>,
    /// Truncated description HTML.
    pub description: Option<String>,
}

impl Entry {
    /// Number of serialized fields.
    #[must_use]
    pub fn field_count(&self) -> usize {
        if self.description.is_some() {
            6
        } else if self.signature.is_some() {
            5
        } else {
            4
        }
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.field_count();
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.fingerprint)?;
        seq.serialize_element(&self.tiebreaker)?;
        seq.serialize_element(&self.url)?;
        seq.serialize_element(&self.name)?;
        if len > 4 {
            seq.serialize_element(&self.signature)?;
        }
        if len > 5 {
            seq.serialize_element(&self.description)?;
        }
        seq.end()
    }
}

/// The generated artifact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchIndex {
    /// Ngram → bit position table.
    pub ngrams: NgramPositions,
    /// Weight per bit position, indexed by position.
    pub weights: Vec<f64>,
    /// One entry per candidate record, in input order.
    pub entries: Vec<Entry>,
}

impl SearchIndex {
    /// Highest bit position in the table.
    #[must_use]
    pub fn max_position(&self) -> Option<usize> {
        self.ngrams.values().copied().max()
    }
}
