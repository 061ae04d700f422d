//! Symbol catalog - the upstream source of candidate records.
//!
//! A catalog is a JSON document listing namespaces and their members, as
//! extracted by the documentation front end:
//!
//! ```json
//! {
//!   "namespaces": [
//!     {
//!       "full_name": "FooBar",
//!       "description_html": "<p>This is <code>FooBar</code>.</p>",
//!       "members": [{ "name": "hoge_fuga", "params": "()" }]
//!     }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use omni_tokenizer::NAMESPACE_DELIMITER;

use crate::error::{Result, SearchIndexError};
use crate::signature::{member_anchor, signature_for};
use crate::types::CandidateRecord;

/// Directory holding namespace pages.
pub const NAMESPACE_DIR: &str = "classes";

/// All documented namespaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Namespaces in documentation order.
    #[serde(default)]
    pub namespaces: Vec<Namespace>,
}

/// A documented namespace (module or class).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    /// Fully qualified name, e.g. `ActiveSupport::TimeZone`.
    pub full_name: String,
    /// Page path; derived from `full_name` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Raw description HTML.
    #[serde(default)]
    pub description_html: String,
    /// Documented members.
    #[serde(default)]
    pub members: Vec<Member>,
}

/// A documented member (method) of a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Bare member name.
    pub name: String,
    /// `true` for singleton (class-level) members.
    #[serde(default)]
    pub singleton: bool,
    /// Parameter list as written, e.g. `(x, y)`.
    #[serde(default)]
    pub params: String,
    /// Free-form call sequence documentation, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_seq: Option<String>,
    /// Raw description HTML.
    #[serde(default)]
    pub description_html: String,
}

impl Namespace {
    /// Namespace without members or description.
    #[must_use]
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            path: None,
            description_html: String::new(),
            members: Vec::new(),
        }
    }

    /// Set the description HTML.
    #[must_use]
    pub fn with_description(mut self, description_html: impl Into<String>) -> Self {
        self.description_html = description_html.into();
        self
    }

    /// Add a member.
    #[must_use]
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Page path, `classes/A/B.html` for `A::B` unless set explicitly.
    #[must_use]
    pub fn url(&self) -> String {
        self.path.clone().unwrap_or_else(|| {
            format!(
                "{NAMESPACE_DIR}/{}.html",
                self.full_name.replace(NAMESPACE_DELIMITER, "/")
            )
        })
    }

    /// Link to a member's anchor on this namespace's page.
    #[must_use]
    pub fn member_url(&self, member: &Member) -> String {
        format!("{}#{}", self.url(), member_anchor(member))
    }
}

impl Member {
    /// Instance member.
    #[must_use]
    pub fn instance(name: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            singleton: false,
            params: params.into(),
            call_seq: None,
            description_html: String::new(),
        }
    }

    /// Singleton member.
    #[must_use]
    pub fn singleton(name: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            singleton: true,
            ..Self::instance(name, params)
        }
    }

    /// Set the call sequence documentation.
    #[must_use]
    pub fn with_call_seq(mut self, call_seq: impl Into<String>) -> Self {
        self.call_seq = Some(call_seq.into());
        self
    }

    /// Set the description HTML.
    #[must_use]
    pub fn with_description(mut self, description_html: impl Into<String>) -> Self {
        self.description_html = description_html.into();
        self
    }
}

impl Catalog {
    /// Parse a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SearchIndexError::Json`] for malformed input.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`SearchIndexError::Io`] if the file cannot be read and
    /// [`SearchIndexError::Json`] if it is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SearchIndexError::io(path, e))?;
        Self::from_json_str(&content)
    }

    /// Flatten into candidate records: every namespace first, then every member.
    ///
    /// Members resolving to an already seen URL are skipped, which drops the
    /// copies produced when a namespace is re-exported under another name.
    #[must_use]
    pub fn candidate_records(&self) -> Vec<CandidateRecord> {
        let mut records: Vec<CandidateRecord> = self
            .namespaces
            .iter()
            .map(|namespace| {
                CandidateRecord::namespace(
                    namespace.full_name.clone(),
                    namespace.url(),
                    namespace.description_html.clone(),
                )
            })
            .collect();

        let mut seen_urls = HashSet::new();
        for namespace in &self.namespaces {
            for member in &namespace.members {
                let url = namespace.member_url(member);
                if !seen_urls.insert(url.clone()) {
                    log::warn!("skipping duplicate member {url}");
                    continue;
                }
                records.push(CandidateRecord::member(
                    namespace.full_name.clone(),
                    signature_for(member),
                    url,
                    member.description_html.clone(),
                ));
            }
        }

        records
    }
}

/// Load a flat JSON array of candidate records.
///
/// # Errors
///
/// Returns [`SearchIndexError::Io`] if the file cannot be read and
/// [`SearchIndexError::Json`] if it is malformed.
pub fn load_records(path: &Path) -> Result<Vec<CandidateRecord>> {
    let content = std::fs::read_to_string(path).map_err(|e| SearchIndexError::io(path, e))?;
    Ok(serde_json::from_str(&content)?)
}
