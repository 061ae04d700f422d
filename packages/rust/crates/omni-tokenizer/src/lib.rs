#![allow(clippy::doc_markdown)]

//! omni-tokenizer - Ngram tokenization for qualified symbol names
//!
//! Turns names such as `ActiveSupport::TimeZone`, `Foo#bar` or `Foo::bar` into the
//! set of short ngrams used as bit keys by the search index. The same function runs
//! on the build side (one set per catalog entry) and on the client side (one set per
//! query), so its output must stay stable across releases.
//!
//! # Example
//!
//! ```rust
//! use omni_tokenizer::derive_ngrams;
//!
//! let ngrams = derive_ngrams("Abc#def_xyz");
//! assert!(ngrams.contains("#de"));
//! assert!(ngrams.contains(".de"));
//! assert!(ngrams.contains("yz("));
//! ```

use std::borrow::Cow;
use std::collections::BTreeSet;

/// Distinct ngrams of one name, in byte order.
pub type NgramSet = BTreeSet<String>;

/// Namespace delimiter in qualified names.
pub const NAMESPACE_DELIMITER: &str = "::";

/// Width of the sliding window.
const WINDOW: usize = 3;

/// Marks the start or end of a word.
const PAD: char = ' ';

/// Closes a member name, as if an argument list followed.
const CALL_OPEN: char = '(';

/// How a member is attached to its namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// `Foo#bar`
    Instance,
    /// `Foo::bar`
    Singleton,
    /// `Foo.bar`, the notation users type for either kind.
    Dot,
}

impl MemberKind {
    /// Boundary glyphs emitted in front of the member name.
    ///
    /// Instance and singleton members also get the `.` spelling so that a query
    /// written in dot-call notation matches both.
    #[must_use]
    pub fn delimiters(self) -> &'static [char] {
        match self {
            Self::Instance => &['#', '.'],
            Self::Singleton => &[':', '.'],
            Self::Dot => &['.'],
        }
    }
}

/// A full name split into its namespace path and optional member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchKey<'a> {
    /// Namespace path segments, outermost first.
    pub segments: Vec<&'a str>,
    /// Member attached to the innermost namespace.
    pub member: Option<(MemberKind, &'a str)>,
}

impl<'a> SearchKey<'a> {
    /// Build a key from an already split name, e.g. a namespace plus a member
    /// whose kind is known from its signature.
    #[must_use]
    pub fn new(namespace: &'a str, member: Option<(MemberKind, &'a str)>) -> Self {
        Self {
            segments: namespace
                .split(NAMESPACE_DELIMITER)
                .filter(|segment| !segment.is_empty())
                .collect(),
            member: member.filter(|(_, member_name)| !member_name.is_empty()),
        }
    }

    /// Split a name like `A::B#foo`, `A::B::foo` or `A::B.foo`.
    ///
    /// A trailing `::` segment starting with anything other than an uppercase
    /// letter is a singleton member; `::` followed by an uppercase letter is
    /// another namespace level.
    #[must_use]
    pub fn parse(name: &'a str) -> Self {
        let (namespace, member) = if let Some(idx) = name.find('#') {
            (&name[..idx], Some((MemberKind::Instance, &name[idx + 1..])))
        } else if let Some(idx) = name.find('.') {
            (&name[..idx], Some((MemberKind::Dot, &name[idx + 1..])))
        } else {
            match name.rfind(NAMESPACE_DELIMITER) {
                Some(idx) if starts_singleton(&name[idx + NAMESPACE_DELIMITER.len()..]) => (
                    &name[..idx],
                    Some((
                        MemberKind::Singleton,
                        &name[idx + NAMESPACE_DELIMITER.len()..],
                    )),
                ),
                _ => (name, None),
            }
        };

        Self::new(namespace, member)
    }

    /// Namespace path joined back with `::`.
    #[must_use]
    pub fn namespace(&self) -> String {
        self.segments.join(NAMESPACE_DELIMITER)
    }

    /// Ngram set of this key; see [`derive_ngrams`].
    #[must_use]
    pub fn ngrams(&self) -> NgramSet {
        let mut ngrams = NgramSet::new();

        for segment in &self.segments {
            push_word(&mut ngrams, ':', segment, false);
        }
        if let Some((kind, member)) = self.member {
            for &delimiter in kind.delimiters() {
                push_word(&mut ngrams, delimiter, member, true);
            }
        }

        ngrams
    }
}

fn starts_singleton(rest: &str) -> bool {
    rest.chars()
        .next()
        .is_some_and(|c| !c.is_uppercase() && c != ':')
}

/// Derive the ngram set for a qualified name.
///
/// Each namespace segment and the member name are tokenized independently behind
/// their delimiter glyph, so no ngram ever straddles `::`, `#` or `.`:
///
/// - 3-character windows over `delimiter + word` (`:Ab`, `Abc`)
/// - windows over `' ' + word` so word starts match without the delimiter (` Ab`)
/// - windows over the word with underscores removed (`def_xyz` → `efx`)
/// - acronym windows over `delimiter + acronym + ' '` and `' ' + acronym + ' '`
///   (`AbcDef` → `:AD`, ` AD`, `AD `)
///
/// Member names are closed with `(`, giving an end-of-name ngram such as `yz(`.
///
/// Tokens derived from the name text are also emitted lower-cased. Acronym tokens
/// keep their case when they carry two adjacent uppercase letters.
#[must_use]
pub fn derive_ngrams(name: &str) -> NgramSet {
    SearchKey::parse(name).ngrams()
}

fn push_word(ngrams: &mut NgramSet, delimiter: char, word: &str, is_member: bool) {
    let text: Cow<'_, str> = if is_member {
        Cow::Owned(format!("{word}{CALL_OPEN}"))
    } else {
        Cow::Borrowed(word)
    };

    push_windows(ngrams, delimiter, &text, false);
    push_windows(ngrams, PAD, &text, false);

    if word.contains('_') {
        push_windows(ngrams, delimiter, &text.replace('_', ""), false);
    }

    let acronym = acronym(word);
    if !acronym.is_empty() {
        let padded = format!("{acronym}{PAD}");
        push_windows(ngrams, delimiter, &padded, true);
        push_windows(ngrams, PAD, &padded, true);
    }
}

fn push_windows(ngrams: &mut NgramSet, lead: char, text: &str, is_acronym: bool) {
    let chars: Vec<char> = std::iter::once(lead).chain(text.chars()).collect();
    for window in chars.windows(WINDOW) {
        let ngram: String = window.iter().collect();
        let lowered = ngram.to_lowercase();
        if lowered != ngram && !(is_acronym && has_uppercase_run(window)) {
            ngrams.insert(lowered);
        }
        ngrams.insert(ngram);
    }
}

fn has_uppercase_run(window: &[char]) -> bool {
    window
        .windows(2)
        .any(|pair| pair[0].is_uppercase() && pair[1].is_uppercase())
}

/// Initials of the humps of a camel-case or snake-case word.
///
/// `StUvWxYz` → `SUWY`, `has_many` → `hm`, `Time` → `T`.
fn acronym(word: &str) -> String {
    let mut initials = String::new();
    let mut prev: Option<char> = None;

    for c in word.chars() {
        let starts_hump = match prev {
            None => c.is_alphanumeric(),
            Some('_') => c.is_alphanumeric(),
            Some(p) => c.is_uppercase() && !p.is_uppercase(),
        };
        if starts_hump {
            initials.push(c);
        }
        prev = Some(c);
    }

    initials
}

/// Canonical spelling of an ngram for bit assignment.
///
/// `#xx` and `.xx` mark the same member boundary, so they are aliases of one
/// another and share a bit position.
#[must_use]
pub fn canonical_ngram(ngram: &str) -> Cow<'_, str> {
    if ngram.contains('#') {
        Cow::Owned(ngram.replace('#', "."))
    } else {
        Cow::Borrowed(ngram)
    }
}
