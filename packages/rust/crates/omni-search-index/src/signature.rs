//! Member signature and anchor rendering.

use std::fmt::Write as _;

use crate::catalog::Member;

/// Parameter placeholder for members documented with a free-form call sequence.
pub const CALL_SEQ_PARAMS: &str = "(...)";

/// Render `#name(params)` for instance members, `::name(params)` for singletons.
///
/// Members documented through a call sequence get `(...)` instead of parsed
/// parameters.
#[must_use]
pub fn signature_for(member: &Member) -> String {
    let sigil = if member.singleton { "::" } else { "#" };
    let params = if member.call_seq.is_some() {
        CALL_SEQ_PARAMS.to_string()
    } else {
        normalize_params(&member.params)
    };
    format!("{sigil}{}{params}", member.name)
}

fn normalize_params(params: &str) -> String {
    let params = params.trim();
    if params.is_empty() {
        "()".to_string()
    } else if params.starts_with('(') {
        params.to_string()
    } else {
        format!("({params})")
    }
}

/// Fragment id of a member on its namespace page, e.g. `method-i-find_by` or
/// `method-c-3D-3D` for a singleton `==`.
#[must_use]
pub fn member_anchor(member: &Member) -> String {
    let kind = if member.singleton { 'c' } else { 'i' };
    format!("method-{kind}-{}", escape_anchor(&member.name))
}

/// Percent-style escaping with `-` in place of `%`, minus any leading `-`.
fn escape_anchor(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for byte in name.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'.' | b'-' | b'~' => {
                escaped.push(char::from(byte));
            }
            b' ' => escaped.push('+'),
            _ => {
                let _ = write!(escaped, "-{byte:02X}");
            }
        }
    }
    if escaped.starts_with('-') {
        escaped.remove(0);
    }
    escaped
}
