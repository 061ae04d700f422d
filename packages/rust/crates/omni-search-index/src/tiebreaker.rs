//! Tiebreaker scorer - small bonus ordering otherwise equal matches.
//!
//! Three saturating factors, each in `[0, 1]`:
//!
//! | Factor      | Shape                   | Favors                  |
//! |-------------|-------------------------|-------------------------|
//! | namespace   | `1 / (1 + len / 20)`    | short namespace names   |
//! | member      | `1 / (1 + len / 8)`     | short member names      |
//! | description | `len / (len + 50)`      | documented symbols      |
//!
//! The member factor carries the most weight: `Foo::Bar::Baz#find_by` should
//! beat `Qux#find_by_sql` for the query `find_by`. The weighted mean is scaled
//! into `[0, MAX_TIEBREAKER_BONUS)`.

/// Exclusive upper bound of the bonus. Must stay below the minimum bit weight.
pub const MAX_TIEBREAKER_BONUS: f64 = 0.1;

const NAMESPACE_WEIGHT: f64 = 1.0;
const MEMBER_WEIGHT: f64 = 5.0;
const DESCRIPTION_WEIGHT: f64 = 2.0;

const NAMESPACE_HALF_LENGTH: f64 = 20.0;
const MEMBER_HALF_LENGTH: f64 = 8.0;
const DESCRIPTION_HALF_LENGTH: f64 = 50.0;

/// Compute the tiebreaker bonus for a record.
///
/// `member_name` is the bare name (`has_many`), not the signature.
/// `description` is the raw, untruncated description.
#[must_use]
pub fn compute_tiebreaker_bonus(
    namespace_name: &str,
    member_name: Option<&str>,
    description: &str,
) -> f64 {
    let namespace_len = namespace_name.chars().count() as f64;
    let member_len = member_name.map_or(0, |name| name.chars().count()) as f64;
    let description_len = description.chars().count() as f64;

    let namespace_factor = 1.0 / (1.0 + namespace_len / NAMESPACE_HALF_LENGTH);
    let member_factor = 1.0 / (1.0 + member_len / MEMBER_HALF_LENGTH);
    let description_factor = description_len / (description_len + DESCRIPTION_HALF_LENGTH);

    let weighted = NAMESPACE_WEIGHT * namespace_factor
        + MEMBER_WEIGHT * member_factor
        + DESCRIPTION_WEIGHT * description_factor;

    MAX_TIEBREAKER_BONUS * weighted / (NAMESPACE_WEIGHT + MEMBER_WEIGHT + DESCRIPTION_WEIGHT)
}
