//! Tests for tiebreaker module - ordering of otherwise equal matches.

use omni_search_index::{MAX_TIEBREAKER_BONUS, MIN_BIT_WEIGHT, compute_tiebreaker_bonus};

fn bonus(namespace: &str, member: Option<&str>, description_len: usize) -> f64 {
    compute_tiebreaker_bonus(namespace, member, &"x".repeat(description_len))
}

fn assert_favors(
    (namespace1, member1, len1): (&str, Option<&str>, usize),
    (namespace2, member2, len2): (&str, Option<&str>, usize),
) {
    let bonus1 = bonus(namespace1, member1, len1);
    let bonus2 = bonus(namespace2, member2, len2);
    assert!(
        bonus1 > bonus2,
        "{namespace1}#{member1:?} w/ {len1} chars ({bonus1}) vs \
         {namespace2}#{member2:?} w/ {len2} chars ({bonus2})"
    );
}

#[test]
fn test_bonus_below_single_ngram_weight() {
    assert!(bonus("X", None, 0) <= MAX_TIEBREAKER_BONUS);
    assert!(bonus("", None, 1_000_000) < MAX_TIEBREAKER_BONUS);
    assert!(bonus("", Some(""), 1_000_000) < MIN_BIT_WEIGHT);
}

#[test]
fn test_favors_short_namespace_names() {
    for (short, long) in [
        ("X", "Xx"),
        ("Time", "ActiveSupport::TimeZone"),
        ("ActiveSupport::TimeZone", "ActiveSupport::TimeWithZone"),
    ] {
        assert_favors((short, None, 0), (long, None, 0));
    }
}

#[test]
fn test_favors_short_member_names() {
    for (short, long) in [
        ("x", "xx"),
        ("has_one", "has_many"),
        ("has_many", "has_and_belongs_to_many"),
    ] {
        assert_favors(("X", Some(short), 0), ("X", Some(long), 0));
    }
}

#[test]
fn test_favors_long_namespace_with_short_member() {
    assert_favors(
        ("ActiveRecord::Associations::ClassMethods", Some("has_many"), 0),
        ("ActiveStorage::Attached::Model", Some("has_many_attached"), 0),
    );
    assert_favors(
        ("ActiveRecord::FinderMethods", Some("find_by"), 0),
        ("ActiveRecord::Querying", Some("find_by_sql"), 0),
    );
}

#[test]
fn test_favors_long_descriptions() {
    assert_favors(("X", Some("x"), 2), ("Y", Some("x"), 1));
    assert_favors(
        ("ActionView::Template", Some("render"), 300),
        ("ActionView::Renderer", Some("render"), 80),
    );
    assert_favors(
        ("ActionController::Rendering", Some("render"), 3000),
        ("ActionController::Renderer", Some("render"), 80),
    );
}

#[test]
fn test_balances_factors() {
    let cases = [
        (
            ("ActiveSupport::Deprecation", None, 0),
            ("Module", Some("deprecate"), 600),
        ),
        (
            ("Pathname", Some("existence"), 200),
            (
                "ActiveSupport::Callbacks::CallTemplate::InstanceExec1",
                Some("expand"),
                0,
            ),
        ),
        (
            ("ActiveRecord::Associations::ClassMethods", Some("has_many"), 12000),
            ("ActiveStorage::Attached::Model", Some("has_many_attached"), 2000),
        ),
        (
            ("ActiveRecord::FinderMethods", Some("find_by"), 200),
            ("ActiveRecord::Querying", Some("find_by_sql"), 2000),
        ),
        (
            ("ActionController::Rendering", Some("render"), 3000),
            ("ActionController::Renderer", Some("render"), 100),
        ),
        (
            ("ActionView::Helpers::RenderingHelper", Some("render"), 900),
            ("ActionView::Template", Some("render"), 300),
        ),
    ];

    for (preferred, other) in cases {
        assert_favors(preferred, other);
    }
}
