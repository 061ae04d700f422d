//! Tests for signature module - member signatures and anchors.

use omni_search_index::{Member, member_anchor, signature_for};

#[test]
fn test_instance_signature() {
    assert_eq!(
        signature_for(&Member::instance("bar", "(x, y, z)")),
        "#bar(x, y, z)"
    );
}

#[test]
fn test_singleton_signature() {
    assert_eq!(
        signature_for(&Member::singleton("bar", "(x, y, z)")),
        "::bar(x, y, z)"
    );
}

#[test]
fn test_call_seq_placeholder() {
    let member = Member::instance("bar", "").with_call_seq("bar(x, y, z) -> result\nbar(&block) -> result");
    assert_eq!(signature_for(&member), "#bar(...)");
}

#[test]
fn test_params_normalized() {
    assert_eq!(signature_for(&Member::instance("hoge_fuga", "")), "#hoge_fuga()");
    assert_eq!(signature_for(&Member::instance("hoge_fuga", "x, y")), "#hoge_fuga(x, y)");
}

#[test]
fn test_member_anchor() {
    assert_eq!(member_anchor(&Member::instance("hoge_fuga", "")), "method-i-hoge_fuga");
    assert_eq!(member_anchor(&Member::singleton("new", "()")), "method-c-new");
    assert_eq!(member_anchor(&Member::instance("<=>", "(other)")), "method-i-3C-3D-3E");
}
