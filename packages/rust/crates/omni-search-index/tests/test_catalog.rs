//! Tests for catalog module - candidate record extraction.

use std::fs;

use tempfile::TempDir;

use omni_search_index::{
    CandidateRecord, Catalog, Member, MemberKind, Namespace, SearchIndexError, SearchKey,
    derive_ngrams, load_records,
};

fn sample_catalog() -> Catalog {
    Catalog {
        namespaces: vec![
            Namespace::new("ActiveSupport::TimeZone")
                .with_description("<p>Time zone.</p>")
                .with_member(Member::singleton("find_tzinfo", "(name)"))
                .with_member(Member::instance("now", "")),
            Namespace::new("Kernel"),
        ],
    }
}

#[test]
fn test_namespaces_before_members() {
    let records = sample_catalog().candidate_records();

    let names: Vec<(&str, Option<&str>)> = records
        .iter()
        .map(|r| (r.qualified_name.as_str(), r.member_signature.as_deref()))
        .collect();
    assert_eq!(
        names,
        vec![
            ("ActiveSupport::TimeZone", None),
            ("Kernel", None),
            ("ActiveSupport::TimeZone", Some("::find_tzinfo(name)")),
            ("ActiveSupport::TimeZone", Some("#now()")),
        ]
    );
}

#[test]
fn test_urls() {
    let records = sample_catalog().candidate_records();

    assert_eq!(records[0].url, "classes/ActiveSupport/TimeZone.html");
    assert_eq!(records[1].url, "classes/Kernel.html");
    assert_eq!(
        records[2].url,
        "classes/ActiveSupport/TimeZone.html#method-c-find_tzinfo"
    );
    assert_eq!(records[3].url, "classes/ActiveSupport/TimeZone.html#method-i-now");
}

#[test]
fn test_explicit_path_wins() {
    let mut namespace = Namespace::new("Foo");
    namespace.path = Some("files/foo_rb.html".to_string());

    assert_eq!(namespace.url(), "files/foo_rb.html");
}

#[test]
fn test_duplicate_members_skipped() {
    let catalog = Catalog {
        namespaces: vec![
            Namespace::new("Foo")
                .with_member(Member::instance("bar", ""))
                .with_member(Member::instance("bar", "")),
        ],
    };

    assert_eq!(catalog.candidate_records().len(), 2);
}

#[test]
fn test_search_key_and_member_name() {
    let records = sample_catalog().candidate_records();

    assert_eq!(
        records[0].search_key(),
        SearchKey::parse("ActiveSupport::TimeZone")
    );
    assert_eq!(records[0].member_name(), None);
    assert_eq!(
        records[2].search_key(),
        SearchKey::parse("ActiveSupport::TimeZone::find_tzinfo")
    );
    assert_eq!(records[2].member_name(), Some("find_tzinfo"));
    assert_eq!(
        records[3].search_key(),
        SearchKey::parse("ActiveSupport::TimeZone#now")
    );
    assert_eq!(records[3].member_name(), Some("now"));
}

#[test]
fn test_uppercase_singleton_stays_member() {
    let catalog = Catalog {
        namespaces: vec![Namespace::new("Kernel").with_member(Member::singleton("Integer", "(arg)"))],
    };
    let records = catalog.candidate_records();

    let key = records[1].search_key();
    assert_eq!(key.segments, vec!["Kernel"]);
    assert_eq!(key.member, Some((MemberKind::Singleton, "Integer")));

    let ngrams = key.ngrams();
    for expected in [":In", ".In", "er(", " in"] {
        assert!(ngrams.contains(expected), "missing {expected:?}");
    }
    assert_ne!(ngrams, derive_ngrams("Kernel::Integer"));
    assert!(ngrams.is_superset(&derive_ngrams("Kernel.Integer")));
}

#[test]
fn test_load_catalog_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{
            "namespaces": [
                {
                    "full_name": "FooBar",
                    "description_html": "<p>This is <code>FooBar</code>.</p>",
                    "members": [{ "name": "hoge_fuga", "singleton": true, "params": "(x)" }]
                }
            ]
        }"#,
    )
    .unwrap();

    let catalog = Catalog::load(&path).unwrap();
    let records = catalog.candidate_records();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].member_signature.as_deref(), Some("::hoge_fuga(x)"));
    assert_eq!(records[1].url, "classes/FooBar.html#method-c-hoge_fuga");
}

#[test]
fn test_load_records_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("records.json");
    let records = vec![
        CandidateRecord::namespace("Foo", "classes/Foo.html", ""),
        CandidateRecord::member("Foo", "#bar()", "classes/Foo.html#method-i-bar", "<p>Bar.</p>"),
    ];
    fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();

    assert_eq!(load_records(&path).unwrap(), records);
}

#[test]
fn test_load_errors() {
    let dir = TempDir::new().unwrap();

    let missing = dir.path().join("missing.json");
    assert!(matches!(
        Catalog::load(&missing),
        Err(SearchIndexError::Io { .. })
    ));

    let malformed = dir.path().join("bad.json");
    fs::write(&malformed, "{ not json").unwrap();
    assert!(matches!(
        Catalog::load(&malformed),
        Err(SearchIndexError::Json(_))
    ));
}
