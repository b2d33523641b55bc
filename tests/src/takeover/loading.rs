use std::io::Write;

use overwatch_common::error::CatalogError;
use overwatch_common::takeover::catalog::Catalog;
use overwatch_common::takeover::targets;
use overwatch_common::takeover::verdict::VerdictKind;

use crate::utils::{MockProbe, MockResolver, runner};

#[test]
fn missing_signature_file_fails_before_scanning() {
    let dir = tempfile::tempdir().unwrap();
    let result = Catalog::load(dir.path().join("service_signatures.json"));
    assert!(matches!(result, Err(CatalogError::Io { .. })));
}

#[test]
fn malformed_signature_file_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"herokuapp.com": "No such app""#).unwrap();
    assert!(matches!(Catalog::load(file.path()), Err(CatalogError::Json(_))));
}

#[tokio::test]
async fn loaded_files_drive_a_scan() {
    let mut signatures = tempfile::NamedTempFile::new().unwrap();
    write!(
        signatures,
        r#"{{"github.io": "There isn't a GitHub Pages site here.", "herokuapp.com": "No such app"}}"#
    )
    .unwrap();
    let mut subdomains = tempfile::NamedTempFile::new().unwrap();
    writeln!(subdomains, "docs.example.com\n\n  blog.example.com  \n").unwrap();

    let catalog = Catalog::load(signatures.path()).unwrap();
    let subdomains = targets::load(subdomains.path()).unwrap();

    let resolver = MockResolver::new();
    resolver
        .add_cname("docs.example.com", "example.github.io")
        .add_cname("blog.example.com", "blog.herokuapp.com");
    let probe = MockProbe::new();
    probe
        .body("docs.example.com", "<p>There isn't a GitHub Pages site here.</p>")
        .body("blog.example.com", "<h1>Blog</h1>");

    let records = runner(&resolver, &probe, catalog, 1)
        .collect(subdomains, None)
        .await;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].subdomain, "docs.example.com");
    assert_eq!(records[0].verdict.kind, VerdictKind::Vulnerable);
    assert_eq!(records[1].subdomain, "blog.example.com");
    assert_eq!(records[1].verdict.kind, VerdictKind::NotVulnerable);
    assert_eq!(
        records[1].to_string(),
        "blog.example.com: [Not Vulnerable] - blog.example.com -> blog.herokuapp.com (CNAME points to herokuapp.com)"
    );
}
