use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::StreamExt;
use overwatch_common::network::dns::CnameResolution;
use overwatch_common::takeover::verdict::{ScanRecord, VerdictKind};

use crate::utils::{HEROKU_ERROR, MockProbe, MockResolver, ProbeAnswer, heroku_catalog, hosts, runner};

fn kinds(records: &[ScanRecord]) -> Vec<(&str, VerdictKind)> {
    records
        .iter()
        .map(|record| (record.subdomain.as_str(), record.verdict.kind))
        .collect()
}

fn mixed_fixture() -> (MockResolver, MockProbe) {
    let resolver = MockResolver::new();
    resolver
        .add_cname("vuln.example.com", "vuln.herokuapp.com")
        .add_cname("live.example.com", "live.herokuapp.com")
        .add_cname("broken.example.com", "broken.herokuapp.com")
        .set("gone.example.com", CnameResolution::NameNotFound)
        .set("flaky.example.com", CnameResolution::ResolutionError("SERVFAIL".into()));

    let probe = MockProbe::new();
    probe
        .body("vuln.example.com", HEROKU_ERROR)
        .body("live.example.com", "Welcome to Example App")
        .set("broken.example.com", ProbeAnswer::Panic);

    (resolver, probe)
}

#[tokio::test]
async fn sequential_scan_keeps_input_order_and_duplicates() {
    let (resolver, probe) = mixed_fixture();
    let subdomains = hosts(&[
        "live.example.com",
        "vuln.example.com",
        "plain.example.com",
        "vuln.example.com",
    ]);

    let records = runner(&resolver, &probe, heroku_catalog(), 1)
        .collect(subdomains, None)
        .await;

    assert_eq!(
        kinds(&records),
        vec![
            ("live.example.com", VerdictKind::NotVulnerable),
            ("vuln.example.com", VerdictKind::Vulnerable),
            ("plain.example.com", VerdictKind::NotVulnerable),
            ("vuln.example.com", VerdictKind::Vulnerable),
        ]
    );
    assert_eq!(
        resolver.queries(),
        vec![
            "live.example.com",
            "vuln.example.com",
            "plain.example.com",
            "vuln.example.com"
        ]
    );
}

#[tokio::test]
async fn failures_do_not_stop_the_scan() {
    let (resolver, probe) = mixed_fixture();
    let subdomains = hosts(&[
        "flaky.example.com",
        "broken.example.com",
        "gone.example.com",
        "vuln.example.com",
    ]);

    let records = runner(&resolver, &probe, heroku_catalog(), 1)
        .collect(subdomains, None)
        .await;

    assert_eq!(
        kinds(&records),
        vec![
            ("flaky.example.com", VerdictKind::Error),
            ("broken.example.com", VerdictKind::Error),
            ("gone.example.com", VerdictKind::NotVulnerable),
            ("vuln.example.com", VerdictKind::Vulnerable),
        ]
    );
    assert!(records[1].verdict.detail.starts_with("broken.example.com -> Error"));
}

#[tokio::test]
async fn concurrent_scan_matches_sequential_scan() {
    let (resolver, probe) = mixed_fixture();
    let subdomains = hosts(&[
        "vuln.example.com",
        "gone.example.com",
        "live.example.com",
        "broken.example.com",
        "flaky.example.com",
        "plain.example.com",
    ]);

    let sequential = runner(&resolver, &probe, heroku_catalog(), 1)
        .collect(subdomains.clone(), None)
        .await;
    let concurrent = runner(&resolver, &probe, heroku_catalog(), 4)
        .collect(subdomains, None)
        .await;

    assert_eq!(kinds(&sequential), kinds(&concurrent));
}

#[tokio::test]
async fn progress_callback_counts_every_check() {
    let (resolver, probe) = mixed_fixture();
    let seen = Arc::new(AtomicUsize::new(0));
    let seen_ref = seen.clone();
    let on_progress: Box<dyn Fn(usize) + Send + Sync> =
        Box::new(move |done: usize| seen_ref.store(done, Ordering::Relaxed));

    let records = runner(&resolver, &probe, heroku_catalog(), 2)
        .collect(
            hosts(&["a.example.com", "b.example.com", "c.example.com"]),
            Some(on_progress),
        )
        .await;

    assert_eq!(records.len(), 3);
    assert_eq!(seen.load(Ordering::Relaxed), 3);
}

#[tokio::test]
async fn stream_yields_records_one_by_one() {
    let (resolver, probe) = mixed_fixture();
    let mut results = Box::pin(
        runner(&resolver, &probe, heroku_catalog(), 1)
            .run(hosts(&["vuln.example.com", "live.example.com"])),
    );

    let first = results.next().await.unwrap();
    assert_eq!(first.subdomain, "vuln.example.com");
    assert!(first.verdict.is_vulnerable());

    let second = results.next().await.unwrap();
    assert_eq!(second.subdomain, "live.example.com");

    assert!(results.next().await.is_none());
}

#[tokio::test]
async fn empty_input_yields_nothing() {
    let (resolver, probe) = mixed_fixture();
    let records = runner(&resolver, &probe, heroku_catalog(), 3)
        .collect(Vec::new(), None)
        .await;
    assert!(records.is_empty());
}
