//! # Scan Runner
//!
//! Drives the [`TakeoverClassifier`] over a list of subdomains.
//!
//! Results come out as a finite stream in input order. With a concurrency of
//! `1` every check finishes before the next one starts; larger values keep up
//! to that many checks in flight and restore input order on the way out.
//!
//! Each check runs in its own task. A check that panics is reported as an
//! `Error` verdict for that subdomain and the scan goes on.

use std::pin::pin;
use std::sync::Arc;

use futures::stream::{self, Stream, StreamExt};
use overwatch_common::config::Config;
use overwatch_common::error;
use overwatch_common::takeover::catalog::Catalog;
use overwatch_common::takeover::verdict::{ScanRecord, Verdict};

use crate::classifier::TakeoverClassifier;
use crate::network::dns::HickoryCnameResolver;
use crate::network::http::ReqwestProbe;

pub struct ScanRunner {
    classifier: TakeoverClassifier,
    catalog: Arc<Catalog>,
    concurrency: usize,
}

impl ScanRunner {
    pub fn new(classifier: TakeoverClassifier, catalog: Arc<Catalog>, concurrency: usize) -> Self {
        Self {
            classifier,
            catalog,
            concurrency: concurrency.max(1),
        }
    }

    /// Wires the hickory resolver and the reqwest probe using the timeouts from `cfg`.
    pub fn from_config(catalog: Catalog, cfg: &Config) -> anyhow::Result<Self> {
        let resolver = Arc::new(HickoryCnameResolver::new(cfg.dns_timeout));
        let probe = Arc::new(ReqwestProbe::new(cfg.http_timeout, &cfg.user_agent)?);
        let classifier = TakeoverClassifier::new(resolver, probe);
        Ok(Self::new(classifier, Arc::new(catalog), cfg.concurrency))
    }

    /// Consumes the runner and yields one record per subdomain, in input order.
    pub fn run(self, subdomains: Vec<String>) -> impl Stream<Item = ScanRecord> + Send + 'static {
        let concurrency: usize = self.concurrency;
        stream::iter(subdomains)
            .map(move |subdomain| check(self.classifier.clone(), self.catalog.clone(), subdomain))
            .buffered(concurrency)
    }

    /// Runs the whole scan and collects the records.
    ///
    /// `on_progress` receives the number of finished checks after each one.
    pub async fn collect(
        self,
        subdomains: Vec<String>,
        on_progress: Option<Box<dyn Fn(usize) + Send + Sync>>,
    ) -> Vec<ScanRecord> {
        let mut records: Vec<ScanRecord> = Vec::with_capacity(subdomains.len());
        let mut results = pin!(self.run(subdomains));

        while let Some(record) = results.next().await {
            records.push(record);
            if let Some(callback) = &on_progress {
                callback(records.len());
            }
        }

        records
    }
}

async fn check(classifier: TakeoverClassifier, catalog: Arc<Catalog>, subdomain: String) -> ScanRecord {
    let task_subdomain: String = subdomain.clone();
    let handle = tokio::spawn(async move { classifier.classify(&task_subdomain, &catalog).await });

    let verdict: Verdict = match handle.await {
        Ok(verdict) => verdict,
        Err(e) => {
            error!("Check for {subdomain} aborted: {e}");
            Verdict::error(format!("{subdomain} -> Error: {e}"))
        }
    };

    ScanRecord { subdomain, verdict }
}
