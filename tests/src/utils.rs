use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use overwatch_common::network::dns::{CnameResolution, CnameResolver};
use overwatch_common::network::http::{HttpProbe, ProbeResult};
use overwatch_common::takeover::catalog::Catalog;
use overwatch_core::classifier::TakeoverClassifier;
use overwatch_core::scanner::ScanRunner;

/// Canned DNS answers keyed by hostname. Unknown names answer `NoRecord`.
#[derive(Clone, Default)]
pub struct MockResolver {
    answers: Arc<Mutex<HashMap<String, CnameResolution>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_cname(&self, hostname: &str, target: &str) -> &Self {
        self.set(hostname, CnameResolution::Resolved(target.to_string()))
    }

    pub fn set(&self, hostname: &str, resolution: CnameResolution) -> &Self {
        self.answers
            .lock()
            .unwrap()
            .insert(hostname.to_string(), resolution);
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl CnameResolver for MockResolver {
    async fn resolve_cname(&self, hostname: &str) -> CnameResolution {
        self.queries.lock().unwrap().push(hostname.to_string());
        self.answers
            .lock()
            .unwrap()
            .get(hostname)
            .cloned()
            .unwrap_or(CnameResolution::NoRecord)
    }
}

#[derive(Clone)]
pub enum ProbeAnswer {
    Body(String),
    Unreachable,
    Fail(String),
    Panic,
}

/// Canned HTTP answers keyed by hostname. Unknown hosts are unreachable.
#[derive(Clone, Default)]
pub struct MockProbe {
    answers: Arc<Mutex<HashMap<String, ProbeAnswer>>>,
}

impl MockProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, hostname: &str, answer: ProbeAnswer) -> &Self {
        self.answers
            .lock()
            .unwrap()
            .insert(hostname.to_string(), answer);
        self
    }

    pub fn body(&self, hostname: &str, body: &str) -> &Self {
        self.set(hostname, ProbeAnswer::Body(body.to_string()))
    }
}

#[async_trait]
impl HttpProbe for MockProbe {
    async fn fetch_body(&self, hostname: &str) -> anyhow::Result<ProbeResult> {
        let answer = self
            .answers
            .lock()
            .unwrap()
            .get(hostname)
            .cloned()
            .unwrap_or(ProbeAnswer::Unreachable);

        match answer {
            ProbeAnswer::Body(body) => Ok(ProbeResult::Body(body)),
            ProbeAnswer::Unreachable => Ok(ProbeResult::Unreachable),
            ProbeAnswer::Fail(msg) => Err(anyhow::anyhow!(msg)),
            ProbeAnswer::Panic => panic!("probe blew up for {hostname}"),
        }
    }
}

pub const HEROKU_ERROR: &str = "There is no app configured at this address";

pub fn heroku_catalog() -> Catalog {
    Catalog::from_pairs([("herokuapp.com", HEROKU_ERROR)]).unwrap()
}

pub fn classifier(resolver: &MockResolver, probe: &MockProbe) -> TakeoverClassifier {
    TakeoverClassifier::new(Arc::new(resolver.clone()), Arc::new(probe.clone()))
}

pub fn runner(resolver: &MockResolver, probe: &MockProbe, catalog: Catalog, concurrency: usize) -> ScanRunner {
    ScanRunner::new(classifier(resolver, probe), Arc::new(catalog), concurrency)
}

pub fn hosts(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
