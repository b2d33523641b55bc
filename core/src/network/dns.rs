use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::lookup::Lookup;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::RecordType;
use hickory_resolver::proto::{ProtoError, ProtoErrorKind};
use hickory_resolver::{ResolveError, TokioResolver};
use overwatch_common::network::dns::{CnameResolution, CnameResolver};
use overwatch_common::warn;
use tracing::debug;

/// [`CnameResolver`] backed by the hickory stub resolver.
#[derive(Clone)]
pub struct HickoryCnameResolver {
    resolver: TokioResolver,
}

impl HickoryCnameResolver {
    /// Uses the system resolver configuration, falling back to hickory's
    /// default upstreams when it cannot be read.
    pub fn new(timeout: Duration) -> Self {
        let opts: ResolverOpts = resolver_opts(timeout);
        let resolver = match TokioResolver::builder(TokioConnectionProvider::default()) {
            Ok(builder) => builder.with_options(opts).build(),
            Err(e) => {
                warn!("System DNS configuration unavailable ({e}), using default upstreams");
                TokioResolver::builder_with_config(
                    ResolverConfig::default(),
                    TokioConnectionProvider::default(),
                )
                .with_options(opts)
                .build()
            }
        };
        Self { resolver }
    }

    pub fn with_config(config: ResolverConfig, timeout: Duration) -> Self {
        let resolver = TokioResolver::builder_with_config(config, TokioConnectionProvider::default())
            .with_options(resolver_opts(timeout))
            .build();
        Self { resolver }
    }
}

#[async_trait]
impl CnameResolver for HickoryCnameResolver {
    async fn resolve_cname(&self, hostname: &str) -> CnameResolution {
        let result = self.resolver.lookup(hostname, RecordType::CNAME).await;
        let resolution = classify_lookup(result);
        debug!("CNAME lookup for {hostname}: {resolution:?}");
        resolution
    }
}

fn resolver_opts(timeout: Duration) -> ResolverOpts {
    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    // Each lookup must reach the upstream; repeated targets are re-queried.
    opts.cache_size = 0;
    opts
}

fn classify_lookup(result: Result<Lookup, ResolveError>) -> CnameResolution {
    match result {
        Ok(lookup) => lookup
            .iter()
            .find_map(|rdata| rdata.as_cname())
            .map(|cname| CnameResolution::Resolved(trim_root(&cname.0.to_string())))
            .unwrap_or(CnameResolution::NoRecord),
        Err(e) => classify_error(&e),
    }
}

/// Only NXDOMAIN and NODATA are negative answers. SERVFAIL, REFUSED and the
/// other failure codes also surface as "no records found" in hickory, so the
/// response code decides.
fn classify_error(e: &ResolveError) -> CnameResolution {
    match e.proto().map(ProtoError::kind) {
        Some(ProtoErrorKind::NoRecordsFound { response_code, .. }) => match *response_code {
            ResponseCode::NXDomain => CnameResolution::NameNotFound,
            ResponseCode::NoError => CnameResolution::NoRecord,
            _ => CnameResolution::ResolutionError(e.to_string()),
        },
        _ => CnameResolution::ResolutionError(e.to_string()),
    }
}

fn trim_root(name: &str) -> String {
    name.strip_suffix('.').unwrap_or(name).to_string()
}
