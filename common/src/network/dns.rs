use async_trait::async_trait;

/// Outcome of a CNAME query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CnameResolution {
    /// The name is an alias for `target` (no trailing root dot).
    Resolved(String),
    /// The name exists but has no CNAME record.
    NoRecord,
    /// The name does not exist (NXDOMAIN).
    NameNotFound,
    /// Timeout, SERVFAIL, malformed answer, or any other failure.
    ResolutionError(String),
}

#[async_trait]
pub trait CnameResolver: Send + Sync {
    /// Looks up the CNAME record of `hostname`.
    ///
    /// Every call issues a fresh query: no caching, no retry.
    async fn resolve_cname(&self, hostname: &str) -> CnameResolution;
}
