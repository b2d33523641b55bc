use async_trait::async_trait;

/// Outcome of a plain-HTTP GET against a host's root path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    /// The host answered; the body is returned whatever the status code.
    Body(String),
    /// The connection could not be established (refused, unreachable, no address).
    Unreachable,
}

#[async_trait]
pub trait HttpProbe: Send + Sync {
    /// Fetches `http://<hostname>/`.
    ///
    /// Connection failures are reported as [`ProbeResult::Unreachable`]. Any
    /// other transport failure is returned as an error.
    async fn fetch_body(&self, hostname: &str) -> anyhow::Result<ProbeResult>;
}
