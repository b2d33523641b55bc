use std::time::Duration;

pub const DEFAULT_DNS_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_SIGNATURES_PATH: &str = "service_signatures.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Skips the banner at startup.
    pub no_banner: bool,
    /// Output reduction level.
    ///
    /// `1` hides the banner and section headers, `2` only prints vulnerable subdomains.
    pub quiet: u8,
    /// Number of subdomains checked at the same time. `1` keeps the scan sequential.
    pub concurrency: usize,
    /// Upper bound for a single CNAME query.
    pub dns_timeout: Duration,
    /// Upper bound for a single HTTP probe, connect and body included.
    pub http_timeout: Duration,
    /// User-Agent header sent with every HTTP probe.
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            concurrency: 1,
            dns_timeout: DEFAULT_DNS_TIMEOUT,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

pub fn default_user_agent() -> String {
    format!("overwatch/{}", env!("CARGO_PKG_VERSION"))
}
