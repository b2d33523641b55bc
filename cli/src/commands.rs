pub mod scan;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use overwatch_common::config::{self, Config};

#[derive(Parser, Debug)]
#[command(name = "overwatch")]
#[command(about = "Detects subdomains exposed to takeover through dangling CNAME records.")]
#[command(version)]
pub struct CommandLine {
    /// File with the subdomains to check, one per line
    #[arg(short, long)]
    pub targets: PathBuf,

    /// JSON object mapping service hints to their "unclaimed" error text
    #[arg(short, long, default_value = config::DEFAULT_SIGNATURES_PATH)]
    pub signatures: PathBuf,

    /// Number of subdomains checked at the same time
    #[arg(short, long, default_value_t = 1, value_parser = parse_concurrency)]
    pub concurrency: usize,

    /// Timeout in seconds for each CNAME query
    #[arg(long, default_value_t = config::DEFAULT_DNS_TIMEOUT.as_secs())]
    pub dns_timeout: u64,

    /// Timeout in seconds for each HTTP probe
    #[arg(long, default_value_t = config::DEFAULT_HTTP_TIMEOUT.as_secs())]
    pub http_timeout: u64,

    /// User-Agent sent with HTTP probes
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Reduce output (-q hides banner and headers, -qq prints only vulnerable subdomains)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            concurrency: self.concurrency,
            dns_timeout: Duration::from_secs(self.dns_timeout),
            http_timeout: Duration::from_secs(self.http_timeout),
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(config::default_user_agent),
        }
    }
}

fn parse_concurrency(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|e| format!("invalid concurrency '{s}': {e}"))?;
    if value == 0 {
        return Err("concurrency must be at least 1".to_string());
    }
    Ok(value)
}
