use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use overwatch_common::network::http::{HttpProbe, ProbeResult};
use reqwest::Client;
use tracing::debug;

/// [`HttpProbe`] backed by a shared `reqwest` client.
#[derive(Clone)]
pub struct ReqwestProbe {
    client: Client,
}

impl ReqwestProbe {
    pub fn new(timeout: Duration, user_agent: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(user_agent)
            .build()
            .context("building HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpProbe for ReqwestProbe {
    async fn fetch_body(&self, hostname: &str) -> anyhow::Result<ProbeResult> {
        let url: String = format!("http://{hostname}/");

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) if e.is_connect() => {
                debug!("{url} unreachable: {e}");
                return Ok(ProbeResult::Unreachable);
            }
            Err(e) => return Err(e).with_context(|| format!("GET {url}")),
        };

        let status = response.status();
        let body: String = response
            .text()
            .await
            .with_context(|| format!("reading body of {url}"))?;
        debug!("{url} answered {status} with {} bytes", body.len());

        Ok(ProbeResult::Body(body))
    }
}
