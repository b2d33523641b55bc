//! # Takeover Classifier
//!
//! Decides whether a single subdomain can be taken over.
//!
//! The decision is a linear pipeline with no loops or retries:
//! 1. **DNS**: resolve the subdomain's CNAME through the [`CnameResolver`] port.
//! 2. **Signature match**: find the first catalog entry whose hint occurs in the target.
//! 3. **HTTP confirmation**: fetch the subdomain over plain HTTP through the
//!    [`HttpProbe`] port and look for the service's unclaimed error text.
//!
//! Every path ends in exactly one verdict. Failures coming out of the ports
//! are turned into an `Error` verdict here, so a single bad subdomain can
//! never abort a scan.

use std::sync::Arc;

use overwatch_common::network::dns::{CnameResolution, CnameResolver};
use overwatch_common::network::http::{HttpProbe, ProbeResult};
use overwatch_common::takeover::catalog::{Catalog, Signature};
use overwatch_common::takeover::verdict::Verdict;
use tracing::debug;

#[derive(Clone)]
pub struct TakeoverClassifier {
    resolver: Arc<dyn CnameResolver>,
    probe: Arc<dyn HttpProbe>,
}

impl TakeoverClassifier {
    pub fn new(resolver: Arc<dyn CnameResolver>, probe: Arc<dyn HttpProbe>) -> Self {
        Self { resolver, probe }
    }

    pub async fn classify(&self, subdomain: &str, catalog: &Catalog) -> Verdict {
        let target: String = match self.resolver.resolve_cname(subdomain).await {
            CnameResolution::Resolved(target) => target,
            CnameResolution::NoRecord => {
                return Verdict::not_vulnerable(format!("{subdomain} -> No CNAME record found"));
            }
            CnameResolution::NameNotFound => {
                return Verdict::not_vulnerable(format!(
                    "{subdomain} -> Subdomain unreachable or does not exist"
                ));
            }
            CnameResolution::ResolutionError(e) => {
                return Verdict::error(format!("{subdomain} -> Error: {e}"));
            }
        };

        let Some(signature) = catalog.find_match(&target) else {
            return Verdict::not_vulnerable(format!("{subdomain} -> No takeover risk found"));
        };
        debug!("{subdomain} -> {target} matches '{}'", signature.service_hint);

        self.confirm(subdomain, &target, signature).await
    }

    async fn confirm(&self, subdomain: &str, target: &str, signature: &Signature) -> Verdict {
        let service: &str = &signature.service_hint;

        match self.probe.fetch_body(subdomain).await {
            Ok(ProbeResult::Body(body)) if body.contains(signature.error_text.as_str()) => {
                Verdict::vulnerable(format!(
                    "{subdomain} -> {target} (Error: {})",
                    signature.error_text
                ))
            }
            Ok(ProbeResult::Body(_)) => {
                Verdict::not_vulnerable(format!("{subdomain} -> {target} (CNAME points to {service})"))
            }
            // An unreachable host cannot serve the unclaimed page, so it counts as not vulnerable.
            Ok(ProbeResult::Unreachable) => Verdict::not_vulnerable(format!(
                "{subdomain} -> {target} (CNAME points to {service}, HTTP check not completed: host unreachable)"
            )),
            Err(e) => Verdict::error(format!("{subdomain} -> Error: {e:#}")),
        }
    }
}
