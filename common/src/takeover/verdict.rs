//! # Verdicts
//!
//! Every check ends in exactly one [`VerdictKind`]. The detail string is meant
//! for humans and always starts with the subdomain it describes.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerdictKind {
    /// CNAME matches a known service and the service answered with its unclaimed page.
    Vulnerable,
    /// No takeover path was found.
    NotVulnerable,
    /// The check hit an unexpected failure.
    Error,
}

impl VerdictKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictKind::Vulnerable => "Vulnerable",
            VerdictKind::NotVulnerable => "Not Vulnerable",
            VerdictKind::Error => "Error",
        }
    }
}

impl fmt::Display for VerdictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub kind: VerdictKind,
    pub detail: String,
}

impl Verdict {
    pub fn vulnerable(detail: impl Into<String>) -> Self {
        Self {
            kind: VerdictKind::Vulnerable,
            detail: detail.into(),
        }
    }

    pub fn not_vulnerable(detail: impl Into<String>) -> Self {
        Self {
            kind: VerdictKind::NotVulnerable,
            detail: detail.into(),
        }
    }

    pub fn error(detail: impl Into<String>) -> Self {
        Self {
            kind: VerdictKind::Error,
            detail: detail.into(),
        }
    }

    pub fn is_vulnerable(&self) -> bool {
        self.kind == VerdictKind::Vulnerable
    }
}

/// The outcome for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRecord {
    pub subdomain: String,
    pub verdict: Verdict,
}

impl fmt::Display for ScanRecord {
    /// `<subdomain>: [<kind>] - <detail>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: [{}] - {}",
            self.subdomain, self.verdict.kind, self.verdict.detail
        )
    }
}

/// Per-kind totals for a finished scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub vulnerable: usize,
    pub not_vulnerable: usize,
    pub errors: usize,
}

impl Tally {
    pub fn record(&mut self, kind: VerdictKind) {
        match kind {
            VerdictKind::Vulnerable => self.vulnerable += 1,
            VerdictKind::NotVulnerable => self.not_vulnerable += 1,
            VerdictKind::Error => self.errors += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.vulnerable + self.not_vulnerable + self.errors
    }
}
