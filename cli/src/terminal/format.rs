use crate::terminal::colors;
use colored::*;
use overwatch_common::takeover::verdict::{ScanRecord, VerdictKind};

pub fn kind_color(kind: VerdictKind) -> Color {
    match kind {
        VerdictKind::Vulnerable => colors::VULNERABLE,
        VerdictKind::NotVulnerable => colors::NOT_VULNERABLE,
        VerdictKind::Error => colors::ERROR,
    }
}

/// `<subdomain>: [<kind>] - <detail>`, colored by verdict kind.
pub fn record_line(record: &ScanRecord) -> String {
    let color: Color = kind_color(record.verdict.kind);
    let tag: ColoredString = format!("[{}]", record.verdict.kind).color(color).bold();
    let subdomain: ColoredString = record.subdomain.color(color);
    let detail: ColoredString = record.verdict.detail.color(colors::TEXT_DEFAULT);
    format!("{subdomain}: {tag} - {detail}")
}
