use colored::*;
use indicatif::ProgressStyle;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Turns `span` into a progress bar sized for `total` checks.
pub fn start_scan_progress(span: &Span, total: usize) -> anyhow::Result<()> {
    let style = ProgressStyle::with_template("{spinner:.blue} {msg} {pos}/{len} [{elapsed}]")?
        .tick_strings(TICKS);

    span.pb_set_style(&style);
    span.pb_set_length(total as u64);
    span.pb_set_message(&format!("{}", "Checking subdomains".italic()));
    Ok(())
}

pub fn report_scan_progress(span: &Span) {
    span.pb_inc(1);
}
