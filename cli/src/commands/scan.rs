use std::path::Path;
use std::pin::pin;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use futures::StreamExt;
use tracing::{Instrument, Span, info_span};

use crate::oprint;
use crate::terminal::{colors, print, spinner};
use overwatch_common::config::Config;
use overwatch_common::takeover::catalog::Catalog;
use overwatch_common::takeover::targets;
use overwatch_common::takeover::verdict::Tally;
use overwatch_common::{info, success, warn};
use overwatch_core::scanner::ScanRunner;

pub async fn scan(targets_path: &Path, signatures_path: &Path, cfg: &Config) -> anyhow::Result<()> {
    let catalog: Catalog = Catalog::load(signatures_path)
        .with_context(|| format!("loading service signatures from {}", signatures_path.display()))?;
    let subdomains: Vec<String> = targets::load(targets_path)
        .with_context(|| format!("loading subdomains from {}", targets_path.display()))?;

    print::banner(cfg.no_banner, cfg.quiet);
    info!("Loaded {} service signatures", catalog.len());

    if subdomains.is_empty() {
        warn!("{} contains no subdomains to check", targets_path.display());
        return Ok(());
    }
    success!("{} subdomains queued for checking", subdomains.len());

    let total: usize = subdomains.len();
    let context: String = format!(
        "{} subdomains against {} signatures, {} at a time",
        total.to_string().color(colors::ACCENT).bold(),
        catalog.len().to_string().color(colors::ACCENT).bold(),
        cfg.concurrency.to_string().color(colors::ACCENT).bold(),
    );
    let runner: ScanRunner = ScanRunner::from_config(catalog, cfg)?;

    print::header("Takeover scan results", &context, cfg.quiet);

    let span = info_span!("scan", indicatif.pb_show = true);
    spinner::start_scan_progress(&span, total)?;

    let start_time: Instant = Instant::now();
    let tally: Tally = print_results(runner, subdomains, cfg).instrument(span).await;

    print_summary(&tally, start_time.elapsed(), cfg);
    Ok(())
}

async fn print_results(runner: ScanRunner, subdomains: Vec<String>, cfg: &Config) -> Tally {
    let mut tally: Tally = Tally::default();
    let mut results = pin!(runner.run(subdomains));

    while let Some(record) = results.next().await {
        tally.record(record.verdict.kind);
        print::record(&record, cfg.quiet);
        spinner::report_scan_progress(&Span::current());
    }

    tally
}

fn print_summary(tally: &Tally, total_time: Duration, cfg: &Config) {
    let checked: ColoredString = format!("{} subdomains", tally.total()).bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!("Scan Complete: {checked} checked in {total_time}");

    let breakdown: String = format!(
        "{} vulnerable, {} not vulnerable, {} errors",
        tally.vulnerable.to_string().color(colors::VULNERABLE).bold(),
        tally.not_vulnerable.to_string().color(colors::NOT_VULNERABLE).bold(),
        tally.errors.to_string().color(colors::ERROR).bold(),
    );

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
            print::centerln(&breakdown);
        }
        _ => {
            oprint!();
            success!("{} ({})", output, breakdown)
        }
    }
}
