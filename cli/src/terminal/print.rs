use crate::terminal::{banner, colors, format};
use colored::*;
use overwatch_common::PRINT_TARGET;
use overwatch_common::takeover::verdict::ScanRecord;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 82;

#[macro_export]
macro_rules! oprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let version: String = format!("⟦ OVERWATCH v{} ⟧", env!("CARGO_PKG_VERSION"));
    print(&rule(&version));
    banner::print();
}

/// Titled rule followed by a centered context line, e.g. what is about to be scanned.
pub fn header(title: &str, context: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title: String = format!("⟦ {} ⟧", title.to_uppercase());
    print(&rule(&title));
    centerln(context);
}

/// Centers `label` on a full-width rule.
fn rule(label: &str) -> String {
    let label_width: usize = UnicodeWidthStr::width(label);
    let fill: usize = TOTAL_WIDTH.saturating_sub(label_width);
    let left: String = "─".repeat(fill / 2);
    let right: String = "─".repeat(fill - fill / 2);

    format!(
        "{}{}{}",
        left.color(colors::SEPARATOR),
        label.color(colors::ACCENT).bold(),
        right.color(colors::SEPARATOR)
    )
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}

/// Prints one verdict line. At `-qq` only vulnerable subdomains are shown.
pub fn record(record: &ScanRecord, q_level: u8) {
    if q_level > 1 && !record.verdict.is_vulnerable() {
        return;
    }
    print(&format::record_line(record));
}
