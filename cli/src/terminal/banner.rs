use colored::*;

use crate::terminal::{colors, print};

const BANNER: &str = r#"
   ____  _   _____ ______ _       _____  ______________  __
  / __ \| | / / _ \/ __ \ |     / / _ |/_  __/ ___/ / / /
 / /_/ /| |/ /  __/ /_/ / | /| / / __ | / / / /__/ _  /
 \____/ |___/\___/_/ \_\|__/|__/_/ |_|/_/  \___/_//_/
"#;

pub fn print() {
    for line in BANNER.lines().filter(|line| !line.is_empty()) {
        print::print(&format!("{}", line.color(colors::PRIMARY).bold()));
    }
    print::centerln(&format!(
        "{}",
        "Subdomain Takeover Vulnerability Scanner".color(colors::TEXT_DEFAULT)
    ));
}
