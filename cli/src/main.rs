mod commands;
mod terminal;

use commands::{CommandLine, scan};
use overwatch_common::config::Config;

use crate::terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg: Config = commands.to_config();

    scan::scan(&commands.targets, &commands.signatures, &cfg).await
}
