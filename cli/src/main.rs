mod commands;
mod output;
mod terminal;

use commands::{CommandLine, discover};
use findpi_common::config::Config;
use findpi_common::system::SystemRepository;
use findpi_core::system::{FD_LIMIT_TARGET, SystemRepo};
use terminal::{logging, print};
use tracing::{debug, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands: CommandLine = CommandLine::parse_args();
    logging::init_logging(commands.verbose);

    let cfg: Config = commands.to_config();
    let system: SystemRepo = SystemRepo;

    match system.raise_fd_limit(FD_LIMIT_TARGET) {
        Ok(limit) => debug!("Open file limit is {limit}"),
        Err(e) => warn!("Could not raise the open file limit: {e:#}"),
    }

    print::banner(cfg.quiet);
    discover::discover(&cfg, &system).await
}
