mod commands;
mod error;
mod util;

use commands::{ListerCli, ListerSubcommand};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> miette::Result<()> {
    init_tracing();
    let args = ListerCli::parse_args();

    match args.command {
        ListerSubcommand::List { args } => commands::list(*args).await?,
        ListerSubcommand::Preview { args } => commands::preview(*args)?,
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
