mod list;
mod lister_subcommand;
mod listing_args;
mod preview;

use clap::Parser;

pub use list::{list, ListCliArgs};
pub use lister_subcommand::ListerSubcommand;
pub use listing_args::ListingArgs;
pub use preview::{preview, PreviewCliArgs};

#[derive(Parser, Debug)]
#[command(
    name = "rentable-lister",
    version,
    about = "Seeds a rentable marketplace with randomized test listings"
)]
pub struct ListerCli {
    #[command(subcommand)]
    pub command: ListerSubcommand,
}

impl ListerCli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
