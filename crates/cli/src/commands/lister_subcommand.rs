use clap::Subcommand;

use super::{ListCliArgs, PreviewCliArgs};

#[derive(Debug, Subcommand)]
pub enum ListerSubcommand {
    #[command(
        name = "list",
        long_about = "Transfer each token in range to the marketplace with randomized listing terms."
    )]
    List {
        #[command(flatten)]
        args: Box<ListCliArgs>,
    },

    #[command(
        name = "preview",
        long_about = "Print the listings `list` would submit without sending any transaction."
    )]
    Preview {
        #[command(flatten)]
        args: Box<PreviewCliArgs>,
    },
}
