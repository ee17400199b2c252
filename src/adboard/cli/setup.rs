use adboard::init::DATA_DIR_ENV;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "adboard", bin_name = "adboard", version)]
#[command(about = "A classified-ads board for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the board and its config
    #[arg(long, global = true, env = DATA_DIR_ENV, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List ads, newest first
    #[command(alias = "ls")]
    List {
        /// Only show ads matching this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search ads by title, description or phone
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Publish a new ad
    #[command(alias = "n")]
    Add(AddArgs),

    /// Delete ads by index or id
    #[command(alias = "rm")]
    Delete {
        /// Display index (as shown by `list`) or ad id
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show or set configuration
    Config {
        /// Config key: fee, currency or storage_key
        key: Option<String>,
        /// New value
        value: Option<String>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct AddArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Price, leave out for none
    #[arg(long)]
    pub price: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Confirm the payment without asking
    #[arg(short, long)]
    pub yes: bool,
}

impl AddArgs {
    /// All required fields came from flags, so nothing needs asking up front.
    pub fn is_complete(&self) -> bool {
        self.title.is_some() && self.description.is_some() && self.phone.is_some()
    }
}
