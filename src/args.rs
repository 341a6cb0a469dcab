use crate::pathfinding_config::DEFAULT_MAX_NOTABLE_PATHS;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mmamath")]
#[command(about = "Chain together wins to \"prove\" one fighter would beat another")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the fight datasets (default: $MMAMATH_DATA_DIR or ./data)
    #[arg(short = 'd', long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Treat fighter arguments as ids instead of display names
    #[arg(long, global = true)]
    pub by_id: bool,

    /// Print results as JSON
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Hide fighter picture URLs from output
    #[arg(short = 'u', long, global = true)]
    pub hide_urls: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose mode - show search info and statistics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode - only show the chain of names
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Shortest chain of wins from one fighter to another
    Path {
        /// Fighter at the start of the chain
        from: String,

        /// Fighter at the end of the chain
        to: String,
    },

    /// Notable fighters reachable from a fighter through a chain of wins
    Notable {
        /// Fighter at the start of every chain
        fighter: String,

        /// Stop after this many notable fighters
        #[arg(short, long, value_name = "COUNT", default_value_t = DEFAULT_MAX_NOTABLE_PATHS)]
        limit: usize,

        /// Show the full chain to this notable fighter
        #[arg(short, long, value_name = "FIGHTER")]
        target: Option<String>,
    },
}
