pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "broadsheet")]
#[command(about = "Reddit and Hacker News as a newspaper front page", long_about = None)]
pub struct Cli {
    /// Maximum concurrent requests while building a front page
    #[arg(short, long, global = true)]
    pub workers: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a front page
    Show {
        /// Subreddit name, "<subreddit>/top" or "hn" (default: from config)
        source: Option<String>,
        /// Use all-time top posts instead of hot
        #[arg(long)]
        top: bool,
        /// Print the normalized stories as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// List the navigable sources
    Sources,
    /// Launch the terminal front page
    Tui {
        /// Subreddit name, "<subreddit>/top" or "hn" (default: from config)
        source: Option<String>,
    },
}
