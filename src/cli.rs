use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::models::{ItemKind, WatchStatus};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Watching,
    Completed,
    Dropped,
}

impl StatusFilter {
    pub fn matches(self, status: WatchStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Watching => status == WatchStatus::Watching,
            StatusFilter::Completed => status == WatchStatus::Completed,
            StatusFilter::Dropped => status == WatchStatus::Dropped,
        }
    }
}

#[derive(Parser)]
#[command(name = "watchlog")]
#[command(about = "Track your movies and TV shows from the command line")]
pub struct Cli {
    /// Treat not-found errors as fatal in every command
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add a new show or movie
    Add {
        title: String,

        /// Kind of item to track
        #[arg(short = 't', long = "type", default_value = "series")]
        kind: ItemKind,

        #[arg(short, long, default_value_t = 1)]
        season: u32,

        #[arg(short, long, default_value_t = 0)]
        episode: u32,

        /// Personal rating
        #[arg(long, default_value_t = 0.0)]
        rating: f32,

        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// List tracked items
    List {
        #[arg(long, default_value = "watching")]
        status: StatusFilter,
    },

    /// Update a show's progress
    Update {
        title: String,

        #[arg(short, long)]
        season: Option<u32>,

        #[arg(short, long)]
        episode: Option<u32>,

        #[arg(long)]
        status: Option<WatchStatus>,

        #[arg(long)]
        rating: Option<f32>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Show the next episode to watch
    NextEpisode { title: Option<String> },

    /// Mark an item as completed
    Complete { title: String },

    /// Mark a show as dropped
    Drop { title: String },
}
