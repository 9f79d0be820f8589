//! Patty - manage git and working directories under a single root.
//!
//! Usage:
//!   patty get https://github.com/owner/repo
//!   patty get github.com/owner/repo
//!   patty get owner/repo
//!   patty create scratch/ideas
//!   patty list

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use patty_core::PattyRoot;
use patty_core::commands::{
    CreateCommand, CreateOptions, GetCommand, GetOptions, ListCommand, ListOptions,
};
use patty_core::index::DEFAULT_DEPTH;
use patty_core::remote::HttpProber;

#[derive(Parser)]
#[command(name = "patty")]
#[command(version, about = "A CLI tool for managing git and working directories")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a working but non-git managed directory
    Create {
        /// Directory to create, relative to the root
        dir: String,

        /// Initialize a git repository in the new directory
        #[arg(short, long)]
        git_init: bool,
    },

    /// Get a git repository from a remote repository service
    #[command(after_help = "Examples:\n  \
        patty get https://github.com/owner/repo\n  \
        patty get github.com/owner/repo\n  \
        patty get owner/repo")]
    Get {
        /// Repository reference: full URL, host/owner/name, or owner/name
        reference: String,

        /// Get the specified branch
        #[arg(short, long)]
        branch: Option<String>,

        /// Create a shallow clone of that depth
        #[arg(short, long)]
        depth: Option<u32>,

        /// Suppress git output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print git and working directories
    List {
        /// How many directory levels below the root to scan
        #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
        depth: usize,

        /// Print full paths instead of root-relative paths
        #[arg(short, long)]
        full_path: bool,

        /// Print the inventory as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Print root path on patty's configuration
    Root,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "patty=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let root = PattyRoot::from_env()?;
    tracing::debug!(root = %root.path().display(), "resolved patty root");

    match cli.command {
        Commands::Create { dir, git_init } => {
            CreateCommand::run(&root, &CreateOptions { dir, git_init })?;
        }
        Commands::Get {
            reference,
            branch,
            depth,
            quiet,
        } => {
            let probe = HttpProber::new()?;
            GetCommand::run(
                &root,
                &probe,
                &GetOptions {
                    reference,
                    branch,
                    depth,
                    quiet,
                },
            )?;
        }
        Commands::List {
            depth,
            full_path,
            json,
        } => {
            let report = ListCommand::run(&root, &ListOptions { depth, full_path })?;
            let lines = report.render();
            if json {
                println!("{}", serde_json::to_string_pretty(&lines)?);
            } else {
                for line in &lines {
                    println!("{line}");
                }
            }
        }
        Commands::Root => {
            println!("{}", root.path().display());
        }
    }

    Ok(())
}
