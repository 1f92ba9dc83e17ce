use anyhow::Result;
use clap::Parser;
use nupeek::commands;
use nupeek::runtime::RealRuntime;
use std::path::PathBuf;

/// nupeek - NuGet package cache explorer
///
/// Browse the packages cached in the local NuGet global packages folder
/// (~/.nuget/packages by default).
///
/// Examples:
///   nupeek list            # List every cached package
///   nupeek list json       # List packages matching "json"
///   nupeek show Serilog    # Show details for the Serilog package
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Packages root directory (overrides defaults; also via NUGET_PACKAGES)
    #[arg(
        long = "root",
        short = 'r',
        env = "NUGET_PACKAGES",
        value_name = "PATH",
        global = true
    )]
    pub packages_root: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List cached packages, optionally filtered by a search query
    List(ListArgs),

    /// Show detailed information about a cached package
    Show(ShowArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Free-text filter over id, display name, description and tags
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Print the full summaries as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// The package id (its directory name in the cache)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;

    match cli.command {
        Commands::List(args) => commands::list(
            runtime,
            cli.packages_root,
            args.query.as_deref(),
            args.json,
        ),
        Commands::Show(args) => commands::show(runtime, &args.id, cli.packages_root, args.json),
    }
}
