mod commands;

use anyhow::Result;
use clap::{ArgGroup, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use leetcode_cli::api::LeetCodeClient;
use leetcode_cli::config::Config;

#[derive(Parser)]
#[command(name = "leetcode-cli")]
#[command(about = "Browse LeetCode problems and generate local solution files")]
#[command(version)]
struct Cli {
    /// Log requests and written files to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show individual problem
    #[command(visible_aliases = ["pick", "dl"])]
    Show(ShowArgs),

    /// List problems
    List(ListArgs),
}

#[derive(Args)]
#[command(group(ArgGroup::new("target").required(true).args(["id", "title", "random"])))]
pub struct ShowArgs {
    /// Frontend ID of the problem
    #[arg(short, long)]
    pub id: Option<u32>,

    /// Title slug of the problem
    #[arg(short, long)]
    pub title: Option<String>,

    /// Pick a random problem
    #[arg(short, long)]
    pub random: bool,

    /// Write markdown and starter code instead of printing
    #[arg(short, long)]
    pub generate: bool,

    /// Language name, slug or file extension for --generate
    #[arg(short, long)]
    pub language: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter by status: approved, rejected, new
    #[arg(long, default_value = "all")]
    pub status: String,

    /// Filter by lock: locked, free
    #[arg(long, default_value = "all")]
    pub lock: String,

    /// Print solved counts instead of the listing
    #[arg(short, long)]
    pub summary: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;
    let client = LeetCodeClient::authenticated(&config)?;

    match cli.command {
        Commands::Show(args) => commands::show(&client, &config, args).await,
        Commands::List(args) => commands::list(&client, args).await,
    }
}
