//! Staylet CLI - inspect snapshots exported from the Staylet backend.
//!
//! Commands:
//! - `staylet refund` - Compute a single cancellation refund
//! - `staylet refunds` - Build the refund list for a bookings snapshot
//! - `staylet rank` - Search and rank a listings snapshot
//! - `staylet reviews` - Classify reviews against the response deadline
//! - `staylet respond` - Answer a review in a reviews snapshot
//! - `staylet config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod snapshot;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, RankArgs, RefundArgs, RefundsArgs, RespondArgs, ReviewsArgs};

/// Staylet CLI - refunds, listing ranking and review deadlines
#[derive(Parser)]
#[command(name = "staylet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the refund for one cancellation
    Refund(RefundArgs),

    /// List refunds owed for cancelled bookings in a snapshot
    Refunds(RefundsArgs),

    /// Search and rank listings in a snapshot
    Rank(RankArgs),

    /// Show review response statuses
    Reviews(ReviewsArgs),

    /// Respond to a review as its host
    Respond(RespondArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let result = match cli.command {
        Commands::Refund(args) => commands::refund::run(args, &ctx).await,
        Commands::Refunds(args) => commands::refunds::run(args, &ctx).await,
        Commands::Rank(args) => commands::rank::run(args, &ctx).await,
        Commands::Reviews(args) => commands::reviews::run(args, &ctx).await,
        Commands::Respond(args) => commands::respond::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
