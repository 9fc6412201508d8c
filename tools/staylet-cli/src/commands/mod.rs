//! CLI command implementations.

pub mod config;
pub mod rank;
pub mod refund;
pub mod refunds;
pub mod respond;
pub mod reviews;

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Subcommand};

/// Arguments for the refund command.
#[derive(Args)]
pub struct RefundArgs {
    /// Cancellation policy (flexible, moderate, strict, non_refundable).
    #[arg(short, long)]
    pub policy: String,

    /// Check-in date (YYYY-MM-DD).
    #[arg(long)]
    pub check_in: NaiveDate,

    /// Cancellation time (RFC 3339). Defaults to now.
    #[arg(long)]
    pub cancelled_at: Option<DateTime<Utc>>,

    /// Total booking price in the smallest currency unit.
    #[arg(short, long)]
    pub total: i64,

    /// Currency code. Defaults to the configured currency.
    #[arg(long)]
    pub currency: Option<String>,
}

/// Arguments for the refunds command.
#[derive(Args)]
pub struct RefundsArgs {
    /// Bookings snapshot (JSON array).
    pub file: PathBuf,

    /// Evaluation time for cancellations without a timestamp (RFC 3339).
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,
}

/// Arguments for the rank command.
#[derive(Args)]
pub struct RankArgs {
    /// Listings snapshot (JSON array).
    pub file: PathBuf,

    /// Sort mode (popular, price_asc, price_desc, rating, newest).
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Page number (1-indexed).
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Items per page.
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Rental type (short_term, monthly, vehicle).
    #[arg(short = 't', long = "type")]
    pub rental_type: Option<String>,

    /// Minimum nightly price.
    #[arg(long)]
    pub min_price: Option<i64>,

    /// Maximum nightly price.
    #[arg(long)]
    pub max_price: Option<i64>,

    /// Minimum average rating.
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Text to match in title or location.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Only listings owned by this host.
    #[arg(long)]
    pub host: Option<String>,
}

/// Arguments for the reviews command.
#[derive(Args)]
pub struct ReviewsArgs {
    /// Reviews snapshot (JSON array).
    pub file: PathBuf,

    /// Evaluation time (RFC 3339). Defaults to now.
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,

    /// Only show reviews with this status (pending, responded, expired).
    #[arg(long)]
    pub status: Option<String>,

    /// Only show reviews for this host.
    #[arg(long)]
    pub host: Option<String>,
}

/// Arguments for the respond command.
#[derive(Args)]
pub struct RespondArgs {
    /// Reviews snapshot (JSON array). Updated in place.
    pub file: PathBuf,

    /// Review to answer.
    #[arg(short, long)]
    pub review: String,

    /// Responding host.
    #[arg(long)]
    pub host: String,

    /// Response text.
    #[arg(short, long)]
    pub body: String,

    /// Response time (RFC 3339). Defaults to now.
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
