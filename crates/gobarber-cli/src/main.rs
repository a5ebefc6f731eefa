//! GoBarber CLI — entry point.
//!
//! # Commands
//!
//! - `gobarber onboard` — initialize config + data directory
//! - `gobarber status` — show configuration and session status
//! - `gobarber sign-up | sign-in | sign-out | whoami` — account and session
//! - `gobarber profile update | avatar <PATH>` — edit the signed-in profile
//! - `gobarber providers | availability | book` — appointment creation

mod app;
mod auth_cmd;
mod booking_cmd;
mod helpers;
mod onboard;
mod profile_cmd;
mod status;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use gobarber_core::config::load_config;

use crate::app::App;

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// ✂ GoBarber — book your next haircut from the terminal
#[derive(Parser)]
#[command(name = "gobarber", version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true, default_value_t = false)]
    logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration and data directory
    Onboard,

    /// Show configuration and session status
    Status,

    /// Create a new account
    SignUp {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Sign in and remember the session
    SignIn {
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Forget the stored session
    SignOut,

    /// Show the signed-in user
    Whoami,

    /// Edit the signed-in profile
    Profile {
        #[command(subcommand)]
        action: profile_cmd::ProfileCommands,
    },

    /// List barbers available for booking
    Providers,

    /// Show a provider's free hours on a day
    Availability {
        /// Provider id (see `gobarber providers`)
        #[arg(short, long)]
        provider: String,

        /// Day as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Book an appointment
    Book {
        /// Provider id (see `gobarber providers`)
        #[arg(short, long)]
        provider: String,

        /// Day as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Start hour (0-23)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: u32,
    },
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.logs);

    match cli.command {
        Commands::Onboard => onboard::run(),
        Commands::Status => status::run().await,
        Commands::SignUp { name, email } => auth_cmd::sign_up(&start().await?, name, email).await,
        Commands::SignIn { email } => auth_cmd::sign_in(&start().await?, email).await,
        Commands::SignOut => auth_cmd::sign_out(&start().await?).await,
        Commands::Whoami => auth_cmd::whoami(&start().await?),
        Commands::Profile { action } => profile_cmd::dispatch(&start().await?, action).await,
        Commands::Providers => booking_cmd::providers(&start().await?).await,
        Commands::Availability { provider, date } => {
            let date = date.unwrap_or_else(today);
            booking_cmd::availability(&start().await?, &provider, date).await
        }
        Commands::Book {
            provider,
            date,
            hour,
        } => {
            let date = date.unwrap_or_else(today);
            booking_cmd::book(&start().await?, &provider, date, hour).await
        }
    }
}

/// Load config and mount the session.
async fn start() -> Result<App> {
    App::start(load_config(None)).await
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("gobarber=debug,gobarber_core=debug,gobarber_api=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
