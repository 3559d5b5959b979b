//! Phone Lookup CLI - Main entry point.

mod commands;
mod config;
mod error;
mod session;

use crate::config::Config;
use crate::error::AppResult;
use crate::session::LookupSession;
use anyhow::Context;
use clap::{Parser, Subcommand};
use lookup_client::RelayClient;
use quota_store::{QuotaTracker, Storage, Waitlist};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "phone-lookup")]
#[command(about = "Look up US phone numbers with a free daily quota")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up carrier, location and line type for a number
    Lookup {
        /// Phone number in any format, e.g. "(555) 123-4567"
        number: String,
    },

    /// Show remaining free lookups for today
    Status,

    /// Premium waitlist
    Waitlist {
        #[command(subcommand)]
        command: WaitlistCommands,
    },

    /// Show how input is formatted as it is typed
    Format {
        /// Raw input
        input: String,
    },
}

#[derive(Subcommand)]
enum WaitlistCommands {
    /// Join the premium waitlist
    Join {
        /// Email address
        email: String,
    },

    /// List waitlist sign-ups
    List,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Command failed: {:?}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> AppResult<String> {
    let config = Config::load().context("Failed to load configuration")?;

    init_logging(&config.log.level);
    debug!("Data directory: {}", config.storage.data_dir.display());

    let storage = Storage::file(&config.storage.data_dir);

    let output = match cli.command {
        Commands::Lookup { number } => {
            let client = RelayClient::new(
                &config.relay.base_url,
                &config.relay.token,
                config.relay.timeout,
            )?;
            let tracker = QuotaTracker::with_limit(storage, config.quota.daily_limit);
            let session = LookupSession::new(tracker, client);

            commands::lookup::run(&session, &number).await?
        }
        Commands::Status => {
            let tracker = QuotaTracker::with_limit(storage, config.quota.daily_limit);
            commands::status::run(&tracker).await
        }
        Commands::Waitlist { command } => {
            let waitlist = Waitlist::new(storage);
            match command {
                WaitlistCommands::Join { email } => {
                    commands::waitlist::join(&waitlist, &email).await?
                }
                WaitlistCommands::List => commands::waitlist::list(&waitlist).await,
            }
        }
        Commands::Format { input } => commands::format::run(&input),
    };

    Ok(output)
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
