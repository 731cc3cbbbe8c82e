//! TokenKit CLI (`tokenctl`)
//!
//! Mints and checks credentials with the secret from the process
//! configuration. Useful for smoke-testing a deployment's secret.

use clap::{Parser, Subcommand};
use tk_shared::{AppConfig, Environment};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "tokenctl")]
#[command(author, version, about = "TokenKit CLI - mint and verify signed credentials", long_about = None)]
struct Cli {
    /// Environment whose configuration file is loaded (overrides ENVIRONMENT)
    #[arg(long, global = true)]
    env: Option<Environment>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mint a credential for a subject
    Mint {
        /// Subject identifier the credential asserts
        #[arg(allow_negative_numbers = true)]
        subject: i64,

        /// Issue as if the current unix time were this value
        #[arg(long)]
        issued_at: Option<i64>,
    },

    /// Verify a credential and print its subject
    Verify {
        /// Credential to verify
        token: String,

        /// Also reject credentials past their expiry
        #[arg(long)]
        check_expiry: bool,

        /// Print the verified claims as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.env {
        Some(env) => AppConfig::load_for(env)?,
        None => AppConfig::load()?,
    };
    logging::init(&config.logging)?;
    tracing::debug!(environment = %config.environment, "Configuration loaded");

    match cli.command {
        Commands::Mint { subject, issued_at } => commands::mint(&config, subject, issued_at),
        Commands::Verify {
            token,
            check_expiry,
            json,
        } => commands::verify(&config, &token, check_expiry, json),
    }
}
