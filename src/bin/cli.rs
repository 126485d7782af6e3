use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input};
use dotenvy::dotenv;

use grillz_config::{EmailConfig, PricingConfig};
use grillz_quote::cli::{estimate, read_estimate_request, render_config, render_estimate, sample_offer};
use grillz_quote::modules::offers::OfferService;
use grillz_quote::state::init_app_state;

#[derive(Parser)]
#[command(name = "grillz-cli")]
#[command(about = "Grillz CLI - Pricing and mail tools for the quote API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price an estimate request read from a JSON file or stdin
    Estimate {
        /// Path to the request JSON (reads stdin when omitted)
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,
    },
    /// Show the effective price table and mail settings
    Config,
    /// Send a sample offer through the configured SMTP relay
    SendTestEmail {
        /// Address used as the sample customer (prompted when omitted)
        #[arg(short = 't', long)]
        to: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Estimate { file } => handle_estimate(file),
        Commands::Config => handle_config(),
        Commands::SendTestEmail { to, yes } => handle_send_test_email(to, yes).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn handle_estimate(file: Option<PathBuf>) -> anyhow::Result<()> {
    let request = read_estimate_request(file.as_deref())?;
    let response = estimate(&request, &PricingConfig::from_env())?;
    println!("{}", render_estimate(&response));
    Ok(())
}

fn handle_config() -> anyhow::Result<()> {
    println!(
        "{}",
        render_config(&PricingConfig::from_env(), &EmailConfig::from_env())
    );
    Ok(())
}

async fn handle_send_test_email(to: Option<String>, yes: bool) -> anyhow::Result<()> {
    let state = init_app_state();

    let to = match to {
        Some(to) => to,
        None => Input::new()
            .with_prompt("Sample customer email")
            .interact_text()?,
    };

    let owner = state
        .email_config
        .owner_email
        .clone()
        .unwrap_or_else(|| "<EMAIL_TO not set>".to_string());

    if !yes {
        let proceed = Confirm::new()
            .with_prompt(format!("Send a test offer to {} (and {} if receipts are on)?", owner, to))
            .default(false)
            .interact()?;
        if !proceed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let response = OfferService::send_offer(&state, sample_offer(&to))
        .await
        .map_err(|e| anyhow::anyhow!("{} ({})", e.message(), e.status))?;

    println!("✅ Test offer sent");
    println!("   Owner: {}", owner);
    println!("   Total: {} {}", response.currency, response.total);
    Ok(())
}
