//! Draft order relay CLI - Preview and submit orders outside the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Show the draft order request an order would produce
//! draft-order-cli preview --file order.json
//!
//! # Same, under a different customer policy
//! draft-order-cli preview --file order.json --policy create-first
//!
//! # Create the draft order in Shopify (reads SHOPIFY_* from the environment)
//! draft-order-cli submit --file order.json
//! ```
//!
//! # Commands
//!
//! - `preview` - Print outbound request bodies without network access
//! - `submit` - Run the relay flow against Shopify and print the result

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use draft_order_core::{CustomerPolicy, DraftOrderPolicy};
use draft_order_server::RelayConfig;

mod commands;

#[derive(Parser)]
#[command(name = "draft-order-cli")]
#[command(author, version, about = "Draft order relay CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Shopify request bodies for an order file
    Preview {
        /// Path to an order JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Customer policy (defaults to `DRAFT_ORDER_CUSTOMER_POLICY`)
        #[arg(short, long, value_enum)]
        policy: Option<PolicyArg>,
    },
    /// Create a draft order in Shopify from an order file
    Submit {
        /// Path to an order JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Customer policy (defaults to `DRAFT_ORDER_CUSTOMER_POLICY`)
        #[arg(short, long, value_enum)]
        policy: Option<PolicyArg>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Attach a customer only when the order's email passes validation
    Validated,
    /// Always attach a customer, substituting the fallback email
    Fallback,
    /// Create a Shopify customer first, then reference it
    CreateFirst,
}

impl PolicyArg {
    /// Apply the override, keeping the configured fallback email if any.
    fn apply(self, policy: &DraftOrderPolicy) -> DraftOrderPolicy {
        let customer = match (self, &policy.customer) {
            (Self::Validated, _) => CustomerPolicy::Validated,
            (Self::Fallback, CustomerPolicy::Fallback { email }) => CustomerPolicy::Fallback {
                email: email.clone(),
            },
            (Self::Fallback, _) => CustomerPolicy::Fallback {
                email: DraftOrderPolicy::DEFAULT_FALLBACK_EMAIL.to_string(),
            },
            (Self::CreateFirst, _) => CustomerPolicy::CreateFirst,
        };

        DraftOrderPolicy {
            customer,
            ..policy.clone()
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = RelayConfig::from_env()?;

    match cli.command {
        Commands::Preview { file, policy } => {
            let policy = resolve_policy(&config, policy);
            commands::preview::run(&file, &policy, config.shopify.store.as_deref()).await?;
        }
        Commands::Submit { file, policy } => {
            let policy = resolve_policy(&config, policy);
            commands::submit::run(&file, &config, &policy).await?;
        }
    }
    Ok(())
}

fn resolve_policy(config: &RelayConfig, arg: Option<PolicyArg>) -> DraftOrderPolicy {
    arg.map_or_else(|| config.policy.clone(), |arg| arg.apply(&config.policy))
}
