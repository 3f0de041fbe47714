use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod catalog;
mod countdown;

#[derive(Debug, Parser)]
#[command(name = "vitrine-cli")]
#[command(about = "Vitrine storefront catalog tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch (or read) a catalog collection, normalize it, and print the
    /// filtered product list.
    Catalog {
        /// Collection to fetch from the store.
        #[arg(long, default_value = "products")]
        collection: String,

        /// Read documents from a local JSON file instead of the store.
        /// Accepts either a document-list envelope or a bare array.
        #[arg(long)]
        file: Option<PathBuf>,

        /// Case-insensitive title query.
        #[arg(long)]
        query: Option<String>,

        #[arg(long)]
        min_price: Option<f64>,

        #[arg(long)]
        max_price: Option<f64>,

        /// Canonical category id (see `categories`).
        #[arg(long)]
        category: Option<String>,

        /// Discount percentage applied to products that carry no discount
        /// field at all.
        #[arg(long, env = "VITRINE_DEFAULT_DISCOUNT_PCT", default_value_t = 15.0)]
        default_discount: f64,
    },

    /// Print the shared category table.
    Categories,

    /// Show the flash-sale countdown.
    Countdown {
        /// Sale duration in hours, counted from now.
        #[arg(long, env = "VITRINE_FLASH_SALE_HOURS", default_value_t = 48)]
        hours: u64,

        /// Keep ticking once per second until the sale ends.
        #[arg(long)]
        watch: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Catalog {
            collection,
            file,
            query,
            min_price,
            max_price,
            category,
            default_discount,
        } => {
            catalog::run_catalog(
                &collection,
                file.as_deref(),
                query.as_deref(),
                min_price,
                max_price,
                category.as_deref(),
                default_discount,
            )
            .await
        }
        Commands::Categories => {
            for (id, name) in vitrine_core::categories::CATEGORIES {
                println!("{id}  {name}");
            }
            Ok(())
        }
        Commands::Countdown { hours, watch } => countdown::run_countdown(hours, watch).await,
    }
}
