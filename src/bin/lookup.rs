//! One-shot pageview lookup from the command line.
//!
//! Runs the same validation, upstream request and error translation as the
//! HTTP gateway, without starting a server.
//!
//! # Usage
//!
//! ```bash
//! # Last month's views for an article
//! cargo run --bin lookup -- --title Orca
//!
//! # A specific month, as JSON
//! cargo run --bin lookup -- --title Michael_Phelps --date 202408 --json
//! ```
//!
//! # Environment Variables
//!
//! Same upstream settings as the server (`UPSTREAM_BASE_URL`,
//! `UPSTREAM_USER_AGENT`, `UPSTREAM_TIMEOUT_SECS`). Logs go to stderr at
//! `warn` unless `RUST_LOG` says otherwise.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Utc};
use clap::Parser;
use colored::*;
use wikiviews::domain::entities::PageviewItem;
use wikiviews::{config, logging, server};

/// Query monthly Wikipedia pageviews.
#[derive(Parser)]
#[command(name = "lookup")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Article title, e.g. "Orca" or "Michael_Phelps"
    #[arg(short, long)]
    title: String,

    /// Month in form YYYYMM (default: previous calendar month)
    #[arg(short, long)]
    date: Option<String>,

    /// Print the items as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    logging::init(&level, &config.log_format);

    let service = server::build_pageview_service(&config)?;
    let date = cli
        .date
        .unwrap_or_else(|| previous_month(Utc::now().date_naive()));

    match service.handle(&cli.title, &date).await {
        Ok(items) if cli.json => {
            let json = serde_json::to_string_pretty(&items).context("Failed to encode items")?;
            println!("{json}");
        }
        Ok(items) => print_items(&cli.title, &date, &items),
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_items(title: &str, date: &str, items: &[PageviewItem]) {
    println!("{} {} ({})", "📈".bright_blue(), title.bold(), date.dimmed());

    if items.is_empty() {
        println!("  {}", "no pageviews recorded".yellow());
        return;
    }

    for item in items {
        println!(
            "  {}  {}  {}",
            item.timestamp.dimmed(),
            item.article,
            item.views.to_string().green().bold()
        );
    }
}

/// `YYYYMM` of the month before `today`.
fn previous_month(today: NaiveDate) -> String {
    let (year, month) = if today.month() == 1 {
        (today.year() - 1, 12)
    } else {
        (today.year(), today.month() - 1)
    };

    format!("{year:04}{month:02}")
}
