//! CLI administration tool for site-analytics.
//!
//! Reads the same data as the HTTP API straight from the database, for
//! operators without network access to the service.
//!
//! # Usage
//!
//! ```bash
//! # Headline counts for the last week
//! cargo run --bin admin -- summary --days 7
//!
//! # Ten busiest pages of one site
//! cargo run --bin admin -- top-pages --site blog.example.com --limit 10
//!
//! # Visits per site
//! cargo run --bin admin -- by-site
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use site_analytics::domain::filter::{DEFAULT_DAYS, DEFAULT_TOP_PAGES_LIMIT};
use site_analytics::infrastructure::persistence::PgVisitRepository;
use site_analytics::prelude::{AnalyticsService, VisitFilter};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for inspecting collected pageviews.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Show headline counts
    Summary {
        /// Trailing window in days
        #[arg(short, long, default_value_t = DEFAULT_DAYS)]
        days: i64,

        /// Restrict to one site
        #[arg(short, long)]
        site: Option<String>,
    },

    /// Show the most visited pages
    TopPages {
        /// Trailing window in days
        #[arg(short, long, default_value_t = DEFAULT_DAYS)]
        days: i64,

        /// Restrict to one site
        #[arg(short, long)]
        site: Option<String>,

        /// Number of pages (1-1000)
        #[arg(short, long, default_value_t = DEFAULT_TOP_PAGES_LIMIT)]
        limit: i64,
    },

    /// Show visits per site
    BySite {
        /// Trailing window in days
        #[arg(short, long, default_value_t = DEFAULT_DAYS)]
        days: i64,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let service = AnalyticsService::new(Arc::new(PgVisitRepository::new(Arc::new(pool.clone()))));

    match cli.command {
        Commands::Summary { days, site } => handle_summary(&service, days, site).await?,
        Commands::TopPages { days, site, limit } => {
            handle_top_pages(&service, days, site, limit).await?
        }
        Commands::BySite { days } => handle_by_site(&service, days).await?,
        Commands::Db { action } => handle_db_action(action, &service, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Prints the four headline counts.
async fn handle_summary(service: &AnalyticsService, days: i64, site: Option<String>) -> Result<()> {
    println!(
        "{}",
        format!("Summary (last {} days)", days).bright_blue().bold()
    );
    if let Some(site) = &site {
        println!("  Site: {}", site.bright_white());
    }
    println!();

    let summary = service
        .summary(VisitFilter::new(days).with_site(site))
        .await?;

    println!(
        "  Visits:          {}",
        summary.total_visits.to_string().bright_green().bold()
    );
    println!(
        "  Sites:           {}",
        summary.total_sites.to_string().bright_green().bold()
    );
    println!(
        "  Pages:           {}",
        summary.total_pages.to_string().bright_green().bold()
    );
    println!(
        "  Unique visitors: {}",
        summary.unique_visitors.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Prints the ranking of pages.
async fn handle_top_pages(
    service: &AnalyticsService,
    days: i64,
    site: Option<String>,
    limit: i64,
) -> Result<()> {
    println!(
        "{}",
        format!("Top pages (last {} days)", days)
            .bright_blue()
            .bold()
    );
    println!();

    let filter = VisitFilter::new(days).with_site(site).with_limit(limit);
    let rows = service.top_pages(filter).await?;

    if rows.is_empty() {
        println!("{}", "  No visits in this window".yellow());
    }

    for (rank, row) in rows.iter().enumerate() {
        println!(
            "  {:>3}. {:<50} {}",
            rank + 1,
            row.page.as_deref().unwrap_or("(none)"),
            row.visits.to_string().bright_green()
        );
    }
    println!();

    Ok(())
}

/// Prints visits per site, busiest first.
async fn handle_by_site(service: &AnalyticsService, days: i64) -> Result<()> {
    println!(
        "{}",
        format!("Visits by site (last {} days)", days)
            .bright_blue()
            .bold()
    );
    println!();

    let mut rows = service.visits_by_site(days).await?;
    rows.sort_by(|a, b| b.visits.cmp(&a.visits));

    if rows.is_empty() {
        println!("{}", "  No visits in this window".yellow());
    }

    for row in &rows {
        println!(
            "  {:<40} {}",
            row.site.as_deref().unwrap_or("(none)"),
            row.visits.to_string().bright_green()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(
    action: DbAction,
    service: &AnalyticsService,
    pool: &PgPool,
) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            service.check_database().await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM site_visits")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL:  {}", version.bright_white());
            println!("  Stored rows: {}", rows.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
