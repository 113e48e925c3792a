//! CLI administration tool for short-links.
//!
//! Inspects and manages stored links without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Newest links
//! cargo run --bin admin -- links list --limit 20
//!
//! # Delete a link (cache entry is invalidated too)
//! cargo run --bin admin -- links delete zig
//!
//! # Totals
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` (or `DB_*`) is required, `REDIS_URL`
//! and `CACHE_BACKEND` are used by `links delete`.

use short_links::application::services::{LIST_LIMIT, LinkService};
use short_links::config::{self, Config};
use short_links::domain::repositories::UrlRepository;
use short_links::infrastructure::cache::{CacheService, NullCache};
use short_links::infrastructure::persistence::PgUrlRepository;
use short_links::server::{connect_cache, connect_database};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing short-links.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect and delete links
    Links {
        #[command(subcommand)]
        action: LinksAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum LinksAction {
    /// List the newest links
    List {
        /// Maximum number of links to show
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },

    /// Delete a link by short code
    Delete {
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL must be set")?;

    let pool = connect_database(&config, &database_url).await?;
    let repo = Arc::new(PgUrlRepository::new(Arc::new(pool.clone())));

    match cli.command {
        Commands::Links { action } => handle_links_action(action, &config, repo).await?,
        Commands::Stats => handle_stats(&repo).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_links_action(
    action: LinksAction,
    config: &Config,
    repo: Arc<PgUrlRepository>,
) -> Result<()> {
    match action {
        LinksAction::List { limit } => list_links(repo, limit).await,
        LinksAction::Delete { code, yes } => delete_link(config, repo, code, yes).await,
    }
}

/// Prints the newest links.
///
/// # Output Format
///
/// ```text
/// Links
///
///   Code         Clicks   Created            Expires            URL
///   ────────────────────────────────────────────────────────────────────────
///   zig          3        2026-01-15 10:30   -                  https://ziglang.org
/// ```
async fn list_links(repo: Arc<PgUrlRepository>, limit: i64) -> Result<()> {
    println!("{}", "Links".bright_blue().bold());
    println!();

    let limit = limit.clamp(1, LIST_LIMIT);
    let links = repo
        .list_recent(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<12} {:<8} {:<18} {:<18} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Expires".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    let now = Utc::now();
    for link in &links {
        let expires = match link.expires_at {
            Some(at) if link.is_expired_at(now) => {
                at.format("%Y-%m-%d %H:%M").to_string().red()
            }
            Some(at) => at.format("%Y-%m-%d %H:%M").to_string().normal(),
            None => "-".bright_black(),
        };

        println!(
            "  {:<12} {:<8} {:<18} {:<18} {}",
            link.code.cyan(),
            link.clicks.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            expires,
            link.original_url
        );
    }

    println!();
    println!("  Shown: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes a link after confirmation.
///
/// Goes through [`LinkService`] so the Redis entry is invalidated along with
/// the row when a cache is configured.
async fn delete_link(
    config: &Config,
    repo: Arc<PgUrlRepository>,
    code: String,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Delete Link".bright_blue().bold());
    println!();

    let link = repo
        .find_by_code(&code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Link not found")?;

    println!("  Code:   {}", link.code.cyan());
    println!("  URL:    {}", link.original_url);
    println!("  Clicks: {}", link.clicks.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let cache: Arc<dyn CacheService> = match connect_cache(config).await? {
        Some(cache) => cache,
        None => {
            println!(
                "{}",
                "  No cache configured, only the database row is removed".yellow()
            );
            Arc::new(NullCache::new())
        }
    };

    LinkService::new(repo, cache)
        .delete(&code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!("{}", "Link deleted".green().bold());
    println!();

    Ok(())
}

/// Displays totals: links, clicks and links past their `expires_at`.
async fn handle_stats(repo: &PgUrlRepository) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let links = repo.count().await?;
    let clicks = repo.total_clicks().await?;
    let expired = repo.count_expired().await?;

    println!("  Links:   {}", links.to_string().bright_green().bold());
    println!("  Clicks:  {}", clicks.to_string().bright_green().bold());
    println!("  Expired: {}", expired.to_string().yellow().bold());
    println!();

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
    }

    Ok(())
}
