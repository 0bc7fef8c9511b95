//! Standalone database initialization tool.
//!
//! Creates the work_hours database file and schema without starting the bot.
//! Useful for container entrypoints and first-time setup.

use anyhow::{anyhow, Result};
use std::env;
use std::path::Path;

use work_hours_bot::config::Config;
use work_hours_bot::database::connection::DatabaseManager;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("init");

    match command {
        "init" => init_database().await,
        "check" => check_database().await,
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        unknown => {
            eprintln!("❌ Unknown command: {unknown}");
            print_help();
            std::process::exit(1);
        }
    }
}

async fn init_database() -> Result<()> {
    println!("🕒 Work Hours Bot - Database Initialization");
    println!("===========================================");

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    println!("📊 Database URL: {}", mask_url(&config.database_url));

    // Ensure data directory exists for SQLite
    if config.database_url.starts_with("sqlite:") {
        let db_path = config
            .database_url
            .strip_prefix("sqlite:")
            .unwrap_or(&config.database_url);
        if let Some(parent) = Path::new(db_path).parent() {
            if !parent.exists() {
                println!("📁 Creating directory: {}", parent.display());
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    println!("🚀 Creating schema...");

    let db_manager = DatabaseManager::new(&config.database_url)
        .await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    match db_manager.init_schema().await {
        Ok(_) => {
            println!("✅ Schema created successfully!");
            println!("\n🎯 Your Work Hours Bot database is ready!");
        }
        Err(e) => {
            eprintln!("❌ Schema creation failed: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn check_database() -> Result<()> {
    println!("🔍 Checking database connection and schema...");

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    println!("📊 Database URL: {}", mask_url(&config.database_url));

    let db_manager = DatabaseManager::new(&config.database_url)
        .await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    match check_tables(&db_manager).await {
        Ok(tables) => {
            println!("✅ Database connection successful!");
            println!("📋 Found tables:");
            for table in tables {
                println!("  • {table}");
            }
        }
        Err(e) => {
            println!("⚠️  Database check failed: {e}");
            println!("💡 Try running 'init-db init' to create the schema");
        }
    }

    Ok(())
}

async fn check_tables(db_manager: &DatabaseManager) -> Result<Vec<String>> {
    let rows: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table'")
            .fetch_all(&db_manager.pool)
            .await?;

    Ok(rows)
}

fn mask_url(url: &str) -> String {
    // Simple URL masking for security (don't show full paths in production)
    if url.starts_with("sqlite:") {
        let path = url.strip_prefix("sqlite:").unwrap_or(url);
        if let Some(filename) = Path::new(path).file_name() {
            format!("sqlite:.../{}", filename.to_string_lossy())
        } else {
            url.to_string()
        }
    } else {
        url.to_string()
    }
}

fn print_help() {
    println!("🕒 Work Hours Bot - Database Initialization Tool");
    println!();
    println!("USAGE:");
    println!("    init-db [COMMAND]");
    println!();
    println!("COMMANDS:");
    println!("    init           Create the database and schema (default)");
    println!("    check          Check database connection and schema");
    println!("    help           Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    DATABASE_URL   Database connection string (default: sqlite:./data/work_hours.db)");
    println!();
}
