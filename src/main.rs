//! # Work Hours Bot Main Entry Point
//!
//! Initializes logging, loads configuration, sets up the chosen store
//! backend, and runs the Telegram bot alongside the health check server.

use anyhow::Result;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod bot;
mod config;
mod database;
mod services;
mod store;
mod utils;

use crate::bot::handlers::BotHandler;
use crate::bot::state::ConversationState;
use crate::config::{Config, StoreBackend};
use crate::database::connection::DatabaseManager;
use crate::services::health::HealthService;
use crate::store::{MemoryStore, SqliteStore, WorkHoursStore};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "work_hours_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Work Hours Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Backend: {:?}, HTTP Port: {}",
        config.store_backend, config.http_port
    );

    // Initialize the store backend
    let store: Arc<dyn WorkHoursStore> = match config.store_backend {
        StoreBackend::Sqlite => {
            info!("Initializing database connection...");
            let db_manager = DatabaseManager::new(&config.database_url).await?;
            db_manager.init_schema().await?;
            info!("Database initialized successfully");
            Arc::new(SqliteStore::new(db_manager))
        }
        StoreBackend::Memory => {
            info!("Using in-memory store; entries will not survive a restart");
            Arc::new(MemoryStore::new())
        }
    };

    // Initialize bot
    info!("Initializing Telegram bot...");
    let tg_bot = Bot::new(&config.telegram_bot_token);
    let handler = BotHandler::new(Arc::clone(&store));
    info!("Telegram bot initialized successfully");

    // Initialize health service
    let health_service = HealthService::new(Arc::clone(&store));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    // Run both the bot and health server concurrently
    let bot_task = tokio::spawn(async move {
        let storage: Arc<InMemStorage<ConversationState>> = InMemStorage::new();
        Dispatcher::builder(tg_bot, handler.schema())
            .dependencies(dptree::deps![storage])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    info!("Application stopped");
    Ok(())
}
