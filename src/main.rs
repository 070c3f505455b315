mod city;
mod cli;
mod config;
mod db;
mod error;
mod lookups;
mod models;
mod prayer_times;
mod schedule;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use rusqlite::Connection;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use db::migrations::run_migrations;
use lookups::Lookups;
use tui::notify::TerminalNotifier;
use tui::worker::Remote;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    // Ensure data directory exists and open DB
    AppConfig::ensure_data_dir()?;
    let db_path = AppConfig::db_path()?;
    let conn = Connection::open(&db_path)
        .with_context(|| format!("Opening database at {:?}", db_path))?;

    // Enable WAL mode for better concurrent access
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    // Run migrations on every startup
    run_migrations(&conn)?;

    let lookups = Lookups::from_config(&config)?;

    match cli.command {
        Some(Commands::Times) => handlers::handle_times(&conn, &config, &lookups)?,
        Some(Commands::Search { query }) => handlers::handle_search(&config, &lookups, &query)?,
        Some(Commands::Select { city }) => handlers::handle_select(&conn, &config, &lookups, &city)?,
        Some(Commands::Locate {
            latitude,
            longitude,
        }) => handlers::handle_locate(&conn, &config, &lookups, latitude, longitude)?,
        Some(Commands::Mark { prayer, undo }) => handlers::handle_mark(&conn, &prayer, undo)?,
        Some(Commands::Status) => handlers::handle_status(&conn)?,
        Some(Commands::Config { init }) => handlers::handle_config(&config, init)?,

        // No subcommand → launch TUI
        None => {
            let notifier = Box::new(TerminalNotifier {
                sound: config.notifications.sound,
            });
            let search_limit = config.api.search_limit;
            tui::app::run(
                conn,
                config,
                move |tx| {
                    Remote::new(
                        lookups.cities,
                        lookups.geocoder,
                        lookups.locator,
                        lookups.provider,
                        search_limit,
                        tx,
                    )
                },
                notifier,
            )?;
        }
    }

    Ok(())
}
