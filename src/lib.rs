//! attendlog library root.
//! Exposes the session tracker, the key-value stores it persists to, and
//! the CLI front-end built on top of them.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use chrono::{Local, TimeZone, Utc};
use clap::Parser;
use cli::commands as cmd;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::fmt::Display;

/// Commands that go through the session tracker, for a given calendar timezone.
fn dispatch_tracker<Tz: TimeZone>(cli: &Cli, cfg: &Config, tz: Tz) -> AppResult<()>
where
    Tz::Offset: Display,
{
    match &cli.command {
        Commands::In { .. } => cmd::checkin::handle(&cli.command, cfg, tz),
        Commands::Out { .. } => cmd::checkout::handle(&cli.command, cfg, tz),
        Commands::Status { .. } => cmd::status::handle(&cli.command, cfg, tz),
        Commands::List { .. } => cmd::list::handle(&cli.command, cfg, tz),
        Commands::Stats { .. } => cmd::stats::handle(&cli.command, cfg, tz),
        Commands::Report { .. } => cmd::report::handle(&cli.command, cfg, tz),
        Commands::Clear { .. } => cmd::clear::handle(&cli.command, cfg, tz),
        _ => Ok(()),
    }
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cmd::init::handle(cli),
        Commands::Config { .. } => cmd::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cmd::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cmd::log::handle(&cli.command, cfg),
        Commands::Rate { .. } => cmd::rate::handle(&cli.command, cfg),
        _ if cli.utc => dispatch_tracker(cli, cfg, Utc),
        _ => dispatch_tracker(cli, cfg, Local),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
