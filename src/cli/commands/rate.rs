use super::audit;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::{Settings, parse_amount};
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::ui::messages::{info, success};
use crate::utils::formatting::format_money;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rate { set, clear } = cmd {
        let mut store = SqliteStore::open(&cfg.database)?;

        if let Some(raw) = set {
            let rate = parse_amount(raw)?;
            Settings::set_hourly_rate(&mut store, rate)?;
            success(format!(
                "Hourly rate set to {}",
                format_money(rate, &cfg.currency_symbol)
            ));
            audit(&store, "rate", "set", &format!("Hourly rate set to {:.2}", rate));
            return Ok(());
        }

        if *clear {
            Settings::clear_hourly_rate(&mut store)?;
            success("Hourly rate removed");
            audit(&store, "rate", "clear", "Hourly rate removed");
            return Ok(());
        }

        match Settings::hourly_rate(&store)? {
            Some(rate) => info(format!(
                "Hourly rate: {}",
                format_money(rate, &cfg.currency_symbol)
            )),
            None => info("No hourly rate set"),
        }
    }

    Ok(())
}
