use crate::catalog;
use crate::config::{BasketConfig, BasketSettings, CONFIG_FILE_NAME};
use crate::error::BasketError;
use crate::validation;
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(state_dir: Option<String>, default_market: Option<String>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(BasketError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let defaults = BasketSettings::default();
    let state_dir = state_dir.unwrap_or(defaults.state_dir);
    validation::validate_state_dir(&state_dir)?;

    let default_market = default_market.unwrap_or(defaults.default_market);
    if catalog::find_market(&catalog::markets(), &default_market).is_none() {
        anyhow::bail!("Unknown market: {}", default_market);
    }

    let config = BasketConfig {
        basket: BasketSettings {
            state_dir: state_dir.clone(),
            default_market,
        },
        ..Default::default()
    };

    let state_path = cwd.join(&state_dir);
    std::fs::create_dir_all(&state_path)?;

    config.save(&config_path)?;

    println!(
        "{} basket project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    println!("  State:  {}", state_path.display());

    Ok(())
}
