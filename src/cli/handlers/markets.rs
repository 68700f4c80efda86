use crate::catalog;
use crate::error::BasketError;
use crate::search;
use crate::validation;
use anyhow::{Result, anyhow};
use colored::Colorize;

use super::CommandContext;
use super::utils::print_market_list;

pub fn handle_markets(ctx: &CommandContext, query: Option<String>, json: bool) -> Result<()> {
    let prefs = ctx.load_basket_prefs();
    let markets = search::filter(&catalog::markets(), query.as_deref()).map_err(|e| anyhow!(e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&markets)?);
    } else {
        print_market_list(&markets, &prefs.market_id);
    }
    Ok(())
}

pub fn handle_market(ctx: &CommandContext, id: String) -> Result<()> {
    validation::validate_id(&id)?;
    let markets = catalog::markets();
    let market = catalog::find_market(&markets, &id)
        .ok_or_else(|| BasketError::NotFound(format!("Market: {}", id)))?;

    let mut prefs = ctx.load_basket_prefs();
    prefs.market_id = market.id.clone();
    ctx.basket_store().save(&prefs)?;
    tracing::info!(market = %market.id, "Selected market");

    println!(
        "{} {} {}",
        "Selected".green(),
        market.name.bold(),
        format!("({})", market.city).dimmed()
    );
    Ok(())
}
