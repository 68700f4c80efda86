use crate::catalog;
use crate::cli::commands::{PersonaArg, ProduceSortArg, ThemeArg};
use crate::model::{BasketPersona, Theme};
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{current_market, format_persona, format_sort, format_theme};

pub fn handle_sort(ctx: &CommandContext, mode: ProduceSortArg) -> Result<()> {
    let mut prefs = ctx.load_basket_prefs();
    prefs.sort = mode.into();
    ctx.basket_store().save(&prefs)?;
    println!("{} {}", "Sort:".green(), format_sort(prefs.sort));
    Ok(())
}

pub fn handle_persona(ctx: &CommandContext, persona: Option<PersonaArg>) -> Result<()> {
    let mut prefs = ctx.load_basket_prefs();
    prefs.persona = match persona {
        Some(p) => BasketPersona::from(p),
        None => prefs.persona.next(),
    };
    ctx.basket_store().save(&prefs)?;
    println!("{} {}", "Persona:".green(), format_persona(prefs.persona));
    Ok(())
}

pub fn handle_theme(ctx: &CommandContext, theme: Option<ThemeArg>) -> Result<()> {
    let mut prefs = ctx.load_basket_prefs();
    prefs.theme = match theme {
        Some(t) => Theme::from(t),
        None => prefs.theme.toggled(),
    };
    ctx.basket_store().save(&prefs)?;
    println!("{} {}", "Theme:".green(), format_theme(prefs.theme));
    Ok(())
}

pub fn handle_prefs(ctx: &CommandContext, json: bool) -> Result<()> {
    let prefs = ctx.load_basket_prefs();

    if json {
        println!("{}", serde_json::to_string_pretty(&prefs)?);
        return Ok(());
    }

    let markets = catalog::markets();
    let market = current_market(&markets, &prefs.market_id)?;
    println!("Market:   {} {}", market.id.cyan(), market.name.bold());
    println!("Persona:  {}", format_persona(prefs.persona));
    println!("Sort:     {}", format_sort(prefs.sort));
    println!("Theme:    {}", format_theme(prefs.theme));
    println!("Today:    {}", ctx.today.label());
    println!(
        "Stored:   {}",
        ctx.basket_store().path().display().to_string().dimmed()
    );
    Ok(())
}
