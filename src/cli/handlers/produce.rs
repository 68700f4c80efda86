use crate::catalog;
use crate::cli::commands::{PersonaArg, ProduceSortArg};
use crate::model::BasketPersona;
use crate::search;
use crate::validation;
use anyhow::{Result, anyhow};
use colored::Colorize;

use super::CommandContext;
use super::utils::{
    ProduceCard, current_market, format_persona, format_sort, print_produce_card,
};

/// Parameters for produce listing
pub struct ProduceParams {
    pub query: Option<String>,
    pub sort: Option<ProduceSortArg>,
    pub persona: Option<PersonaArg>,
    pub expand: bool,
    pub json: bool,
}

pub fn handle_produce(ctx: &CommandContext, params: ProduceParams) -> Result<()> {
    let prefs = ctx.load_basket_prefs();
    let sort = params.sort.map(Into::into).unwrap_or(prefs.sort);
    let persona: BasketPersona = params.persona.map(Into::into).unwrap_or(prefs.persona);

    let markets = catalog::markets();
    let market = current_market(&markets, &prefs.market_id)?;
    let region = market.region.as_str();
    let today = ctx.today.month;

    let mut items = search::filter(&catalog::produce(), params.query.as_deref())
        .map_err(|e| anyhow!(e))?;
    ctx.engine.apply_persona(&mut items, persona, today, region);
    ctx.engine.sort(&mut items, sort, today, region);

    tracing::debug!(
        market = %market.id,
        region,
        %sort,
        %persona,
        count = items.len(),
        "Listing produce"
    );

    if params.json {
        let cards: Vec<_> = items
            .iter()
            .map(|item| ProduceCard {
                item,
                season: ctx.engine.evaluate(item, today, region),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    println!(
        "{} {}",
        market.name.bold(),
        format!("({})", market.city).dimmed()
    );
    println!(
        "Today: {}   Persona: {}   Sort: {}",
        ctx.today.label().yellow(),
        format_persona(persona),
        format_sort(sort)
    );
    println!();

    if items.is_empty() {
        println!("No produce found.");
        return Ok(());
    }

    for (idx, item) in items.iter().enumerate() {
        let view = ctx.engine.evaluate(item, today, region);
        let expanded = params.expand || (persona == BasketPersona::Demo && idx == 0);
        print_produce_card(item, &view, expanded);
        println!();
    }
    Ok(())
}

pub fn handle_show(ctx: &CommandContext, id: String, json: bool) -> Result<()> {
    validation::validate_id(&id)?;
    let prefs = ctx.load_basket_prefs();
    let markets = catalog::markets();
    let market = current_market(&markets, &prefs.market_id)?;

    let produce = catalog::produce();
    let item = catalog::find_produce(&produce, &id)
        .ok_or_else(|| crate::error::BasketError::NotFound(format!("Produce: {}", id)))?;
    let view = ctx.engine.evaluate(item, ctx.today.month, &market.region);

    if json {
        let card = ProduceCard { item, season: view };
        println!("{}", serde_json::to_string_pretty(&card)?);
    } else {
        println!(
            "{} {}",
            market.name.dimmed(),
            format!("· {}", ctx.today.label()).dimmed()
        );
        print_produce_card(item, &view, true);
    }
    Ok(())
}
