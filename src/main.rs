use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::Parser;

use basket::cli::handlers::{self, CommandContext, ProduceParams, Today};
use basket::cli::{Cli, Commands, HubCommands};
use basket::config::BasketConfig;
use basket::model::Month;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            state_dir,
            default_market,
        } => {
            basket::logging::init(cli.verbose, None);
            handlers::handle_init(state_dir, default_market)
        }
        command => {
            let ctx = build_context(cli.config.as_deref(), cli.month, cli.verbose)?;
            dispatch(&ctx, command)
        }
    }
}

fn build_context(
    config_path: Option<&str>,
    month: Option<Month>,
    verbose: bool,
) -> Result<CommandContext> {
    let (config, root) = load_config(config_path)?;
    basket::logging::init(verbose, config.log_path(&root));

    // The clock is read once; every listing in this run shares it
    let now = Local::now();
    let today = Today {
        month: month.unwrap_or_else(|| Month::wrapping(now.month0() as i32)),
        year: now.year(),
    };
    Ok(CommandContext::new(config, root, today))
}

fn dispatch(ctx: &CommandContext, command: Commands) -> Result<()> {
    match command {
        Commands::Init { .. } => anyhow::bail!("init does not run inside a project"),
        Commands::Produce {
            query,
            sort,
            persona,
            expand,
            json,
        } => handlers::handle_produce(
            ctx,
            ProduceParams {
                query,
                sort,
                persona,
                expand,
                json,
            },
        ),
        Commands::Show { id, json } => handlers::handle_show(ctx, id, json),
        Commands::Markets { query, json } => handlers::handle_markets(ctx, query, json),
        Commands::Market { id } => handlers::handle_market(ctx, id),
        Commands::Sort { mode } => handlers::handle_sort(ctx, mode),
        Commands::Persona { persona } => handlers::handle_persona(ctx, persona),
        Commands::Theme { theme } => handlers::handle_theme(ctx, theme),
        Commands::Prefs { json } => handlers::handle_prefs(ctx, json),
        Commands::Hub { command } => match command {
            HubCommands::List {
                query,
                layout,
                json,
            } => handlers::handle_hub_list(ctx, query, layout, json),
            HubCommands::Show { id, json } => handlers::handle_hub_show(ctx, id, json),
            HubCommands::Open { id, print } => handlers::handle_hub_open(ctx, id, print),
            HubCommands::Dashboard { json } => handlers::handle_hub_dashboard(ctx, json),
            HubCommands::Set {
                id,
                show,
                hide,
                pin,
                unpin,
                persona,
            } => handlers::handle_hub_set(ctx, id, show, hide, pin, unpin, persona),
            HubCommands::Layout { layout } => handlers::handle_hub_layout(ctx, layout),
            HubCommands::Configure {
                layout,
                sort,
                accent,
            } => handlers::handle_hub_configure(ctx, layout, sort, accent),
            HubCommands::Theme { theme } => handlers::handle_hub_theme(ctx, theme),
            HubCommands::Reset => handlers::handle_hub_reset(ctx),
        },
    }
}

fn load_config(explicit: Option<&str>) -> Result<(BasketConfig, PathBuf)> {
    let loaded = match explicit {
        Some(path) => BasketConfig::load_from(&PathBuf::from(path)),
        None => {
            let cwd = std::env::current_dir()?;
            BasketConfig::load(&cwd)
        }
    };
    loaded.context("Failed to load basket configuration")
}
