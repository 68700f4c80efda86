use crate::model::{BasketPersona, Layout, Market, Month, ProduceItem, ProduceSort, Project, Theme};
use crate::season::{BandChart, SeasonalView};
use crate::{catalog, hub};
use anyhow::{Result, anyhow};
use colored::Colorize;
use serde::Serialize;

/// Produce item plus its seasonal view, as emitted by `--json`.
#[derive(Serialize)]
pub struct ProduceCard<'a> {
    #[serde(flatten)]
    pub item: &'a ProduceItem,
    #[serde(flatten)]
    pub season: SeasonalView,
}

/// The selected market, falling back to the first catalog entry.
pub fn current_market(markets: &[Market], market_id: &str) -> Result<Market> {
    catalog::market_or_default(markets, market_id)
        .cloned()
        .ok_or_else(|| anyhow!("Market catalog is empty"))
}

pub fn format_sort(sort: ProduceSort) -> &'static str {
    match sort {
        ProduceSort::Fresh => "Fresh First",
        ProduceSort::Az => "A–Z",
    }
}

pub fn format_theme(theme: Theme) -> colored::ColoredString {
    match theme {
        Theme::Dark => "dark".bright_black().bold(),
        Theme::Light => "light".bright_white().bold(),
    }
}

pub fn format_persona(persona: BasketPersona) -> colored::ColoredString {
    match persona {
        BasketPersona::Default => persona.label().white(),
        BasketPersona::Focus => persona.label().green(),
        BasketPersona::Demo => persona.label().magenta(),
    }
}

fn format_score(score: u32) -> colored::ColoredString {
    let text = format!("{:>3}", score);
    match score {
        s if s >= 100 => text.green().bold(),
        s if s >= 30 => text.yellow(),
        _ => text.dimmed(),
    }
}

/// One character per month: filled inside the peak window.
pub fn format_band(band: &BandChart) -> String {
    let cells: String = Month::all()
        .map(|m| {
            if band.covers(m) {
                "█".green().to_string()
            } else {
                "░".dimmed().to_string()
            }
        })
        .collect();
    format!("Jan ▕{}▏ Dec", cells)
}

/// Caret under the today column of [`format_band`].
pub fn format_today_marker(band: &BandChart) -> String {
    let column = (band.today / 100.0 * Month::COUNT as f64).round() as usize;
    format!("{}{} today", " ".repeat(5 + column), "▲".yellow().bold())
}

pub fn print_produce_card(item: &ProduceItem, view: &SeasonalView, expanded: bool) {
    let status = if view.in_season {
        "In Season Now!".black().on_green().to_string()
    } else {
        "Out of Season".dimmed().to_string()
    };
    let tags: Vec<String> = item
        .tags
        .iter()
        .take(2)
        .map(|t| format!("[{}]", t).blue().to_string())
        .collect();

    println!("{} {}", status, tags.join(" "));
    println!(
        "{} {}  {}",
        format_score(view.score),
        item.name.bold(),
        item.id.cyan()
    );
    println!("    {}", item.about);
    println!("    Peak Season: {}", view.label.bold());
    println!("    {}", format_band(&view.band));
    println!("    {}", format_today_marker(&view.band));
    let action = if view.in_season {
        "Add to basket".green()
    } else {
        "Save for later".yellow()
    };
    println!("    {}", action);

    if expanded {
        println!("    {}", "Selection & Storage Tips".underline());
        println!("      {}", item.tips);
        println!("    {}", "Nutrition Highlights".underline());
        println!("      {}", item.nutrition);
    }
}

pub fn print_market_list(markets: &[Market], selected: &str) {
    if markets.is_empty() {
        println!("No markets found.");
        return;
    }

    for market in markets {
        let marker = if market.id == selected {
            "*".green().bold()
        } else {
            " ".normal()
        };
        println!(
            "{} {} {} {}",
            marker,
            market.id.cyan(),
            market.name.bold(),
            format!("({})", market.city).dimmed()
        );
    }
}

fn format_badges(project: &Project) -> String {
    hub::badges(project)
        .iter()
        .map(|b| {
            if b == "Pinned" {
                format!("[{}]", b).yellow().bold().to_string()
            } else {
                format!("[{}]", b).blue().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_updated(project: &Project) -> String {
    project
        .updated
        .map(|d| format!("Updated {}", d.format("%Y-%m-%d")))
        .unwrap_or_default()
}

pub fn print_project_cards(projects: &[Project], layout: Layout) {
    if projects.is_empty() {
        println!("No projects found.");
        return;
    }

    for project in projects {
        let persona = hub::persona_view(project);
        match layout {
            Layout::Compact => {
                println!("{} {}", project.id.cyan(), project.name.bold());
            }
            Layout::List => {
                println!(
                    "{} {} {} {}",
                    project.id.cyan(),
                    project.name.bold(),
                    format!("({})", persona.title).magenta(),
                    format_updated(project).dimmed()
                );
            }
            Layout::Grid => {
                println!("{}", format_badges(project));
                println!(
                    "{} {}  {} {}",
                    project.id.cyan(),
                    project.name.bold(),
                    "●".magenta(),
                    persona.title.magenta()
                );
                println!("    {}", project.description);
                println!("    {} {}", "Widget view:".underline(), persona.summary);
                let action = if project.link().is_some() {
                    "Open".green()
                } else {
                    "Coming soon".yellow()
                };
                println!("    {}  {}", format_updated(project).dimmed(), action);
                println!();
            }
        }
    }
}

pub fn print_project(project: &Project) {
    let persona = hub::persona_view(project);
    println!("{} {}", project.id.cyan().bold(), project.name.bold());

    let mut meta: Vec<String> = project.tags.clone();
    if let Some(updated) = project.updated {
        meta.push(format!("Updated {}", updated.format("%Y-%m-%d")));
    }
    if !meta.is_empty() {
        println!("{}", meta.join(" • ").dimmed());
    }

    println!();
    println!("{}", project.description);
    println!();
    println!("Persona view: {}", persona.title.magenta().bold());
    if !persona.summary.is_empty() {
        println!("  {}", persona.summary);
    }
    match project.link() {
        Some(url) => println!("Link:     {}", url.cyan()),
        None => println!("Link:     {}", "coming soon".dimmed()),
    }
}

pub fn print_dashboard_row(project: &Project) {
    let check = |on: bool| if on { "[x]".green() } else { "[ ]".dimmed() };
    let personas: Vec<String> = project
        .personas
        .iter()
        .map(|p| {
            if p.key == project.persona {
                format!("*{}", p.key).magenta().bold().to_string()
            } else {
                p.key.clone()
            }
        })
        .collect();

    println!("{} {}", project.id.cyan(), project.name.bold());
    println!("    {}", project.description.dimmed());
    println!(
        "    {} Show  {} Pin  Persona: {}",
        check(project.visible),
        check(project.pinned),
        personas.join(" | ")
    );
}
