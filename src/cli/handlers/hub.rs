use crate::cli::commands::{LayoutArg, ProjectSortArg, ThemeArg};
use crate::hub::{self, HubSettingsEdit, ProjectEdit};
use crate::model::{Layout, Project, Theme};
use crate::validation;
use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;
use super::utils::{format_theme, print_dashboard_row, print_project, print_project_cards};

pub fn handle_hub_list(
    ctx: &CommandContext,
    query: Option<String>,
    layout: Option<LayoutArg>,
    json: bool,
) -> Result<()> {
    let state = ctx.hub_store().load();
    let projects = hub::visible_projects(&state, query.as_deref())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
    } else {
        let layout: Layout = layout.map(Into::into).unwrap_or(state.layout);
        print_project_cards(&projects, layout);
    }
    Ok(())
}

pub fn handle_hub_show(ctx: &CommandContext, id: String, json: bool) -> Result<()> {
    validation::validate_id(&id)?;
    let state = ctx.hub_store().load();
    let project = hub::find_project(&state, &id)?;

    if json {
        let view = hub::persona_view(project);
        let value = serde_json::json!({
            "project": project,
            "persona_view": view,
            "badges": hub::badges(project),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print_project(project);
    }
    Ok(())
}

/// Absolute URLs open as-is; relative links resolve against the configured site root.
fn resolve_link(ctx: &CommandContext, link: &str) -> String {
    match url::Url::parse(link) {
        Ok(url) => url.to_string(),
        Err(_) => ctx
            .config
            .site_root(&ctx.root)
            .join(link.trim_start_matches("./"))
            .display()
            .to_string(),
    }
}

pub fn handle_hub_open(ctx: &CommandContext, id: String, print: bool) -> Result<()> {
    validation::validate_id(&id)?;
    let state = ctx.hub_store().load();
    let project = hub::find_project(&state, &id)?;

    let Some(link) = project.link() else {
        println!("{} {} is coming soon", project.name.bold(), "·".dimmed());
        return Ok(());
    };
    let target = resolve_link(ctx, link);

    if print {
        println!("{}", target);
        return Ok(());
    }

    tracing::info!(project = %project.id, %target, "Opening project");
    open::that(&target).with_context(|| format!("Failed to open {}", target))?;
    println!("{} {}", "Opened".green(), target.cyan());
    Ok(())
}

pub fn handle_hub_dashboard(ctx: &CommandContext, json: bool) -> Result<()> {
    let state = ctx.hub_store().load();
    let projects = hub::dashboard_projects(&state);

    if json {
        let value = serde_json::json!({
            "layout": state.layout,
            "sort": state.sort,
            "accent": state.accent,
            "accent_alpha": hub::accent_alpha(state.accent),
            "theme": state.theme,
            "projects": projects,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!(
        "Layout: {}   Sort: {}   Accent: {} ({:.3})   Theme: {}",
        state.layout.to_string().bold(),
        state.sort.to_string().bold(),
        state.accent,
        hub::accent_alpha(state.accent),
        format_theme(state.theme)
    );
    println!();
    for project in &projects {
        print_dashboard_row(project);
    }
    Ok(())
}

fn tri_state(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

pub fn handle_hub_set(
    ctx: &CommandContext,
    id: String,
    show: bool,
    hide: bool,
    pin: bool,
    unpin: bool,
    persona: Option<String>,
) -> Result<()> {
    validation::validate_id(&id)?;
    let edit = ProjectEdit {
        visible: tri_state(show, hide),
        pinned: tri_state(pin, unpin),
        persona,
    };
    if edit.is_empty() {
        anyhow::bail!("Nothing to change. Use --show/--hide, --pin/--unpin or --persona.");
    }

    let store = ctx.hub_store();
    let mut state = store.load();
    let project: Project = hub::apply_edit(&mut state, &id, &edit)?;
    store.save(&state)?;
    tracing::info!(project = %project.id, "Updated project settings");

    println!("{} {}", "Updated".green(), project.id.cyan());
    print_dashboard_row(&project);
    Ok(())
}

pub fn handle_hub_layout(ctx: &CommandContext, layout: LayoutArg) -> Result<()> {
    let store = ctx.hub_store();
    let mut state = store.load();
    state.layout = layout.into();
    store.save(&state)?;
    println!("{} {}", "Layout:".green(), state.layout);
    Ok(())
}

pub fn handle_hub_configure(
    ctx: &CommandContext,
    layout: Option<LayoutArg>,
    sort: Option<ProjectSortArg>,
    accent: Option<u8>,
) -> Result<()> {
    let edit = HubSettingsEdit {
        layout: layout.map(Into::into),
        sort: sort.map(Into::into),
        accent,
    };

    let store = ctx.hub_store();
    let mut state = store.load();
    hub::apply_settings(&mut state, &edit)?;
    store.save(&state)?;

    println!(
        "{} layout={} sort={} accent={}",
        "Saved".green(),
        state.layout,
        state.sort,
        state.accent
    );
    Ok(())
}

pub fn handle_hub_theme(ctx: &CommandContext, theme: Option<ThemeArg>) -> Result<()> {
    let store = ctx.hub_store();
    let mut state = store.load();
    state.theme = match theme {
        Some(t) => Theme::from(t),
        None => state.theme.toggled(),
    };
    store.save(&state)?;
    println!("{} {}", "Theme:".green(), format_theme(state.theme));
    Ok(())
}

pub fn handle_hub_reset(ctx: &CommandContext) -> Result<()> {
    let state = ctx.hub_store().reset()?;
    println!(
        "{} hub settings ({} projects)",
        "Reset".yellow(),
        state.projects.len()
    );
    Ok(())
}
