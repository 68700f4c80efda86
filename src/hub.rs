//! Projects hub: card filtering, ordering, persona views and dashboard edits.

use crate::error::{BasketError, Result};
use crate::model::{Layout, PersonaView, Project, ProjectSort};
use crate::season::compare_names;
use crate::search;
use crate::storage::HubState;
use std::cmp::Ordering;

/// Most badges shown on a card.
pub const MAX_BADGES: usize = 5;

const ACCENT_MIN_ALPHA: f64 = 0.08;
const ACCENT_ALPHA_RANGE: f64 = 0.32;

fn compare_recent(a: &Project, b: &Project) -> Ordering {
    // Newest first; undated projects sink to the bottom
    b.updated.cmp(&a.updated)
}

/// Stable ordering by the hub's sort mode.
pub fn sort_projects(projects: &mut [Project], mode: ProjectSort) {
    match mode {
        ProjectSort::Name => projects.sort_by(|a, b| compare_names(&a.name, &b.name)),
        ProjectSort::Recent => projects.sort_by(compare_recent),
        ProjectSort::Pinned => projects.sort_by(|a, b| {
            b.pinned
                .cmp(&a.pinned)
                .then_with(|| compare_recent(a, b))
        }),
    }
}

/// Visible projects matching `query`, in the state's sort order.
pub fn visible_projects(state: &HubState, query: Option<&str>) -> Result<Vec<Project>> {
    let visible: Vec<Project> = state
        .projects
        .iter()
        .filter(|p| p.visible)
        .cloned()
        .collect();
    let mut found = search::filter(&visible, query).map_err(BasketError::Parse)?;
    sort_projects(&mut found, state.sort);
    Ok(found)
}

/// Every project, hidden ones included, for the dashboard.
pub fn dashboard_projects(state: &HubState) -> Vec<Project> {
    let mut all = state.projects.clone();
    sort_projects(&mut all, state.sort);
    all
}

/// The selected persona view, then the `default` view, then a blank default.
pub fn persona_view(project: &Project) -> PersonaView {
    let find = |key: &str| project.personas.iter().find(|p| p.key == key);
    find(&project.persona)
        .or_else(|| find("default"))
        .cloned()
        .unwrap_or_else(|| PersonaView::new("default", "Default", ""))
}

/// `Pinned` (when pinned) followed by the tags, capped at [`MAX_BADGES`].
pub fn badges(project: &Project) -> Vec<String> {
    project
        .pinned
        .then(|| "Pinned".to_string())
        .into_iter()
        .chain(project.tags.iter().cloned())
        .take(MAX_BADGES)
        .collect()
}

/// Maps accent intensity 0..=100 onto a subtle highlight alpha.
pub fn accent_alpha(accent: u8) -> f64 {
    let a = accent.min(100) as f64 / 100.0;
    ACCENT_MIN_ALPHA + a * ACCENT_ALPHA_RANGE
}

pub fn find_project<'a>(state: &'a HubState, id: &str) -> Result<&'a Project> {
    state
        .projects
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| BasketError::NotFound(format!("Project: {}", id)))
}

fn find_project_mut<'a>(state: &'a mut HubState, id: &str) -> Result<&'a mut Project> {
    state
        .projects
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| BasketError::NotFound(format!("Project: {}", id)))
}

/// One dashboard row's worth of edits. `None` leaves a field alone.
#[derive(Debug, Clone, Default)]
pub struct ProjectEdit {
    pub visible: Option<bool>,
    pub pinned: Option<bool>,
    pub persona: Option<String>,
}

impl ProjectEdit {
    pub fn is_empty(&self) -> bool {
        self.visible.is_none() && self.pinned.is_none() && self.persona.is_none()
    }
}

/// Applies an edit; the persona must be one the project offers.
pub fn apply_edit(state: &mut HubState, id: &str, edit: &ProjectEdit) -> Result<Project> {
    let project = find_project_mut(state, id)?;

    if let Some(ref persona) = edit.persona {
        if !project.persona_keys().any(|k| k == persona) {
            let keys: Vec<_> = project.persona_keys().collect();
            return Err(BasketError::Validation(format!(
                "Project {} has no persona '{}' (available: {})",
                id,
                persona,
                keys.join(", ")
            )));
        }
        project.persona = persona.clone();
    }
    if let Some(visible) = edit.visible {
        project.visible = visible;
    }
    if let Some(pinned) = edit.pinned {
        project.pinned = pinned;
    }

    Ok(project.clone())
}

/// Hub-wide settings from the dashboard form.
#[derive(Debug, Clone, Default)]
pub struct HubSettingsEdit {
    pub layout: Option<Layout>,
    pub sort: Option<ProjectSort>,
    pub accent: Option<u8>,
}

pub fn apply_settings(state: &mut HubState, edit: &HubSettingsEdit) -> Result<()> {
    if let Some(accent) = edit.accent {
        crate::validation::validate_accent(accent)?;
        state.accent = accent;
    }
    if let Some(layout) = edit.layout {
        state.layout = layout;
    }
    if let Some(sort) = edit.sort {
        state.sort = sort;
    }
    Ok(())
}
