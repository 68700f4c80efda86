use super::snapshot_store::Snapshot;
use crate::catalog;
use crate::model::{BasketPersona, Layout, ProduceSort, Project, ProjectSort, Theme};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Per-field recovery: a field that is present but unusable takes its default
/// instead of discarding the whole snapshot.
fn recover<'de, D, T>(deserializer: D, fallback: impl FnOnce() -> T) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_else(|_| fallback()))
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    recover(deserializer, T::default)
}

fn default_market_id() -> String {
    catalog::DEFAULT_MARKET_ID.to_string()
}

fn lenient_market_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    recover(deserializer, default_market_id)
}

fn default_accent() -> u8 {
    25
}

fn lenient_accent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    recover(deserializer, default_accent).map(|a: u8| a.min(100))
}

fn lenient_projects<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Project>, D::Error> {
    recover(deserializer, catalog::default_projects)
}

/// Market basket preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketPrefs {
    #[serde(default, deserialize_with = "lenient")]
    pub theme: Theme,

    #[serde(default, deserialize_with = "lenient")]
    pub persona: BasketPersona,

    #[serde(default, deserialize_with = "lenient")]
    pub sort: ProduceSort,

    #[serde(
        default = "default_market_id",
        deserialize_with = "lenient_market_id",
        rename = "marketId"
    )]
    pub market_id: String,
}

impl Default for BasketPrefs {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            persona: BasketPersona::default(),
            sort: ProduceSort::default(),
            market_id: default_market_id(),
        }
    }
}

impl Snapshot for BasketPrefs {
    const KEY: &'static str = "market_basket_v1";
}

/// Projects hub state: display settings plus the editable project list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubState {
    #[serde(default, deserialize_with = "lenient")]
    pub layout: Layout,

    #[serde(default, deserialize_with = "lenient")]
    pub sort: ProjectSort,

    /// Highlight intensity, 0..=100
    #[serde(default = "default_accent", deserialize_with = "lenient_accent")]
    pub accent: u8,

    #[serde(default, deserialize_with = "lenient")]
    pub theme: Theme,

    #[serde(default = "catalog::default_projects", deserialize_with = "lenient_projects")]
    pub projects: Vec<Project>,
}

impl Default for HubState {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            sort: ProjectSort::default(),
            accent: default_accent(),
            theme: Theme::default(),
            projects: catalog::default_projects(),
        }
    }
}

impl Snapshot for HubState {
    const KEY: &'static str = "projects_hub_v1";
}
