use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One named way of presenting a project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaView {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
}

impl PersonaView {
    pub fn new(key: &str, title: &str, summary: &str) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            summary: summary.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<NaiveDate>,

    /// Link to the project page; `#` is treated as no link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default = "default_visible")]
    pub visible: bool,

    #[serde(default)]
    pub pinned: bool,

    /// Selected persona key
    #[serde(default = "default_persona")]
    pub persona: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub personas: Vec<PersonaView>,
}

fn default_visible() -> bool {
    true
}

fn default_persona() -> String {
    "default".to_string()
}

impl Project {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            tags: Vec::new(),
            updated: None,
            url: None,
            visible: true,
            pinned: false,
            persona: default_persona(),
            personas: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_updated(mut self, updated: Option<NaiveDate>) -> Self {
        self.updated = updated;
        self
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    pub fn with_persona(mut self, persona: &str) -> Self {
        self.persona = persona.to_string();
        self
    }

    pub fn with_personas(mut self, personas: Vec<PersonaView>) -> Self {
        self.personas = personas;
        self
    }

    /// The project's link, if it has a real one.
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty() && *u != "#")
    }

    pub fn persona_keys(&self) -> impl Iterator<Item = &str> {
        self.personas.iter().map(|p| p.key.as_str())
    }
}
