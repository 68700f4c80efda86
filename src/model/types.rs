use crate::error::{BasketError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

impl FromStr for Theme {
    type Err = BasketError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(BasketError::Parse(format!("Invalid theme: {}", s))),
        }
    }
}

/// Display mode of the produce browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BasketPersona {
    #[default]
    Default,
    /// Only items in season right now
    Focus,
    /// Expands the top item
    Demo,
}

impl BasketPersona {
    pub const ALL: [BasketPersona; 3] = [
        BasketPersona::Default,
        BasketPersona::Focus,
        BasketPersona::Demo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BasketPersona::Default => "Default",
            BasketPersona::Focus => "Focus",
            BasketPersona::Demo => "Demo",
        }
    }

    /// Next persona in display order, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for BasketPersona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BasketPersona::Default => write!(f, "default"),
            BasketPersona::Focus => write!(f, "focus"),
            BasketPersona::Demo => write!(f, "demo"),
        }
    }
}

impl FromStr for BasketPersona {
    type Err = BasketError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "default" => Ok(BasketPersona::Default),
            "focus" => Ok(BasketPersona::Focus),
            "demo" => Ok(BasketPersona::Demo),
            _ => Err(BasketError::Parse(format!("Invalid persona: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProduceSort {
    /// In-season first, then soonest to come into season
    #[default]
    Fresh,
    Az,
}

impl fmt::Display for ProduceSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProduceSort::Fresh => write!(f, "fresh"),
            ProduceSort::Az => write!(f, "az"),
        }
    }
}

impl FromStr for ProduceSort {
    type Err = BasketError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "fresh" => Ok(ProduceSort::Fresh),
            "az" | "a-z" | "name" => Ok(ProduceSort::Az),
            _ => Err(BasketError::Parse(format!("Invalid sort mode: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Grid,
    List,
    Compact,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Grid => write!(f, "grid"),
            Layout::List => write!(f, "list"),
            Layout::Compact => write!(f, "compact"),
        }
    }
}

impl FromStr for Layout {
    type Err = BasketError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "grid" => Ok(Layout::Grid),
            "list" => Ok(Layout::List),
            "compact" => Ok(Layout::Compact),
            _ => Err(BasketError::Parse(format!("Invalid layout: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectSort {
    /// Pinned first, then most recently updated
    #[default]
    Pinned,
    Recent,
    Name,
}

impl fmt::Display for ProjectSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectSort::Pinned => write!(f, "pinned"),
            ProjectSort::Recent => write!(f, "recent"),
            ProjectSort::Name => write!(f, "name"),
        }
    }
}

impl FromStr for ProjectSort {
    type Err = BasketError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pinned" => Ok(ProjectSort::Pinned),
            "recent" => Ok(ProjectSort::Recent),
            "name" => Ok(ProjectSort::Name),
            _ => Err(BasketError::Parse(format!("Invalid project sort: {}", s))),
        }
    }
}
