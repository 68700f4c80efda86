use super::month::Month;
use serde::{Deserialize, Serialize};

/// Inclusive range of months during which an item is at its best.
///
/// `start > end` means the window wraps across the year boundary,
/// e.g. Nov (10) to Mar (2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakWindow {
    pub start: Month,
    pub end: Month,
}

impl PeakWindow {
    pub fn new(start: i32, end: i32) -> Self {
        Self {
            start: Month::wrapping(start),
            end: Month::wrapping(end),
        }
    }

    pub fn wraps(&self) -> bool {
        self.start > self.end
    }

    /// Number of calendar months covered, between 1 and 12.
    pub fn span_months(&self) -> u8 {
        self.start.distance_to(self.end) + 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProduceItem {
    pub id: String,
    pub name: String,
    pub about: String,
    pub tips: String,
    pub nutrition: String,
    pub peak: PeakWindow,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl ProduceItem {
    pub fn new(id: &str, name: &str, peak: PeakWindow) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            about: String::new(),
            tips: String::new(),
            nutrition: String::new(),
            peak,
            tags: Vec::new(),
        }
    }

    pub fn with_about(mut self, about: &str) -> Self {
        self.about = about.to_string();
        self
    }

    pub fn with_tips(mut self, tips: &str) -> Self {
        self.tips = tips.to_string();
        self
    }

    pub fn with_nutrition(mut self, nutrition: &str) -> Self {
        self.nutrition = nutrition.to_string();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }
}
