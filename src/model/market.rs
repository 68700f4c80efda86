use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    pub id: String,
    pub name: String,
    pub city: String,

    /// Key into the region offset table
    pub region: String,
}

impl Market {
    pub fn new(id: &str, name: &str, city: &str, region: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            city: city.to_string(),
            region: region.to_string(),
        }
    }
}
