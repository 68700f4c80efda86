use crate::model::{Market, ProduceItem, Project};
use regex::Regex;

/// Search query with optional field-specific and regex support
#[derive(Debug, Clone)]
pub enum SearchQuery {
    /// Simple substring search (case-insensitive)
    Simple(String),
    /// Regex search
    Regex(Regex),
    /// Field-specific search
    Field {
        field: SearchField,
        pattern: Box<SearchQuery>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Id,
    Name,
    /// Descriptive text: produce `about`, project `description`
    About,
    Tag,
    City,
}

impl std::str::FromStr for SearchField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(SearchField::Id),
            "name" | "title" => Ok(SearchField::Name),
            "about" | "description" | "desc" => Ok(SearchField::About),
            "tag" | "tags" => Ok(SearchField::Tag),
            "city" | "location" => Ok(SearchField::City),
            _ => Err(()),
        }
    }
}

/// Anything the search box can filter.
pub trait Searchable {
    /// Values of one field; empty when the record has no such field.
    fn field_values(&self, field: SearchField) -> Vec<&str>;

    /// Fields joined the way the unqualified search box sees them.
    fn haystack(&self) -> String;
}

impl Searchable for ProduceItem {
    fn field_values(&self, field: SearchField) -> Vec<&str> {
        match field {
            SearchField::Id => vec![self.id.as_str()],
            SearchField::Name => vec![self.name.as_str()],
            SearchField::About => vec![self.about.as_str()],
            SearchField::Tag => self.tags.iter().map(String::as_str).collect(),
            SearchField::City => Vec::new(),
        }
    }

    fn haystack(&self) -> String {
        format!("{} {} {}", self.name, self.about, self.tags.join(" "))
    }
}

impl Searchable for Market {
    fn field_values(&self, field: SearchField) -> Vec<&str> {
        match field {
            SearchField::Id => vec![self.id.as_str()],
            SearchField::Name => vec![self.name.as_str()],
            SearchField::City => vec![self.city.as_str()],
            SearchField::About | SearchField::Tag => Vec::new(),
        }
    }

    fn haystack(&self) -> String {
        format!("{} {}", self.name, self.city)
    }
}

impl Searchable for Project {
    fn field_values(&self, field: SearchField) -> Vec<&str> {
        match field {
            SearchField::Id => vec![self.id.as_str()],
            SearchField::Name => vec![self.name.as_str()],
            SearchField::About => vec![self.description.as_str()],
            SearchField::Tag => self.tags.iter().map(String::as_str).collect(),
            SearchField::City => Vec::new(),
        }
    }

    fn haystack(&self) -> String {
        format!("{} {} {}", self.name, self.description, self.tags.join(" "))
    }
}

impl SearchQuery {
    /// Parse a search query string
    /// Supports:
    /// - Simple: "berry" -> searches the combined text
    /// - Field-specific: "tag:citrus" -> searches tags only
    /// - Regex: "regex:^(apple|peach)" -> regex search
    /// - Combined: "name:regex:^S" -> regex in name field
    pub fn parse(query: &str) -> Result<Self, String> {
        let query = query.trim();
        if query.is_empty() {
            return Err("Empty query".to_string());
        }

        if let Some((field_str, pattern)) = query.split_once(':') {
            if let Ok(field) = field_str.parse::<SearchField>() {
                let sub_query = Self::parse(pattern)?;
                return Ok(SearchQuery::Field {
                    field,
                    pattern: Box::new(sub_query),
                });
            }

            if field_str == "regex" {
                let regex = Regex::new(pattern).map_err(|e| format!("Invalid regex: {}", e))?;
                return Ok(SearchQuery::Regex(regex));
            }
        }

        Ok(SearchQuery::Simple(query.to_string()))
    }

    pub fn matches<T: Searchable>(&self, record: &T) -> bool {
        match self {
            SearchQuery::Simple(pattern) => record
                .haystack()
                .to_lowercase()
                .contains(&pattern.to_lowercase()),
            SearchQuery::Regex(regex) => regex.is_match(&record.haystack()),
            SearchQuery::Field { field, pattern } => {
                let values = record.field_values(*field);
                match pattern.as_ref() {
                    SearchQuery::Simple(p) => {
                        let p = p.to_lowercase();
                        values.iter().any(|v| v.to_lowercase().contains(&p))
                    }
                    SearchQuery::Regex(r) => values.iter().any(|v| r.is_match(v)),
                    _ => false,
                }
            }
        }
    }
}

/// Keeps records matching `query`; a missing or blank query keeps everything.
pub fn filter<T: Searchable + Clone>(records: &[T], query: Option<&str>) -> Result<Vec<T>, String> {
    match query.map(str::trim).filter(|q| !q.is_empty()) {
        None => Ok(records.to_vec()),
        Some(q) => {
            let parsed = SearchQuery::parse(q)?;
            Ok(records
                .iter()
                .filter(|r| parsed.matches(*r))
                .cloned()
                .collect())
        }
    }
}
