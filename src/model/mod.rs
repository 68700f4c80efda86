//! Data models for basket.
//!
//! - [`Month`]: calendar month index, always in `0..=11`
//! - [`PeakWindow`]: inclusive, possibly wrapping, range of peak months
//! - [`ProduceItem`] and [`Market`]: read-only catalog records
//! - [`Project`] and [`PersonaView`]: projects hub cards
//! - Preference enums: [`Theme`], [`BasketPersona`], [`ProduceSort`], [`Layout`], [`ProjectSort`]

mod market;
mod month;
mod produce;
mod project;
mod types;

pub use market::Market;
pub use month::Month;
pub use produce::{PeakWindow, ProduceItem};
pub use project::{PersonaView, Project};
pub use types::{BasketPersona, Layout, ProduceSort, ProjectSort, Theme};
