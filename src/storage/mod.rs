//! Preference persistence.
//!
//! Each widget keeps one JSON snapshot in the state directory (`.basket/` by
//! default), replaced wholesale on every save:
//!
//! - `market_basket_v1.json`: [`BasketPrefs`] (theme, persona, sort, market)
//! - `projects_hub_v1.json`: [`HubState`] (layout, sort, accent, theme, projects)
//!
//! ## Components
//!
//! - [`Snapshot`]: a record stored under a fixed key
//! - [`SnapshotStore`]: lenient load, atomic save, reset

mod prefs;
mod snapshot_store;

pub use prefs::{BasketPrefs, HubState};
pub use snapshot_store::{Snapshot, SnapshotStore};
