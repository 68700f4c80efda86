mod hub;
mod init;
mod markets;
mod prefs;
mod produce;
mod utils;

pub use hub::{
    handle_hub_configure, handle_hub_dashboard, handle_hub_layout, handle_hub_list,
    handle_hub_open, handle_hub_reset, handle_hub_set, handle_hub_show, handle_hub_theme,
};
pub use init::handle_init;
pub use markets::{handle_market, handle_markets};
pub use prefs::{handle_persona, handle_prefs, handle_sort, handle_theme};
pub use produce::{ProduceParams, handle_produce, handle_show};

use crate::config::BasketConfig;
use crate::model::Month;
use crate::season::SeasonEngine;
use crate::storage::{BasketPrefs, HubState, SnapshotStore};
use std::path::PathBuf;

/// The reference date every listing is computed against.
#[derive(Debug, Clone, Copy)]
pub struct Today {
    pub month: Month,
    pub year: i32,
}

impl Today {
    /// "October 2026"
    pub fn label(&self) -> String {
        let name = chrono::Month::try_from(self.month.index() + 1)
            .map(|m| m.name())
            .unwrap_or_else(|_| self.month.short_name());
        format!("{} {}", name, self.year)
    }
}

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BasketConfig,
    pub root: PathBuf,
    pub engine: SeasonEngine,
    pub today: Today,
}

impl CommandContext {
    pub fn new(config: BasketConfig, root: PathBuf, today: Today) -> Self {
        let engine = config.season_engine();
        Self {
            config,
            root,
            engine,
            today,
        }
    }

    pub fn basket_store(&self) -> SnapshotStore<BasketPrefs> {
        SnapshotStore::new(&self.config.state_path(&self.root))
    }

    pub fn hub_store(&self) -> SnapshotStore<HubState> {
        SnapshotStore::new(&self.config.state_path(&self.root))
    }

    /// Stored basket preferences over defaults that use the configured market.
    pub fn load_basket_prefs(&self) -> BasketPrefs {
        self.basket_store().load_over(BasketPrefs {
            market_id: self.config.basket.default_market.clone(),
            ..Default::default()
        })
    }
}
