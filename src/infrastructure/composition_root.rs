//! CompositionRoot - Dependency Injection Container
//!
//! This module wires together all the dependencies for the application.
//! It owns the gateways and hands out controllers built on top of them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::adapters::controllers::ViewStateController;
use crate::adapters::gateways::{ApodHttpGateway, FileStoreGateway, MemoryStoreGateway};
use crate::adapters::views::BrowseView;
use crate::application::ports::{FetchError, KeyValueStore, SystemClock};
use crate::application::services::{FavoritesSet, HistoryLog};
use crate::shared::Config;

/// Controller type used by the binary
pub type AppController = ViewStateController<
    ApodHttpGateway,
    HistoryLog<dyn KeyValueStore>,
    FavoritesSet<dyn KeyValueStore>,
    SystemClock,
>;

pub type AppBrowseView = BrowseView<
    ApodHttpGateway,
    HistoryLog<dyn KeyValueStore>,
    FavoritesSet<dyn KeyValueStore>,
    SystemClock,
>;

/// Application composition root - owns all dependencies
pub struct CompositionRoot {
    config: Config,
    feed: Arc<ApodHttpGateway>,
    store: Arc<dyn KeyValueStore>,
    data_dir: PathBuf,
    ephemeral: bool,
}

impl CompositionRoot {
    /// Wire gateways from configuration. With `ephemeral` set, history and
    /// favorites live in memory and nothing is written to the data directory.
    pub fn from_config(config: &Config, ephemeral: bool) -> Result<Self, FetchError> {
        let feed = Arc::new(ApodHttpGateway::from_config(&config.feed)?);
        let data_dir = config.data_dir();

        let store: Arc<dyn KeyValueStore> = if ephemeral {
            Arc::new(MemoryStoreGateway::new())
        } else {
            Arc::new(FileStoreGateway::new(data_dir.clone()))
        };

        debug!(data_dir = %data_dir.display(), ephemeral, "composition root ready");

        Ok(Self {
            config: config.clone(),
            feed,
            store,
            data_dir,
            ephemeral,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn is_ephemeral(&self) -> bool {
        self.ephemeral
    }

    pub fn feed(&self) -> &Arc<ApodHttpGateway> {
        &self.feed
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Fresh controller over the shared store
    pub fn controller(&self) -> AppController {
        ViewStateController::new(
            self.feed.clone(),
            HistoryLog::new(self.store.clone()),
            FavoritesSet::new(self.store.clone()),
            SystemClock,
        )
    }

    /// Interactive view saving downloads to `download_dir`
    pub fn browse_view(&self, download_dir: PathBuf) -> AppBrowseView {
        BrowseView::new(self.controller(), download_dir).with_fetch_timeout(
            std::time::Duration::from_secs(self.config.feed.timeout_secs.saturating_add(5)),
        )
    }
}
