use crate::client::ActivityFeed;
use crate::heatmap::{HeatmapCache, HeatmapLayout};
use crate::models::ActivityStore;
use crate::provider::DemoProvider;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<ActivityStore>>,
    pub cache: Arc<Mutex<HeatmapCache>>,
    /// When set, the journal reads its counts from this endpoint instead of the local store.
    pub remote: Option<ActivityFeed>,
    pub demo: DemoProvider,
    pub layout: HeatmapLayout,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: ActivityStore) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            cache: Arc::new(Mutex::new(HeatmapCache::new())),
            remote: None,
            demo: DemoProvider::default(),
            layout: HeatmapLayout::default(),
        }
    }

    pub fn with_remote(mut self, remote: ActivityFeed) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn with_demo(mut self, demo: DemoProvider) -> Self {
        self.demo = demo;
        self
    }
}
