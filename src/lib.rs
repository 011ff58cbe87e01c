pub mod activity;
pub mod app;
pub mod calendar;
pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod heatmap;
pub mod models;
pub mod provider;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use calendar::build_month_blocks;
pub use client::{ActivityClient, ActivityFeed};
pub use config::Config;
pub use heatmap::{Heatmap, HeatmapCache, IntensityTier};
pub use state::AppState;
pub use storage::load_store;
