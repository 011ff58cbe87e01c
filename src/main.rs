use activity_journal::client::ActivityFeed;
use activity_journal::provider::DemoProvider;
use activity_journal::{load_store, router, ActivityClient, AppState, Config};
use std::net::SocketAddr;
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    if let Some(parent) = config.data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let store = load_store(&config.data_path).await;
    let demo = DemoProvider::new(config.demo_seed);
    let mut state = AppState::new(config.data_path.clone(), store).with_demo(demo);

    if let Some(url) = &config.activity_api_url {
        info!(demo_seed = demo.seed(), "reading journal activity from {url}");
        let client = ActivityClient::new(url.as_str())?;
        state = state.with_remote(ActivityFeed::new(client, config.activity_stale_after));
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
