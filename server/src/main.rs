//! API server entrypoint.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use paperwalk::{PaperStore, SemanticScholarClient, Settings};
use paperwalk_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let store = PaperStore::connect(&settings.store).await?;
    let scholar = SemanticScholarClient::new(settings.scholar_api_key.clone());

    paperwalk_server::run_server(AppState { store, scholar }, settings.port).await
}
