use marketmind::api::{create_router, AppState};
use marketmind::infrastructure::{AppConfig, OpenAiChatClient};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "marketmind=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    if std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    let config = AppConfig::load()?;
    if config.config.llm.api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; completion requests will fail");
    }

    let llm = Arc::new(OpenAiChatClient::new(&config.config.llm));
    info!(model = llm.model(), endpoint = llm.endpoint(), "LLM client initialized");

    let addr = SocketAddr::new(config.config.server.host.parse()?, config.config.server.port);
    let app = create_router(AppState::new(config, llm));

    info!("MarketMind listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
