use anyhow::Result;
use clap::Parser;
use golem_proxy::api::{router, AppState};
use golem_proxy::models::ProxyConfig;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "golem-proxy")]
#[command(about = "Chat proxy for the Golem AI assistant")]
struct CliArgs {
    /// Address to bind, overriding BIND_ADDR.
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "golem_proxy=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let mut config = ProxyConfig::from_env();
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    if config.api_key().is_none() {
        // Not fatal: the handler reports API_KEY_NOT_CONFIGURED per request.
        warn!("GEMINI_API_KEY is not set; chat requests will fail until it is");
    }

    info!(bind_addr = %config.bind_addr, model = %config.model, "starting golem-proxy");

    let state = AppState::new(config.clone());
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
