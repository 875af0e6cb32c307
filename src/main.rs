use sky_dost::chat::ChatService;
use sky_dost::config::{ProviderCredentials, ServerConfig};
use sky_dost::fallback::FallbackResponder;
use sky_dost::llm::{Dispatcher, ProviderFlags, ProviderId};
use sky_dost::routes::chat_routes;

#[tokio::main]
async fn main() -> sky_dost::error::Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env()?;
    let credentials = ProviderCredentials::from_env();
    let configured = credentials.configured();

    eprintln!("{}", "=".repeat(50));
    eprintln!("SKY Dost v{} - Your AI Study Friend", env!("CARGO_PKG_VERSION"));
    eprintln!("{}", "=".repeat(50));
    if configured.is_empty() {
        eprintln!("   Mode: fallback replies only (always available)");
        eprintln!("   Tip: add API keys to .env to enable AI providers");
    } else {
        let names: Vec<&str> = configured.iter().map(|id| id.as_str()).collect();
        let order: Vec<&str> = ProviderId::PRIORITY.iter().map(|id| id.as_str()).collect();
        eprintln!("   Providers: {}", names.join(", "));
        eprintln!("   Fallback priority: {}", order.join(" -> "));
    }
    eprintln!("   Request timeout: {:?}", config.request_timeout);
    eprintln!("   HTTP: http://0.0.0.0:{}\n", config.port);

    let dispatcher = Dispatcher::new(
        credentials,
        ProviderFlags::new(),
        FallbackResponder::default(),
        config.request_timeout,
    )?;
    let chat = ChatService::new(dispatcher);
    let app = chat_routes(chat);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "Chat server started");
    axum::serve(listener, app).await?;

    Ok(())
}
