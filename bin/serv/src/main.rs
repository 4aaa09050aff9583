use uma_api::{config::ApiConfig, state::ApiState};
use uma_store::UserRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    uma_api::tracing::init_tracing(&config.env);

    let metrics_handle = uma_api::metrics::init_metrics()?;
    tracing::info!("Prometheus metrics exporter initialized");

    let state = ApiState::new(&config, UserRepository::seeded());
    let app = uma_api::router::app(state, &config, Some(metrics_handle));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        environment = ?config.env,
        "Server running"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
