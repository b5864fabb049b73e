use anyhow::Result;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weather_api::{
    api::{self, handlers::AppState},
    config::Config,
    db,
    kafka::QueueConsumerService,
    repositories::WeatherRepository,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,weather_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting weather-api");

    // Load configuration
    let config = Config::from_env()?;

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&config).await?;
    tracing::info!("Database connection established");

    // Reconcile the schema before serving traffic
    db::ensure_schema(&pool).await?;
    tracing::info!("Schema bootstrap complete");

    // Create repository
    let repository = WeatherRepository::new(pool.clone());

    // Create queue consumer service
    tracing::info!("Initializing queue consumer...");
    let consumer = QueueConsumerService::new(&config.kafka, WeatherRepository::new(pool))?;

    // Spawn consumer task
    let consumer_handle = tokio::spawn(async move {
        consumer.run().await;
    });

    // Create API server
    let app_state = AppState { repository };
    let app = api::create_router(app_state);

    let bind_addr = config.api_bind_address();
    tracing::info!("Starting API server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The consumer loop never finishes on its own
    consumer_handle.abort();

    tracing::info!("Application shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
