use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use gigboard_server::config::Config;
use gigboard_server::routes::create_routes;
use gigboard_server::{db, AppState, Clock};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        // RUST_LOG=debug etc., defaults to info
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();
    let pool = db::connect(&config.database_url, config.max_connections)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Successfully connected to database");

    db::migrate(&pool).await.expect("Failed to run migrations");

    tracing::info!("Migrations run successfully");

    let app = create_routes(AppState::new(pool, Clock::system()));

    let addr = config.bind_address();
    tracing::info!("Server running at http://{}", addr);

    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
