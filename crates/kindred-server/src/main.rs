use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    extract::WebSocketUpgrade,
    response::IntoResponse,
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use kindred_api::auth::{AppState, AppStateInner};
use kindred_gateway::connection;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kindred=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let db_path = std::env::var("KINDRED_DB_PATH").unwrap_or_else(|_| "kindred.db".into());
    let host = std::env::var("KINDRED_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("KINDRED_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;

    // Init database
    let db = kindred_db::Database::open(&PathBuf::from(&db_path))?;

    // Shared state
    let app_state: AppState = Arc::new(AppStateInner { db });

    // Routes; the gateway is mounted but nothing publishes over it
    let app = Router::new()
        .merge(kindred_api::router(app_state))
        .route("/gateway", get(ws_upgrade))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Kindred server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn ws_upgrade(ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(connection::handle_connection)
}
