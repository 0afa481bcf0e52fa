use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::logging;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::{file::FileItemStore, ItemStore};

use crate::routes;

fn init_logging() {
    logging::init_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

fn load_items_dir() -> String {
    match configs::load_default() {
        Ok(cfg) => cfg.storage.items_dir,
        Err(_) => env::var("ITEMS_DIR").unwrap_or_else(|_| "items".to_string()),
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let items_dir = load_items_dir();
    common::env::ensure_data_dir(&items_dir).await?;

    let store: Arc<dyn ItemStore> = FileItemStore::new(&items_dir).await?;

    let cors = build_cors();
    let app: Router = routes::build_router(store, cors);

    let addr = load_bind_addr()?;
    info!(%addr, %items_dir, "starting item service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
