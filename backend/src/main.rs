use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::handlers::{config_handler, health_check, spin_handler};

mod config;
mod error;
mod generator;
mod handlers;
mod logging;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub painter: config::PainterConfig,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::setup();

    let server_config = ServerConfig::from_env();
    if !server_config.painter.is_configured() {
        info!(
            "painter unavailable, serving fallback art: {}",
            server_config.painter.status_reason()
        );
    }

    let state = AppState {
        http: reqwest::Client::new(),
        painter: server_config.painter.clone(),
    };

    let app = router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], server_config.port));
    info!("Serving Splice Safari on http://{}", addr);
    let listener = TcpListener::bind(addr).await.expect("failed to bind port");
    axum::serve(listener, app).await.expect("server error");
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(vec![
            "http://127.0.0.1:8080".parse::<HeaderValue>().expect("valid origin"),
            "http://127.0.0.1:8000".parse::<HeaderValue>().expect("valid origin"),
        ])
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(vec![header::CONTENT_TYPE]);

    // Force revalidation on posters and the placeholder
    let static_service = SetResponseHeaderLayer::if_not_present(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache"),
    )
    .layer(ServeDir::new(static_dir()));

    let frontend_dist = frontend_dist_dir();
    let index = frontend_dist.join("index.html");

    Router::new()
        .route("/api/spin", post(spin_handler))
        .route("/api/config", get(config_handler))
        .route("/api/health_check", get(health_check))
        .nest_service("/static", static_service)
        .fallback_service(ServeDir::new(frontend_dist).not_found_service(ServeFile::new(index)))
        .layer(cors)
        .with_state(state)
}

fn static_dir() -> PathBuf {
    for candidate in ["static", "backend/static", "../backend/static"] {
        let path = PathBuf::from(candidate);
        if path.exists() {
            return path;
        }
    }
    PathBuf::from("static")
}

fn frontend_dist_dir() -> PathBuf {
    for candidate in ["frontend/dist", "../frontend/dist", "dist"] {
        let path = PathBuf::from(candidate);
        if path.exists() {
            return path;
        }
    }
    PathBuf::from("frontend/dist")
}
