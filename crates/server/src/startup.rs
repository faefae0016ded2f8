use std::{env, net::SocketAddr, sync::Arc};

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, AddressState, StudentState};
use service::address::repository::SeaOrmAddressRepository;
use service::student::repository::SeaOrmStudentRepository;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

/// Cross-origin access is granted to the single configured UI origin for the
/// four verbs the API serves; with no origin configured the layer stays open.
fn build_cors(ui_host: &str) -> CorsLayer {
    if ui_host.trim().is_empty() {
        return CorsLayer::very_permissive();
    }
    match ui_host.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([CONTENT_TYPE]),
        Err(_) => {
            warn!(ui_host, "invalid ui.host origin, falling back to permissive CORS");
            CorsLayer::very_permissive()
        }
    }
}

/// Load bind address, CORS origin and DB connection from configs or env vars,
/// with sensible fallbacks. Each service ships its own config file via
/// `CONFIG_PATH`; `default_port` keeps the two services apart when only env
/// vars are present.
async fn prepare(default_port: u16) -> anyhow::Result<(SocketAddr, String, DatabaseConnection)> {
    dotenv().ok();
    init_logging();

    match configs::AppConfig::load_and_validate() {
        Ok(cfg) => {
            let addr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
            let db = models::db::connect_with(&cfg.database).await?;
            Ok((addr, cfg.ui.host, db))
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(default_port);
            let addr = format!("{}:{}", host, port).parse()?;
            let db = models::db::connect().await?;
            Ok((addr, env::var("UI_HOST").unwrap_or_default(), db))
        }
    }
}

/// Public entry: build the student app and run the HTTP server
pub async fn run_student() -> anyhow::Result<()> {
    let (addr, ui_host, db) = prepare(8080).await?;
    migration::Migrator::up(&db, None).await?;

    let state = StudentState { students: Arc::new(SeaOrmStudentRepository::new(db)) };
    let app: Router = routes::build_student_router(state, build_cors(&ui_host));

    info!(%addr, "starting student service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Public entry: build the address app and run the HTTP server
pub async fn run_address() -> anyhow::Result<()> {
    let (addr, ui_host, db) = prepare(8081).await?;
    migration::Migrator::up(&db, None).await?;

    let state = AddressState { addresses: Arc::new(SeaOrmAddressRepository::new(db)) };
    let app: Router = routes::build_address_router(state, build_cors(&ui_host));

    info!(%addr, "starting address service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
