#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{self, AddressState, StudentState};
use service::address::repository::SeaOrmAddressRepository;
use service::student::repository::SeaOrmStudentRepository;

pub struct TestApp {
    pub base_url: String,
}

/// Student service on an ephemeral port over a fresh in-memory database.
pub async fn start_student_app() -> anyhow::Result<TestApp> {
    let db = models::db::connect_to("sqlite::memory:").await?;
    migration::Migrator::up(&db, None).await?;
    let state = StudentState { students: Arc::new(SeaOrmStudentRepository::new(db)) };
    serve(routes::build_student_router(state, CorsLayer::very_permissive())).await
}

/// Address service on an ephemeral port over a fresh in-memory database.
pub async fn start_address_app() -> anyhow::Result<TestApp> {
    let db = models::db::connect_to("sqlite::memory:").await?;
    migration::Migrator::up(&db, None).await?;
    let state = AddressState { addresses: Arc::new(SeaOrmAddressRepository::new(db)) };
    serve(routes::build_address_router(state, CorsLayer::very_permissive())).await
}

async fn serve(app: Router) -> anyhow::Result<TestApp> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}
