use std::sync::Arc;

use axum::{
    routing::{delete, get, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::address::repository::AddressRepository;
use service::student::repository::StudentRepository;

pub mod addresses;
pub mod students;

#[derive(Clone)]
pub struct StudentState {
    pub students: Arc<dyn StudentRepository>,
}

#[derive(Clone)]
pub struct AddressState {
    pub addresses: Arc<dyn AddressRepository>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Router for the student service: CRUD under `/api/v1/student/` plus health.
pub fn build_student_router(state: StudentState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/v1/student/",
            get(students::find_all).post(students::create),
        )
        .route("/api/v1/student/find/:id", get(students::find))
        .route("/api/v1/student/:id", put(students::update))
        .route("/api/v1/student/delete/:id", delete(students::remove))
        .with_state(state)
        .layer(cors)
        .layer(trace_layer())
}

/// Router for the address service: same shape, no validation.
pub fn build_address_router(state: AddressState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/v1/address/",
            get(addresses::find_all).post(addresses::create),
        )
        .route("/api/v1/address/find/:id", get(addresses::find))
        .route("/api/v1/address/:id", put(addresses::update))
        .route("/api/v1/address/delete/:id", delete(addresses::remove))
        .with_state(state)
        .layer(cors)
        .layer(trace_layer())
}

fn trace_layer() -> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
        .on_failure(DefaultOnFailure::new().level(Level::ERROR))
}
