use axum::extract::{Path, State};
use axum::http::{header::LOCATION, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::errors::{ApiError, Problem};
use crate::extract::JsonOrXml;
use crate::routes::AddressState;

/// Address body; all fields are free text and none are validated.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    pub country: String,
    pub city: String,
    pub address_line1: String,
    pub address_line2: String,
}

fn not_found_detail(id: i32) -> String {
    format!("Address by id={id} not found")
}

pub async fn find_all(
    State(state): State<AddressState>,
) -> Result<Json<Vec<models::address::Model>>, ApiError> {
    let list = state.addresses.find_all().await?;
    info!(count = list.len(), "list addresses");
    Ok(Json(list))
}

pub async fn find(
    State(state): State<AddressState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    match state.addresses.find_by_id(id).await? {
        Some(m) => Ok(Json(m).into_response()),
        None => Ok(Problem::bad_request("Error find address", not_found_detail(id)).into_response()),
    }
}

pub async fn create(
    State(state): State<AddressState>,
    JsonOrXml(input): JsonOrXml<AddressInput>,
) -> Result<Response, ApiError> {
    let saved = state
        .addresses
        .insert(&input.country, &input.city, &input.address_line1, &input.address_line2)
        .await?;
    info!(id = saved.id, "created address");
    let location = format!("/api/v1/address/{}", saved.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)]).into_response())
}

pub async fn update(
    State(state): State<AddressState>,
    Path(id): Path<i32>,
    Json(input): Json<AddressInput>,
) -> Result<Response, ApiError> {
    match state
        .addresses
        .update(id, &input.country, &input.city, &input.address_line1, &input.address_line2)
        .await?
    {
        Some(m) => {
            info!(id = m.id, "updated address");
            Ok(Json(m).into_response())
        }
        None => {
            Ok(Problem::bad_request("Error update address", not_found_detail(id)).into_response())
        }
    }
}

pub async fn remove(
    State(state): State<AddressState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    match state.addresses.delete(id).await? {
        Some(m) => {
            info!(id = m.id, "deleted address");
            Ok(Json(m).into_response())
        }
        None => {
            Ok(Problem::bad_request("Error delete address", not_found_detail(id)).into_response())
        }
    }
}
