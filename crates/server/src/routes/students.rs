use axum::extract::{Path, State};
use axum::http::{header::LOCATION, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::errors::{ApiError, Problem};
use crate::extract::JsonOrXml;
use crate::routes::StudentState;
use service::student::validate;

/// Candidate student body. Every field is required, so a body with a missing
/// field is rejected during deserialization, before validation runs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInput {
    pub first_name: String,
    pub last_name: String,
    pub birthday: NaiveDate,
    pub phone: String,
    pub email: String,
}

impl StudentInput {
    fn violations(&self) -> String {
        validate::check_student(
            &self.first_name,
            &self.last_name,
            self.birthday,
            &self.phone,
            &self.email,
        )
    }
}

fn not_found_detail(id: i32) -> String {
    format!("Student by id={id} not found")
}

pub async fn find_all(
    State(state): State<StudentState>,
) -> Result<Json<Vec<models::student::Model>>, ApiError> {
    let list = state.students.find_all().await?;
    info!(count = list.len(), "list students");
    Ok(Json(list))
}

pub async fn find(
    State(state): State<StudentState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    match state.students.find_by_id(id).await? {
        Some(m) => Ok(Json(m).into_response()),
        None => Ok(Problem::bad_request("Error find student", not_found_detail(id)).into_response()),
    }
}

pub async fn create(
    State(state): State<StudentState>,
    JsonOrXml(input): JsonOrXml<StudentInput>,
) -> Result<Response, ApiError> {
    let violations = input.violations();
    if !violations.is_empty() {
        return Ok(Problem::bad_request("Error save student", violations).into_response());
    }
    let saved = state
        .students
        .insert(&input.first_name, &input.last_name, input.birthday, &input.phone, &input.email)
        .await?;
    info!(id = saved.id, "created student");
    let location = format!("/api/v1/student/{}", saved.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)]).into_response())
}

pub async fn update(
    State(state): State<StudentState>,
    Path(id): Path<i32>,
    Json(input): Json<StudentInput>,
) -> Result<Response, ApiError> {
    if state.students.find_by_id(id).await?.is_none() {
        return Ok(
            Problem::bad_request("Error update student", not_found_detail(id)).into_response()
        );
    }
    // PUT replaces every mutable field, so the merged record carries exactly
    // the incoming values; validate those before touching the store.
    let violations = input.violations();
    if !violations.is_empty() {
        return Ok(Problem::bad_request("Error update student", violations).into_response());
    }
    match state
        .students
        .update(id, &input.first_name, &input.last_name, input.birthday, &input.phone, &input.email)
        .await?
    {
        Some(m) => {
            info!(id = m.id, "updated student");
            Ok(Json(m).into_response())
        }
        None => {
            Ok(Problem::bad_request("Error update student", not_found_detail(id)).into_response())
        }
    }
}

pub async fn remove(
    State(state): State<StudentState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    match state.students.delete(id).await? {
        Some(m) => {
            info!(id = m.id, "deleted student");
            Ok(Json(m).into_response())
        }
        // The title reuses the update wording; kept verbatim for
        // compatibility with the original API.
        None => {
            Ok(Problem::bad_request("Error update student", not_found_detail(id)).into_response())
        }
    }
}
