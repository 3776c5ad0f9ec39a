use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::job_application_dto::{
        CreateJobApplicationPayload, JobApplicationListQuery, UpdateJobApplicationPayload,
    },
    error::{Error, Result},
    AppState,
};

/// Paginated when both pageNumber and pageSize are present, the full list
/// otherwise. A lone pagination parameter silently falls back to the
/// unpaged list rather than erroring.
#[axum::debug_handler]
pub async fn list_job_applications(
    State(state): State<AppState>,
    Query(query): Query<JobApplicationListQuery>,
) -> Result<impl IntoResponse> {
    if let (Some(page_number), Some(page_size)) = (query.page_number, query.page_size) {
        let page = state
            .job_application_service
            .get_all_paged(page_number, page_size)
            .await?;
        return Ok(Json(page).into_response());
    }

    let items = state.job_application_service.get_all().await?;
    Ok(Json(items).into_response())
}

#[axum::debug_handler]
pub async fn get_job_application(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let found = state
        .job_application_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Job application with ID {} not found.", id)))?;
    Ok(Json(found))
}

#[axum::debug_handler]
pub async fn create_job_application(
    State(state): State<AppState>,
    Json(payload): Json<CreateJobApplicationPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let created = state.job_application_service.create(payload).await?;
    let location = format!("/api/job-applications/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

#[axum::debug_handler]
pub async fn update_job_application(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateJobApplicationPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state.job_application_service.update(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn delete_job_application(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let deleted = state.job_application_service.delete(id).await?;
    if !deleted {
        return Err(Error::NotFound(format!(
            "Job application with ID {} not found.",
            id
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}
