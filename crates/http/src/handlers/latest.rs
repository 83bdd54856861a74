use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use homesense_service::ReadingsRequest;

use crate::api_error::ApiError;
use crate::page::{render_page, HTML_CONTENT_TYPE};
use crate::query_types::{LatestQuery, LatestRequest};
use crate::AppState;

pub async fn latest_page(
    State(state): State<Arc<AppState>>,
    query: Result<Query<LatestQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query.map_err(|e| {
        tracing::debug!(error = %e, "unreadable latest query string");
        ApiError::BadRequest("Incorrect parameters".to_owned())
    })?;
    let request = ReadingsRequest::from_query(query.password, query.devices.as_deref());
    respond(&state, request).await
}

pub async fn latest_page_json(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LatestRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload.map_err(|e| {
        tracing::debug!(error = %e, "unreadable latest request body");
        ApiError::BadRequest("Incorrect parameters".to_owned())
    })?;
    let request = ReadingsRequest { password: body.password, devices: body.devices };
    respond(&state, request).await
}

async fn respond(state: &AppState, request: ReadingsRequest) -> Result<Response, ApiError> {
    let records = state.readings_service.latest_readings(request).await?;
    let page = render_page(&records)?;
    Ok((StatusCode::OK, [(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], page).into_response())
}
