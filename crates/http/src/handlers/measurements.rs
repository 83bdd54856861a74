use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use homesense_core::{Measurement, PASSWORD_HEADER};

use crate::api_error::ApiError;
use crate::response_types::IngestResponse;
use crate::query_types::MeasurementRequest;
use crate::AppState;

/// Store one reading. `201` when new, `200` when `(device_id, time)` already existed.
pub async fn ingest_measurement(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<MeasurementRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<IngestResponse>), ApiError> {
    let password = headers.get(PASSWORD_HEADER).and_then(|v| v.to_str().ok());
    state.verifier.authenticate(password)?;

    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let time = req.time.unwrap_or_else(|| chrono::Utc::now().timestamp_millis());
    let measurement = Measurement::new(req.device_id, time, req.temperature, req.humidity);
    let device_id = measurement.device_id.clone();

    let inserted = state.ingest_service.store_measurement(measurement).await?;
    let status = if inserted { StatusCode::CREATED } else { StatusCode::OK };
    Ok((status, Json(IngestResponse { device_id, time, inserted })))
}
