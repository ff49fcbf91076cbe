//! REST API for the risk simulator and the market dashboard.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use jobrisk::{
    AppContext, DashboardState, Dataset, EducationRiskChart, ExposureScatterChart, JobRiskError,
    ScoringRequest,
};
use tracing::{error, warn};

use crate::views::{ErrorBody, FormOptions, ScoreView};

/// Shared application state.
pub type AppState = Arc<AppContext>;

/// Builds the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/form", get(form_options))
        .route("/api/score", post(score))
        .route("/api/dashboard/education", get(education_chart))
        .route("/api/dashboard/exposure", get(exposure_chart))
        .with_state(state)
}

/// Errors returned by API handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The body could not be decoded.
    BadBody(StatusCode, String),
    /// Scoring failed for this request.
    Scoring(JobRiskError),
    /// The dataset is not loaded.
    DashboardUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadBody(status, message) => (status, message),
            ApiError::Scoring(err) if err.is_request_error() => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            ApiError::Scoring(err) => {
                error!(event = "score_failed", reason = %err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::DashboardUnavailable(reason) => (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("dashboard data could not be loaded: {}", reason),
            ),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

async fn form_options(State(state): State<AppState>) -> Json<FormOptions> {
    Json(FormOptions::from_context(&state))
}

async fn score(
    State(state): State<AppState>,
    payload: Result<Json<ScoringRequest>, JsonRejection>,
) -> Result<Json<ScoreView>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(event = "request_rejected", reason = %rejection.body_text());
        ApiError::BadBody(rejection.status(), rejection.body_text())
    })?;

    let result = state.scorer().score(&request).map_err(|err| {
        if err.is_request_error() {
            warn!(event = "request_rejected", reason = %err);
        }
        ApiError::Scoring(err)
    })?;

    Ok(Json(ScoreView::from(&result)))
}

async fn education_chart(
    State(state): State<AppState>,
) -> Result<Json<EducationRiskChart>, ApiError> {
    let dataset = dataset(&state)?;
    Ok(Json(EducationRiskChart::build(dataset)))
}

async fn exposure_chart(
    State(state): State<AppState>,
) -> Result<Json<ExposureScatterChart>, ApiError> {
    let dataset = dataset(&state)?;
    Ok(Json(ExposureScatterChart::build(dataset, &state.sampler())))
}

fn dataset(state: &AppContext) -> Result<&Dataset, ApiError> {
    match state.dashboard() {
        DashboardState::Available(dataset) => Ok(dataset.as_ref()),
        DashboardState::Unavailable { reason } => {
            Err(ApiError::DashboardUnavailable(reason.clone()))
        }
    }
}
