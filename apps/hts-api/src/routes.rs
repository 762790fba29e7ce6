use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use hts_service::{DetailsRequest, DetailsResponse, SearchRequest, SearchResponse, ServiceError};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/tariff/search", post(search))
        .route("/v1/tariff/codes/{code}", get(details))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn search(
    State(state): State<AppState>,
    Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let response = state.service.search(payload)?;
    Ok(Json(response))
}

async fn details(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<DetailsResponse>, ApiError> {
    let response = state.service.details(DetailsRequest { code })?;
    Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error_code: String,
    message: String,
    fields: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error_code: String,
    message: String,
    fields: Option<Vec<String>>,
}

impl ApiError {
    fn new(
        status: StatusCode,
        error_code: impl Into<String>,
        message: impl Into<String>,
        fields: Option<Vec<String>>,
    ) -> Self {
        Self {
            status,
            error_code: error_code.into(),
            message: message.into(),
            fields,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidQuery { field, message } => ApiError::new(
                StatusCode::BAD_REQUEST,
                "invalid_query",
                message,
                Some(vec![field]),
            ),
            ServiceError::NotFound { code } => ApiError::new(
                StatusCode::NOT_FOUND,
                "not_found",
                format!("No tariff entry with code {code:?}."),
                None,
            ),
            ServiceError::Catalog { source } => {
                tracing::error!(error = %source, "Catalog query failed.");

                if source.is_data_unavailable() {
                    ApiError::new(
                        StatusCode::SERVICE_UNAVAILABLE,
                        "catalog_unavailable",
                        "Tariff catalog is unavailable.",
                        None,
                    )
                } else {
                    ApiError::new(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "catalog_error",
                        "Tariff catalog could not be parsed.",
                        None,
                    )
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error_code: self.error_code,
            message: self.message,
            fields: self.fields,
        };
        (self.status, Json(body)).into_response()
    }
}
