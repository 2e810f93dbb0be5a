//! Route handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult, ErrorDetail, FieldError, ValidationErrorBody};
use crate::query::{FromQueryParams, QueryParams, ValidQuery};
use crate::utils::{calculate_average, reverse_string};

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AverageResponse {
    /// Arithmetic mean, always finite
    pub average: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReversedResponse {
    pub reversed: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Query for `GET /average`: `numbers` repeated one or more times.
#[derive(Debug, Clone, PartialEq)]
pub struct AverageQuery {
    pub numbers: Vec<f64>,
}

impl FromQueryParams for AverageQuery {
    fn from_query_params(params: &QueryParams) -> Result<Self, Vec<FieldError>> {
        let numbers = params.required_floats("numbers")?;
        Ok(Self { numbers })
    }
}

/// Query for `GET /reverse`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReverseQuery {
    pub text: String,
}

impl FromQueryParams for ReverseQuery {
    fn from_query_params(params: &QueryParams) -> Result<Self, Vec<FieldError>> {
        let text = params.required_str("text").map_err(|e| vec![e])?;
        Ok(Self { text })
    }
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Configured greeting", body = MessageResponse)
    ),
    tag = "demo"
)]
pub async fn read_root(State(config): State<Arc<AppConfig>>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: config.greeting.clone(),
    })
}

#[utoipa::path(
    get,
    path = "/average",
    params(
        ("numbers" = Vec<f64>, Query, description = "Numbers to average, one `numbers=` per value", style = Form, explode)
    ),
    responses(
        (status = 200, description = "Arithmetic mean of the numbers", body = AverageResponse),
        (status = 400, description = "Numbers cannot be averaged", body = ErrorDetail),
        (status = 422, description = "Missing or non-numeric parameter", body = ValidationErrorBody)
    ),
    tag = "demo"
)]
pub async fn average(
    ValidQuery(query): ValidQuery<AverageQuery>,
) -> ApiResult<Json<AverageResponse>> {
    let average = calculate_average(&query.numbers)?;
    debug!(count = query.numbers.len(), average, "Computed average");
    Ok(Json(AverageResponse { average }))
}

#[utoipa::path(
    get,
    path = "/reverse",
    params(
        ("text" = String, Query, description = "Text to reverse")
    ),
    responses(
        (status = 200, description = "Text with its characters in reverse order", body = ReversedResponse),
        (status = 422, description = "Missing parameter", body = ValidationErrorBody)
    ),
    tag = "demo"
)]
pub async fn reverse(ValidQuery(query): ValidQuery<ReverseQuery>) -> Json<ReversedResponse> {
    let reversed = reverse_string(&query.text);
    debug!(chars = reversed.chars().count(), "Reversed text");
    Json(ReversedResponse { reversed })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "system"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
