//! HTTP error responses
//!
//! Request validation failures become 422 with a list of field errors,
//! domain failures become 400 with the error message as `detail`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::utils::InvalidArgument;

pub type ApiResult<T> = Result<T, ApiError>;

/// Step in the location of a rejected parameter: a name or a list index.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum LocItem {
    Key(String),
    Index(usize),
}

impl From<&str> for LocItem {
    fn from(key: &str) -> Self {
        LocItem::Key(key.to_string())
    }
}

impl From<usize> for LocItem {
    fn from(index: usize) -> Self {
        LocItem::Index(index)
    }
}

/// One rejected request parameter.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub kind: &'static str,
    pub loc: Vec<LocItem>,
    pub msg: String,
    /// Raw value as received, `null` when the parameter is absent
    pub input: Option<String>,
}

impl FieldError {
    pub fn missing(name: &str) -> Self {
        Self {
            kind: "missing",
            loc: vec!["query".into(), name.into()],
            msg: "Field required".to_string(),
            input: None,
        }
    }

    pub fn float_parsing(name: &str, index: usize, raw: &str) -> Self {
        Self {
            kind: "float_parsing",
            loc: vec!["query".into(), name.into(), index.into()],
            msg: "Input should be a valid number, unable to parse string as a number"
                .to_string(),
            input: Some(raw.to_string()),
        }
    }

    pub fn finite_number(name: &str, index: usize, raw: &str) -> Self {
        Self {
            kind: "finite_number",
            loc: vec!["query".into(), name.into(), index.into()],
            msg: "Input should be a finite number".to_string(),
            input: Some(raw.to_string()),
        }
    }

    pub fn query_decode(reason: impl Into<String>) -> Self {
        Self {
            kind: "query_decode",
            loc: vec!["query".into()],
            msg: reason.into(),
            input: None,
        }
    }
}

/// Body of 400, 404 and 405 responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Body of 422 responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorBody {
    pub detail: Vec<FieldError>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request validation failed: {} error(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Validation(detail) => {
                debug!(errors = detail.len(), "Rejected request parameters");
                (status, Json(ValidationErrorBody { detail })).into_response()
            }
            ApiError::InvalidArgument(err) => {
                warn!(error = %err, "Invalid argument");
                (status, Json(ErrorDetail { detail: err.message })).into_response()
            }
            other => {
                let detail = other.to_string();
                (status, Json(ErrorDetail { detail })).into_response()
            }
        }
    }
}
