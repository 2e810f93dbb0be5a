//! OpenAPI document served at `/openapi.json`
//!
//! Paths come from the `#[utoipa::path]` annotations on the handlers and
//! schemas from the response types, so the document follows the code.

use axum::Json;
use utoipa::OpenApi;

use crate::error::{ErrorDetail, FieldError, LocItem, ValidationErrorBody};
use crate::handlers::{self, AverageResponse, HealthResponse, MessageResponse, ReversedResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::read_root,
        handlers::average,
        handlers::reverse,
        handlers::health_check,
        openapi_json
    ),
    components(schemas(
        MessageResponse,
        AverageResponse,
        ReversedResponse,
        HealthResponse,
        ErrorDetail,
        ValidationErrorBody,
        FieldError,
        LocItem
    )),
    tags(
        (name = "demo", description = "Greeting, average and string reversal"),
        (name = "system", description = "Health and API description")
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/openapi.json",
    responses(
        (status = 200, description = "This OpenAPI document")
    ),
    tag = "system"
)]
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_routes() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        for path in ["/", "/average", "/reverse", "/health", "/openapi.json"] {
            assert!(doc["paths"][path]["get"].is_object(), "missing {path}");
        }
        assert_eq!(doc["paths"]["/average"]["get"]["parameters"][0]["name"], "numbers");
        assert_eq!(doc["paths"]["/average"]["get"]["parameters"][0]["required"], true);
        assert_eq!(doc["paths"]["/reverse"]["get"]["parameters"][0]["name"], "text");
        for status in ["200", "400", "422"] {
            assert!(
                doc["paths"]["/average"]["get"]["responses"][status].is_object(),
                "missing /average {status}"
            );
        }
    }

    #[test]
    fn test_schemas_follow_response_types() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let schemas = &doc["components"]["schemas"];
        assert!(schemas["AverageResponse"]["properties"]["average"].is_object());
        assert!(schemas["ReversedResponse"]["properties"]["reversed"].is_object());
        assert!(schemas["FieldError"]["properties"]["type"].is_object());
        assert!(schemas["FieldError"]["properties"]["loc"].is_object());
        assert!(schemas["ValidationErrorBody"]["properties"]["detail"].is_object());
    }

    #[test]
    fn test_info_from_package() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, env!("CARGO_PKG_NAME"));
        assert_eq!(doc.info.version, env!("CARGO_PKG_VERSION"));
    }
}
