use poem::{
    EndpointExt, IntoResponse, Response, Route,
    endpoint::BoxEndpoint,
    error::{MethodNotAllowedError, NotFoundError},
    http::StatusCode,
    web::Json,
};
use poem_openapi::OpenApiService;

use crate::setup::dependency_injection::DependencyContainer;

/// Builds the full route table: product and health operations, Swagger UI
/// and the OpenAPI document.
///
/// Any (method, path) pair without a registered operation answers 404 with a
/// JSON error body, including known paths hit with an unsupported method.
pub fn build_router(container: DependencyContainer, server_url: &str) -> BoxEndpoint<'static> {
    let api_service = OpenApiService::new(
        (container.health_api, container.product_api),
        "Product Inventory API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url.to_string());
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/", api_service)
        .nest("/docs", ui)
        .nest("/openapi.json", spec)
        .catch_error(|_: NotFoundError| async move { unmatched_route() })
        .catch_error(|_: MethodNotAllowedError| async move { unmatched_route() })
        .boxed()
}

fn unmatched_route() -> Response {
    Json(serde_json::json!({
        "name": "NotFound",
        "message": "route.not_found",
    }))
    .with_status(StatusCode::NOT_FOUND)
    .into_response()
}
