//! OpenAPI documentation configuration

use axum_helpers::HealthResponse;
use utoipa::OpenApi;

/// Health endpoint, mounted under `/api` alongside the domain routes
#[derive(OpenApi)]
#[openapi(paths(axum_helpers::server::health::health_handler), components(schemas(HealthResponse)))]
struct HealthApiDoc;

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "Product catalog REST API",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api", api = HealthApiDoc),
        (path = "/api/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Health", description = "Service liveness")
    )
)]
pub struct ApiDoc;
