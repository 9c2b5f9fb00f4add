//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the catalog API.
///
/// The catalog domain documents its own routes with absolute paths, so it is
/// nested here without an extra prefix. The `/api` mount point is reflected
/// through the server entry instead.
#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Storefront catalog API: browse products and categories with discount filters, price ranges, sorting, and pagination"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        // Expression form: the derive rejects an empty path literal, but an
        // empty prefix is exactly what we want here.
        (path = concat!(""), api = domain_catalog::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
