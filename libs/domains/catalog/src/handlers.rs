use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::errors::responses::InternalServerErrorResponse;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogError;
use crate::filter::FilterParams;
use crate::models::{
    Category, CategoryErrorBody, CategoryWithProducts, PageQuery, Paginated, Product,
    ProductErrorBody, ProductPage, ProductQuery,
};
use crate::pagination::PageRequest;
use crate::repository::{CategoryRepository, ProductRepository};
use crate::service::CatalogService;
use crate::sort::SortKey;

/// OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        find_product,
        list_categories,
        popular_categories,
        category_products,
    ),
    components(
        schemas(
            Product,
            Category,
            Paginated<Product>,
            Paginated<Category>,
            ProductPage,
            CategoryWithProducts,
            ProductErrorBody,
            CategoryErrorBody,
        ),
        responses(InternalServerErrorResponse)
    ),
    tags(
        (name = "Products", description = "Product browsing endpoints"),
        (name = "Categories", description = "Category browsing endpoints")
    )
)]
pub struct ApiDoc;

/// Create the catalog router with all HTTP endpoints
pub fn router<P, C>(service: CatalogService<P, C>) -> Router
where
    P: ProductRepository + 'static,
    C: CategoryRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/products/all", get(list_products))
        .route("/products/{id}", get(find_product))
        .route("/categories/all", get(list_categories))
        .route("/categories/popular", get(popular_categories))
        .route("/categories/{id}", get(category_products))
        .with_state(shared_service)
}

/// List products with price filtering, sorting and pagination
#[utoipa::path(
    get,
    path = "/products/all",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "One page of matching products", body = Paginated<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<P: ProductRepository, C: CategoryRepository>(
    State(service): State<Arc<CatalogService<P, C>>>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Paginated<Product>>, CatalogError> {
    let (filter, sort, page) = resolve_product_query(&query);
    let listing = service.list_products(&filter, sort, page).await?;
    Ok(Json(listing))
}

/// Get a single product by id
///
/// The body is a one-element array for historical reasons; clients index
/// into it rather than reading an object.
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "The matching product", body = [Product]),
        (status = 404, description = "Malformed or unknown id", body = ProductErrorBody),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn find_product<P: ProductRepository, C: CategoryRepository>(
    State(service): State<Arc<CatalogService<P, C>>>,
    Path(id): Path<String>,
) -> Response {
    match service.find_product(&id).await {
        Ok(product) => Json(vec![product]).into_response(),
        Err(CatalogError::InvalidId(_)) => product_error("wrong id"),
        Err(CatalogError::ProductNotFound(_)) => product_error("product not found"),
        Err(err) => err.into_response(),
    }
}

/// List all categories with pagination
#[utoipa::path(
    get,
    path = "/categories/all",
    tag = "Categories",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of categories", body = Paginated<Category>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_categories<P: ProductRepository, C: CategoryRepository>(
    State(service): State<Arc<CatalogService<P, C>>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Paginated<Category>>, CatalogError> {
    let page = PageRequest::from_raw(query.page.as_deref(), query.limit.as_deref());
    let listing = service.list_categories(page).await?;
    Ok(Json(listing))
}

/// Featured categories for the landing page
#[utoipa::path(
    get,
    path = "/categories/popular",
    tag = "Categories",
    responses(
        (status = 200, description = "Up to four featured categories", body = [Category]),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn popular_categories<P: ProductRepository, C: CategoryRepository>(
    State(service): State<Arc<CatalogService<P, C>>>,
) -> Result<Json<Vec<Category>>, CatalogError> {
    let popular = service.popular_categories().await?;
    Ok(Json(popular))
}

/// Get a category together with one filtered page of its products
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "Categories",
    params(
        ("id" = i32, Path, description = "Category identifier"),
        ProductQuery
    ),
    responses(
        (status = 200, description = "The category and a page of its products", body = CategoryWithProducts),
        (status = 404, description = "Malformed or unknown id", body = CategoryErrorBody),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn category_products<P: ProductRepository, C: CategoryRepository>(
    State(service): State<Arc<CatalogService<P, C>>>,
    Path(id): Path<String>,
    Query(query): Query<ProductQuery>,
) -> Response {
    let (filter, sort, page) = resolve_product_query(&query);
    match service.category_products(&id, &filter, sort, page).await {
        Ok(payload) => Json(payload).into_response(),
        Err(CatalogError::InvalidId(_)) => category_error("wrong id".to_string()),
        Err(CatalogError::CategoryNotFound(id)) => {
            category_error(format!("Category with id={id} not found"))
        }
        Err(err) => err.into_response(),
    }
}

fn resolve_product_query(query: &ProductQuery) -> (FilterParams, SortKey, PageRequest) {
    let filter = FilterParams::from_raw(
        query.price_from.as_deref(),
        query.price_to.as_deref(),
        query.discont.as_deref(),
    );
    let sort = SortKey::parse_or_default(query.sort.as_deref());
    let page = PageRequest::from_raw(query.page.as_deref(), query.limit.as_deref());
    (filter, sort, page)
}

fn product_error(message: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(ProductErrorBody::new(message))).into_response()
}

fn category_error(message: String) -> Response {
    (StatusCode::NOT_FOUND, Json(CategoryErrorBody { message })).into_response()
}
