//! Handler tests for the catalog domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Lenient query parameter handling (pagination, filters, sort)
//! - Response envelopes and exact wire field names
//! - HTTP status codes
//! - The documented error bodies
//!
//! They run against the in-memory repository, so they cover the full
//! parse, predicate, query and serialization pipeline without a database.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, TimeZone, Utc};
use domain_catalog::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn category(id: i32, title: &str) -> Category {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Category {
        id,
        title: title.to_string(),
        image: format!("/category_img/{id}.jpg"),
        created_at: at,
        updated_at: at,
    }
}

fn product(id: i32, price: f64, discont_price: Option<f64>, category_id: i32) -> Product {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(id.into());
    Product {
        id,
        title: format!("product {id}"),
        price,
        discont_price,
        description: format!("description of product {id}"),
        image: format!("/product_img/{id}.jpg"),
        category_id,
        created_at: created,
        updated_at: created,
    }
}

/// Five categories and five products with known effective prices:
/// 1 -> 100, 2 -> 120 (discounted), 3 -> 300, 4 -> 60 (discounted), 5 -> 40.
fn test_app() -> Router {
    let repository = InMemoryCatalogRepository::with_data(
        vec![
            category(1, "Annuals"),
            category(2, "Tools"),
            category(3, "Pots"),
            category(4, "Seeds"),
            category(5, "Fertilizer"),
        ],
        vec![
            product(1, 100.0, None, 1),
            product(2, 200.0, Some(120.0), 1),
            product(3, 300.0, None, 1),
            product(4, 400.0, Some(60.0), 2),
            product(5, 40.0, None, 2),
        ],
    );
    let service = CatalogService::new(repository.clone(), repository);
    handlers::router(service)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = json_body(response.into_body()).await;
    (status, body)
}

fn data_ids(body: &Value, key: &str) -> Vec<i64> {
    body[key]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_list_products_returns_the_envelope() {
    let (status, body) = get(test_app(), "/products/all").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
    assert_eq!(body["totalPages"], 1);

    let first = &body["data"][0];
    for key in ["id", "title", "price", "discont_price", "categoryId", "createdAt"] {
        assert!(first.get(key).is_some(), "missing key {key}");
    }
}

#[tokio::test]
async fn test_list_products_defaults_to_newest_first() {
    let (_, body) = get(test_app(), "/products/all").await;
    assert_eq!(data_ids(&body, "data"), vec![5, 4, 3, 2, 1]);
}

#[tokio::test]
async fn test_list_products_sorts_by_effective_price() {
    let (_, body) = get(test_app(), "/products/all?sort=low-high").await;
    assert_eq!(data_ids(&body, "data"), vec![5, 4, 1, 2, 3]);

    let (_, body) = get(test_app(), "/products/all?sort=high-low").await;
    assert_eq!(data_ids(&body, "data"), vec![3, 2, 1, 4, 5]);
}

#[tokio::test]
async fn test_unknown_sort_behaves_like_newest() {
    let (_, newest) = get(test_app(), "/products/all?sort=newest").await;
    let (_, unknown) = get(test_app(), "/products/all?sort=priciest").await;
    assert_eq!(newest, unknown);
}

#[tokio::test]
async fn test_price_bounds_select_by_effective_price() {
    let (status, body) = get(test_app(), "/products/all?priceFrom=50&priceTo=150").await;

    assert_eq!(status, StatusCode::OK);
    // product 1 by regular price, 2 and 4 by discounted price
    assert_eq!(body["total"], 3);
    assert_eq!(data_ids(&body, "data"), vec![4, 2, 1]);
}

#[tokio::test]
async fn test_discount_filter_excludes_regular_products() {
    let (_, body) = get(test_app(), "/products/all?discont=true").await;
    assert_eq!(body["total"], 2);
    assert_eq!(data_ids(&body, "data"), vec![4, 2]);

    // bounds apply to the discounted price only
    let (_, body) = get(test_app(), "/products/all?discont=true&priceFrom=100").await;
    assert_eq!(data_ids(&body, "data"), vec![2]);
}

#[tokio::test]
async fn test_pagination_slices_and_reports_pages() {
    let (_, body) = get(test_app(), "/products/all?limit=2").await;
    assert_eq!(body["total"], 5);
    assert_eq!(body["totalPages"], 3);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (_, body) = get(test_app(), "/products/all?limit=2&page=3").await;
    assert_eq!(data_ids(&body, "data"), vec![1]);

    // out of range pages keep the true total but carry no rows
    let (status, body) = get(test_app(), "/products/all?limit=2&page=99").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_query_values_degrade_to_defaults() {
    let (status, body) = get(
        test_app(),
        "/products/all?page=abc&limit=zz&priceFrom=cheap&discont=maybe",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_find_product_returns_a_one_element_array() {
    let (status, body) = get(test_app(), "/products/3").await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["id"], 3);
    assert!(products[0].get("discont_price").is_some());
}

#[tokio::test]
async fn test_find_product_rejects_malformed_ids() {
    let (status, body) = get(test_app(), "/products/abc").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "status": "ERR", "message": "wrong id" }));
}

#[tokio::test]
async fn test_find_product_reports_missing_products() {
    let (status, body) = get(test_app(), "/products/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "status": "ERR", "message": "product not found" }));
}

#[tokio::test]
async fn test_list_categories_pages_in_id_order() {
    let (status, body) = get(test_app(), "/categories/all?limit=2&page=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
    assert_eq!(body["totalPages"], 3);
    assert_eq!(data_ids(&body, "data"), vec![3, 4]);
}

#[tokio::test]
async fn test_popular_categories_cap_at_four() {
    let (status, body) = get(test_app(), "/categories/popular").await;

    assert_eq!(status, StatusCode::OK);
    let categories = body.as_array().unwrap();
    assert_eq!(categories.len(), 4);
    assert_eq!(categories[0]["title"], "Annuals");
}

#[tokio::test]
async fn test_category_payload_nests_the_product_page() {
    let (status, body) = get(
        test_app(),
        "/categories/1?priceFrom=50&priceTo=150&sort=low-high",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"]["id"], 1);
    assert_eq!(body["category"]["title"], "Annuals");

    // category 1 keeps products 1 (regular 100) and 2 (discounted 120)
    assert_eq!(body["data"]["total"], 2);
    assert_eq!(body["data"]["totalPages"], 1);
    assert_eq!(data_ids(&body["data"], "products"), vec![1, 2]);
}

#[tokio::test]
async fn test_category_rejects_malformed_ids() {
    for uri in ["/categories/abc", "/categories/0", "/categories/-3"] {
        let (status, body) = get(test_app(), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({ "message": "wrong id" }), "{uri}");
    }
}

#[tokio::test]
async fn test_category_not_found_uses_the_message_template() {
    let (status, body) = get(test_app(), "/categories/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Category with id=42 not found" }));
}
