//! Domain models and wire DTOs for the catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A catalog product as served to clients.
///
/// `discont_price` keeps its storage spelling on the wire while the other
/// fields use camelCase; existing consumers depend on both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier
    pub id: i32,
    /// Display name
    pub title: String,
    /// Regular price
    #[schema(example = 500.0)]
    pub price: f64,
    /// Discounted price when the product is on sale
    #[serde(rename = "discont_price")]
    #[schema(example = 350.0)]
    pub discont_price: Option<f64>,
    /// Full description text
    pub description: String,
    /// Image path served by the static file host
    pub image: String,
    /// Owning category
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Discounted price when present, else the regular price.
    pub fn effective_price(&self) -> f64 {
        self.discont_price.unwrap_or(self.price)
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier
    pub id: i32,
    /// Display name
    pub title: String,
    /// Image path served by the static file host
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Pagination envelope shared by the list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Paginated<T> {
    /// Total number of rows matching the query, across all pages
    pub total: u64,
    /// `ceil(total / limit)`; zero when nothing matches
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
    /// The requested page slice
    pub data: Vec<T>,
}

/// One filtered page of a category's products, with its pagination summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductPage {
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
    pub products: Vec<Product>,
}

/// Response shape for category-scoped browsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryWithProducts {
    pub category: Category,
    pub data: ProductPage,
}

/// Query parameters accepted by the paginated category listing.
///
/// Values arrive as free-form strings and are normalized leniently; anything
/// malformed falls back to a default instead of failing the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number, defaults to 1
    #[param(value_type = Option<u64>, example = 1)]
    pub page: Option<String>,
    /// Page size, defaults to 20 and is capped at 100
    #[param(value_type = Option<u64>, example = 20)]
    pub limit: Option<String>,
}

/// Query parameters accepted by the product listings: pagination plus price
/// filtering and ordering.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// 1-based page number, defaults to 1
    #[param(value_type = Option<u64>, example = 1)]
    pub page: Option<String>,
    /// Page size, defaults to 20 and is capped at 100
    #[param(value_type = Option<u64>, example = 20)]
    pub limit: Option<String>,
    /// Inclusive lower bound on the effective price
    #[serde(rename = "priceFrom")]
    #[param(value_type = Option<f64>)]
    pub price_from: Option<String>,
    /// Inclusive upper bound on the effective price
    #[serde(rename = "priceTo")]
    #[param(value_type = Option<f64>)]
    pub price_to: Option<String>,
    /// When set to `true` or `1`, only discounted products are returned
    #[param(value_type = Option<bool>)]
    pub discont: Option<String>,
    /// One of `newest`, `low-high`, `high-low`; anything else sorts by newest
    #[param(example = "low-high")]
    pub sort: Option<String>,
}

/// Error body returned by the product endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductErrorBody {
    /// Always `"ERR"`
    #[schema(example = "ERR")]
    pub status: String,
    pub message: String,
}

impl ProductErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "ERR".to_string(),
            message: message.into(),
        }
    }
}

/// Error body returned by the category endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample_product() -> Product {
        Product {
            id: 7,
            title: "Secateurs".to_string(),
            price: 199.0,
            discont_price: Some(149.0),
            description: "Bypass secateurs for live stems".to_string(),
            image: "/product_img/7.jpg".to_string(),
            category_id: 2,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 3, 2, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn effective_price_prefers_discount() {
        let mut product = sample_product();
        assert_eq!(product.effective_price(), 149.0);

        product.discont_price = None;
        assert_eq!(product.effective_price(), 199.0);
    }

    #[test]
    fn product_serializes_with_wire_field_names() {
        let value = serde_json::to_value(sample_product()).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "id",
            "title",
            "price",
            "discont_price",
            "description",
            "image",
            "categoryId",
            "createdAt",
            "updatedAt",
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert!(!object.contains_key("category_id"));
        assert!(!object.contains_key("discontPrice"));
    }

    #[test]
    fn envelope_uses_total_pages_key() {
        let envelope = Paginated {
            total: 21,
            total_pages: 2,
            data: vec![sample_product()],
        };
        let value = serde_json::to_value(envelope).unwrap();

        assert_eq!(value["total"], 21);
        assert_eq!(value["totalPages"], 2);
        assert_eq!(value["data"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn product_error_body_is_tagged_err() {
        let value = serde_json::to_value(ProductErrorBody::new("wrong id")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "status": "ERR", "message": "wrong id" })
        );
    }
}
