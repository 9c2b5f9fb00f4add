//! Repository traits for catalog data, plus an in-memory implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CatalogResult;
use crate::models::{Category, Product};
use crate::predicate::Predicate;
use crate::sort::ProductOrdering;

/// Read access to products.
///
/// Implementations receive the selection predicate in AST form and are
/// responsible for translating it to their own query language. The count
/// and the page slice are separate calls so they can run concurrently.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Count products matching a predicate.
    async fn count(&self, predicate: &Predicate) -> CatalogResult<u64>;

    /// Fetch one ordered page of products matching a predicate.
    async fn find_page(
        &self,
        predicate: &Predicate,
        ordering: ProductOrdering,
        offset: u64,
        limit: u64,
    ) -> CatalogResult<Vec<Product>>;

    /// Fetch a product by id.
    async fn find_by_id(&self, id: i32) -> CatalogResult<Option<Product>>;
}

/// Read access to categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Total number of categories.
    async fn count(&self) -> CatalogResult<u64>;

    /// Fetch one page of categories in id order.
    async fn find_page(&self, offset: u64, limit: u64) -> CatalogResult<Vec<Category>>;

    /// Fetch up to `limit` featured categories.
    async fn find_popular(&self, limit: u64) -> CatalogResult<Vec<Category>>;

    /// Fetch a category by id.
    async fn find_by_id(&self, id: i32) -> CatalogResult<Option<Category>>;
}

/// In-memory repository over plain vectors.
///
/// Evaluates the predicate AST directly with [`Predicate::matches`], which
/// makes it the reference implementation for handler and service tests.
/// Popular categories are served in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogRepository {
    products: Arc<RwLock<Vec<Product>>>,
    categories: Arc<RwLock<Vec<Category>>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository seeded with fixed data.
    pub fn with_data(categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
            categories: Arc::new(RwLock::new(categories)),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalogRepository {
    async fn count(&self, predicate: &Predicate) -> CatalogResult<u64> {
        let products = self.products.read().await;
        Ok(products.iter().filter(|p| predicate.matches(p)).count() as u64)
    }

    async fn find_page(
        &self,
        predicate: &Predicate,
        ordering: ProductOrdering,
        offset: u64,
        limit: u64,
    ) -> CatalogResult<Vec<Product>> {
        let products = self.products.read().await;
        let mut matching: Vec<Product> = products
            .iter()
            .filter(|p| predicate.matches(p))
            .cloned()
            .collect();

        match ordering {
            ProductOrdering::CreatedAtDesc => {
                matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            }
            ProductOrdering::EffectivePriceAsc => {
                matching.sort_by(|a, b| a.effective_price().total_cmp(&b.effective_price()));
            }
            ProductOrdering::EffectivePriceDesc => {
                matching.sort_by(|a, b| b.effective_price().total_cmp(&a.effective_price()));
            }
        }

        Ok(matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> CatalogResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCatalogRepository {
    async fn count(&self) -> CatalogResult<u64> {
        let categories = self.categories.read().await;
        Ok(categories.len() as u64)
    }

    async fn find_page(&self, offset: u64, limit: u64) -> CatalogResult<Vec<Category>> {
        let categories = self.categories.read().await;
        let mut page: Vec<Category> = categories.to_vec();
        page.sort_by_key(|c| c.id);
        Ok(page
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn find_popular(&self, limit: u64) -> CatalogResult<Vec<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.iter().take(limit as usize).cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> CatalogResult<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.iter().find(|c| c.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::filter::FilterParams;
    use crate::predicate::build_price_predicate;

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

    fn product(id: i32, price: f64, discont_price: Option<f64>) -> Product {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(id as i64);
        Product {
            id,
            title: format!("product {id}"),
            price,
            discont_price,
            description: String::new(),
            image: format!("/product_img/{id}.jpg"),
            category_id: 1,
            created_at: created,
            updated_at: created,
        }
    }

    fn seeded() -> InMemoryCatalogRepository {
        InMemoryCatalogRepository::with_data(
            vec![
                category(1, "Annuals"),
                category(2, "Tools"),
                category(3, "Pots"),
                category(4, "Seeds"),
                category(5, "Fertilizer"),
            ],
            vec![
                product(1, 100.0, None),
                product(2, 200.0, Some(120.0)),
                product(3, 300.0, None),
                product(4, 400.0, Some(60.0)),
            ],
        )
    }

    #[tokio::test]
    async fn count_honors_the_predicate() {
        let repo = seeded();
        let everything = ProductRepository::count(&repo, &Predicate::True)
            .await
            .unwrap();
        assert_eq!(everything, 4);

        let discounted = build_price_predicate(&FilterParams {
            price_from: None,
            price_to: None,
            discounted_only: true,
        });
        assert_eq!(
            ProductRepository::count(&repo, &discounted).await.unwrap(),
            2
        );
    }

    #[tokio::test]
    async fn pages_are_ordered_by_effective_price() {
        let repo = seeded();
        let page = ProductRepository::find_page(
            &repo,
            &Predicate::True,
            ProductOrdering::EffectivePriceAsc,
            0,
            10,
        )
        .await
        .unwrap();
        let ids: Vec<i32> = page.iter().map(|p| p.id).collect();
        // effective prices: 4 -> 60, 1 -> 100, 2 -> 120, 3 -> 300
        assert_eq!(ids, vec![4, 1, 2, 3]);
    }

    #[tokio::test]
    async fn newest_ordering_slices_by_offset_and_limit() {
        let repo = seeded();
        let page = ProductRepository::find_page(
            &repo,
            &Predicate::True,
            ProductOrdering::CreatedAtDesc,
            1,
            2,
        )
        .await
        .unwrap();
        let ids: Vec<i32> = page.iter().map(|p| p.id).collect();
        // newest first is 4, 3, 2, 1; skip one, take two
        assert_eq!(ids, vec![3, 2]);
    }

    #[tokio::test]
    async fn popular_caps_and_keeps_insertion_order() {
        let repo = seeded();
        let popular = repo.find_popular(4).await.unwrap();
        let ids: Vec<i32> = popular.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn category_pages_come_in_id_order() {
        let repo = seeded();
        let page = CategoryRepository::find_page(&repo, 2, 2).await.unwrap();
        let ids: Vec<i32> = page.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown_ids() {
        let repo = seeded();
        assert!(
            ProductRepository::find_by_id(&repo, 99)
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            CategoryRepository::find_by_id(&repo, 2)
                .await
                .unwrap()
                .is_some()
        );
    }
}
