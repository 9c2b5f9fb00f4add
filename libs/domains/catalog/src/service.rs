//! Catalog query orchestration.

use std::sync::Arc;

use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::filter::FilterParams;
use crate::models::{Category, CategoryWithProducts, Paginated, Product, ProductPage};
use crate::pagination::PageRequest;
use crate::predicate::build_price_predicate;
use crate::repository::{CategoryRepository, ProductRepository};
use crate::sort::SortKey;

/// Number of categories served by the popular listing.
const POPULAR_LIMIT: u64 = 4;

/// Composes filter, sort and pagination resolution against the repositories.
///
/// Every operation builds its predicate once from its own inputs; the count
/// and the page slice are issued concurrently against that same predicate.
/// No state is kept across calls.
pub struct CatalogService<P, C> {
    products: Arc<P>,
    categories: Arc<C>,
}

impl<P, C> CatalogService<P, C>
where
    P: ProductRepository,
    C: CategoryRepository,
{
    pub fn new(products: P, categories: C) -> Self {
        Self {
            products: Arc::new(products),
            categories: Arc::new(categories),
        }
    }

    /// One ordered, filtered page of the whole product collection.
    pub async fn list_products(
        &self,
        filter: &FilterParams,
        sort: SortKey,
        page: PageRequest,
    ) -> CatalogResult<Paginated<Product>> {
        let predicate = build_price_predicate(filter);
        let ordering = sort.ordering();
        debug!(?predicate, ?ordering, ?page, "listing products");

        let (total, data) = tokio::try_join!(
            self.products.count(&predicate),
            self.products
                .find_page(&predicate, ordering, page.offset(), page.limit),
        )?;

        Ok(Paginated {
            total,
            total_pages: page.total_pages(total),
            data,
        })
    }

    /// Look up a single product by its raw path id.
    pub async fn find_product(&self, raw_id: &str) -> CatalogResult<Product> {
        let id = parse_id(raw_id).ok_or_else(|| CatalogError::InvalidId(raw_id.to_string()))?;
        self.products
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::ProductNotFound(id))
    }

    /// Up to four categories for the landing page.
    pub async fn popular_categories(&self) -> CatalogResult<Vec<Category>> {
        self.categories.find_popular(POPULAR_LIMIT).await
    }

    /// One page of all categories.
    pub async fn list_categories(&self, page: PageRequest) -> CatalogResult<Paginated<Category>> {
        let (total, data) = tokio::try_join!(
            self.categories.count(),
            self.categories.find_page(page.offset(), page.limit),
        )?;

        Ok(Paginated {
            total,
            total_pages: page.total_pages(total),
            data,
        })
    }

    /// A category plus one filtered page of its products.
    ///
    /// The path id must be a positive integer. The category lookup runs
    /// concurrently with the product queries; an absent category wins over
    /// whatever the product side returned.
    pub async fn category_products(
        &self,
        raw_id: &str,
        filter: &FilterParams,
        sort: SortKey,
        page: PageRequest,
    ) -> CatalogResult<CategoryWithProducts> {
        let id = parse_id(raw_id)
            .filter(|id| *id > 0)
            .ok_or_else(|| CatalogError::InvalidId(raw_id.to_string()))?;

        let predicate = build_price_predicate(filter).scoped_to_category(id);
        let ordering = sort.ordering();
        debug!(category_id = id, ?predicate, "listing category products");

        let (category, total, products) = tokio::try_join!(
            self.categories.find_by_id(id),
            self.products.count(&predicate),
            self.products
                .find_page(&predicate, ordering, page.offset(), page.limit),
        )?;

        let category = category.ok_or(CatalogError::CategoryNotFound(id))?;

        Ok(CategoryWithProducts {
            category,
            data: ProductPage {
                total,
                total_pages: page.total_pages(total),
                products,
            },
        })
    }
}

fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}
