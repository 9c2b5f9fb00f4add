//! Catalog Domain
//!
//! Read-only browsing over products and categories. Raw query-string input
//! (price bounds, discount flag, sort key, page and limit, optional category
//! scope) is normalized into a typed selection predicate plus an ordering,
//! executed against a repository, and shaped into paginated JSON envelopes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, error shapes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← query orchestration (count + page slice)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Predicate  │  ← filter/sort/pagination resolution
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← data access (trait + Postgres / in-memory)
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{
//!     handlers,
//!     repository::InMemoryCatalogRepository,
//!     service::CatalogService,
//! };
//!
//! // Create repository and service
//! let repository = InMemoryCatalogRepository::new();
//! let service = CatalogService::new(repository.clone(), repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod postgres;
pub mod predicate;
pub mod repository;
pub mod service;
pub mod sort;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult};
pub use filter::FilterParams;
pub use models::{Category, CategoryWithProducts, Paginated, Product, ProductPage};
pub use pagination::PageRequest;
pub use postgres::PgCatalogRepository;
pub use predicate::{Field, Predicate, build_price_predicate};
pub use repository::{CategoryRepository, InMemoryCatalogRepository, ProductRepository};
pub use service::CatalogService;
pub use sort::{ProductOrdering, SortKey};
