//! Postgres-backed catalog repositories built on Sea-ORM.

use async_trait::async_trait;
use sea_orm::sea_query::{Condition, Expr, Func, SimpleExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};

use crate::entity::{category, product};
use crate::error::CatalogResult;
use crate::models::{Category, Product};
use crate::predicate::{Field, Predicate};
use crate::repository::{CategoryRepository, ProductRepository};
use crate::sort::ProductOrdering;

/// Postgres implementation of both catalog repositories.
///
/// The predicate AST is translated into a Sea-ORM condition tree, so the
/// selection semantics stay identical to the in-memory evaluation.
#[derive(Debug, Clone)]
pub struct PgCatalogRepository {
    db: DatabaseConnection,
}

impl PgCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn condition(predicate: &Predicate) -> Condition {
    match predicate {
        Predicate::True => Condition::all(),
        Predicate::Equals(field, value) => Condition::all().add(column(*field).eq(*value)),
        Predicate::Range { field, min, max } => {
            let mut range = Condition::all();
            if let Some(min) = min {
                range = range.add(column(*field).gte(*min));
            }
            if let Some(max) = max {
                range = range.add(column(*field).lte(*max));
            }
            range
        }
        Predicate::IsNull(field) => Condition::all().add(column(*field).is_null()),
        Predicate::IsNotNull(field) => Condition::all().add(column(*field).is_not_null()),
        Predicate::And(children) => children
            .iter()
            .fold(Condition::all(), |cond, child| cond.add(condition(child))),
        Predicate::Or(children) => children
            .iter()
            .fold(Condition::any(), |cond, child| cond.add(condition(child))),
    }
}

fn column(field: Field) -> product::Column {
    match field {
        Field::Price => product::Column::Price,
        Field::DiscountPrice => product::Column::DiscontPrice,
        Field::CategoryId => product::Column::CategoryId,
    }
}

// COALESCE(discont_price, price), the effective price used for ordering.
fn effective_price() -> SimpleExpr {
    Func::coalesce::<_, Expr>([
        Expr::col(product::Column::DiscontPrice).into(),
        Expr::col(product::Column::Price).into(),
    ])
    .into()
}

fn apply_ordering(
    select: Select<product::Entity>,
    ordering: ProductOrdering,
) -> Select<product::Entity> {
    match ordering {
        ProductOrdering::CreatedAtDesc => select.order_by_desc(product::Column::CreatedAt),
        ProductOrdering::EffectivePriceAsc => select.order_by_asc(effective_price()),
        ProductOrdering::EffectivePriceDesc => select.order_by_desc(effective_price()),
    }
}

#[async_trait]
impl ProductRepository for PgCatalogRepository {
    async fn count(&self, predicate: &Predicate) -> CatalogResult<u64> {
        let total = product::Entity::find()
            .filter(condition(predicate))
            .count(&self.db)
            .await?;
        Ok(total)
    }

    async fn find_page(
        &self,
        predicate: &Predicate,
        ordering: ProductOrdering,
        offset: u64,
        limit: u64,
    ) -> CatalogResult<Vec<Product>> {
        let rows = apply_ordering(product::Entity::find().filter(condition(predicate)), ordering)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> CatalogResult<Option<Product>> {
        let row = product::Entity::find_by_id(id).one(&self.db).await?;
        Ok(row.map(Product::from))
    }
}

#[async_trait]
impl CategoryRepository for PgCatalogRepository {
    async fn count(&self) -> CatalogResult<u64> {
        let total = category::Entity::find().count(&self.db).await?;
        Ok(total)
    }

    async fn find_page(&self, offset: u64, limit: u64) -> CatalogResult<Vec<Category>> {
        let rows = category::Entity::find()
            .order_by_asc(category::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_popular(&self, limit: u64) -> CatalogResult<Vec<Category>> {
        let rows = category::Entity::find().limit(limit).all(&self.db).await?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> CatalogResult<Option<Category>> {
        let row = category::Entity::find_by_id(id).one(&self.db).await?;
        Ok(row.map(Category::from))
    }
}
