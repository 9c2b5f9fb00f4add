//! Selection predicate construction, the core of the catalog query layer.
//!
//! Filters never reach the storage engine directly. They are first compiled
//! into a small boolean AST over product fields, and each repository backend
//! translates that AST into its own query form. The interesting rule lives
//! here: the discount flag decides which price column a bound applies to.

use crate::filter::FilterParams;
use crate::models::Product;

/// Product field a predicate leaf refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Price,
    DiscountPrice,
    CategoryId,
}

/// Boolean selection condition over product rows.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Matches every row
    True,
    /// Integer equality, used for category scoping
    Equals(Field, i32),
    /// Inclusive numeric range; either side may be open
    Range {
        field: Field,
        min: Option<f64>,
        max: Option<f64>,
    },
    IsNull(Field),
    IsNotNull(Field),
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
}

impl Predicate {
    /// Narrow a predicate to one category by AND-ing an equality on top.
    pub fn scoped_to_category(self, category_id: i32) -> Predicate {
        Predicate::And(vec![
            Predicate::Equals(Field::CategoryId, category_id),
            self,
        ])
    }

    /// Evaluate the predicate against a single product.
    ///
    /// These are the reference semantics backing the in-memory repository;
    /// the SQL translation in the Postgres backend must agree with them.
    /// A range over an absent `discont_price` matches nothing, like the
    /// comparison operators it translates to.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Predicate::True => true,
            Predicate::Equals(field, value) => match field {
                Field::CategoryId => product.category_id == *value,
                Field::Price => product.price == f64::from(*value),
                Field::DiscountPrice => product.discont_price == Some(f64::from(*value)),
            },
            Predicate::Range { field, min, max } => {
                let Some(actual) = field_value(product, *field) else {
                    return false;
                };
                min.is_none_or(|bound| actual >= bound) && max.is_none_or(|bound| actual <= bound)
            }
            Predicate::IsNull(field) => field_value(product, *field).is_none(),
            Predicate::IsNotNull(field) => field_value(product, *field).is_some(),
            Predicate::And(children) => children.iter().all(|child| child.matches(product)),
            Predicate::Or(children) => children.iter().any(|child| child.matches(product)),
        }
    }
}

fn field_value(product: &Product, field: Field) -> Option<f64> {
    match field {
        Field::Price => Some(product.price),
        Field::DiscountPrice => product.discont_price,
        Field::CategoryId => Some(f64::from(product.category_id)),
    }
}

/// Build the price selection predicate for a parsed filter.
///
/// With the discount flag set, only the discounted price is consulted and
/// products without a discount are excluded no matter what their regular
/// price is. Without it, a product qualifies by its discounted price when
/// one exists and by its regular price otherwise, written out as an
/// explicit disjunction so any backend can translate it. No bounds and no
/// flag means no filtering at all.
///
/// The result is a pure function of the filter: equal inputs produce
/// structurally equal predicates.
pub fn build_price_predicate(filter: &FilterParams) -> Predicate {
    let range = |field: Field| Predicate::Range {
        field,
        min: filter.price_from,
        max: filter.price_to,
    };

    if filter.discounted_only {
        if filter.has_bounds() {
            Predicate::And(vec![
                Predicate::IsNotNull(Field::DiscountPrice),
                range(Field::DiscountPrice),
            ])
        } else {
            Predicate::IsNotNull(Field::DiscountPrice)
        }
    } else if filter.has_bounds() {
        Predicate::Or(vec![
            Predicate::And(vec![
                Predicate::IsNotNull(Field::DiscountPrice),
                range(Field::DiscountPrice),
            ]),
            Predicate::And(vec![
                Predicate::IsNull(Field::DiscountPrice),
                range(Field::Price),
            ]),
        ])
    } else {
        Predicate::True
    }
}
