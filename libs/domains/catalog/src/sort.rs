//! Sort key resolution for product listings.

use strum::{Display, EnumString};

/// Client-facing sort keys.
///
/// Resolution is a closed enumeration: anything that is not an exact known
/// key falls back to [`SortKey::Newest`], so unexpected input can never
/// select an unintended ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum SortKey {
    /// Most recently created first
    #[default]
    Newest,
    /// Cheapest effective price first
    LowHigh,
    /// Most expensive effective price first
    HighLow,
}

impl SortKey {
    /// Parse a raw query value, falling back to the default ordering.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok()).unwrap_or_default()
    }

    /// The concrete ordering this key stands for.
    pub fn ordering(self) -> ProductOrdering {
        match self {
            SortKey::Newest => ProductOrdering::CreatedAtDesc,
            SortKey::LowHigh => ProductOrdering::EffectivePriceAsc,
            SortKey::HighLow => ProductOrdering::EffectivePriceDesc,
        }
    }
}

/// Ordering applied to a product query.
///
/// The effective price is the discounted price when present, else the
/// regular price, so a backend must order by that combined expression
/// rather than by either column alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductOrdering {
    CreatedAtDesc,
    EffectivePriceAsc,
    EffectivePriceDesc,
}
