//! Price and discount filter parsing.

/// Parsed price filtering parameters.
///
/// Bounds are inclusive and independent; an absent side leaves that side
/// unconstrained. `priceFrom > priceTo` is deliberately not rejected here,
/// the resulting predicate simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FilterParams {
    /// Inclusive lower price bound
    pub price_from: Option<f64>,
    /// Inclusive upper price bound
    pub price_to: Option<f64>,
    /// Restrict the selection to discounted products
    pub discounted_only: bool,
}

impl FilterParams {
    /// Parse raw query values. Non-numeric or negative bounds are dropped,
    /// mirroring the lenient pagination handling.
    pub fn from_raw(
        price_from: Option<&str>,
        price_to: Option<&str>,
        discont: Option<&str>,
    ) -> Self {
        Self {
            price_from: parse_bound(price_from),
            price_to: parse_bound(price_to),
            discounted_only: parse_flag(discont),
        }
    }

    /// True when at least one price bound is present.
    pub fn has_bounds(&self) -> bool {
        self.price_from.is_some() || self.price_to.is_some()
    }
}

// A bound must be a finite, non-negative number to take effect.
fn parse_bound(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value >= 0.0)
}

// `discont=true` and `discont=1` (any case) enable the discount filter.
fn parse_flag(raw: Option<&str>) -> bool {
    matches!(
        raw.map(str::trim),
        Some(value) if value.eq_ignore_ascii_case("true") || value == "1"
    )
}
