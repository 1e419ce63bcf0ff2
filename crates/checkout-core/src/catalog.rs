//! # Catalog Module
//!
//! The immutable price/discount table that drives a checkout.
//!
//! ## Construction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Construction                               │
//! │                                                                         │
//! │  CatalogBuilder::new()                                                  │
//! │       │                                                                 │
//! │       ├── .price('A', 20)          unit price per item code             │
//! │       ├── .price('B', 50)                                               │
//! │       ├── .discount('B', rule)     optional "buy N pay M" rule          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  .build() ── validates ──► PricingCatalog (immutable)                   │
//! │       │                                                                 │
//! │       ├── discount without price?      → DiscountWithoutPrice           │
//! │       ├── group_size == 0?             → InvalidDiscountRule            │
//! │       ├── paid_count > group_size?     → InvalidDiscountRule            │
//! │       └── price > Money::MAX?          → PriceOutOfRange                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All integrity checks happen here, at build time. Checkout itself never
//! re-validates the catalog: once a `PricingCatalog` exists, its invariants
//! hold for its whole lifetime, and it is safe to share read-only across any
//! number of concurrent checkout calls.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::money::Money;

// =============================================================================
// Discount Rule
// =============================================================================

/// A "buy `group_size`, pay for `paid_count`" bulk pricing rule.
///
/// Named fields instead of a bare pair so group size and paid count can
/// never be swapped by positional mistake.
///
/// ## Example
/// ```rust
/// use checkout_core::catalog::DiscountRule;
///
/// // Every 5 units, pay for only 3
/// let rule = DiscountRule::new(5, 3);
/// assert_eq!(rule.group_size, 5);
/// assert_eq!(rule.paid_count, 3);
/// ```
///
/// ## Invariants (enforced at catalog build time)
/// - `group_size > 0`
/// - `paid_count <= group_size` (anything else would be a penalty)
///
/// `paid_count == group_size` (a no-op rule) and `paid_count == 0`
/// (free groups) are both allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRule {
    /// Number of units that form one discounted group.
    pub group_size: u32,

    /// Number of units actually paid for per full group.
    pub paid_count: u32,
}

impl DiscountRule {
    /// Creates a discount rule. Validation happens at catalog build time.
    #[inline]
    pub const fn new(group_size: u32, paid_count: u32) -> Self {
        DiscountRule {
            group_size,
            paid_count,
        }
    }

    /// Whether the rule satisfies its invariants.
    #[inline]
    pub const fn is_well_formed(&self) -> bool {
        self.group_size > 0 && self.paid_count <= self.group_size
    }
}

// =============================================================================
// Pricing Catalog
// =============================================================================

/// The immutable price and discount table for a checkout.
///
/// ## Invariants
/// - Every code in the discount table also has a price entry
/// - Every discount rule is well-formed (see [`DiscountRule`])
/// - Every price fits the representable money range
///
/// These hold by construction: the only way to obtain a `PricingCatalog`
/// is through [`CatalogBuilder::build`], which rejects violations.
/// The catalog exposes no mutation methods, so any number of checkout
/// calls may share one instance concurrently.
#[derive(Debug, Clone, Serialize)]
pub struct PricingCatalog {
    /// Unit price per item code.
    prices: BTreeMap<char, Money>,

    /// Optional bulk discount rule per item code. Not every priced item
    /// has a rule; every ruled item has a price.
    discounts: BTreeMap<char, DiscountRule>,
}

impl PricingCatalog {
    /// Returns the unit price for an item code, if the code is known.
    #[inline]
    pub fn price_of(&self, code: char) -> Option<Money> {
        self.prices.get(&code).copied()
    }

    /// Returns the discount rule for an item code, if one exists.
    #[inline]
    pub fn discount_of(&self, code: char) -> Option<DiscountRule> {
        self.discounts.get(&code).copied()
    }

    /// Whether an item code has a price entry.
    #[inline]
    pub fn contains(&self, code: char) -> bool {
        self.prices.contains_key(&code)
    }

    /// Iterates over all known item codes.
    pub fn codes(&self) -> impl Iterator<Item = char> + '_ {
        self.prices.keys().copied()
    }

    /// Iterates over all `(code, unit price)` entries.
    pub fn price_entries(&self) -> impl Iterator<Item = (char, Money)> + '_ {
        self.prices.iter().map(|(&code, &price)| (code, price))
    }

    /// Number of priced item codes.
    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Whether the catalog prices no items at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// The classic demo catalog: `A=20`, `B=50` with a buy-5-pay-3 rule,
    /// `C=30`.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::catalog::PricingCatalog;
    /// use checkout_core::checkout::checkout;
    ///
    /// let catalog = PricingCatalog::demo();
    /// let total = checkout(&catalog, "ABBACBBAB").unwrap();
    /// assert_eq!(total.minor_units(), 240);
    /// ```
    pub fn demo() -> Self {
        let mut prices = BTreeMap::new();
        prices.insert('A', Money::from_minor_units(20));
        prices.insert('B', Money::from_minor_units(50));
        prices.insert('C', Money::from_minor_units(30));

        let mut discounts = BTreeMap::new();
        discounts.insert('B', DiscountRule::new(5, 3));

        PricingCatalog { prices, discounts }
    }
}

// =============================================================================
// Catalog Builder
// =============================================================================

/// Builder for [`PricingCatalog`].
///
/// Collects price and discount entries, then validates everything in one
/// place at [`build`](CatalogBuilder::build). Re-declaring a code replaces
/// the earlier entry.
///
/// ## Example
/// ```rust
/// use checkout_core::catalog::{CatalogBuilder, DiscountRule};
///
/// let catalog = CatalogBuilder::new()
///     .price('A', 20)
///     .price('B', 50)
///     .discount('B', DiscountRule::new(5, 3))
///     .price('C', 30)
///     .build()
///     .unwrap();
///
/// assert!(catalog.contains('A'));
/// assert!(catalog.discount_of('B').is_some());
/// assert!(catalog.discount_of('A').is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    prices: BTreeMap<char, u32>,
    discounts: BTreeMap<char, DiscountRule>,
}

impl CatalogBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        CatalogBuilder::default()
    }

    /// Sets the unit price (in minor units) for an item code.
    ///
    /// Prices are non-negative by type; a price of zero (free item) is
    /// allowed. Range is checked at build time.
    pub fn price(mut self, code: char, minor_units: u32) -> Self {
        self.prices.insert(code, minor_units);
        self
    }

    /// Attaches a bulk discount rule to an item code.
    pub fn discount(mut self, code: char, rule: DiscountRule) -> Self {
        self.discounts.insert(code, rule);
        self
    }

    /// Validates all entries and produces the immutable catalog.
    ///
    /// ## Errors
    /// - [`CatalogError::DiscountWithoutPrice`] if a rule references an
    ///   unpriced code
    /// - [`CatalogError::InvalidDiscountRule`] if a rule is malformed
    /// - [`CatalogError::PriceOutOfRange`] if a price exceeds [`Money::MAX`]
    pub fn build(self) -> CatalogResult<PricingCatalog> {
        for (&code, rule) in &self.discounts {
            if !self.prices.contains_key(&code) {
                return Err(CatalogError::DiscountWithoutPrice { code });
            }
            if !rule.is_well_formed() {
                return Err(CatalogError::InvalidDiscountRule {
                    code,
                    group_size: rule.group_size,
                    paid_count: rule.paid_count,
                });
            }
        }

        let mut prices = BTreeMap::new();
        for (&code, &minor_units) in &self.prices {
            if minor_units > i32::MAX as u32 {
                return Err(CatalogError::PriceOutOfRange { code });
            }
            prices.insert(code, Money::from_minor_units(minor_units as i32));
        }

        debug!(
            codes = prices.len(),
            discounts = self.discounts.len(),
            "pricing catalog constructed"
        );

        Ok(PricingCatalog {
            prices,
            discounts: self.discounts,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
