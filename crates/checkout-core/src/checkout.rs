//! # Checkout Module
//!
//! Prices a basket string against a [`PricingCatalog`].
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      checkout("ABBACBBAB")                              │
//! │                                                                         │
//! │  trim ends ──► "ABBACBBAB"                                              │
//! │       │                                                                 │
//! │       ▼   for each catalog code (order does not matter):                │
//! │  count 'A' = 3 ──► cost 3 × 20 = 60  ──► strip 'A' ──► "BBCBBB"        │
//! │  count 'B' = 5 ──► rule (5,3): 1 group × 3 × 50 = 150                  │
//! │                    remainder 0 × 50 = 0 ──► strip 'B' ──► "C"          │
//! │  count 'C' = 1 ──► cost 1 × 30 = 30  ──► strip 'C' ──► ""              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  leftover chars? ── yes ──► MalformedInput                              │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  total = 60 + 150 + 30 = 240                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Per-item costs are additive and item codes are disjoint, so the iteration
//! order over catalog codes cannot affect the result. Every multiplication
//! and addition is checked before it commits; the total never wraps.
//!
//! Only leading/trailing whitespace is trimmed. Whitespace embedded inside
//! the basket is treated like any other unknown character and reported as
//! `MalformedInput`.

use tracing::{debug, trace};

use crate::catalog::{DiscountRule, PricingCatalog};
use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;

// =============================================================================
// Checkout
// =============================================================================

/// Computes the total price of a basket of item codes.
///
/// The catalog is read-only; each call works on its own copy of the basket
/// and its own running total, so one catalog can serve any number of
/// concurrent calls.
///
/// ## Example
/// ```rust
/// use checkout_core::catalog::PricingCatalog;
/// use checkout_core::checkout::checkout;
///
/// let catalog = PricingCatalog::demo();
///
/// assert_eq!(checkout(&catalog, "ABBACBBAB").unwrap().minor_units(), 240);
/// assert_eq!(checkout(&catalog, "").unwrap().minor_units(), 0);
/// assert!(checkout(&catalog, "ABZ").is_err());
/// ```
///
/// ## Errors
/// - [`CheckoutError::MalformedInput`] if the trimmed basket contains a
///   character with no price entry
/// - [`CheckoutError::ArithmeticOverflow`] if any intermediate amount would
///   exceed [`Money::MAX`]
pub fn checkout(catalog: &PricingCatalog, basket: &str) -> CheckoutResult<Money> {
    let mut remaining = basket.trim().to_string();
    let mut total = Money::zero();

    for (code, unit_price) in catalog.price_entries() {
        let count = remaining.chars().filter(|&c| c == code).count() as u64;
        if count == 0 {
            continue;
        }

        let item_cost = match catalog.discount_of(code) {
            Some(rule) => discounted_cost(unit_price, count, rule)?,
            None => unit_price
                .checked_mul_quantity(count)
                .ok_or(CheckoutError::ArithmeticOverflow)?,
        };

        trace!(%code, count, cost = %item_cost, "priced item");

        total = total
            .checked_add(item_cost)
            .ok_or(CheckoutError::ArithmeticOverflow)?;

        // Later codes are counted against what is left; codes are disjoint,
        // so this cannot change any other code's count.
        remaining.retain(|c| c != code);
    }

    if let Some(code) = remaining.chars().next() {
        return Err(CheckoutError::MalformedInput { code });
    }

    debug!(total = %total, "basket priced");
    Ok(total)
}

/// Cost of `count` units under a "buy `group_size`, pay `paid_count`" rule.
///
/// `full_groups = count div group_size` units are charged at
/// `paid_count × unit_price` per group; the `count mod group_size`
/// remainder is charged at full price.
fn discounted_cost(unit_price: Money, count: u64, rule: DiscountRule) -> CheckoutResult<Money> {
    let full_groups = count / rule.group_size as u64;
    let remainder = count % rule.group_size as u64;

    let paid_units = full_groups
        .checked_mul(rule.paid_count as u64)
        .ok_or(CheckoutError::ArithmeticOverflow)?;

    let grouped_cost = unit_price
        .checked_mul_quantity(paid_units)
        .ok_or(CheckoutError::ArithmeticOverflow)?;
    let remainder_cost = unit_price
        .checked_mul_quantity(remainder)
        .ok_or(CheckoutError::ArithmeticOverflow)?;

    grouped_cost
        .checked_add(remainder_cost)
        .ok_or(CheckoutError::ArithmeticOverflow)
}

// =============================================================================
// Unit Tests
// =============================================================================
