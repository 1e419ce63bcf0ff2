//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CatalogError   - Catalog construction failures (caller bugs)          │
//! │  CheckoutError  - Checkout-time failures (bad basket, overflow)        │
//! │                                                                         │
//! │  Flow: CatalogBuilder::build() → CatalogError                          │
//! │        checkout()              → CheckoutError                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending item code)
//! 3. Errors are enum variants, never String
//! 4. Catalog integrity is checked at construction, never at checkout time

use thiserror::Error;

// =============================================================================
// Checkout Error
// =============================================================================

/// Errors surfaced by [`checkout`](crate::checkout::checkout).
///
/// Both variants abort the computation immediately; no partial, clamped,
/// or wrapped total is ever returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// The basket contains a character that is not a known item code.
    ///
    /// ## When This Occurs
    /// - A typo or scan error produced a code absent from the catalog
    /// - Whitespace embedded inside the basket (only leading/trailing
    ///   whitespace is trimmed)
    #[error("unrecognized item code {code:?} in basket")]
    MalformedInput {
        /// The first leftover character that did not match any priced code.
        code: char,
    },

    /// An intermediate or final amount would exceed [`Money::MAX`].
    ///
    /// Every multiplication and addition is checked *before* it commits,
    /// so the running total never wraps or truncates.
    ///
    /// [`Money::MAX`]: crate::money::Money::MAX
    #[error("checkout total would exceed the maximum representable amount")]
    ArithmeticOverflow,
}

// =============================================================================
// Catalog Error
// =============================================================================

/// Errors raised while building a [`PricingCatalog`](crate::catalog::PricingCatalog).
///
/// These are caller errors: the catalog definition itself is inconsistent.
/// They are rejected at construction time so that checkout never has to
/// re-validate catalog integrity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A discount rule references a code with no price entry.
    /// A discount without a price is meaningless.
    #[error("discount rule for {code:?} has no matching price entry")]
    DiscountWithoutPrice { code: char },

    /// A discount rule violates `group_size > 0 && paid_count <= group_size`.
    /// A rule with `paid_count > group_size` would be a penalty, not a
    /// discount, and is rejected rather than silently ignored.
    #[error(
        "invalid discount rule for {code:?}: group size {group_size}, paid count {paid_count}"
    )]
    InvalidDiscountRule {
        code: char,
        group_size: u32,
        paid_count: u32,
    },

    /// A unit price does not fit the representable money range.
    #[error("unit price for {code:?} exceeds the maximum representable amount")]
    PriceOutOfRange { code: char },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_error_messages() {
        let err = CheckoutError::MalformedInput { code: 'Z' };
        assert_eq!(err.to_string(), "unrecognized item code 'Z' in basket");

        let err = CheckoutError::ArithmeticOverflow;
        assert_eq!(
            err.to_string(),
            "checkout total would exceed the maximum representable amount"
        );
    }

    #[test]
    fn test_catalog_error_messages() {
        let err = CatalogError::DiscountWithoutPrice { code: 'D' };
        assert_eq!(
            err.to_string(),
            "discount rule for 'D' has no matching price entry"
        );

        let err = CatalogError::InvalidDiscountRule {
            code: 'B',
            group_size: 3,
            paid_count: 5,
        };
        assert_eq!(
            err.to_string(),
            "invalid discount rule for 'B': group size 3, paid count 5"
        );
    }
}
