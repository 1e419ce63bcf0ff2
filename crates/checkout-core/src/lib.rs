//! # checkout-core: Pure Pricing Logic for Checkout
//!
//! This crate is the **heart** of Checkout. It contains the whole pricing
//! calculator as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Caller (CLI / service / tests)                  │   │
//! │  │        builds the catalog, hands baskets to checkout()          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ checkout-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  catalog  │  │ checkout  │  │   error   │  │   │
//! │  │   │   Money   │  │  Catalog  │  │ checkout()│  │  errors   │  │   │
//! │  │   │  checked  │  │   Rule    │  │ algorithm │  │ (typed)   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with checked integer arithmetic (no floats!)
//! - [`catalog`] - Immutable price/discount table and its builder
//! - [`checkout`] - The basket pricing algorithm
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All amounts are minor units (i32), never floats
//! 4. **Check Before Commit**: Every add/multiply is overflow-checked before
//!    the result is used; a wrapped total can never escape this crate
//! 5. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::catalog::{CatalogBuilder, DiscountRule};
//! use checkout_core::checkout::checkout;
//!
//! let catalog = CatalogBuilder::new()
//!     .price('A', 20)
//!     .price('B', 50)
//!     .discount('B', DiscountRule::new(5, 3)) // every 5 B's, pay for 3
//!     .price('C', 30)
//!     .build()?;
//!
//! let total = checkout(&catalog, "ABBACBBAB")?;
//! assert_eq!(total.minor_units(), 240);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use checkout_core::Money` instead of
// `use checkout_core::money::Money`

pub use catalog::{CatalogBuilder, DiscountRule, PricingCatalog};
pub use checkout::checkout;
pub use error::{CatalogError, CatalogResult, CheckoutError, CheckoutResult};
pub use money::Money;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum representable checkout total, in minor units.
///
/// ## Why a constant?
/// Totals use 32-bit signed arithmetic: any intermediate or
/// final amount above this bound fails with
/// [`CheckoutError::ArithmeticOverflow`] instead of wrapping.
pub const MAX_TOTAL_MINOR_UNITS: i32 = i32::MAX;
