//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Minor Units                                      │
//! │    Every amount is a whole number of the smallest currency unit.        │
//! │                                                                         │
//! │  THE OVERFLOW PROBLEM                                                   │
//! │    count × price can exceed the 32-bit range long before the basket     │
//! │    looks unreasonable (price 1_000_000_000 × 3 items already does).     │
//! │                                                                         │
//! │  OUR SOLUTION: Check Before Commit                                      │
//! │    Every add/multiply widens to a larger type, compares against the     │
//! │    32-bit maximum, and only then narrows back. No wrapping, ever.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::Money;
//!
//! let price = Money::from_minor_units(50);
//!
//! // Checked arithmetic: None means the result would not fit
//! let line = price.checked_mul_quantity(3).unwrap();
//! assert_eq!(line.minor_units(), 150);
//!
//! let total = line.checked_add(Money::from_minor_units(20)).unwrap();
//! assert_eq!(total.minor_units(), 170);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i32 (signed)**: The reference width for checkout totals; the maximum
///   representable total is [`Money::MAX`] (2147483647 minor units)
/// - **Single field tuple struct**: Zero-cost abstraction over i32
/// - **No `Add`/`Mul` operators**: All arithmetic goes through the checked
///   methods so an overflow can never be committed by accident
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Money(i32);

impl Money {
    /// The largest representable amount.
    pub const MAX: Money = Money(i32::MAX);

    /// Creates a Money value from minor units (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let price = Money::from_minor_units(1099);
    /// assert_eq!(price.minor_units(), 1099);
    /// ```
    #[inline]
    pub const fn from_minor_units(minor: i32) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor_units(&self) -> i32 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two amounts, failing if the sum would leave the 32-bit range.
    ///
    /// The operands are widened to i64, the sum is compared against the
    /// i32 bounds, and only a fitting result is narrowed back and returned.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let a = Money::from_minor_units(2_000_000_000);
    /// let b = Money::from_minor_units(2_000_000_000);
    /// assert!(a.checked_add(b).is_none());
    ///
    /// let small = Money::from_minor_units(100);
    /// assert_eq!(small.checked_add(small).unwrap().minor_units(), 200);
    /// ```
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        let sum = self.0 as i64 + other.0 as i64;
        if sum > i32::MAX as i64 || sum < i32::MIN as i64 {
            None
        } else {
            Some(Money(sum as i32))
        }
    }

    /// Multiplies an amount by a unit count, failing if the product would
    /// leave the 32-bit range.
    ///
    /// Widens to i128 before comparing, so even absurd quantities cannot
    /// overflow the intermediate.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let price = Money::from_minor_units(1_000_000_000);
    /// assert!(price.checked_mul_quantity(2).is_some());
    /// assert!(price.checked_mul_quantity(3).is_none());
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(self, qty: u64) -> Option<Money> {
        let product = self.0 as i128 * qty as i128;
        if product > i32::MAX as i128 || product < i32::MIN as i128 {
            None
        } else {
            Some(Money(product as i32))
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the raw minor-unit amount.
///
/// ## Note
/// This is for debugging and log events. Currency formatting is explicitly
/// out of scope for this crate; callers format amounts for display.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
