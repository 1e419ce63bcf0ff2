//! Property-based tests for the pricing algebra.
//!
//! Unit tests in the source modules pin down concrete scenarios; these
//! properties check the algebra over generated inputs:
//! linearity without a rule, the group formula with a rule, permutation
//! invariance, and the overflow contract.

use proptest::prelude::*;

use checkout_core::catalog::{CatalogBuilder, DiscountRule, PricingCatalog};
use checkout_core::checkout::checkout;
use checkout_core::error::CheckoutError;

/// What the total should be, computed in wide arithmetic.
fn expected_total(catalog: &PricingCatalog, basket: &str) -> i128 {
    let mut total: i128 = 0;
    for code in catalog.codes() {
        let count = basket.chars().filter(|&c| c == code).count() as i128;
        let price = catalog.price_of(code).unwrap().minor_units() as i128;
        total += match catalog.discount_of(code) {
            Some(rule) => {
                let g = rule.group_size as i128;
                let p = rule.paid_count as i128;
                (count / g) * p * price + (count % g) * price
            }
            None => count * price,
        };
    }
    total
}

proptest! {
    /// Without a rule, n units cost exactly n × price.
    #[test]
    fn undiscounted_cost_is_linear(n in 0usize..500) {
        let catalog = PricingCatalog::demo();
        let basket = "A".repeat(n);
        let total = checkout(&catalog, &basket).unwrap();
        prop_assert_eq!(total.minor_units() as usize, n * 20);
    }

    /// With rule (5, 3), n units cost (n div 5)·3·price + (n mod 5)·price.
    #[test]
    fn discounted_cost_follows_group_formula(n in 0usize..500) {
        let catalog = PricingCatalog::demo();
        let basket = "B".repeat(n);
        let total = checkout(&catalog, &basket).unwrap();
        prop_assert_eq!(
            total.minor_units() as usize,
            (n / 5) * 3 * 50 + (n % 5) * 50
        );
    }

    /// A basket of known codes always prices, and matches the per-code
    /// formulas summed in wide arithmetic.
    #[test]
    fn known_codes_match_per_code_formulas(basket in "[ABC]{0,64}") {
        let catalog = PricingCatalog::demo();
        let total = checkout(&catalog, &basket).unwrap();
        prop_assert_eq!(total.minor_units() as i128, expected_total(&catalog, &basket));
    }

    /// Only the multiset of codes matters, not their order.
    #[test]
    fn basket_order_is_irrelevant(basket in "[ABC]{0,64}") {
        let catalog = PricingCatalog::demo();
        let mut sorted: Vec<char> = basket.chars().collect();
        sorted.sort_unstable();
        let sorted: String = sorted.into_iter().collect();
        prop_assert_eq!(
            checkout(&catalog, &basket).unwrap(),
            checkout(&catalog, &sorted).unwrap()
        );
    }

    /// Leading/trailing whitespace never changes the total.
    #[test]
    fn surrounding_whitespace_is_ignored(basket in "[ABC]{0,64}", pad in 0usize..4) {
        let catalog = PricingCatalog::demo();
        let padded = format!("{}{}{}", " ".repeat(pad), basket, " ".repeat(pad));
        prop_assert_eq!(
            checkout(&catalog, &padded).unwrap(),
            checkout(&catalog, &basket).unwrap()
        );
    }

    /// Any basket containing an unknown code fails with MalformedInput.
    #[test]
    fn unknown_code_always_fails(prefix in "[ABC]{0,16}", suffix in "[ABC]{0,16}") {
        let catalog = PricingCatalog::demo();
        let basket = format!("{prefix}Z{suffix}");
        prop_assert_eq!(
            checkout(&catalog, &basket).unwrap_err(),
            CheckoutError::MalformedInput { code: 'Z' }
        );
    }

    /// The overflow contract: either the true total fits and is returned
    /// exactly, or checkout fails with ArithmeticOverflow. Never a wrapped
    /// or truncated value.
    #[test]
    fn overflow_is_reported_never_wrapped(
        price in 1u32..=2_000_000_000,
        n in 0usize..16,
        with_rule in any::<bool>(),
    ) {
        let mut builder = CatalogBuilder::new().price('X', price);
        if with_rule {
            builder = builder.discount('X', DiscountRule::new(4, 2));
        }
        let catalog = builder.build().unwrap();

        let basket = "X".repeat(n);
        let expected = expected_total(&catalog, &basket);

        match checkout(&catalog, &basket) {
            Ok(total) => prop_assert_eq!(total.minor_units() as i128, expected),
            Err(err) => {
                prop_assert_eq!(err, CheckoutError::ArithmeticOverflow);
                prop_assert!(expected > i32::MAX as i128);
            }
        }
    }
}
