//! Numeric guards shared by entity constructors and planning formulas.
//!
//! Each guard returns the checked value so callers can bind it directly:
//! `let demand = ensure_positive(annual_demand, "annual demand")?;`.
//! Non-finite values (NaN, +/-inf) are always rejected.

use crate::error::{DomainError, DomainResult};

fn ensure_finite(value: f64, what: &str) -> DomainResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::invalid_argument(format!(
            "{what} must be a finite number"
        )))
    }
}

/// Require `value > 0`.
pub fn ensure_positive(value: f64, what: &str) -> DomainResult<f64> {
    let value = ensure_finite(value, what)?;
    if value <= 0.0 {
        return Err(DomainError::invalid_argument(format!(
            "{what} must be positive"
        )));
    }
    Ok(value)
}

/// Require `value >= 0`.
pub fn ensure_non_negative(value: f64, what: &str) -> DomainResult<f64> {
    let value = ensure_finite(value, what)?;
    if value < 0.0 {
        return Err(DomainError::invalid_argument(format!(
            "{what} cannot be negative"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_is_not_positive() {
        let err = ensure_positive(0.0, "holding cost").unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidArgument("holding cost must be positive".to_string())
        );
    }

    #[test]
    fn zero_is_non_negative() {
        assert_eq!(ensure_non_negative(0.0, "ordering cost"), Ok(0.0));
    }

    #[test]
    fn nan_and_infinity_are_rejected() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            match ensure_non_negative(v, "quantity") {
                Err(DomainError::InvalidArgument(msg)) => {
                    assert!(msg.contains("finite"), "unexpected message: {msg}")
                }
                other => panic!("expected InvalidArgument for {v}, got {other:?}"),
            }
            assert!(ensure_positive(v, "quantity").is_err());
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: accepted values pass through unchanged.
        #[test]
        fn guards_return_the_input(v in 0.0001f64..1.0e12) {
            prop_assert_eq!(ensure_positive(v, "v"), Ok(v));
            prop_assert_eq!(ensure_non_negative(v, "v"), Ok(v));
        }

        /// Property: negative values never pass either guard.
        #[test]
        fn negatives_always_fail(v in -1.0e12f64..-0.0001) {
            prop_assert!(ensure_positive(v, "v").is_err());
            prop_assert!(ensure_non_negative(v, "v").is_err());
        }
    }
}
