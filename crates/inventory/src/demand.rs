use chrono::{DateTime, Utc};
use serde::Serialize;

use stockplan_core::{Clock, DomainResult, ensure_non_negative};

/// Demand observed for a product at a point in time.
///
/// Immutable once built; a zero quantity is allowed (a period with no sales).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Demand {
    product_id: String,
    quantity: f64,
    timestamp: DateTime<Utc>,
}

impl Demand {
    /// Build a demand stamped with `clock.now()`.
    pub fn new(
        product_id: impl Into<String>,
        quantity: f64,
        clock: &dyn Clock,
    ) -> DomainResult<Self> {
        Self::at(product_id, quantity, clock.now())
    }

    /// Build a demand with an explicit timestamp.
    pub fn at(
        product_id: impl Into<String>,
        quantity: f64,
        timestamp: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let quantity = ensure_non_negative(quantity, "demand quantity")?;
        Ok(Self {
            product_id: product_id.into(),
            quantity,
            timestamp,
        })
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use stockplan_core::{DomainError, FixedClock};

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap()
    }

    #[test]
    fn demand_takes_its_timestamp_from_the_clock() {
        let clock = FixedClock::new(test_time());
        let demand = Demand::new("WIDGET-001", 60.0, &clock).unwrap();

        assert_eq!(demand.product_id(), "WIDGET-001");
        assert_eq!(demand.quantity(), 60.0);
        assert_eq!(demand.timestamp(), test_time());
    }

    #[test]
    fn zero_demand_is_allowed() {
        let demand = Demand::at("WIDGET-001", 0.0, test_time()).unwrap();
        assert_eq!(demand.quantity(), 0.0);
    }

    #[test]
    fn negative_demand_is_rejected() {
        let err = Demand::at("WIDGET-001", -1.0, test_time()).unwrap_err();
        match err {
            DomainError::InvalidArgument(msg) if msg.contains("cannot be negative") => {}
            _ => panic!("Expected InvalidArgument for negative demand"),
        }
    }

    #[test]
    fn non_finite_demand_is_rejected() {
        assert!(Demand::at("P1", f64::NAN, test_time()).is_err());
        assert!(Demand::at("P1", f64::INFINITY, test_time()).is_err());
    }

    #[test]
    fn equal_demands_compare_equal() {
        let a = Demand::at("P1", 5.0, test_time()).unwrap();
        let b = Demand::at("P1", 5.0, test_time()).unwrap();
        assert_eq!(a, b);
    }
}
