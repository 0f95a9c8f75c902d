use chrono::{DateTime, Utc};
use serde::Serialize;

use stockplan_core::{Clock, DomainResult, ensure_non_negative, ensure_positive};

/// Purchase order placed to replenish a product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    product_id: String,
    quantity: f64,
    order_cost: f64,
    lead_time_days: u32,
    timestamp: DateTime<Utc>,
}

impl Order {
    /// Build an order stamped with `clock.now()`.
    pub fn new(
        product_id: impl Into<String>,
        quantity: f64,
        order_cost: f64,
        lead_time_days: u32,
        clock: &dyn Clock,
    ) -> DomainResult<Self> {
        Self::at(product_id, quantity, order_cost, lead_time_days, clock.now())
    }

    /// Build an order with an explicit timestamp.
    pub fn at(
        product_id: impl Into<String>,
        quantity: f64,
        order_cost: f64,
        lead_time_days: u32,
        timestamp: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let quantity = ensure_positive(quantity, "order quantity")?;
        let order_cost = ensure_non_negative(order_cost, "order cost")?;
        Ok(Self {
            product_id: product_id.into(),
            quantity,
            order_cost,
            lead_time_days,
            timestamp,
        })
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn order_cost(&self) -> f64 {
        self.order_cost
    }

    pub fn lead_time_days(&self) -> u32 {
        self.lead_time_days
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Total cost of the order.
    ///
    /// This is the fixed ordering cost only; purchase price (`quantity × unit
    /// cost`) is not included.
    pub fn total_cost(&self) -> f64 {
        self.order_cost
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
    fn order_exposes_its_fields() {
        let clock = FixedClock::new(test_time());
        let order = Order::new("WIDGET-001", 346.41, 100.0, 5, &clock).unwrap();

        assert_eq!(order.product_id(), "WIDGET-001");
        assert_eq!(order.quantity(), 346.41);
        assert_eq!(order.order_cost(), 100.0);
        assert_eq!(order.lead_time_days(), 5);
        assert_eq!(order.timestamp(), test_time());
    }

    #[test]
    fn total_cost_is_the_order_cost() {
        let order = Order::at("P1", 50.0, 75.0, 0, test_time()).unwrap();
        assert_eq!(order.total_cost(), 75.0);
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let err = Order::at("P1", 0.0, 10.0, 0, test_time()).unwrap_err();
        match err {
            DomainError::InvalidArgument(msg) if msg.contains("must be positive") => {}
            _ => panic!("Expected InvalidArgument for zero order quantity"),
        }
    }

    #[test]
    fn negative_cost_is_rejected() {
        let err = Order::at("P1", 10.0, -0.01, 0, test_time()).unwrap_err();
        match err {
            DomainError::InvalidArgument(msg) if msg.contains("cannot be negative") => {}
            _ => panic!("Expected InvalidArgument for negative order cost"),
        }
    }

    #[test]
    fn non_finite_figures_are_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(Order::at("P1", bad, 10.0, 0, test_time()).is_err());
            assert!(Order::at("P1", 10.0, bad, 0, test_time()).is_err());
        }
        let err = Order::at("P1", f64::INFINITY, 10.0, 0, test_time()).unwrap_err();
        match err {
            DomainError::InvalidArgument(msg) if msg.contains("finite") => {}
            _ => panic!("Expected InvalidArgument for infinite order quantity"),
        }
    }

    #[test]
    fn free_orders_are_allowed() {
        let order = Order::at("P1", 10.0, 0.0, 3, test_time()).unwrap();
        assert_eq!(order.total_cost(), 0.0);
    }
}
