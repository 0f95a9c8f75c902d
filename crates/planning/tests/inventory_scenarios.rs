//! End-to-end replenishment scenarios: demand drains an inventory, the planning
//! formulas decide when and how much to reorder, and the order is received.

use chrono::{DateTime, TimeZone, Utc};

use stockplan_core::{DomainError, FixedClock};
use stockplan_inventory::{Demand, Inventory, Order};
use stockplan_planning::{
    AbcAnalysisAlgorithm, AbcClass, AbcItem, EoqAlgorithm, EoqParams, ReorderPointAlgorithm,
    SafetyStockAlgorithm, SafetyStockParams, StockAlgorithm,
};

fn test_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap()
}

fn widget() -> Inventory {
    Inventory::builder("WIDGET-001", 150.0, 2.5)
        .with_unit_cost(10.0)
        .with_min_stock_level(50.0)
        .with_max_stock_level(300.0)
        .build()
        .unwrap()
}

#[test]
fn eoq_order_is_placed_once_stock_falls_below_minimum() {
    let clock = FixedClock::new(test_time());
    let mut inventory = widget();
    assert_eq!(inventory.calculate_holding_cost(), 375.0);

    inventory.fulfil(&Demand::new("WIDGET-001", 60.0, &clock).unwrap()).unwrap();
    assert_eq!(inventory.current_stock(), 90.0);
    assert!(!inventory.is_below_minimum());

    inventory.fulfil(&Demand::new("WIDGET-001", 45.0, &clock).unwrap()).unwrap();
    assert_eq!(inventory.current_stock(), 45.0);
    assert!(inventory.is_below_minimum());

    let params = EoqParams::new(1200.0, 100.0, inventory.holding_cost_per_unit());
    let eoq = EoqAlgorithm.calculate(&params).unwrap();
    assert!((eoq - 309.84).abs() < 0.01, "eoq = {eoq}");

    let order = Order::new("WIDGET-001", eoq, 100.0, 5, &clock).unwrap();
    assert_eq!(order.total_cost(), 100.0);
    assert_eq!(order.timestamp(), test_time());

    inventory.receive(&order).unwrap();
    assert!((inventory.current_stock() - (45.0 + eoq)).abs() < 1e-9);
    assert!(!inventory.is_below_minimum());
    assert!(inventory.is_above_maximum());
}

#[test]
fn demand_larger_than_stock_is_refused() {
    let clock = FixedClock::new(test_time());
    let mut inventory = widget();

    let err = inventory
        .fulfil(&Demand::new("WIDGET-001", 200.0, &clock).unwrap())
        .unwrap_err();
    assert_eq!(err, DomainError::insufficient_stock(200.0, 150.0));
    assert_eq!(inventory.current_stock(), 150.0);
}

#[test]
fn reorder_point_includes_service_level_safety_stock() {
    let z = SafetyStockAlgorithm::z_score_for_service_level(95.0);
    let safety = SafetyStockAlgorithm
        .calculate(&SafetyStockParams::new(z, 5.0, 4))
        .unwrap();
    assert!((safety - 16.5).abs() < 1e-9);

    let rop = ReorderPointAlgorithm
        .calculate_from_annual(3650.0, 4, safety, 365)
        .unwrap();
    assert!((rop - 56.5).abs() < 1e-9);
}

#[test]
fn abc_tiers_for_a_small_catalogue() {
    let items = vec![
        AbcItem::new("P001", 100.0, 1000.0),
        AbcItem::new("P002", 10.0, 500.0),
        AbcItem::new("P003", 5.0, 200.0),
    ];
    let classes = AbcAnalysisAlgorithm::new().calculate(&items).unwrap();

    assert_eq!(classes.len(), items.len());
    assert_eq!(classes["P001"], AbcClass::A);
    assert_eq!(classes["P003"], AbcClass::C);
}
