use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use stockplan_core::SystemClock;
use stockplan_inventory::{Demand, Inventory, Order};
use stockplan_planning::{
    AbcAnalysisAlgorithm, AbcClass, AbcThresholds, CostBreakdown, EoqAlgorithm, EoqParams,
    ReorderPointAlgorithm, ReorderPointParams, SafetyStockAlgorithm, SafetyStockParams,
    StockAlgorithm,
};

use crate::cli::{AbcArgs, EoqArgs, ReorderPointArgs, SafetyStockArgs};

/// Write `report` as pretty JSON, or hand it to `text` for human output.
fn emit<T: Serialize>(json: bool, report: &T, text: impl FnOnce(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        text(report);
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct EoqReport {
    pub params: EoqParams,
    pub eoq: f64,
    /// `None` when the EOQ is zero (free ordering), which cannot be costed.
    pub cost: Option<CostBreakdown>,
    pub orders_per_year: f64,
    /// `None` when the order frequency is zero.
    pub days_between_orders: Option<f64>,
}

pub fn eoq_report(args: &EoqArgs) -> Result<EoqReport> {
    let params = EoqParams::new(args.annual_demand, args.ordering_cost, args.holding_cost);
    let eoq = EoqAlgorithm.calculate(&params).context("calculating EOQ")?;
    let cost = if eoq > 0.0 {
        Some(
            EoqAlgorithm
                .calculate_total_cost(&params, eoq)
                .context("costing the EOQ")?,
        )
    } else {
        None
    };
    let orders_per_year = EoqAlgorithm.calculate_reorder_frequency(params.annual_demand, eoq);
    let days_between_orders =
        (orders_per_year > 0.0).then(|| f64::from(args.working_days) / orders_per_year);

    Ok(EoqReport {
        params,
        eoq,
        cost,
        orders_per_year,
        days_between_orders,
    })
}

pub fn eoq(args: &EoqArgs, json: bool) -> Result<()> {
    let report = eoq_report(args)?;
    emit(json, &report, |r| {
        println!("Optimal order quantity (EOQ): {:.2} units", r.eoq);
        if let Some(cost) = &r.cost {
            print_cost(cost);
        }
        println!("Orders per year: {:.2}", r.orders_per_year);
        match r.days_between_orders {
            Some(days) => println!("Days between orders: {days:.2}"),
            None => println!("Days between orders: n/a"),
        }
    })
}

fn print_cost(cost: &CostBreakdown) {
    println!("Total annual cost: ${:.2}", cost.total);
    println!("  - Ordering cost: ${:.2}", cost.ordering_total);
    println!("  - Holding cost:  ${:.2}", cost.holding_total);
}

pub fn total_cost(args: &EoqArgs, quantity: f64, json: bool) -> Result<()> {
    let params = EoqParams::new(args.annual_demand, args.ordering_cost, args.holding_cost);
    let cost = EoqAlgorithm
        .calculate_total_cost(&params, quantity)
        .with_context(|| format!("costing an order quantity of {quantity}"))?;
    emit(json, &cost, print_cost)
}

#[derive(Debug, Serialize)]
pub struct ReorderPointReport {
    pub daily_demand: f64,
    pub lead_time_days: u32,
    pub safety_stock: f64,
    pub reorder_point: f64,
}

pub fn reorder_point_report(args: &ReorderPointArgs) -> Result<ReorderPointReport> {
    let algo = ReorderPointAlgorithm;
    let (daily_demand, reorder_point) = match (args.daily_demand, args.annual_demand) {
        (Some(daily), _) => {
            let params = ReorderPointParams::new(daily, args.lead_time_days)
                .with_safety_stock(args.safety_stock);
            (daily, algo.calculate(&params))
        }
        (None, Some(annual)) => (
            annual / f64::from(args.working_days.max(1)),
            algo.calculate_from_annual(
                annual,
                args.lead_time_days,
                args.safety_stock,
                args.working_days,
            ),
        ),
        (None, None) => anyhow::bail!("either --daily-demand or --annual-demand is required"),
    };

    Ok(ReorderPointReport {
        daily_demand,
        lead_time_days: args.lead_time_days,
        safety_stock: args.safety_stock,
        reorder_point: reorder_point.context("calculating reorder point")?,
    })
}

pub fn reorder_point(args: &ReorderPointArgs, json: bool) -> Result<()> {
    let report = reorder_point_report(args)?;
    emit(json, &report, |r| {
        println!("Reorder point: {:.2} units", r.reorder_point);
        println!("When inventory reaches {:.2} units, place a new order.", r.reorder_point);
    })
}

#[derive(Debug, Serialize)]
pub struct SafetyStockReport {
    pub service_level_percent: Option<f64>,
    pub z_score: f64,
    pub demand_std_dev: f64,
    pub lead_time_days: u32,
    pub safety_stock: f64,
}

pub fn safety_stock_report(args: &SafetyStockArgs) -> Result<SafetyStockReport> {
    let z_score = match (args.z, args.service_level) {
        (Some(z), _) => z,
        (None, Some(level)) => SafetyStockAlgorithm::z_score_for_service_level(level),
        (None, None) => anyhow::bail!("either --z or --service-level is required"),
    };
    let params = SafetyStockParams::new(z_score, args.std_dev, args.lead_time_days);
    let safety_stock = SafetyStockAlgorithm
        .calculate(&params)
        .context("calculating safety stock")?;

    Ok(SafetyStockReport {
        service_level_percent: args.z.is_none().then_some(args.service_level).flatten(),
        z_score,
        demand_std_dev: args.std_dev,
        lead_time_days: args.lead_time_days,
        safety_stock,
    })
}

pub fn safety_stock(args: &SafetyStockArgs, json: bool) -> Result<()> {
    let report = safety_stock_report(args)?;
    emit(json, &report, |r| {
        println!("Z-score: {:.2}", r.z_score);
        println!("Safety stock level: {:.2} units", r.safety_stock);
    })
}

#[derive(Debug, Serialize)]
pub struct ZScoreReport {
    pub service_level_percent: f64,
    pub z_score: f64,
}

pub fn z_score(service_level: f64, json: bool) -> Result<()> {
    let report = ZScoreReport {
        service_level_percent: service_level,
        z_score: SafetyStockAlgorithm::z_score_for_service_level(service_level),
    };
    emit(json, &report, |r| {
        println!("Z-score for {}% service level: {:.2}", r.service_level_percent, r.z_score);
    })
}

pub fn abc_classes(args: &AbcArgs) -> Result<BTreeMap<String, AbcClass>> {
    let thresholds =
        AbcThresholds::new(args.a_cutoff, args.b_cutoff).context("reading ABC cut-offs")?;
    AbcAnalysisAlgorithm::new()
        .with_thresholds(thresholds)
        .calculate(&args.items)
        .context("classifying items")
}

pub fn abc(args: &AbcArgs, json: bool) -> Result<()> {
    let classes = abc_classes(args)?;
    emit(json, &classes, |classes| {
        for (product_id, class) in classes {
            println!("{product_id}\t{class}");
        }
    })
}

#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub eoq: EoqReport,
    pub reorder_point: ReorderPointReport,
    pub safety_stock: SafetyStockReport,
    pub inventory_before: Inventory,
    pub demand: Demand,
    pub order: Option<Order>,
    pub inventory_after: Inventory,
}

/// Sample product walked through every calculation, end to end.
pub fn demo_report() -> Result<DemoReport> {
    let clock = SystemClock;

    let eoq = eoq_report(&EoqArgs {
        annual_demand: 1000.0,
        ordering_cost: 50.0,
        holding_cost: 2.0,
        working_days: 365,
    })?;

    let reorder_point = reorder_point_report(&ReorderPointArgs {
        daily_demand: Some(10.0),
        annual_demand: None,
        lead_time_days: 5,
        safety_stock: 20.0,
        working_days: 365,
    })?;

    let safety_stock = safety_stock_report(&SafetyStockArgs {
        z: None,
        service_level: Some(95.0),
        std_dev: 5.0,
        lead_time_days: 4,
    })?;

    let mut inventory = Inventory::builder("WIDGET-001", 150.0, 2.5)
        .with_unit_cost(10.0)
        .with_min_stock_level(50.0)
        .with_max_stock_level(300.0)
        .build()?;
    let inventory_before = inventory.clone();

    let demand = Demand::new("WIDGET-001", 110.0, &clock)?;
    inventory.fulfil(&demand)?;
    info!(
        product_id = %inventory.product_id(),
        stock = inventory.current_stock(),
        "demand fulfilled"
    );

    let order = if inventory.is_below_minimum() {
        let ordering_cost = 100.0;
        let quantity = EoqAlgorithm.calculate(&EoqParams::new(
            1200.0,
            ordering_cost,
            inventory.holding_cost_per_unit(),
        ))?;
        let order = Order::new("WIDGET-001", quantity, ordering_cost, 5, &clock)?;
        inventory.receive(&order)?;
        info!(product_id = %inventory.product_id(), quantity, "replenishment order received");
        Some(order)
    } else {
        None
    };

    Ok(DemoReport {
        eoq,
        reorder_point,
        safety_stock,
        inventory_before,
        demand,
        order,
        inventory_after: inventory,
    })
}

pub fn demo(json: bool) -> Result<()> {
    let report = demo_report()?;
    emit(json, &report, |r| {
        println!("== Economic Order Quantity ==");
        println!("EOQ: {:.2} units", r.eoq.eoq);
        if let Some(cost) = &r.eoq.cost {
            print_cost(cost);
        }
        println!("Orders per year: {:.2}", r.eoq.orders_per_year);

        println!("\n== Reorder Point ==");
        println!("Reorder point: {:.2} units", r.reorder_point.reorder_point);

        println!("\n== Safety Stock ==");
        println!("Z-score (95%): {:.2}", r.safety_stock.z_score);
        println!("Safety stock: {:.2} units", r.safety_stock.safety_stock);

        println!("\n== Inventory ==");
        let before = &r.inventory_before;
        println!("{}: {:.2} units on hand", before.product_id(), before.current_stock());
        println!("Holding cost: ${:.2}", before.calculate_holding_cost());
        println!("Demand: {:.2} units", r.demand.quantity());
        match &r.order {
            Some(order) => {
                println!("Below minimum, ordering {:.2} units", order.quantity());
                println!(
                    "Order cost: ${:.2}, lead time {} days",
                    order.total_cost(),
                    order.lead_time_days()
                );
            }
            None => println!("Stock above minimum, no order needed"),
        }
        let after = &r.inventory_after;
        println!("Stock now: {:.2} units", after.current_stock());
        println!("Holding cost: ${:.2}", after.calculate_holding_cost());
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockplan_planning::AbcItem;

    #[test]
    fn eoq_report_includes_frequency() {
        let report = eoq_report(&EoqArgs {
            annual_demand: 1000.0,
            ordering_cost: 50.0,
            holding_cost: 2.0,
            working_days: 365,
        })
        .unwrap();
        assert!((report.eoq - 223.61).abs() < 0.01);
        assert!((report.orders_per_year - 4.47).abs() < 0.01);
        assert!(report.days_between_orders.is_some());
    }

    #[test]
    fn free_orders_have_no_interval() {
        let report = eoq_report(&EoqArgs {
            annual_demand: 1000.0,
            ordering_cost: 0.0,
            holding_cost: 2.0,
            working_days: 365,
        })
        .unwrap();
        assert_eq!(report.cost, None);
        assert_eq!(report.orders_per_year, 0.0);
        assert_eq!(report.days_between_orders, None);
    }

    #[test]
    fn reorder_point_from_annual_demand() {
        let report = reorder_point_report(&ReorderPointArgs {
            daily_demand: None,
            annual_demand: Some(3650.0),
            lead_time_days: 5,
            safety_stock: 20.0,
            working_days: 365,
        })
        .unwrap();
        assert_eq!(report.daily_demand, 10.0);
        assert_eq!(report.reorder_point, 70.0);
    }

    #[test]
    fn zero_working_days_is_an_error() {
        let err = reorder_point_report(&ReorderPointArgs {
            daily_demand: None,
            annual_demand: Some(3650.0),
            lead_time_days: 5,
            safety_stock: 0.0,
            working_days: 0,
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("working days must be positive"));
    }

    #[test]
    fn safety_stock_from_service_level() {
        let report = safety_stock_report(&SafetyStockArgs {
            z: None,
            service_level: Some(95.0),
            std_dev: 5.0,
            lead_time_days: 4,
        })
        .unwrap();
        assert_eq!(report.z_score, 1.65);
        assert_eq!(report.service_level_percent, Some(95.0));
        assert!((report.safety_stock - 16.5).abs() < 1e-9);
    }

    #[test]
    fn abc_rejects_bad_cutoffs() {
        let args = AbcArgs {
            items: vec![AbcItem::new("P1", 1.0, 1.0)],
            a_cutoff: 96.0,
            b_cutoff: 95.0,
        };
        assert!(abc_classes(&args).is_err());
    }

    #[test]
    fn demo_places_an_order_below_minimum() {
        let report = demo_report().unwrap();
        assert_eq!(report.inventory_before.current_stock(), 150.0);
        let order = report.order.expect("stock of 40 is below the minimum of 50");
        assert!((report.inventory_after.current_stock() - (40.0 + order.quantity())).abs() < 1e-9);
    }
}
