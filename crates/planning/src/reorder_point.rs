use serde::{Deserialize, Serialize};
use tracing::debug;

use stockplan_core::{DomainError, DomainResult, ensure_non_negative};

use crate::algorithm::StockAlgorithm;

/// Working days assumed per year when deriving daily demand from annual demand.
pub const DEFAULT_WORKING_DAYS: u32 = 365;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReorderPointParams {
    pub daily_demand: f64,
    pub lead_time_days: u32,
    /// Buffer on top of lead-time demand. Defaults to 0.
    #[serde(default)]
    pub safety_stock: f64,
}

impl ReorderPointParams {
    pub fn new(daily_demand: f64, lead_time_days: u32) -> Self {
        Self {
            daily_demand,
            lead_time_days,
            safety_stock: 0.0,
        }
    }

    pub fn with_safety_stock(mut self, safety_stock: f64) -> Self {
        self.safety_stock = safety_stock;
        self
    }
}

/// Reorder Point: the stock level at which a new order should be placed.
///
/// `ROP = daily_demand · lead_time_days + safety_stock`
#[derive(Debug, Default, Clone, Copy)]
pub struct ReorderPointAlgorithm;

impl StockAlgorithm for ReorderPointAlgorithm {
    type Input = ReorderPointParams;
    type Output = f64;

    fn calculate(&self, params: &ReorderPointParams) -> DomainResult<f64> {
        let daily = ensure_non_negative(params.daily_demand, "daily demand")?;
        let safety = ensure_non_negative(params.safety_stock, "safety stock")?;

        let rop = daily * f64::from(params.lead_time_days) + safety;
        debug!(
            daily_demand = daily,
            lead_time_days = params.lead_time_days,
            safety_stock = safety,
            rop,
            "computed reorder point"
        );
        Ok(rop)
    }
}

impl ReorderPointAlgorithm {
    /// Reorder point from annual demand spread over `working_days`.
    pub fn calculate_from_annual(
        &self,
        annual_demand: f64,
        lead_time_days: u32,
        safety_stock: f64,
        working_days: u32,
    ) -> DomainResult<f64> {
        if working_days == 0 {
            return Err(DomainError::invalid_argument("working days must be positive"));
        }

        let daily_demand = annual_demand / f64::from(working_days);
        let params =
            ReorderPointParams::new(daily_demand, lead_time_days).with_safety_stock(safety_stock);
        self.calculate(&params)
    }
}
