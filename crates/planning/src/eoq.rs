use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use stockplan_core::{DomainResult, ensure_non_negative, ensure_positive};

use crate::algorithm::StockAlgorithm;

/// Inputs to the Economic Order Quantity formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EoqParams {
    /// Units demanded per year (D).
    pub annual_demand: f64,
    /// Fixed cost per order placed (S).
    pub ordering_cost: f64,
    /// Cost to hold one unit for a year (H).
    pub holding_cost: f64,
}

impl EoqParams {
    pub fn new(annual_demand: f64, ordering_cost: f64, holding_cost: f64) -> Self {
        Self {
            annual_demand,
            ordering_cost,
            holding_cost,
        }
    }
}

/// Annual cost of ordering in batches of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub total: f64,
    pub ordering_total: f64,
    pub holding_total: f64,
}

/// Economic Order Quantity: the batch size minimising ordering + holding cost.
///
/// `EOQ = sqrt(2·D·S / H)`
#[derive(Debug, Default, Clone, Copy)]
pub struct EoqAlgorithm;

impl StockAlgorithm for EoqAlgorithm {
    type Input = EoqParams;
    type Output = f64;

    fn calculate(&self, params: &EoqParams) -> DomainResult<f64> {
        let d = ensure_positive(params.annual_demand, "annual demand")?;
        let s = ensure_non_negative(params.ordering_cost, "ordering cost")?;
        let h = ensure_positive(params.holding_cost, "holding cost")?;

        let eoq = ((2.0 * d * s) / h).sqrt();
        debug!(annual_demand = d, ordering_cost = s, holding_cost = h, eoq, "computed EOQ");
        Ok(eoq)
    }
}

impl EoqAlgorithm {
    /// Annual ordering and holding cost when ordering `order_quantity` units at a time.
    ///
    /// Only the order quantity is validated; `params` is evaluated as given.
    pub fn calculate_total_cost(
        &self,
        params: &EoqParams,
        order_quantity: f64,
    ) -> DomainResult<CostBreakdown> {
        let q = ensure_positive(order_quantity, "order quantity")?;

        let number_of_orders = params.annual_demand / q;
        let ordering_total = number_of_orders * params.ordering_cost;
        let holding_total = (q / 2.0) * params.holding_cost;

        Ok(CostBreakdown {
            total: ordering_total + holding_total,
            ordering_total,
            holding_total,
        })
    }

    /// Orders per year (`D / eoq`).
    ///
    /// Returns 0 instead of failing when `eoq <= 0`. Every other entry point
    /// rejects bad input; callers that need that guarantee should validate
    /// `eoq` themselves.
    pub fn calculate_reorder_frequency(&self, annual_demand: f64, eoq: f64) -> f64 {
        if eoq > 0.0 {
            annual_demand / eoq
        } else {
            warn!(annual_demand, eoq, "non-positive EOQ, reporting zero reorder frequency");
            0.0
        }
    }
}
