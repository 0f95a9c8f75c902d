use serde::{Deserialize, Serialize};
use tracing::debug;

use stockplan_core::{DomainResult, ensure_non_negative};

use crate::algorithm::StockAlgorithm;

/// Service level (percent) → standard normal Z-score, ascending by service level.
pub const Z_SCORE_TABLE: [(f64, f64); 11] = [
    (50.0, 0.00),
    (75.0, 0.67),
    (80.0, 0.84),
    (85.0, 1.04),
    (90.0, 1.28),
    (95.0, 1.65),
    (97.0, 1.88),
    (98.0, 2.05),
    (99.0, 2.33),
    (99.5, 2.58),
    (99.9, 3.09),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyStockParams {
    /// Z-score for the target service level (e.g. 1.65 for 95%).
    pub service_level_z: f64,
    /// Standard deviation of daily demand.
    pub demand_std_dev: f64,
    pub lead_time_days: u32,
}

impl SafetyStockParams {
    pub fn new(service_level_z: f64, demand_std_dev: f64, lead_time_days: u32) -> Self {
        Self {
            service_level_z,
            demand_std_dev,
            lead_time_days,
        }
    }
}

/// Safety stock: buffer against demand variability over the lead time.
///
/// `SS = Z · σ · sqrt(L)`
#[derive(Debug, Default, Clone, Copy)]
pub struct SafetyStockAlgorithm;

impl StockAlgorithm for SafetyStockAlgorithm {
    type Input = SafetyStockParams;
    type Output = f64;

    fn calculate(&self, params: &SafetyStockParams) -> DomainResult<f64> {
        let z = ensure_non_negative(params.service_level_z, "service level Z-score")?;
        let sigma = ensure_non_negative(params.demand_std_dev, "standard deviation")?;

        let safety_stock = z * sigma * f64::from(params.lead_time_days).sqrt();
        debug!(
            z,
            demand_std_dev = sigma,
            lead_time_days = params.lead_time_days,
            safety_stock,
            "computed safety stock"
        );
        Ok(safety_stock)
    }
}

impl SafetyStockAlgorithm {
    /// Approximate Z-score for a service level given in percent.
    ///
    /// Exact table hits return the tabulated value. Anything else snaps to the
    /// nearest tabulated service level; on a tie the lower level wins, so 96%
    /// maps to 95% (1.65) rather than 97%.
    ///
    /// A NaN input has no nearest level; every distance compares equal and the
    /// first entry (50%, Z = 0.00) is returned. Callers taking user input
    /// should reject non-finite levels first.
    pub fn z_score_for_service_level(service_level_percent: f64) -> f64 {
        if let Some(&(_, z)) = Z_SCORE_TABLE
            .iter()
            .find(|(level, _)| *level == service_level_percent)
        {
            return z;
        }

        // min_by keeps the first of equal elements.
        Z_SCORE_TABLE
            .iter()
            .min_by(|(a, _), (b, _)| {
                (a - service_level_percent)
                    .abs()
                    .total_cmp(&(b - service_level_percent).abs())
            })
            .map(|&(_, z)| z)
            .unwrap_or(0.0)
    }
}
