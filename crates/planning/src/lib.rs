//! Stock planning algorithms.
//!
//! Closed-form inventory-control formulas (EOQ, reorder point, safety stock)
//! and ABC value classification. Everything here is a pure function of its
//! inputs; the crate has no dependency on the inventory entities.

pub mod abc;
pub mod algorithm;
pub mod eoq;
pub mod reorder_point;
pub mod safety_stock;

pub use abc::{AbcAnalysisAlgorithm, AbcClass, AbcItem, AbcThresholds};
pub use algorithm::StockAlgorithm;
pub use eoq::{CostBreakdown, EoqAlgorithm, EoqParams};
pub use reorder_point::{DEFAULT_WORKING_DAYS, ReorderPointAlgorithm, ReorderPointParams};
pub use safety_stock::{SafetyStockAlgorithm, SafetyStockParams, Z_SCORE_TABLE};
