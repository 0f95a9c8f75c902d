//! ABC analysis: rank items by annual consumption value and split them into
//! three tiers by their cumulative share of the total.
//!
//! Each item is classified from the cumulative share of the items ranked
//! *above* it, before its own value is added. The item that carries the
//! running total across a cut-off therefore stays in the tier it came from:
//! with the default 80/95 cut-offs, a single dominant item worth 99% of the
//! total is still `A`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use stockplan_core::{DomainError, DomainResult, ensure_non_negative};

use crate::algorithm::StockAlgorithm;

/// Value tier assigned by ABC analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbcClass {
    A,
    B,
    C,
}

impl core::fmt::Display for AbcClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            AbcClass::A => "A",
            AbcClass::B => "B",
            AbcClass::C => "C",
        };
        f.write_str(s)
    }
}

/// One row of input: a product and the figures its annual value is derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbcItem {
    pub product_id: String,
    pub unit_cost: f64,
    pub annual_demand: f64,
}

impl AbcItem {
    pub fn new(product_id: impl Into<String>, unit_cost: f64, annual_demand: f64) -> Self {
        Self {
            product_id: product_id.into(),
            unit_cost,
            annual_demand,
        }
    }

    pub fn annual_value(&self) -> f64 {
        self.unit_cost * self.annual_demand
    }
}

/// Cumulative-share cut-offs, in percent.
///
/// An item whose preceding cumulative share is below `a_cutoff` is `A`, below
/// `b_cutoff` is `B`, anything else is `C`.
///
/// Only obtainable through [`AbcThresholds::new`] (or `Default`), so the
/// cut-offs are always ordered and within `0..=100`. Deserialization runs the
/// same check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholds")]
pub struct AbcThresholds {
    a_cutoff: f64,
    b_cutoff: f64,
}

#[derive(Deserialize)]
struct RawThresholds {
    a_cutoff: f64,
    b_cutoff: f64,
}

impl TryFrom<RawThresholds> for AbcThresholds {
    type Error = DomainError;

    fn try_from(raw: RawThresholds) -> DomainResult<Self> {
        Self::new(raw.a_cutoff, raw.b_cutoff)
    }
}

impl Default for AbcThresholds {
    fn default() -> Self {
        Self {
            a_cutoff: 80.0,
            b_cutoff: 95.0,
        }
    }
}

impl AbcThresholds {
    /// Requires `0 < a_cutoff <= b_cutoff <= 100`.
    pub fn new(a_cutoff: f64, b_cutoff: f64) -> DomainResult<Self> {
        let valid = a_cutoff.is_finite()
            && b_cutoff.is_finite()
            && a_cutoff > 0.0
            && a_cutoff <= b_cutoff
            && b_cutoff <= 100.0;
        if !valid {
            return Err(DomainError::invalid_argument(format!(
                "ABC cut-offs must satisfy 0 < A <= B <= 100 (got A={a_cutoff}, B={b_cutoff})"
            )));
        }
        Ok(Self { a_cutoff, b_cutoff })
    }

    pub fn a_cutoff(&self) -> f64 {
        self.a_cutoff
    }

    pub fn b_cutoff(&self) -> f64 {
        self.b_cutoff
    }

    fn classify(&self, cumulative_percent: f64) -> AbcClass {
        if cumulative_percent < self.a_cutoff {
            AbcClass::A
        } else if cumulative_percent < self.b_cutoff {
            AbcClass::B
        } else {
            AbcClass::C
        }
    }
}

/// ABC classification over a list of items.
#[derive(Debug, Default, Clone, Copy)]
pub struct AbcAnalysisAlgorithm {
    thresholds: AbcThresholds,
}

impl AbcAnalysisAlgorithm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(mut self, thresholds: AbcThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn thresholds(&self) -> AbcThresholds {
        self.thresholds
    }
}

impl StockAlgorithm for AbcAnalysisAlgorithm {
    type Input = [AbcItem];
    type Output = BTreeMap<String, AbcClass>;

    fn calculate(&self, items: &[AbcItem]) -> DomainResult<BTreeMap<String, AbcClass>> {
        let mut ranked: Vec<(&str, f64)> = Vec::with_capacity(items.len());
        for item in items {
            ensure_non_negative(item.unit_cost, "unit cost")?;
            ensure_non_negative(item.annual_demand, "annual demand")?;
            ranked.push((item.product_id.as_str(), item.annual_value()));
        }

        // Stable sort: equal values keep their input order.
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let total: f64 = ranked.iter().map(|(_, value)| value).sum();

        let mut classification = BTreeMap::new();
        let mut cumulative = 0.0;
        for (product_id, value) in ranked {
            // Divide first: `cumulative * 100.0` overflows for values near f64::MAX.
            let cumulative_percent = if total > 0.0 {
                cumulative / total * 100.0
            } else {
                0.0
            };
            let class = self.thresholds.classify(cumulative_percent);
            classification.insert(product_id.to_string(), class);
            cumulative += value;
        }

        debug!(items = items.len(), total_value = total, "classified items");
        Ok(classification)
    }
}
