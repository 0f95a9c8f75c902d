use serde::Serialize;
use tracing::debug;

use stockplan_core::{DomainError, DomainResult, ensure_non_negative, ensure_positive};

use crate::demand::Demand;
use crate::order::Order;

/// Current inventory state for a single product.
///
/// Built through [`InventoryBuilder`]; stock only moves through
/// [`add_stock`](Inventory::add_stock) / [`remove_stock`](Inventory::remove_stock)
/// so `current_stock` can never go negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inventory {
    product_id: String,
    current_stock: f64,
    holding_cost_per_unit: f64,
    unit_cost: f64,
    min_stock_level: f64,
    max_stock_level: Option<f64>,
}

/// Builder for [`Inventory`]. Optional fields default to `unit_cost = 0`,
/// `min_stock_level = 0` and no maximum.
#[derive(Debug, Clone)]
pub struct InventoryBuilder {
    product_id: String,
    current_stock: f64,
    holding_cost_per_unit: f64,
    unit_cost: f64,
    min_stock_level: f64,
    max_stock_level: Option<f64>,
}

impl InventoryBuilder {
    pub fn with_unit_cost(mut self, unit_cost: f64) -> Self {
        self.unit_cost = unit_cost;
        self
    }

    pub fn with_min_stock_level(mut self, level: f64) -> Self {
        self.min_stock_level = level;
        self
    }

    pub fn with_max_stock_level(mut self, level: f64) -> Self {
        self.max_stock_level = Some(level);
        self
    }

    pub fn build(self) -> DomainResult<Inventory> {
        let current_stock = ensure_non_negative(self.current_stock, "current stock")?;
        let holding_cost_per_unit =
            ensure_non_negative(self.holding_cost_per_unit, "holding cost")?;
        let unit_cost = ensure_non_negative(self.unit_cost, "unit cost")?;
        let min_stock_level = ensure_non_negative(self.min_stock_level, "minimum stock level")?;

        let max_stock_level = match self.max_stock_level {
            Some(max) => {
                let max = ensure_non_negative(max, "maximum stock level")?;
                if max < min_stock_level {
                    return Err(DomainError::invalid_argument(
                        "maximum stock level cannot be less than minimum",
                    ));
                }
                Some(max)
            }
            None => None,
        };

        Ok(Inventory {
            product_id: self.product_id,
            current_stock,
            holding_cost_per_unit,
            unit_cost,
            min_stock_level,
            max_stock_level,
        })
    }
}

impl Inventory {
    pub fn builder(
        product_id: impl Into<String>,
        current_stock: f64,
        holding_cost_per_unit: f64,
    ) -> InventoryBuilder {
        InventoryBuilder {
            product_id: product_id.into(),
            current_stock,
            holding_cost_per_unit,
            unit_cost: 0.0,
            min_stock_level: 0.0,
            max_stock_level: None,
        }
    }

    /// Shorthand for an inventory with every optional field at its default.
    pub fn new(
        product_id: impl Into<String>,
        current_stock: f64,
        holding_cost_per_unit: f64,
    ) -> DomainResult<Self> {
        Self::builder(product_id, current_stock, holding_cost_per_unit).build()
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn current_stock(&self) -> f64 {
        self.current_stock
    }

    pub fn holding_cost_per_unit(&self) -> f64 {
        self.holding_cost_per_unit
    }

    pub fn unit_cost(&self) -> f64 {
        self.unit_cost
    }

    pub fn min_stock_level(&self) -> f64 {
        self.min_stock_level
    }

    pub fn max_stock_level(&self) -> Option<f64> {
        self.max_stock_level
    }

    pub fn add_stock(&mut self, quantity: f64) -> DomainResult<()> {
        let quantity = ensure_positive(quantity, "quantity to add")?;
        self.current_stock += quantity;
        debug!(
            product_id = %self.product_id,
            added = quantity,
            stock = self.current_stock,
            "stock added"
        );
        Ok(())
    }

    /// Remove `quantity` units. Fails without touching the stock when fewer
    /// units are on hand.
    pub fn remove_stock(&mut self, quantity: f64) -> DomainResult<()> {
        let quantity = ensure_positive(quantity, "quantity to remove")?;
        if quantity > self.current_stock {
            return Err(DomainError::insufficient_stock(quantity, self.current_stock));
        }
        self.current_stock -= quantity;
        debug!(
            product_id = %self.product_id,
            removed = quantity,
            stock = self.current_stock,
            "stock removed"
        );
        Ok(())
    }

    /// Strictly below the minimum; sitting exactly on it is fine.
    pub fn is_below_minimum(&self) -> bool {
        self.current_stock < self.min_stock_level
    }

    /// Strictly above the maximum. Always `false` without a maximum.
    pub fn is_above_maximum(&self) -> bool {
        match self.max_stock_level {
            Some(max) => self.current_stock > max,
            None => false,
        }
    }

    /// Holding cost of the stock currently on hand.
    pub fn calculate_holding_cost(&self) -> f64 {
        self.current_stock * self.holding_cost_per_unit
    }

    /// Consume stock for a demand event.
    pub fn fulfil(&mut self, demand: &Demand) -> DomainResult<()> {
        self.ensure_product(demand.product_id())?;
        if demand.quantity() == 0.0 {
            return Ok(());
        }
        self.remove_stock(demand.quantity())
    }

    /// Book the arrival of a replenishment order.
    pub fn receive(&mut self, order: &Order) -> DomainResult<()> {
        self.ensure_product(order.product_id())?;
        self.add_stock(order.quantity())
    }

    fn ensure_product(&self, product_id: &str) -> DomainResult<()> {
        if self.product_id != product_id {
            return Err(DomainError::invariant(format!(
                "product_id mismatch (inventory: {}, event: {product_id})",
                self.product_id
            )));
        }
        Ok(())
    }
}
