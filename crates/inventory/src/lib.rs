//! Inventory domain module.
//!
//! Validated value objects (`Demand`, `Order`) and the mutable per-product
//! `Inventory` state they act on. Pure domain logic: no IO, no storage.

pub mod demand;
pub mod order;
pub mod stock;

pub use demand::Demand;
pub use order::Order;
pub use stock::{Inventory, InventoryBuilder};
