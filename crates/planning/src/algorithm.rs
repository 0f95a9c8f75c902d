use stockplan_core::DomainResult;

/// A stock planning calculation.
///
/// Every algorithm is a stateless unit struct: `calculate` evaluates its
/// formula over a validated input and never mutates anything. Additional
/// per-algorithm helpers (cost breakdowns, table lookups) live as inherent
/// methods on the implementor.
pub trait StockAlgorithm {
    type Input: ?Sized;
    type Output;

    fn calculate(&self, input: &Self::Input) -> DomainResult<Self::Output>;
}
