//! Defines the expression forms a parsed access path is made of.

/// A single addressing step in a parsed access path.
///
/// A path like `orders[1:3].sku` flattens into
/// `[Path("orders"), Slice(Some(1), Some(3)), Path("sku")]` — consecutive
/// bracket steps stay on the same flat list, there is no grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// An object-key step (e.g. `customer`).
    Path(String),
    /// An array-position step (e.g. `[0]`).
    Index(i64),
    /// A half-open array range `[start, end)` (e.g. `[1:3]`); either bound
    /// may be absent and defaults independently at evaluation time.
    Slice(Option<i64>, Option<i64>),
}
