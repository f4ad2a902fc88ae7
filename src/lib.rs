//! A compact path-expression engine for reading and writing values inside
//! generically-shaped JSON trees.
//!
//! Paths address values in nested objects and arrays (`customer.name`,
//! `orders[0].id`, `rows[1:3].label`) with both read and write semantics:
//! missing intermediate containers are created on the fly, and a slice
//! step broadcasts the remaining path across a range of array elements.
//!
//! ```
//! use dapath::Accessor;
//! use serde_json::json;
//!
//! let mut data = json!({ "orders": [{ "sku": "a" }, { "sku": "b" }] });
//!
//! let mut skus = Accessor::new(&mut data, "orders[:].sku").unwrap();
//! assert_eq!(skus.get_value().unwrap(), Some(json!(["a", "b"])));
//!
//! let mut total = Accessor::new(&mut data, "summary.total").unwrap();
//! total.set_value(json!(2)).unwrap();
//! assert_eq!(data, json!({
//!     "orders": [{ "sku": "a" }, { "sku": "b" }],
//!     "summary": { "total": 2 },
//! }));
//! ```

pub mod accessor;
pub mod apply;
pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

// --- Public API ---
pub use accessor::{Accessor, get, set};
pub use apply::apply;
pub use ast::Expression;
pub use error::AccessError;
pub use lexer::{Token, TokenKind, lex};
pub use parser::parse_path;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_and_read_simple_path() {
        let mut data = json!({ "customer": { "name": "ACME" } });
        let expressions = parse_path("customer.name").unwrap();
        let result = apply(&mut data, &expressions, None).unwrap();
        assert_eq!(result, Some(json!("ACME")));
    }

    #[test]
    fn test_parse_and_read_path_with_index() {
        let mut data = json!({ "orders": [{ "id": "A" }, { "id": "B" }] });
        let expressions = parse_path("orders[1].id").unwrap();
        let result = apply(&mut data, &expressions, None).unwrap();
        assert_eq!(result, Some(json!("B")));
    }

    #[test]
    fn test_parse_and_write_through_absent_path() {
        let mut data = json!({});
        let expressions = parse_path("report.rows[0].label").unwrap();
        apply(&mut data, &expressions, Some(json!("total"))).unwrap();
        assert_eq!(data, json!({ "report": { "rows": [{ "label": "total" }] } }));
    }

    #[test]
    fn test_round_trip_leaves_target_unchanged() {
        let original = json!({ "a": { "b": [1, 2, 3] } });
        let mut data = original.clone();
        let mut accessor = Accessor::new(&mut data, "a.b[1]").unwrap();
        let value = accessor.get_value().unwrap().unwrap();
        accessor.set_value(value).unwrap();
        assert_eq!(data, original);
    }
}
