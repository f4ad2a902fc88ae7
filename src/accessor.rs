//! The public façade binding a target tree and a parsed path together.
use crate::apply::apply;
use crate::ast::Expression;
use crate::error::AccessError;
use crate::parser::parse_path;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Addresses one location inside a JSON tree.
///
/// The path is parsed once at construction; the cached expression list is
/// reused for every subsequent read or write. Reads take `&mut self`
/// because traversal creates missing intermediate containers in both
/// directions.
pub struct Accessor<'a> {
    target: &'a mut Value,
    expressions: Vec<Expression>,
}

impl<'a> Accessor<'a> {
    /// Binds `target` and `path`, parsing the path eagerly. Fails on a
    /// lexical or syntax error in the path.
    pub fn new(target: &'a mut Value, path: &str) -> Result<Self, AccessError> {
        let expressions = parse_path(path)?;
        Ok(Self {
            target,
            expressions,
        })
    }

    /// Writes `value` at the addressed location, creating missing
    /// intermediate containers along the way.
    pub fn set_value(&mut self, value: Value) -> Result<(), AccessError> {
        apply(self.target, &self.expressions, Some(value)).map(|_| ())
    }

    /// Reads the addressed value; `None` when the location is absent.
    pub fn get_value(&mut self) -> Result<Option<Value>, AccessError> {
        apply(self.target, &self.expressions, None)
    }

    /// Reads the addressed value and deserializes it into `T`.
    pub fn get_value_as<T: DeserializeOwned>(&mut self) -> Result<Option<T>, AccessError> {
        match self.get_value()? {
            Some(raw) => serde_json::from_value(raw)
                .map(Some)
                .map_err(|e| AccessError::Deserialize(e.to_string())),
            None => Ok(None),
        }
    }
}

/// One-shot read without keeping an accessor around.
pub fn get(target: &mut Value, path: &str) -> Result<Option<Value>, AccessError> {
    Accessor::new(target, path)?.get_value()
}

/// One-shot write without keeping an accessor around.
pub fn set(target: &mut Value, path: &str, value: Value) -> Result<(), AccessError> {
    Accessor::new(target, path)?.set_value(value)
}
