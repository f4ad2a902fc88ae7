//! The recursive evaluator behind every read and write.
//!
//! `apply` consumes one expression per call, recursing on the tail. A
//! supplied `value` selects write mode; `None` selects read mode. Missing
//! intermediate containers are created during traversal in both modes, so
//! even a read can mutate the target.
use crate::ast::Expression;
use crate::error::AccessError;
use serde_json::{Map, Value};

/// Applies `expressions` to `target`, writing `value` when supplied and
/// reading otherwise.
///
/// Reads return `Ok(Some(_))` for a defined result and `Ok(None)` when the
/// addressed location is absent; writes return `Ok(None)`.
pub fn apply(
    target: &mut Value,
    expressions: &[Expression],
    value: Option<Value>,
) -> Result<Option<Value>, AccessError> {
    let Some((expression, rest)) = expressions.split_first() else {
        return Err(AccessError::UnboundExpressions);
    };

    match expression {
        Expression::Path(key) => apply_key(target, key, rest, value),
        Expression::Index(index) => apply_index(target, *index, rest, value),
        Expression::Slice(start, end) => apply_slice(target, *start, *end, rest, value),
    }
}

/// Chooses the container kind for a missing intermediate node from the
/// step that will descend into it. The lookahead is exactly one step deep.
fn vivified(next: &Expression) -> Value {
    match next {
        Expression::Path(_) => Value::Object(Map::new()),
        Expression::Index(_) | Expression::Slice(..) => Value::Array(Vec::new()),
    }
}

fn apply_key(
    target: &mut Value,
    key: &str,
    rest: &[Expression],
    value: Option<Value>,
) -> Result<Option<Value>, AccessError> {
    let map = match target {
        Value::Object(map) => map,
        other => return Err(AccessError::traversal(format!("key '{key}'"), kind_of(other))),
    };

    if rest.is_empty() {
        return Ok(match value {
            Some(value) => {
                map.insert(key.to_string(), value);
                None
            }
            None => map.get(key).cloned(),
        });
    }

    // Only a genuinely absent entry is vivified; an existing null stays in
    // place and fails on the next step like any other non-container.
    let child = map.entry(key.to_string()).or_insert_with(|| {
        log::trace!("vivifying missing entry '{}'", key);
        vivified(&rest[0])
    });
    apply(child, rest, value)
}

fn apply_index(
    target: &mut Value,
    index: i64,
    rest: &[Expression],
    value: Option<Value>,
) -> Result<Option<Value>, AccessError> {
    let seq = match target {
        Value::Array(seq) => seq,
        other => {
            return Err(AccessError::traversal(
                format!("index [{index}]"),
                kind_of(other),
            ));
        }
    };

    // A negative position never names an element: reading one is simply
    // absent, anything that would have to materialize a slot is rejected.
    let Ok(i) = usize::try_from(index) else {
        return if rest.is_empty() && value.is_none() {
            Ok(None)
        } else {
            Err(AccessError::Negative(index))
        };
    };

    if rest.is_empty() {
        return Ok(match value {
            Some(value) => {
                if seq.len() <= i {
                    seq.resize(i + 1, Value::Null);
                }
                seq[i] = value;
                None
            }
            None => seq.get(i).cloned(),
        });
    }

    if seq.len() <= i {
        log::trace!("vivifying missing slot [{}]", i);
        seq.resize(i + 1, Value::Null);
        seq[i] = vivified(&rest[0]);
    }
    apply(&mut seq[i], rest, value)
}

fn apply_slice(
    target: &mut Value,
    start: Option<i64>,
    end: Option<i64>,
    rest: &[Expression],
    value: Option<Value>,
) -> Result<Option<Value>, AccessError> {
    let seq = match target {
        Value::Array(seq) => seq,
        other => return Err(AccessError::traversal(slice_label(start, end), kind_of(other))),
    };

    if rest.is_empty() {
        return match value {
            Some(value) => {
                write_slice(seq, start, end, value)?;
                Ok(None)
            }
            None => Ok(Some(Value::Array(read_slice(seq, start, end)))),
        };
    }

    // Broadcast: the remaining path applies independently to every element
    // in range. A write forwards the same value into each iteration; it is
    // NOT distributed per index the way a terminal slice write is.
    let start = non_negative(start.unwrap_or(0))?;
    let end = non_negative(end.unwrap_or(seq.len() as i64))?;
    let mut collected = Vec::new();

    for i in start..end {
        let element = seq
            .get_mut(i)
            .ok_or_else(|| AccessError::traversal(format!("index [{i}]"), "a missing element"))?;
        let result = apply(element, rest, value.clone())?;
        if value.is_none() {
            collected.push(result.unwrap_or(Value::Null));
        }
    }

    if value.is_none() {
        Ok(Some(Value::Array(collected)))
    } else {
        Ok(None)
    }
}

/// Terminal slice write: distributes the elements of `value` over the
/// half-open range `[start, end)`, one element per slot.
///
/// An absent start defaults to 0; an absent end defaults to
/// `start + value.len()`. Slots past the current length are padded with
/// null, as are range slots beyond the supplied elements.
fn write_slice(
    seq: &mut Vec<Value>,
    start: Option<i64>,
    end: Option<i64>,
    value: Value,
) -> Result<(), AccessError> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(AccessError::SliceAssign {
                found: kind_of(&other),
            });
        }
    };

    let start = non_negative(start.unwrap_or(0))?;
    let end = match end {
        Some(end) => non_negative(end)?,
        None => start + items.len(),
    };

    if end > start {
        if end > seq.len() {
            seq.resize(end, Value::Null);
        }
        for i in start..end {
            seq[i] = items.get(i - start).cloned().unwrap_or(Value::Null);
        }
    }
    Ok(())
}

/// Terminal slice read, with the usual tail-relative semantics: negative
/// bounds count from the end, bounds clamp to the sequence, an inverted
/// range is empty.
fn read_slice(seq: &[Value], start: Option<i64>, end: Option<i64>) -> Vec<Value> {
    let len = seq.len() as i64;
    let clamp = |raw: i64| -> usize {
        if raw < 0 {
            (len + raw).max(0) as usize
        } else {
            raw.min(len) as usize
        }
    };

    let start = clamp(start.unwrap_or(0));
    let end = clamp(end.unwrap_or(len));
    if start >= end {
        Vec::new()
    } else {
        seq[start..end].to_vec()
    }
}

fn non_negative(raw: i64) -> Result<usize, AccessError> {
    usize::try_from(raw).map_err(|_| AccessError::Negative(raw))
}

fn slice_label(start: Option<i64>, end: Option<i64>) -> String {
    let bound = |b: Option<i64>| b.map(|n| n.to_string()).unwrap_or_default();
    format!("slice [{}:{}]", bound(start), bound(end))
}

/// A short container-kind label for error messages.
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
