//! Structure normalization.
//!
//! Save compilation does not look at scalar values, only at the key
//! structure of the input object. [`normalize`] reduces an object tree to
//! that structure: sequences of sibling objects collapse into one merged
//! template, empty sequences are preserved as empty objects (so an empty
//! child list still drives child deletion on update), nested objects are
//! normalized recursively and scalars pass through untouched.

use super::{Record, Value};

/// Reduces an input object to its save template.
pub fn normalize(obj: &Record) -> Record {
    obj.iter()
        .map(|(name, value)| (name.to_string(), normalize_value(value)))
        .collect()
}

fn normalize_value(value: &Value) -> Value {
    match value {
        Value::List(items) if items.is_empty() => Value::Record(Record::new()),
        Value::List(items) if items.iter().all(Value::is_record) => {
            let templates = items
                .iter()
                .map(|item| normalize(item.as_record().expect("checked above")))
                .collect();
            Value::Record(merge(templates))
        }
        Value::Record(obj) => Value::Record(normalize(obj)),
        other => other.clone(),
    }
}

/// Folds sibling templates into one. The head object establishes the key
/// set and key order; later objects can only refine nested objects, never
/// introduce keys.
fn merge(templates: Vec<Record>) -> Record {
    let mut iter = templates.into_iter();
    let Some(head) = iter.next() else {
        return Record::new();
    };

    iter.fold(head, |acc, next| {
        acc.into_iter()
            .map(|(name, v1)| {
                let v2 = next.get(&name).cloned().unwrap_or(Value::Null);
                let merged = match (v1, v2) {
                    (Value::Record(a), Value::Record(b)) if !a.is_empty() && !b.is_empty() => {
                        Value::Record(merge(vec![a, b]))
                    }
                    (Value::Record(a), _) if !a.is_empty() => Value::Record(a),
                    (_, Value::Record(b)) if !b.is_empty() => Value::Record(b),
                    (v1, _) => v1,
                };
                (name, merged)
            })
            .collect()
    })
}
