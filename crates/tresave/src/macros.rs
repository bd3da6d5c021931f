//! Execution-time callbacks compiled statements rely on.
//!
//! Emitted TRESQL never carries data values; cross-row identity and
//! runtime policy choices are deferred to four macro sites the execution
//! engine must provide. [`SaveMacros`] is that contract. The reusable
//! pieces of the macro semantics (id tracking, upsert dispatch, child id
//! collection) live here so an engine only supplies evaluation of the
//! statement fragments themselves.

use tresave_core::{
    stmt::{Record, Value},
    Error, Result,
};

use indexmap::IndexMap;

/// The callbacks an execution engine resolves when it encounters the
/// corresponding macro names in a compiled statement.
pub trait SaveMacros {
    /// `_id_ref_id(id_ref, id)`: returns the last id observed under
    /// `id_ref` and registers it under `id` as well, so descendants of the
    /// statement see it. Used where two tables share one key value.
    fn id_ref_id(&mut self, id_ref: &str, id: &str) -> Result<Value>;

    /// `_lookup_edit(ref_col, key, insert, update)`: edits the row
    /// represented by the object bound under `ref_col`: runs `update` when
    /// the object carries a non-null `key` and yields that value, runs
    /// `insert` otherwise and yields the generated id. The enclosing
    /// statement binds the yielded id to `ref_col`.
    fn lookup_edit(
        &mut self,
        ref_col: &str,
        key: Option<&str>,
        insert: &str,
        update: &str,
    ) -> Result<Value>;

    /// `_insert_or_update(table, insert, update)`: runs `update` when the
    /// nearest enclosing environment carries a non-null value under the
    /// table's single-column key, `insert` otherwise.
    fn insert_or_update(&mut self, table: &str, insert: &str, update: &str) -> Result<Value>;

    /// `_delete_children(obj, table, delete)`: collects the non-null key
    /// values of the sequence bound under `obj`, binds them as `:ids` and
    /// runs `delete`, which prunes the rows missing from the sequence.
    fn delete_children(&mut self, obj: &str, table: &str, delete: &str) -> Result<Value>;
}

/// Tracks the most recently generated id per name.
///
/// Insert statements register generated keys under their table name
/// (`#table` bindings and engine-registered generated keys alike); `:#table`
/// references resolve against this registry.
#[derive(Debug, Default)]
pub struct IdRegistry {
    ids: IndexMap<String, Value>,
}

impl IdRegistry {
    pub fn new() -> IdRegistry {
        IdRegistry::default()
    }

    /// Registers `id` as the last id observed under `name`.
    pub fn register(&mut self, name: impl Into<String>, id: impl Into<Value>) {
        self.ids.insert(name.into(), id.into());
    }

    /// The last id registered under `name`.
    pub fn last(&self, name: &str) -> Option<&Value> {
        self.ids.get(name)
    }

    /// The last id under `id_ref`, re-registered under `id` as well.
    pub fn id_ref_id(&mut self, id_ref: &str, id: &str) -> Option<Value> {
        let value = self.ids.get(id_ref).cloned()?;
        self.ids.insert(id.to_string(), value.clone());
        Some(value)
    }
}

/// Which branch an upsert macro dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    Insert,
    Update,
}

/// Dispatch rule shared by `_insert_or_update` and `_lookup_edit`: update
/// when `env` carries a non-null value under `key`, insert otherwise.
pub fn upsert_action(env: &Record, key: Option<&str>) -> SaveAction {
    match key.and_then(|key| env.get(key)) {
        Some(value) if !value.is_null() => SaveAction::Update,
        _ => SaveAction::Insert,
    }
}

/// The object a `_lookup_edit` site operates on: the environment entry
/// under `name` must be an object.
pub fn edit_target<'v>(value: &'v Value, name: &str) -> Result<&'v Record> {
    value
        .as_record()
        .ok_or_else(|| Error::shape(format!("expected an object at `{name}`")))
}

/// Collects the non-null `key` values of a children sequence for the
/// `:ids` binding of a delete-missing statement. The sequence elements
/// must be objects.
pub fn child_ids(children: &Value, key: &str) -> Result<Vec<Value>> {
    let Value::List(items) = children else {
        return Err(Error::shape(format!(
            "expected a sequence, found {children:?}"
        )));
    };

    let mut ids = Vec::new();
    for item in items {
        let Value::Record(obj) = item else {
            return Err(Error::shape(format!(
                "expected objects in the sequence, found {item:?}"
            )));
        };
        if let Some(value) = obj.get(key) {
            if !value.is_null() {
                ids.push(value.clone());
            }
        }
    }
    Ok(ids)
}
