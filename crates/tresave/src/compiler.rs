mod delete;
pub use delete::Delete;

mod insert;
mod multi;
mod update;

use crate::descriptor::Property;
use tresave_core::{
    schema::{Schema, Table},
    stmt::{shape, Record},
    Error, Result,
};

/// Compiles object trees into TRESQL save statements against a metadata
/// catalog.
///
/// The compiler borrows the catalog for its lifetime and is otherwise
/// stateless; compiling the same descriptor, object and catalog twice
/// produces byte-identical statements.
pub struct Compiler<'a> {
    /// Catalog the statements are compiled against
    schema: &'a Schema,
}

/// Conversion of a typed value into a save descriptor and record, used by
/// [`Compiler::insert_obj`] and [`Compiler::update_obj`].
pub trait IntoSave {
    fn into_save(self) -> (String, Record);
}

impl<'a> Compiler<'a> {
    pub fn new(schema: &'a Schema) -> Compiler<'a> {
        Compiler { schema }
    }

    /// Compiles the insert statement persisting `obj`.
    pub fn insert(&self, name: &str, obj: &Record, filter: Option<&str>) -> Result<String> {
        let template = shape::normalize(obj);
        let prop = Property::parse(name)?;
        match self.insert_tresql(name, &template, &[], filter)? {
            Some(tresql) => {
                tracing::debug!(name, tresql = %tresql, "compiled insert statement");
                Ok(tresql)
            }
            None => Err(self.empty_compile_error(&prop)),
        }
    }

    /// Compiles the update statement persisting `obj`, combining child
    /// insert, update and delete policies.
    pub fn update(&self, name: &str, obj: &Record, filter: Option<&str>) -> Result<String> {
        let template = shape::normalize(obj);
        let prop = Property::parse(name)?;
        match self.update_tresql(name, &template, &[], filter, None)? {
            Some(tresql) => {
                tracing::debug!(name, tresql = %tresql, "compiled update statement");
                Ok(tresql)
            }
            None => {
                let table = &prop.primary().table;
                match self.schema.table(table) {
                    None => Err(Error::table_not_found(table)),
                    Some(meta) if meta.single_key().is_none() => {
                        Err(Error::no_primary_key(table))
                    }
                    Some(_) => Err(Error::no_updatable_columns(table)),
                }
            }
        }
    }

    /// Compiles an insert spanning several related tables: the effective
    /// descriptor is derived from the catalog, then compiled as usual.
    pub fn insert_multiple(
        &self,
        obj: &Record,
        names: &[&str],
        filter: Option<&str>,
    ) -> Result<String> {
        let prop = self.multi_save_prop(names)?;
        self.insert(&prop.to_string(), obj, filter)
    }

    /// Update counterpart of [`Compiler::insert_multiple`].
    pub fn update_multiple(
        &self,
        obj: &Record,
        names: &[&str],
        filter: Option<&str>,
    ) -> Result<String> {
        let prop = self.multi_save_prop(names)?;
        self.update(&prop.to_string(), obj, filter)
    }

    pub fn insert_obj(&self, obj: impl IntoSave, filter: Option<&str>) -> Result<String> {
        let (name, record) = obj.into_save();
        self.insert(&name, &record, filter)
    }

    pub fn update_obj(&self, obj: impl IntoSave, filter: Option<&str>) -> Result<String> {
        let (name, record) = obj.into_save();
        self.update(&name, &record, filter)
    }

    fn empty_compile_error(&self, prop: &Property) -> Error {
        let table = &prop.primary().table;
        if self.schema.table(table).is_none() {
            Error::table_not_found(table)
        } else {
            Error::no_updatable_columns(table)
        }
    }

    /// Establishes the foreign-key columns linking `table` to `parent`:
    /// pinned columns when the descriptor names them (validated against
    /// the catalog), otherwise the unique single-column foreign key.
    fn resolve_refs(&self, table: &Table, parent: &str, pinned: &[String]) -> Result<Vec<String>> {
        if !pinned.is_empty() {
            let valid = pinned.iter().all(|col| {
                table
                    .refs_to(parent)
                    .any(|fk| fk.cols.iter().any(|c| c == col))
            });
            if valid {
                return Ok(pinned.to_vec());
            }
            return Err(Error::ambiguous_reference(format!(
                "columns {pinned:?} of {} do not reference {parent}",
                table.name
            )));
        }

        let single: Vec<_> = table
            .refs_to(parent)
            .filter(|fk| fk.cols.len() == 1)
            .collect();
        match single[..] {
            [fk] => Ok(fk.cols.clone()),
            [] => Err(Error::ambiguous_reference(format!(
                "no single-column reference from {} to {parent}",
                table.name
            ))),
            _ => Err(Error::ambiguous_reference(format!(
                "multiple single-column references from {} to {parent}",
                table.name
            ))),
        }
    }

    /// Reference columns for a one-to-one linked table: pinned by the
    /// descriptor, or inferred from the catalog.
    fn linked_refs(&self, linked: &Table, primary: &str, pinned: &[String]) -> Result<Vec<String>> {
        if pinned.is_empty() {
            self.resolve_refs(linked, primary, pinned)
        } else {
            Ok(pinned.to_vec())
        }
    }

    /// How a reference column is bound: a column that is itself the
    /// statement's key shares the parent's id through `_id_ref_id`, any
    /// other reference takes the parent's last generated id.
    fn ref_value(col: &str, pk: Option<&str>, parent: &str, table: &str) -> String {
        if Some(col) == pk {
            format!("_id_ref_id({parent}, {table})")
        } else {
            format!(":#{parent}")
        }
    }

    /// Reference bindings for one nesting level, plus the generated-key
    /// binding when the template carries the key field itself.
    fn refs_and_pk(
        &self,
        table: &Table,
        refs: &[String],
        pk: Option<&str>,
        parent: Option<&str>,
        template: &Record,
    ) -> Vec<(String, String)> {
        let Some(parent) = parent else {
            return Vec::new();
        };

        let mut pairs: Vec<_> = refs
            .iter()
            .map(|col| {
                (
                    col.clone(),
                    Self::ref_value(col, pk, parent, &table.name),
                )
            })
            .collect();

        if let Some(pk) = pk {
            if !refs.iter().any(|r| r == pk) && template.contains(pk) {
                pairs.push((pk.to_string(), format!("#{}", table.name)));
            }
        }

        pairs
    }

    /// The `_lookup_edit` fragment for a nested object that maps to a row
    /// of a referenced table: the row is inserted or updated first and its
    /// id bound to the referencing column.
    fn lookup_edit(&self, lookup_table: &str, field: &str, obj: &Record) -> Result<Option<String>> {
        let Some(table) = self.schema.table(lookup_table) else {
            return Ok(None);
        };
        let key = match table.single_key() {
            Some(pk) => format!("'{pk}'"),
            None => "null".to_string(),
        };
        let ins = self.insert_tresql(lookup_table, obj, &[], None)?;
        let upd = self.update_tresql(lookup_table, obj, &[], None, None)?;

        Ok(Some(format!(
            ":{field} = |_lookup_edit('{field}', {key}, {ins}, {upd})",
            ins = ins.as_deref().unwrap_or("null"),
            upd = upd.as_deref().unwrap_or("null"),
        )))
    }
}
