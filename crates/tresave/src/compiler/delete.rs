use super::Compiler;
use crate::descriptor::Property;

use indexmap::IndexMap;
use tresave_core::{stmt::Value, Error, Result};

/// A compiled delete: the statement plus its positional bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// The statement
    pub tresql: String,

    /// Bind values keyed by 1-based position
    pub params: IndexMap<String, Value>,
}

impl<'a> Compiler<'a> {
    /// Compiles a delete of the row identified by `id`.
    ///
    /// An extra `filter` is conjoined after the key predicate; its
    /// positional parameters start at position 2 (`id` is position 1).
    pub fn delete(
        &self,
        name: &str,
        id: impl Into<Value>,
        filter: Option<&str>,
        filter_params: Option<IndexMap<String, Value>>,
    ) -> Result<Delete> {
        let prop = Property::parse(name)?;
        let link = prop.primary();
        let table = self
            .schema
            .table(&link.table)
            .ok_or_else(|| Error::table_not_found(&link.table))?;
        let pk = table
            .single_key()
            .ok_or_else(|| Error::no_primary_key(&table.name))?;

        let alias = match &prop.alias {
            Some(alias) => format!(" {alias}"),
            None => String::new(),
        };
        let tresql = match filter {
            None => format!("-{}{alias}[{pk} = ?]", table.name),
            Some(filter) => format!("-{}{alias}[{pk} = ? & ({filter})]", table.name),
        };

        let mut params = IndexMap::new();
        params.insert("1".to_string(), id.into());
        if let Some(extra) = filter_params {
            params.extend(extra);
        }

        tracing::debug!(name, tresql = %tresql, "compiled delete statement");

        Ok(Delete { tresql, params })
    }
}
