use super::Compiler;
use crate::descriptor::{Property, TableLink};
use tresave_core::{
    stmt::{Record, Value},
    Result,
};

impl<'a> Compiler<'a> {
    /// Emits the insert statement for one nesting level, or `None` when
    /// the primary table is unknown or nothing remains to insert.
    ///
    /// `parents` is the enclosing table stack, innermost last; reference
    /// columns of the current level bind against its tail.
    pub(super) fn insert_tresql(
        &self,
        name: &str,
        template: &Record,
        parents: &[&str],
        filter: Option<&str>,
    ) -> Result<Option<String>> {
        let prop = Property::parse(name)?;
        let link = prop.primary();
        let Some(table) = self.schema.table(&link.table) else {
            return Ok(None);
        };

        let parent = parents.last().copied();
        let pk = table.single_key();
        let refs = match parent {
            Some(parent) => self.resolve_refs(table, parent, &link.refs)?,
            None => Vec::new(),
        };
        let refs_and_pk = self.refs_and_pk(table, &refs, pk, parent, template);

        let child_parents: Vec<&str> = parents
            .iter()
            .copied()
            .chain(std::iter::once(table.name.as_str()))
            .collect();

        let mut lookups = Vec::new();
        let mut pairs: Vec<(String, Option<String>)> = Vec::new();

        for (field, value) in template.iter() {
            match value {
                Value::Record(child) => {
                    if let Some(lookup_table) = table.ref_table(&[field]) {
                        if let Some(fragment) = self.lookup_edit(lookup_table, field, child)? {
                            lookups.push(fragment);
                            if let Some(col) = table.col(field) {
                                pairs.push((
                                    col.name.clone(),
                                    Some(self.schema.value_expr(&table.name, field)),
                                ));
                            }
                        }
                    } else if let Some(child_stmt) =
                        self.insert_tresql(field, child, &child_parents, None)?
                    {
                        pairs.push((format!("{child_stmt} '{field}'"), None));
                    }
                }
                _ if refs_and_pk.iter().any(|(col, _)| col == field) => {}
                _ => {
                    if let Some(col) = table.col(field) {
                        pairs.push((
                            col.name.clone(),
                            Some(self.schema.value_expr(&table.name, field)),
                        ));
                    }
                }
            }
        }

        for (col, val) in refs_and_pk {
            pairs.push((col, Some(val)));
        }

        for link in prop.linked() {
            if let Some(stmt) = self.linked_insert(&table.name, link, template)? {
                pairs.push((stmt, None));
            }
        }

        if pairs.is_empty() {
            return Ok(None);
        }

        let cols: Vec<&str> = pairs.iter().map(|(col, _)| col.as_str()).collect();
        let vals: Vec<&str> = pairs.iter().filter_map(|(_, val)| val.as_deref()).collect();

        let base = match filter {
            None => format!(
                "+{}{{{}}}[{}]",
                table.name,
                cols.join(", "),
                vals.join(", ")
            ),
            // conditional insert: select the bind values from the target
            // table under the filter, row-limited, values aliased to
            // their destination columns
            Some(filter) => {
                let sel: Vec<String> = pairs
                    .iter()
                    .filter_map(|(col, val)| val.as_ref().map(|val| format!("{val} {col}")))
                    .collect();
                format!(
                    "+{table}{{{cols}}} ({table}[{filter}]{{{sel}}} @(1))",
                    table = table.name,
                    cols = cols.join(", "),
                    sel = sel.join(", "),
                )
            }
        };

        let stmt = if lookups.is_empty() {
            base
        } else {
            format!("[{}, {}]", lookups.join(", "), base)
        };

        Ok(Some(stmt))
    }

    /// A one-to-one linked table insert: columns come from the same
    /// template, references bind to the primary statement's ids. Linked
    /// tables take no children and no filter.
    fn linked_insert(
        &self,
        primary: &str,
        link: &TableLink,
        template: &Record,
    ) -> Result<Option<String>> {
        let Some(table) = self.schema.table(&link.table) else {
            return Ok(None);
        };
        let pk = table.single_key();
        let refs = self.linked_refs(table, primary, &link.refs)?;
        let refs_and_pk = self.refs_and_pk(table, &refs, pk, Some(primary), template);

        let mut cols = Vec::new();
        let mut vals = Vec::new();

        for (field, value) in template.iter() {
            if value.is_record() || value.is_list() {
                continue;
            }
            if refs_and_pk.iter().any(|(col, _)| col == field) {
                continue;
            }
            if let Some(col) = table.col(field) {
                cols.push(col.name.clone());
                vals.push(self.schema.value_expr(&table.name, field));
            }
        }

        for (col, val) in refs_and_pk {
            cols.push(col);
            vals.push(val);
        }

        Ok(Some(format!(
            "+{}{{{}}}[{}]",
            table.name,
            cols.join(", "),
            vals.join(", ")
        )))
    }
}
