use super::Compiler;
use crate::descriptor::{Property, SaveOptions, TableLink};
use tresave_core::{
    schema::Table,
    stmt::{Record, Value},
    Result,
};

/// Context for one nesting level of an update compile.
struct UpdateCx<'a> {
    /// The descriptor the level was compiled from (for children this is
    /// the field name in the enclosing object)
    name: &'a str,
    prop: &'a Property,
    table: &'a Table,
    template: &'a Record,
    parents: &'a [&'a str],
    parent: Option<&'a str>,
    refs: &'a [String],
    pk: Option<&'a str>,
    filter: Option<&'a str>,
    options: SaveOptions,
}

impl<'a> Compiler<'a> {
    /// Emits the update-side statement for one nesting level: a plain
    /// update at the top of the tree, the child policy composition below
    /// it, or `None` when there is nothing to emit.
    ///
    /// Child levels inherit the save options of the top-level descriptor;
    /// field names contribute table name and pinned references only.
    pub(super) fn update_tresql(
        &self,
        name: &str,
        template: &Record,
        parents: &[&str],
        filter: Option<&str>,
        inherited: Option<SaveOptions>,
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
        let options = inherited.unwrap_or(prop.options);

        let cx = UpdateCx {
            name,
            prop: &prop,
            table,
            template,
            parents,
            parent,
            refs: &refs,
            pk,
            filter,
            options,
        };

        // a child whose key is itself a reference shares the parent's row
        // identity: it can only ever be updated
        let one_to_one = matches!(pk, Some(pk) if refs.iter().any(|r| r == pk));

        match (parent, pk) {
            (None, None) => Ok(None),
            (None, Some(_)) => self.update_stmt(&cx),
            (Some(_), _) if one_to_one => self.update_stmt(&cx),
            (Some(_), None) => self.child_without_key(&cx),
            (Some(_), Some(_)) => self.child_with_key(&cx),
        }
    }

    /// Children with no usable key cannot be matched to existing rows:
    /// clear them and re-insert, as the options allow.
    fn child_without_key(&self, cx: &UpdateCx<'_>) -> Result<Option<String>> {
        let mut fragments = Vec::new();
        if cx.options.delete {
            fragments.push(self.delete_all(cx));
        }
        if cx.options.insert {
            if let Some(ins) = self.insert_tresql(cx.name, cx.template, cx.parents, None)? {
                fragments.push(ins);
            }
        }
        Ok(join_fragments(fragments))
    }

    /// Children with a single-column key combine a delete policy with an
    /// upsert policy.
    fn child_with_key(&self, cx: &UpdateCx<'_>) -> Result<Option<String>> {
        let pk = cx.pk.expect("caller checked the key");
        let mut fragments = Vec::new();

        if cx.options.update {
            // rows absent from the incoming list are pruned by key
            fragments.push(self.delete_missing(cx, pk));
        } else if cx.options.delete {
            fragments.push(self.delete_all(cx));
        }

        let ins = if cx.options.insert {
            self.insert_tresql(cx.name, cx.template, cx.parents, None)?
        } else {
            None
        };
        let upd = if cx.options.update {
            self.update_stmt(cx)?
        } else {
            None
        };

        match (ins, upd) {
            (Some(ins), Some(upd)) => fragments.push(format!(
                "_insert_or_update('{}', {ins}, {upd})",
                cx.table.name
            )),
            (Some(ins), None) => fragments.push(ins),
            (None, Some(upd)) => fragments.push(upd),
            (None, None) => {}
        }

        Ok(join_fragments(fragments))
    }

    fn delete_all(&self, cx: &UpdateCx<'_>) -> String {
        format!("-{}[{}]", cx.table.name, self.ref_preds(cx).join(" & "))
    }

    fn delete_missing(&self, cx: &UpdateCx<'_>, pk: &str) -> String {
        format!(
            "_delete_children('{}', '{}', -{}[{} & {pk} !in :ids])",
            cx.name,
            cx.table.name,
            cx.table.name,
            self.ref_preds(cx).join(" & "),
        )
    }

    fn ref_preds(&self, cx: &UpdateCx<'_>) -> Vec<String> {
        cx.refs
            .iter()
            .map(|col| {
                let parent = cx.parent.expect("references imply a parent");
                format!(
                    "{col} = {}",
                    Compiler::ref_value(col, cx.pk, parent, &cx.table.name)
                )
            })
            .collect()
    }

    /// The plain `=table[...]{...}[...]` statement for one level.
    fn update_stmt(&self, cx: &UpdateCx<'_>) -> Result<Option<String>> {
        let table = cx.table;

        let mut preds = self.ref_preds(cx);
        if let Some(pk) = cx.pk {
            if !cx.refs.iter().any(|r| r == pk) {
                preds.push(format!("{pk} = :{pk}"));
            }
        }
        let mut filter = preds.join(" & ");
        if let Some(user) = cx.filter {
            filter = format!("{filter} & ({user})");
        }

        let child_parents: Vec<&str> = cx
            .parents
            .iter()
            .copied()
            .chain(std::iter::once(table.name.as_str()))
            .collect();

        let mut lookups = Vec::new();
        let mut pairs: Vec<(String, Option<String>)> = Vec::new();

        for (field, value) in cx.template.iter() {
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
                    } else if let Some(child_stmt) = self.update_tresql(
                        field,
                        child,
                        &child_parents,
                        None,
                        Some(cx.options),
                    )? {
                        pairs.push((format!("{child_stmt} '{field}'"), None));
                    }
                }
                _ if cx.refs.iter().any(|r| r == field) || cx.pk == Some(field) => {}
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

        for link in cx.prop.linked() {
            if let Some(stmt) = self.linked_update(&table.name, link, cx.template)? {
                pairs.push((stmt, None));
            }
        }

        if pairs.is_empty() {
            return Ok(None);
        }

        let cols: Vec<&str> = pairs.iter().map(|(col, _)| col.as_str()).collect();
        let vals: Vec<&str> = pairs.iter().filter_map(|(_, val)| val.as_deref()).collect();

        let alias = match &cx.prop.alias {
            Some(alias) => format!(" {alias}"),
            None => String::new(),
        };
        let base = format!(
            "={}{}[{}]{{{}}}[{}]",
            table.name,
            alias,
            filter,
            cols.join(", "),
            vals.join(", ")
        );

        Ok(Some(if lookups.is_empty() {
            base
        } else {
            format!("[{}, {}]", lookups.join(", "), base)
        }))
    }

    /// A one-to-one linked table update, filtered by its references to the
    /// primary statement.
    fn linked_update(
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

        let preds: Vec<String> = refs
            .iter()
            .map(|col| {
                format!(
                    "{col} = {}",
                    Compiler::ref_value(col, pk, primary, &table.name)
                )
            })
            .collect();

        let mut cols = Vec::new();
        let mut vals = Vec::new();
        for (field, value) in template.iter() {
            if value.is_record() || value.is_list() {
                continue;
            }
            if refs.iter().any(|r| r == field) || pk == Some(field) {
                continue;
            }
            if let Some(col) = table.col(field) {
                cols.push(col.name.clone());
                vals.push(self.schema.value_expr(&table.name, field));
            }
        }

        if cols.is_empty() {
            return Ok(None);
        }

        Ok(Some(format!(
            "={}[{}]{{{}}}[{}]",
            table.name,
            preds.join(" & "),
            cols.join(", "),
            vals.join(", ")
        )))
    }
}

fn join_fragments(fragments: Vec<String>) -> Option<String> {
    if fragments.is_empty() {
        None
    } else {
        Some(fragments.join(", "))
    }
}
