use super::Compiler;
use crate::descriptor::Property;

use tresave_core::{Error, Result};

impl<'a> Compiler<'a> {
    /// Derives the effective descriptor for a multi-table save.
    ///
    /// Each table after the first is linked onto the accumulated set
    /// through its single-column foreign keys (unless the caller pinned
    /// them) plus its own single-column key, so the linked statements can
    /// share row identity with the primary one. Composite keys contribute
    /// nothing.
    pub(super) fn multi_save_prop(&self, names: &[&str]) -> Result<Property> {
        let [head, tail @ ..] = names else {
            return Err(Error::bad_descriptor(""));
        };
        let mut prop = Property::parse(head)?;

        for name in tail {
            let mut linked = Property::parse(name)?
                .tables
                .into_iter()
                .next()
                .expect("a parsed descriptor names at least one table");

            let Some(table) = self.schema.table(&linked.table) else {
                return Err(Error::table_not_found(&linked.table));
            };

            if linked.refs.is_empty() {
                let acc: Vec<&str> = prop.tables.iter().map(|l| l.table.as_str()).collect();
                for target in &acc {
                    let candidates: Vec<&str> = table
                        .refs_to(target)
                        .filter(|fk| fk.cols.len() == 1)
                        .map(|fk| fk.cols[0].as_str())
                        .collect();
                    match candidates[..] {
                        [] => {}
                        [col] => linked.refs.push(col.to_string()),
                        _ => {
                            return Err(Error::ambiguous_reference(format!(
                                "multiple single-column references from {} to {target}",
                                table.name
                            )))
                        }
                    }
                }
                if linked.refs.is_empty() {
                    return Err(Error::ambiguous_reference(format!(
                        "no single-column reference from {} to {}",
                        table.name,
                        acc.join(", ")
                    )));
                }
            }

            if let Some(pk) = table.single_key() {
                if !linked.refs.iter().any(|r| r == pk) {
                    linked.refs.push(pk.to_string());
                }
            }

            prop.tables.push(linked);
        }

        Ok(prop)
    }
}
