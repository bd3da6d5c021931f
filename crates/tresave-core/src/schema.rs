mod builder;
pub use builder::{SchemaBuilder, TableBuilder};

mod column;
pub use column::Column;

mod fk;
pub use fk::ForeignKey;

mod pk;
pub use pk::PrimaryKey;

mod table;
pub use table::Table;

mod ty;
pub use ty::Type;

use indexmap::IndexMap;

/// The relational metadata catalog statements are compiled against.
///
/// The catalog is read-only for the duration of a compile and must be
/// effectively immutable while shared.
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schema {
    /// Tables keyed by name, in registration order
    pub tables: IndexMap<String, Table>,

    /// Per-column bind expression overrides, keyed `table.column`
    pub bind_exprs: IndexMap<String, String>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// The DSL fragment that binds a column's value from the environment.
    ///
    /// Defaults to `:column`; embedders may override individual columns
    /// (e.g. to wrap a conversion function around the bind variable).
    pub fn value_expr(&self, table: &str, column: &str) -> String {
        self.bind_exprs
            .get(&format!("{table}.{column}"))
            .cloned()
            .unwrap_or_else(|| format!(":{column}"))
    }
}
