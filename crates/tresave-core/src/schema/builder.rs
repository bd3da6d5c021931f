use super::{Column, ForeignKey, PrimaryKey, Schema, Table, Type};

use indexmap::IndexMap;

/// Fluent construction of a metadata catalog.
///
/// ```
/// use tresave_core::schema::{Schema, Type};
///
/// let schema = Schema::builder()
///     .table("dept", |t| {
///         t.column("deptno", Type::I64)
///             .column("dname", Type::String)
///             .primary_key(&["deptno"])
///     })
///     .table("emp", |t| {
///         t.column("empno", Type::I64)
///             .column("ename", Type::String)
///             .column("deptno", Type::I64)
///             .primary_key(&["empno"])
///             .foreign_key(&["deptno"], "dept", &["deptno"])
///     })
///     .build();
///
/// assert!(schema.table("emp").is_some());
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    tables: IndexMap<String, Table>,
    bind_exprs: IndexMap<String, String>,
}

#[derive(Debug)]
pub struct TableBuilder {
    table: Table,
}

impl SchemaBuilder {
    pub(crate) fn new() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Registers a table. Re-registering a name replaces the previous
    /// definition in place.
    pub fn table(mut self, name: &str, build: impl FnOnce(TableBuilder) -> TableBuilder) -> Self {
        let builder = TableBuilder {
            table: Table {
                name: name.to_string(),
                ..Table::default()
            },
        };
        let table = build(builder).table;
        self.tables.insert(name.to_string(), table);
        self
    }

    /// Overrides the bind expression for one column.
    pub fn value_expr(mut self, table: &str, column: &str, expr: &str) -> Self {
        self.bind_exprs
            .insert(format!("{table}.{column}"), expr.to_string());
        self
    }

    pub fn build(self) -> Schema {
        Schema {
            tables: self.tables,
            bind_exprs: self.bind_exprs,
        }
    }
}

impl TableBuilder {
    pub fn column(mut self, name: &str, ty: Type) -> Self {
        self.table.columns.push(Column {
            name: name.to_string(),
            ty,
            nullable: true,
        });
        self
    }

    pub fn required_column(mut self, name: &str, ty: Type) -> Self {
        self.table.columns.push(Column {
            name: name.to_string(),
            ty,
            nullable: false,
        });
        self
    }

    pub fn primary_key(mut self, cols: &[&str]) -> Self {
        self.table.primary_key = PrimaryKey {
            cols: cols.iter().map(|col| col.to_string()).collect(),
        };
        self
    }

    pub fn foreign_key(mut self, cols: &[&str], ref_table: &str, ref_cols: &[&str]) -> Self {
        self.table.foreign_keys.push(ForeignKey {
            cols: cols.iter().map(|col| col.to_string()).collect(),
            ref_table: ref_table.to_string(),
            ref_cols: ref_cols.iter().map(|col| col.to_string()).collect(),
        });
        self
    }
}
