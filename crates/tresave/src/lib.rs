//! Compiles hierarchical data objects into TRESQL save statements.
//!
//! Given an object tree, a save descriptor naming the target table(s) and
//! a metadata catalog, [`Compiler`] emits the DSL expression that, once
//! handed to a TRESQL engine, performs the inserts, updates and deletes
//! persisting the tree. Compilation is pure: no I/O, no connections, no
//! state between calls.

pub mod descriptor;
pub use descriptor::{Property, SaveOptions, TableLink};

mod compiler;
pub use compiler::{Compiler, Delete, IntoSave};

pub mod macros;
pub use macros::{IdRegistry, SaveAction, SaveMacros};

pub use tresave_core::{record, schema, stmt, Error, Result};
pub use tresave_core::{
    schema::Schema,
    stmt::{Record, Value},
};
