//! Save descriptor parsing.
//!
//! A descriptor names the table(s) an object is saved into, e.g.
//! `emp`, `dept#car:deptnr:nr`, `emp[+-=]`, `dept[+=] d`. Grammar:
//!
//! ```text
//! descriptor := tables options? (" " alias)?
//! tables     := table ("#" table)*
//! table      := ident (":" ident)*
//! options    := "[" "+"? "-"? "="? "]"
//! ```
//!
//! The first segment of each `:`-separated group is a table name, the
//! remaining segments pin the foreign-key columns linking it. `#` joins
//! one-to-one linked tables onto the primary (first) table. The option
//! flags allow child inserts (`+`), deletes (`-`) and updates (`=`); when
//! the bracket group is absent they default to insert and delete.

use tresave_core::{Error, Result};

use std::fmt;
use std::str::FromStr;

/// One table referenced by a save descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLink {
    /// Table name
    pub table: String,

    /// Foreign-key columns pinned by the descriptor; empty when the
    /// linkage is inferred from the catalog
    pub refs: Vec<String>,
}

/// Which persistence actions are allowed for child rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOptions {
    pub insert: bool,
    pub update: bool,
    pub delete: bool,
}

impl Default for SaveOptions {
    fn default() -> SaveOptions {
        SaveOptions {
            insert: true,
            update: false,
            delete: true,
        }
    }
}

/// A parsed save descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Referenced tables; the head is the primary table, the tail are
    /// one-to-one linked tables
    pub tables: Vec<TableLink>,

    pub options: SaveOptions,

    /// Alias for the primary table
    pub alias: Option<String>,
}

impl Property {
    /// Parses a descriptor, failing when the input does not match the
    /// grammar end to end.
    pub fn parse(descriptor: &str) -> Result<Property> {
        let bad = || Error::bad_descriptor(descriptor);

        let tables_end = descriptor
            .find(|c: char| c == '[' || c.is_whitespace())
            .unwrap_or(descriptor.len());
        let (tables_part, mut rest) = descriptor.split_at(tables_end);

        let mut tables = Vec::new();
        for part in tables_part.split('#') {
            let mut segments = part.split(':');
            let table = segments.next().unwrap_or("");
            if !is_ident(table) {
                return Err(bad());
            }
            let mut refs = Vec::new();
            for col in segments {
                if !is_ident(col) {
                    return Err(bad());
                }
                refs.push(col.to_string());
            }
            tables.push(TableLink {
                table: table.to_string(),
                refs,
            });
        }

        let mut options = SaveOptions::default();
        if let Some(stripped) = rest.strip_prefix('[') {
            let Some(end) = stripped.find(']') else {
                return Err(bad());
            };
            options = parse_options(&stripped[..end]).ok_or_else(bad)?;
            rest = &stripped[end + 1..];
        }

        let alias = match rest.strip_prefix(' ') {
            Some(alias) => {
                if !is_ident(alias) {
                    return Err(bad());
                }
                Some(alias.to_string())
            }
            None if rest.is_empty() => None,
            None => return Err(bad()),
        };

        Ok(Property {
            tables,
            options,
            alias,
        })
    }

    /// The primary table link.
    pub fn primary(&self) -> &TableLink {
        &self.tables[0]
    }

    /// One-to-one linked tables following the primary.
    pub fn linked(&self) -> &[TableLink] {
        &self.tables[1..]
    }
}

impl FromStr for Property {
    type Err = Error;

    fn from_str(descriptor: &str) -> Result<Property> {
        Property::parse(descriptor)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for link in &self.tables {
            write!(f, "{sep}{}", link.table)?;
            for col in &link.refs {
                write!(f, ":{col}")?;
            }
            sep = "#";
        }
        if self.options != SaveOptions::default() {
            f.write_str("[")?;
            if self.options.insert {
                f.write_str("+")?;
            }
            if self.options.delete {
                f.write_str("-")?;
            }
            if self.options.update {
                f.write_str("=")?;
            }
            f.write_str("]")?;
        }
        if let Some(alias) = &self.alias {
            write!(f, " {alias}")?;
        }
        Ok(())
    }
}

// Flags are positional: `+`, then `-`, then `=`, each optional.
fn parse_options(flags: &str) -> Option<SaveOptions> {
    let mut rest = flags;
    let insert = strip_flag(&mut rest, '+');
    let delete = strip_flag(&mut rest, '-');
    let update = strip_flag(&mut rest, '=');
    if !rest.is_empty() {
        return None;
    }
    Some(SaveOptions {
        insert,
        update,
        delete,
    })
}

fn strip_flag(rest: &mut &str, flag: char) -> bool {
    match rest.strip_prefix(flag) {
        Some(stripped) => {
            *rest = stripped;
            true
        }
        None => false,
    }
}

fn is_ident(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| !c.is_whitespace() && !matches!(c, ':' | '[' | ']' | '#'))
}
