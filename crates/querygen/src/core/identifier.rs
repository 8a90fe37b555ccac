//! Identifier derivation and sanitization.
//!
//! Every function here is a pure string transform. Generated names must be
//! stable across runs, so nothing in this module consults global state.
//!
//! # Naming rules
//!
//! - Data-class names: rename table lookup, else each `_`-separated segment
//!   title-cased and concatenated (`user_status` → `UserStatus`).
//! - Member names: the data-class name with its first character lowered.
//! - Argument names: first segment lower-cased, remaining segments
//!   title-cased (`user_id` → `userId`).
//! - Enum constants: separators to `_`, other punctuation stripped,
//!   upper-cased (`foo-bar:baz/qux` → `FOO_BAR_BAZ_QUX`).

use std::collections::{BTreeMap, HashMap, HashSet};

use super::schema::{Column, Identifier};

/// Title-case a word: upper-case every letter that starts the string or
/// follows a separator character.
///
/// Letters, digits and underscores are word characters; anything else is a
/// separator. Remaining characters are left untouched.
pub fn title(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut at_boundary = true;
    for ch in word.chars() {
        if at_boundary && ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_boundary = !(ch.is_alphanumeric() || ch == '_');
    }
    out
}

/// Lower-case the first character only.
pub fn lower_title(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derive a data-class name, honouring the rename table.
pub fn data_class_name(name: &str, rename: &BTreeMap<String, String>) -> String {
    if let Some(renamed) = rename.get(name).filter(|r| !r.is_empty()) {
        return renamed.clone();
    }
    name.split('_').map(title).collect()
}

/// Derive a member (field) name.
pub fn member_name(name: &str, rename: &BTreeMap<String, String>) -> String {
    lower_title(&data_class_name(name, rename))
}

/// Derive a function-argument name from a column name.
pub fn arg_name(name: &str) -> String {
    name.split('_')
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                part.to_lowercase()
            } else {
                title(part)
            }
        })
        .collect()
}

/// Name for a query parameter: the column's argument name, or `dollar_<n>`
/// for anonymous parameters.
pub fn param_name(column: &Column, number: u32) -> String {
    if column.name.is_empty() {
        format!("dollar_{}", number)
    } else {
        arg_name(&column.name)
    }
}

/// Name for a result column: the column name, or `column_<pos + 1>` for
/// anonymous expressions.
pub fn column_name(column: &Column, pos: usize) -> String {
    if column.name.is_empty() {
        format!("column_{}", pos + 1)
    } else {
        column.name.clone()
    }
}

/// Derive an enum constant identifier from a raw enum value.
pub fn enum_value_name(value: &str) -> String {
    value
        .chars()
        .map(|ch| match ch {
            '-' | ':' | '/' => '_',
            other => other,
        })
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_')
        .collect::<String>()
        .to_uppercase()
}

/// Check whether a column's owning table is `table`.
///
/// An unqualified column table is treated as living in `default_schema`.
pub fn same_table_name(
    column_table: Option<&Identifier>,
    table: &Identifier,
    default_schema: &str,
) -> bool {
    let Some(id) = column_table else {
        return false;
    };
    let schema = if id.schema.is_empty() {
        default_schema
    } else {
        id.schema.as_str()
    };
    id.catalog == table.catalog && schema == table.schema && id.name == table.name
}

/// Hands out field names that are unique within one struct.
///
/// The first request for a name returns it unchanged; later requests get a
/// numeric suffix (`name_2`, `name_3`, ...), skipping suffixed names that
/// are already in use.
#[derive(Debug, Default)]
pub struct FieldNamer {
    seen: HashMap<String, usize>,
    taken: HashSet<String>,
}

impl FieldNamer {
    /// Create an empty namer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a unique name derived from `base`.
    pub fn allocate(&mut self, base: String) -> String {
        let count = {
            let entry = self.seen.entry(base.clone()).or_insert(0);
            *entry += 1;
            *entry
        };

        if count == 1 && self.taken.insert(base.clone()) {
            return base;
        }

        let mut n = count.max(2);
        loop {
            let candidate = format!("{}_{}", base, n);
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}
