//! Tabular attribution
//!
//! Tables carry no usable schema, so each column's role is inferred from
//! the shape of its values. Columns are checked in order against an
//! ordered rule list; the first rule a column satisfies claims it, and a
//! role is only handed out once.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

use super::{MessageGroup, IMPLICIT_SPEAKER};
use crate::error::{WcgError, WcgResult};

/// Most columns a table may have (timestamp, name, message)
pub const MAX_COLUMNS: usize = 3;

/// A name column with more distinct values than this is treated as free text
pub const MAX_DISTINCT_SPEAKERS: usize = 255;

lazy_static! {
    // Literal set: digits, T, Z, ':', '.', ' ', '+', '-'. The trailing '-' is not a range.
    static ref TIMESTAMP: Regex = Regex::new(r"^[0-9TZ:. +-]{4,25}$").expect("valid timestamp pattern");
    static ref NAME: Regex = Regex::new(r"^[A-Za-z0-9 -]{1,30}$").expect("valid name pattern");
}

/// An unlabeled table of text cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Header labels, used only for log output
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    fn column(&self, col: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |row| row[col].as_str())
    }

    fn label(&self, col: usize) -> &str {
        self.columns.get(col).map(|s| s.as_str()).unwrap_or("?")
    }
}

/// What a column holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Timestamp,
    Name,
    Message,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Timestamp => "timestamp",
            Role::Name => "name",
            Role::Message => "message",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Column index assigned to each role, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnRoles {
    pub timestamp: Option<usize>,
    pub name: Option<usize>,
    pub message: Option<usize>,
}

impl ColumnRoles {
    fn get(&self, role: Role) -> Option<usize> {
        match role {
            Role::Timestamp => self.timestamp,
            Role::Name => self.name,
            Role::Message => self.message,
        }
    }

    fn set(&mut self, role: Role, col: usize) {
        match role {
            Role::Timestamp => self.timestamp = Some(col),
            Role::Name => self.name = Some(col),
            Role::Message => self.message = Some(col),
        }
    }
}

/// Ok if the column qualifies for a role, otherwise the reason it does not
type Predicate = fn(&Table, usize) -> Result<(), String>;

/// Evaluated in order; the first passing rule claims the column
const RULES: [(Role, Predicate); 3] = [
    (Role::Timestamp, is_timestamp_column),
    (Role::Name, is_name_column),
    (Role::Message, is_message_column),
];

fn first_mismatch(table: &Table, col: usize, pattern: &Regex) -> Option<usize> {
    table.column(col).position(|cell| !pattern.is_match(cell))
}

fn is_timestamp_column(table: &Table, col: usize) -> Result<(), String> {
    match first_mismatch(table, col, &TIMESTAMP) {
        Some(row) => Err(format!("not a timestamp, failed on row {}", row)),
        None => Ok(()),
    }
}

fn is_name_column(table: &Table, col: usize) -> Result<(), String> {
    if let Some(row) = first_mismatch(table, col, &NAME) {
        return Err(format!("does not contain names, failed on row {}", row));
    }

    let distinct: HashSet<&str> = table.column(col).collect();
    if distinct.len() > MAX_DISTINCT_SPEAKERS {
        return Err(format!("has too many unique values ({})", distinct.len()));
    }
    Ok(())
}

/// Messages are whatever is left over
fn is_message_column(_table: &Table, _col: usize) -> Result<(), String> {
    Ok(())
}

fn check_structure(table: &Table) -> WcgResult<()> {
    let width = table.columns.len();
    if width > MAX_COLUMNS {
        return Err(WcgError::StructuralInput(format!(
            "table has {} columns, at most {} are supported",
            width, MAX_COLUMNS
        )));
    }
    if width == 0 {
        return Err(WcgError::StructuralInput("table has no columns".to_string()));
    }
    if table.rows.is_empty() {
        return Err(WcgError::StructuralInput("table has no rows".to_string()));
    }
    if let Some((idx, row)) = table.rows.iter().enumerate().find(|(_, r)| r.len() != width) {
        return Err(WcgError::StructuralInput(format!(
            "row {} has {} cells, expected {}",
            idx,
            row.len(),
            width
        )));
    }
    Ok(())
}

/// Work out which column holds timestamps, names and messages.
///
/// Fails if the table is structurally invalid. A single-column table is
/// always messages.
pub fn infer_roles(table: &Table) -> WcgResult<ColumnRoles> {
    check_structure(table)?;

    let mut roles = ColumnRoles::default();

    if table.columns.len() == 1 {
        debug!("Single column '{}' holds the messages", table.label(0));
        roles.message = Some(0);
        return Ok(roles);
    }

    for col in 0..table.columns.len() {
        debug!("Checking column '{}'", table.label(col));

        for (role, predicate) in RULES {
            if roles.get(role).is_some() {
                continue;
            }
            match predicate(table, col) {
                Ok(()) => {
                    debug!("   ==> Column '{}' is the {} column", table.label(col), role);
                    roles.set(role, col);
                    break;
                }
                Err(reason) => {
                    debug!("   ==> Column '{}' {}", table.label(col), reason);
                }
            }
        }
    }

    Ok(roles)
}

/// Group a table's messages by the speaker in its name column.
///
/// Without a name column every message goes to [`IMPLICIT_SPEAKER`].
pub fn attribute_tabular(table: &Table) -> WcgResult<MessageGroup> {
    let roles = infer_roles(table)?;
    let message_col = roles.message.ok_or(WcgError::RoleInference {
        role: Role::Message.as_str(),
    })?;

    let mut group = MessageGroup::new();
    match roles.name {
        Some(name_col) => {
            for row in &table.rows {
                group.push(&row[name_col], row[message_col].clone());
            }
        }
        None => {
            debug!("No name column, using implicit speaker '{}'", IMPLICIT_SPEAKER);
            for row in &table.rows {
                group.push(IMPLICIT_SPEAKER, row[message_col].clone());
            }
        }
    }

    Ok(group)
}
