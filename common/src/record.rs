use crate::field::{Field, NOT_AVAILABLE_MARKER};
use core::fmt;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Number of fields on a well-formed `COMPDAT`/`COMPDATL` line once the local
/// grid name is present (or NA) and every `n*` has been expanded.
pub const CONNECTION_ARITY: usize = 15;

/// Column names of the table built from a list of records.
pub const COLUMN_NAMES: [&str; CONNECTION_ARITY + 1] = [
    "Date",
    "Well name",
    "Local grid name",
    "I",
    "J",
    "K upper",
    "K lower",
    "Flag on connection",
    "Saturation table",
    "Transmissibility factor",
    "Well bore diameter",
    "Effective Kh",
    "Skin factor",
    "D-factor",
    "Dir_well_penetrates_grid_block",
    "Press_eq_radius",
];

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub enum Record {
    /// An entry of a `DATES` block. Carries no well data.
    Date { date: String },
    /// A line of a `COMPDAT`/`COMPDATL` block. `date` is `None` when no
    /// `DATES` entry preceded it.
    Connection {
        date: Option<String>,
        fields: Vec<Field>,
    },
}

impl Record {
    pub fn date(&self) -> Option<&str> {
        match self {
            Record::Date { date } => Some(date),
            Record::Connection { date, .. } => date.as_deref(),
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Record::Connection { .. })
    }

    /// Table cells for this record, in `COLUMN_NAMES` order. `None` is NA.
    ///
    /// A `Date` record only fills the first two cells (`[date, NA]`); the
    /// table builder pads the rest.
    pub fn to_row(&self) -> Vec<Option<String>> {
        match self {
            Record::Date { date } => vec![Some(date.clone()), None],
            Record::Connection { date, fields } => {
                let mut row = Vec::with_capacity(fields.len() + 1);
                row.push(date.clone());
                row.extend(fields.iter().map(Field::to_cell));
                row
            }
        }
    }
}

/// Renders the record as `|`-joined cells with `NA` for absent values, e.g.
/// `01 JUN 2018|NA`.
impl Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self
            .to_row()
            .into_iter()
            .map(|cell| cell.unwrap_or_else(|| NOT_AVAILABLE_MARKER.to_string()))
            .collect();
        write!(f, "{}", cells.join("|"))
    }
}
