use std::fmt::{Display, Formatter};

use itertools::Itertools;

use super::{Value, ValueError};

/// A tabular value: an ordered mapping from column name to column, all
/// columns the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    names: Vec<String>,
    columns: Vec<Value>,
}

impl Frame {
    pub fn new(columns: Vec<(String, Value)>) -> Result<Frame, ValueError> {
        let (names, columns) = columns.into_iter().unzip();
        Frame::from_parts(names, columns)
    }

    /// Build from parallel name/column sequences, validating that the
    /// names are distinct and the columns equally long.
    pub fn from_parts(
        names: Vec<String>,
        columns: Vec<Value>,
    ) -> Result<Frame, ValueError> {
        if let Some(dup) = names.iter().duplicates().next() {
            return Err(ValueError::DuplicateColumn(dup.clone()));
        }

        if let Some(expected) = columns.first().map(Value::len) {
            for (name, column) in names.iter().zip(&columns) {
                if column.len() != expected {
                    return Err(ValueError::RaggedColumn {
                        name: name.clone(),
                        len: column.len(),
                        expected,
                    });
                }
            }
        }

        Ok(Frame { names, columns })
    }

    /// Column names, in column order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// (name, column) pairs, in column order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.columns[i])
    }

    /// Row count; a frame with no columns has zero rows.
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Value::len)
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(frame")?;
        for (name, column) in self.columns() {
            write!(f, " ({name} {column})")?;
        }
        write!(f, ")")
    }
}
