use std::fmt::{Display, Formatter};

use itertools::Itertools;

use super::{Factor, Frame, Record};

/// A runtime value, tagged with the category that selects its
/// transformation. Scalars are length-1 vectors.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(Vec<String>),
    Number(Vec<f64>),
    Logical(Vec<bool>),
    Factor(Factor),
    Frame(Frame),
    Record(Record),
}

impl Value {
    /// The tag a registry dispatches this value on. The built-in
    /// categories have fixed tags; records carry their own class tag.
    pub fn category(&self) -> &str {
        match self {
            Value::Text(_) => "text",
            Value::Number(_) => "number",
            Value::Logical(_) => "logical",
            Value::Factor(_) => "factor",
            Value::Frame(_) => "frame",
            Value::Record(record) => record.class(),
        }
    }

    /// Element count. Frames count rows; a record counts as a single
    /// element.
    pub fn len(&self) -> usize {
        match self {
            Value::Text(v) => v.len(),
            Value::Number(v) => v.len(),
            Value::Logical(v) => v.len(),
            Value::Factor(factor) => factor.len(),
            Value::Frame(frame) => frame.n_rows(),
            Value::Record(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(v) => {
                write_group(f, v.iter().map(|s| format!("'{s}'")))
            },
            Value::Number(v) => write_group(f, v.iter().map(f64::to_string)),
            Value::Logical(v) => write_group(f, v.iter().map(bool::to_string)),
            Value::Factor(factor) => factor.fmt(f),
            Value::Frame(frame) => frame.fmt(f),
            Value::Record(record) => record.fmt(f),
        }
    }
}

/// Length-1 vectors print bare, everything else parenthesized
fn write_group(
    f: &mut Formatter<'_>,
    items: impl Iterator<Item = String>,
) -> std::fmt::Result {
    let mut items = items.collect::<Vec<String>>();
    if items.len() == 1 {
        write!(f, "{}", items.pop().unwrap())
    } else {
        write!(f, "( {} )", items.iter().join(" "))
    }
}
