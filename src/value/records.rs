use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use super::Value;

/// A class-tagged bag of named fields. Records are how categories beyond
/// the built-in five exist as values: a registry dispatches on the class
/// tag, so a consumer can register a handler for a record class without
/// touching anything built-in.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    class: String,
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new(
        class: &str,
        fields: impl IntoIterator<Item = (String, Value)>,
    ) -> Record {
        Record {
            class: class.to_string(),
            fields: fields.into_iter().collect(),
        }
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// (field, value) pairs, in field-name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(record {}", self.class)?;
        for (name, value) in self.fields() {
            write!(f, " ({name} {value})")?;
        }
        write!(f, ")")
    }
}
