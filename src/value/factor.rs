use std::fmt::{Display, Formatter};

use itertools::Itertools;

use super::ValueError;

/// A categorical value: an ordered label set plus, for each element, an
/// index into it. Level order is an attribute of the container, not of
/// any element.
#[derive(Debug, Clone, PartialEq)]
pub struct Factor {
    levels: Vec<String>,
    codes: Vec<usize>,
}

impl Factor {
    /// Build from element labels and an explicit level ordering.
    pub fn new<S: AsRef<str>>(
        elements: &[S],
        levels: &[S],
    ) -> Result<Factor, ValueError> {
        let levels: Vec<String> = levels
            .iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        check_distinct(&levels)?;

        let codes = elements
            .iter()
            .map(|el| {
                levels
                    .iter()
                    .position(|level| level == el.as_ref())
                    .ok_or_else(|| {
                        ValueError::UnknownLevel(el.as_ref().to_string())
                    })
            })
            .collect::<Result<Vec<usize>, ValueError>>()?;

        Ok(Factor { levels, codes })
    }

    /// Build from element labels alone; the levels are the distinct
    /// labels in order of first appearance.
    pub fn infer<S: AsRef<str>>(elements: &[S]) -> Factor {
        let levels: Vec<String> = elements
            .iter()
            .map(|s| s.as_ref().to_string())
            .unique()
            .collect();

        // position() cannot miss: every element label is in `levels`
        let codes = elements
            .iter()
            .map(|el| {
                levels
                    .iter()
                    .position(|level| level == el.as_ref())
                    .unwrap()
            })
            .collect();

        Factor { levels, codes }
    }

    /// Build from raw parts, validating that every code is in range.
    pub fn from_parts(
        levels: Vec<String>,
        codes: Vec<usize>,
    ) -> Result<Factor, ValueError> {
        check_distinct(&levels)?;
        if let Some(&code) = codes.iter().find(|&&c| c >= levels.len()) {
            return Err(ValueError::CodeOutOfRange {
                code,
                n_levels: levels.len(),
            });
        }

        Ok(Factor { levels, codes })
    }

    /// The declared label ordering.
    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    /// Per-element indices into the level ordering.
    pub fn codes(&self) -> &[usize] {
        &self.codes
    }

    /// Element labels, in element order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.codes
            .iter()
            .map(|&code| self.levels[code].as_str())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Display for Factor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(factor ( {} ) ( {} ))",
            self.labels().map(|s| format!("'{s}'")).join(" "),
            self.levels
                .iter()
                .map(|s| format!("'{s}'"))
                .join(" "),
        )
    }
}

fn check_distinct(levels: &[String]) -> Result<(), ValueError> {
    match levels.iter().duplicates().next() {
        Some(dup) => Err(ValueError::DuplicateLevel(dup.clone())),
        None => Ok(()),
    }
}
