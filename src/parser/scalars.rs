use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use litrs::Literal;
use regex::Regex;

use super::{Node, Scalar};

/// Parse a bare word: a literal if rust would read it as one, otherwise
/// a name (constructor heads, column names, class tags).
pub(super) fn parse_word(word: &str) -> Result<Node> {
    parse_literal(word)
        .map(Node::Scalar)
        .or_else(|_| parse_name(word))
}

/// Try to parse a word as a literal, more or less the same way as rust
/// does. Integers land in the one number category alongside floats.
fn parse_literal(word: &str) -> Result<Scalar> {
    Literal::parse(word)
        .map_err(anyhow::Error::from)
        .and_then(check_suffix)
        .and_then(|lit| {
            match lit {
                Literal::Bool(_) => Ok(Scalar::Logical(word.parse()?)),

                Literal::Integer(_) => Ok(Scalar::Number(word.parse()?)),

                Literal::Float(lit) => {
                    Ok(Scalar::Number(lit.number_part().parse()?))
                },

                lit => {
                    Err(anyhow!(
                        "literal '{lit:#?}' has no value category"
                    ))
                },
            }
        })
}

/// Parse a word that must be a name.
/// Must only be called after ensuring that the word is not a literal.
fn parse_name(word: &str) -> Result<Node> {
    if NAME_RE.is_match(word) {
        Ok(Node::Word(word.to_string()))
    } else {
        Err(anyhow!("'{word}' is not a literal or a name"))
    }
}

/***********\
|* Helpers *|
\***********/
lazy_static! {
    static ref NAME_RE: Regex =
        Regex::new(r"^[a-zA-Z_.][a-zA-Z0-9_.]*$").unwrap();
}

/// Ensure the literal doesn't have a suffix
/// E.g., "15" is ok, "15u32" is not, because u32 is a rust thing)
fn check_suffix(lit: Literal<&str>) -> Result<Literal<&str>> {
    if lit.suffix() == "" {
        Ok(lit)
    } else {
        Err(anyhow!(
            "Forbidden suffix '{}' on literal '{}'",
            lit.suffix(),
            lit.to_string()
        ))
    }
}
