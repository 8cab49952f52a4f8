mod scalars;
mod tokenizer;
mod value_builder;

use anyhow::{anyhow, bail, Result};

use self::scalars::parse_word;
use self::tokenizer::{tokenize, Token};
use crate::value::Value;

/// A parse-tree node: nested lists of scalars and bare words. Which
/// value a list denotes is decided afterwards, in the builder.
#[derive(Debug, Clone, PartialEq)]
enum Node {
    List(Vec<Node>),
    Scalar(Scalar),
    Word(String),
}

/// A single parsed element, before vector grouping.
#[derive(Debug, Clone, PartialEq)]
enum Scalar {
    Text(String),
    Number(f64),
    Logical(bool),
}

/// Turn input text into a value.
pub fn parse_value(s: &str) -> Result<Value> {
    let tokens = tokenize(s)?;
    let mut token_iter = tokens.iter();

    let first = token_iter
        .next()
        .ok_or_else(|| anyhow!("no tokens"))?;
    let node = parse_node(first, &mut token_iter)?;

    // ensure tokens were exhausted
    if let Some(token) = token_iter.next() {
        bail!(
            "value is complete, but tokens remain ({token:#?}). \
             Unmatched closing parenthesis?"
        )
    }

    value_builder::build(&node)
}

/// Parse the node starting at `token`.
fn parse_node<'a>(
    token: &'a Token,
    rest: &mut impl Iterator<Item = &'a Token>,
) -> Result<Node> {
    match token {
        Token::ParenStart => build_list(rest),
        Token::ParenEnd => bail!("unmatched closing parenthesis"),
        Token::Dash => {
            let next = rest.next().ok_or_else(|| {
                anyhow!("input ended after a negative sign")
            })?;
            parse_node(next, rest).and_then(try_negate)
        },
        Token::Word(word) => parse_word(word),
        Token::Quoted(content) => {
            Ok(Node::Scalar(Scalar::Text(content.clone())))
        },
    }
}

/// Build a list node up to its closing parenthesis.
/// Recurses for nested lists; nesting depth is bounded by the stack.
fn build_list<'a>(
    rest: &mut impl Iterator<Item = &'a Token>,
) -> Result<Node> {
    let mut items = Vec::new();

    loop {
        let token = rest.next().ok_or_else(|| {
            anyhow!("input ended before the list was closed")
        })?;

        if let Token::ParenEnd = token {
            break;
        }
        items.push(parse_node(token, rest)?);
    }

    Ok(Node::List(items))
}

fn try_negate(node: Node) -> Result<Node> {
    match node {
        Node::Scalar(Scalar::Number(n)) => {
            Ok(Node::Scalar(Scalar::Number(-n)))
        },
        other => Err(anyhow!("can't negate {other:#?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Factor, Frame, Record};

    fn do_value_test(input: &str, expected: Value) {
        assert_eq!(parse_value(input).unwrap(), expected);
    }

    #[test]
    fn test_parse_numbers() {
        do_value_test("0", Value::from(0.0));
        do_value_test("10", Value::from(10.0));
        do_value_test("82.7110", Value::from(82.7110));
        do_value_test("12e3", Value::from(12000.0));
    }

    #[test]
    fn test_parse_negative_numbers() {
        do_value_test("-1", Value::from(-1.0));
        do_value_test("- 0010", Value::from(-10.0));
        do_value_test("-  82.7110", Value::from(-82.7110));
        do_value_test("- 12e3", Value::from(-12000.0));
    }

    #[test]
    fn test_parse_text() {
        do_value_test("'abc'", Value::from("abc"));
        do_value_test("\"abc\"", Value::from("abc"));
    }

    #[test]
    fn test_parse_logicals() {
        do_value_test("true", Value::from(true));
        do_value_test("false", Value::from(false));
    }

    #[test]
    fn test_parse_inferred_vectors() {
        do_value_test(
            "('ab' 'cd')",
            Value::Text(vec!["ab".to_string(), "cd".to_string()]),
        );
        do_value_test("(1 2 3)", Value::Number(vec![1.0, 2.0, 3.0]));
        do_value_test("(true false)", Value::Logical(vec![true, false]));
    }

    #[test]
    fn test_parse_typed_empty_vectors() {
        do_value_test("(text)", Value::Text(vec![]));
        do_value_test("(number)", Value::Number(vec![]));
        do_value_test("(logical)", Value::Logical(vec![]));
    }

    #[test]
    fn test_parse_factor() {
        do_value_test(
            "(factor ('a' 'b' 'a') ('a' 'b'))",
            Value::Factor(Factor::new(&["a", "b", "a"], &["a", "b"]).unwrap()),
        );
        // levels inferred in order of first appearance
        do_value_test(
            "(factor ('b' 'a' 'b'))",
            Value::Factor(Factor::new(&["b", "a", "b"], &["b", "a"]).unwrap()),
        );
    }

    #[test]
    fn test_parse_frame() {
        let expected = Frame::new(vec![
            ("a".to_string(), Value::Number(vec![1.0, 2.0])),
            ("b".to_string(), Value::Number(vec![3.0, 4.0])),
        ])
        .unwrap();

        do_value_test("(frame (a (1 2)) (b (3 4)))", Value::Frame(expected));
    }

    #[test]
    fn test_parse_record() {
        let expected = Record::new(
            "point",
            vec![
                ("x".to_string(), Value::from(1.0)),
                ("y".to_string(), Value::from(2.0)),
            ],
        );

        do_value_test("(record point (x 1) (y 2))", Value::Record(expected));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_value("").is_err());
        assert!(parse_value("1 2").is_err());
        assert!(parse_value("(1 2").is_err());
        assert!(parse_value("()").is_err());
        assert!(parse_value("(1 'a')").is_err());
        assert!(parse_value("(wat 1)").is_err());
        assert!(parse_value("bare_word").is_err());
    }
}
