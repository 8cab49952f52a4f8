use anyhow::{anyhow, bail, Result};

use super::{Node, Scalar};
use crate::value::{Factor, Frame, Record, Value};

/// Turn a parse tree into a value.
///
/// Lists are vectors when their items are scalars of one kind, and
/// constructor forms when they open with one of the reserved heads
/// (`text`, `number`, `logical`, `factor`, `frame`, `record`).
pub(super) fn build(node: &Node) -> Result<Value> {
    match node {
        Node::Scalar(scalar) => Ok(scalar_value(scalar)),
        Node::Word(word) => bail!("bare word '{word}' is not a value"),
        Node::List(items) => {
            match items.first() {
                Some(Node::Word(head)) => build_form(head, &items[1..]),
                _ => build_vector(items),
            }
        },
    }
}

fn scalar_value(scalar: &Scalar) -> Value {
    match scalar {
        Scalar::Text(s) => Value::Text(vec![s.clone()]),
        Scalar::Number(n) => Value::Number(vec![*n]),
        Scalar::Logical(b) => Value::Logical(vec![*b]),
    }
}

/*********************\
|* Constructor forms *|
\*********************/
fn build_form(head: &str, args: &[Node]) -> Result<Value> {
    match head {
        "text" => texts(&to_scalars(args)?).map(Value::Text),
        "number" => numbers(&to_scalars(args)?).map(Value::Number),
        "logical" => logicals(&to_scalars(args)?).map(Value::Logical),
        "factor" => build_factor(args),
        "frame" => build_frame(args),
        "record" => build_record(args),
        other => bail!("unknown constructor '{other}'"),
    }
}

fn build_factor(args: &[Node]) -> Result<Value> {
    let (elements, levels) = match args {
        [elements] => (elements, None),
        [elements, levels] => (elements, Some(levels)),
        _ => bail!("factor takes an element list and an optional level list"),
    };

    let elements = text_list(elements)?;
    let factor = match levels {
        Some(levels) => Factor::new(&elements, &text_list(levels)?)?,
        None => Factor::infer(&elements),
    };

    Ok(Value::Factor(factor))
}

fn build_frame(args: &[Node]) -> Result<Value> {
    let columns = args
        .iter()
        .map(|node| {
            let (name, value_node) = name_value_pair(node)?;
            Ok((name.to_string(), build(value_node)?))
        })
        .collect::<Result<Vec<(String, Value)>>>()?;

    Ok(Value::Frame(Frame::new(columns)?))
}

fn build_record(args: &[Node]) -> Result<Value> {
    let [class, field_nodes @ ..] = args else {
        bail!("record takes a class name and (field value) pairs")
    };
    let Node::Word(class) = class else {
        bail!("record class must be a bare word, got {class:#?}")
    };

    let fields = field_nodes
        .iter()
        .map(|node| {
            let (name, value_node) = name_value_pair(node)?;
            Ok((name.to_string(), build(value_node)?))
        })
        .collect::<Result<Vec<(String, Value)>>>()?;

    Ok(Value::Record(Record::new(class, fields)))
}

/// A `(name value)` pair node.
fn name_value_pair(node: &Node) -> Result<(&str, &Node)> {
    if let Node::List(items) = node {
        if let [Node::Word(name), value] = items.as_slice() {
            return Ok((name.as_str(), value));
        }
    }

    Err(anyhow!("expected a (name value) pair, got {node:#?}"))
}

/***********\
|* Vectors *|
\***********/

/// A plain list of scalars; the first element decides the category.
fn build_vector(items: &[Node]) -> Result<Value> {
    let scalars = to_scalars(items)?;

    match scalars.first() {
        None => {
            bail!(
                "can't infer the category of an empty vector; \
                 use (text), (number) or (logical)"
            )
        },
        Some(Scalar::Text(_)) => texts(&scalars).map(Value::Text),
        Some(Scalar::Number(_)) => numbers(&scalars).map(Value::Number),
        Some(Scalar::Logical(_)) => logicals(&scalars).map(Value::Logical),
    }
}

/// A list node holding text scalars only (factor elements and levels).
fn text_list(node: &Node) -> Result<Vec<String>> {
    let Node::List(items) = node else {
        bail!("expected a parenthesized list of text, got {node:#?}")
    };

    texts(&to_scalars(items)?)
}

fn to_scalars(items: &[Node]) -> Result<Vec<&Scalar>> {
    items
        .iter()
        .map(|node| {
            match node {
                Node::Scalar(scalar) => Ok(scalar),
                other => {
                    Err(anyhow!(
                        "vector elements must be scalars, got {other:#?}"
                    ))
                },
            }
        })
        .collect()
}

fn texts(scalars: &[&Scalar]) -> Result<Vec<String>> {
    scalars
        .iter()
        .map(|scalar| {
            match scalar {
                Scalar::Text(s) => Ok(s.clone()),
                other => Err(anyhow!("expected text, got {other:#?}")),
            }
        })
        .collect()
}

fn numbers(scalars: &[&Scalar]) -> Result<Vec<f64>> {
    scalars
        .iter()
        .map(|scalar| {
            match scalar {
                Scalar::Number(n) => Ok(*n),
                other => Err(anyhow!("expected a number, got {other:#?}")),
            }
        })
        .collect()
}

fn logicals(scalars: &[&Scalar]) -> Result<Vec<bool>> {
    scalars
        .iter()
        .map(|scalar| {
            match scalar {
                Scalar::Logical(b) => Ok(*b),
                other => Err(anyhow!("expected a logical, got {other:#?}")),
            }
        })
        .collect()
}
