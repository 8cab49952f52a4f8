use crate::dispatch::Registry;
use crate::value::{Factor, Frame, TResult, Value};

/// One transformation, bound to the category tag it is registered under.
/// `register` wires `Self::apply` into the registry as a plain fn
/// pointer.
///
/// Each handler is a pure function value -> value: it never mutates its
/// input and is total over well-formed input of its own category.
pub(super) trait HandlerBuilder {
    fn register(registry: &mut Registry) {
        registry.set(Self::category(), Self::apply);
    }

    /// the tag this handler is dispatched on
    fn category() -> &'static str;

    /// Transform one value of this handler's category.
    fn apply(value: &Value, registry: &Registry) -> TResult<Value>;
}

/********\
|* Text *|
\********/

/// Reverses the characters of every element; element order stays put.
pub(super) struct TextHandler {}
impl HandlerBuilder for TextHandler {
    fn category() -> &'static str {
        "text"
    }

    fn apply(value: &Value, _registry: &Registry) -> TResult<Value> {
        let strings: &Vec<String> = value.try_into()?;

        Ok(Value::Text(
            strings.iter().map(|s| reverse_chars(s)).collect(),
        ))
    }
}

/**********\
|* Number *|
\**********/
pub(super) struct NumberHandler {}
impl HandlerBuilder for NumberHandler {
    fn category() -> &'static str {
        "number"
    }

    fn apply(value: &Value, _registry: &Registry) -> TResult<Value> {
        let numbers: &Vec<f64> = value.try_into()?;

        Ok(Value::Number(numbers.iter().map(|n| -n).collect()))
    }
}

/***********\
|* Logical *|
\***********/
pub(super) struct LogicalHandler {}
impl HandlerBuilder for LogicalHandler {
    fn category() -> &'static str {
        "logical"
    }

    fn apply(value: &Value, _registry: &Registry) -> TResult<Value> {
        let bools: &Vec<bool> = value.try_into()?;

        Ok(Value::Logical(bools.iter().map(|b| !b).collect()))
    }
}

/**********\
|* Factor *|
\**********/

/// Level labels get the text rule, the declared level order flips, and
/// each element's code follows its label to the other end: code `i`
/// becomes `n - 1 - i`.
pub(super) struct FactorHandler {}
impl HandlerBuilder for FactorHandler {
    fn category() -> &'static str {
        "factor"
    }

    fn apply(value: &Value, _registry: &Registry) -> TResult<Value> {
        let factor: &Factor = value.try_into()?;
        let n = factor.levels().len();

        let levels = factor
            .levels()
            .iter()
            .rev()
            .map(|level| reverse_chars(level))
            .collect();
        // a nonempty code list implies n >= 1
        let codes = factor
            .codes()
            .iter()
            .map(|&code| n - 1 - code)
            .collect();

        Ok(Value::Factor(Factor::from_parts(levels, codes)?))
    }
}

/*********\
|* Frame *|
\*********/

/// Every column goes back through the registry (so consumer-registered
/// categories transform inside frames too), and the column-name
/// sequence gets the text rule.
pub(super) struct FrameHandler {}
impl HandlerBuilder for FrameHandler {
    fn category() -> &'static str {
        "frame"
    }

    fn apply(value: &Value, registry: &Registry) -> TResult<Value> {
        let frame: &Frame = value.try_into()?;

        let names = frame
            .names()
            .iter()
            .map(|name| reverse_chars(name))
            .collect();
        let columns = frame
            .columns()
            .map(|(_, column)| registry.apply(column))
            .collect::<TResult<Vec<Value>>>()?;

        Ok(Value::Frame(Frame::from_parts(names, columns)?))
    }
}

fn reverse_chars(s: &str) -> String {
    s.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_chars_is_char_wise() {
        assert_eq!(reverse_chars("abc"), "cba");
        assert_eq!(reverse_chars(""), "");
        // multibyte characters survive reversal intact
        assert_eq!(reverse_chars("aµb"), "bµa");
    }

    #[test]
    fn test_factor_codes_flip() {
        let factor = Factor::new(&["a", "b", "a"], &["a", "b"]).unwrap();
        let result = FactorHandler::apply(
            &Value::Factor(factor),
            &Registry::empty(),
        )
        .unwrap();

        let Value::Factor(flipped) = &result else {
            panic!("not a factor: {result}")
        };
        assert_eq!(flipped.levels(), ["b", "a"]);
        assert_eq!(flipped.codes(), [1, 0, 1]);
    }
}
