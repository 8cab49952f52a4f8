use super::{ConversionError, Factor, Frame, Record, Value};

/******************************\
|* Rust types <-> Value types *|
\******************************/
// This macro writes out the From and TryFrom implementations that map
// certain rust types onto `Value` variants.
//
// The `From<rust_type> for Value` traits can be infallibly defined,
// because each rust type is associated with at most one variant. The
// reverse direction can only be `TryFrom`: enum variants aren't types in
// themselves, so there is no guarantee a given value converts into any
// specific rust type.
macro_rules! impl_value_conversions {
    ($($t:ty, $v:ident);* $(;)?) => {
        $(
            impl From<$t> for Value {
                fn from(val: $t) -> Self {
                    Value::$v(val)
                }
            }

            impl TryFrom<Value> for $t {
                type Error = ConversionError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$v(native) => Ok(native),
                        other => {
                            Err(ConversionError {
                                category: other.category().to_string(),
                                rust_type: stringify!($t).to_string(),
                            })
                        },
                    }
                }
            }

            impl<'a> TryFrom<&'a Value> for &'a $t {
                type Error = ConversionError;

                fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
                    if let Value::$v(native) = value {
                        Ok(native)
                    } else {
                        Err(ConversionError {
                            category: value.category().to_string(),
                            rust_type: stringify!($t).to_string(),
                        })
                    }
                }
            }
        )*
    };
}

// The mappings.
// The first element is the rust type, the second is the Value variant.
impl_value_conversions! {
    Vec<String>, Text;
    Vec<f64>, Number;
    Vec<bool>, Logical;
    Factor, Factor;
    Frame, Frame;
    Record, Record;
}

/****************\
|* Scalar sugar *|
\****************/
// Bare rust scalars become length-1 vectors.
impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(vec![s.to_string()])
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(vec![s])
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(vec![n])
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Logical(vec![b])
    }
}
