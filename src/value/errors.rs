use thiserror::Error;

/**********************************************\
|* Construction-time invariant violations     *|
\**********************************************/
#[derive(Error, Debug)]
pub enum ValueError {
    #[error("factor code {code} is out of range for {n_levels} levels")]
    CodeOutOfRange { code: usize, n_levels: usize },

    #[error("duplicate factor level '{0}'")]
    DuplicateLevel(String),

    #[error("element '{0}' is not one of the declared levels")]
    UnknownLevel(String),

    #[error("column '{name}' has length {len}, expected {expected}")]
    RaggedColumn {
        name: String,
        len: usize,
        expected: usize,
    },

    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),
}

/// A value variant and the rust type it was asked to become don't match.
#[derive(Error, Debug)]
#[error("can't convert category '{category}' to rust type '{rust_type}'")]
pub struct ConversionError {
    pub category: String,
    pub rust_type: String,
}

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("no transformation is registered for category '{0}'")]
    UnsupportedCategory(String),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Value(#[from] ValueError),
}

pub type TResult<T> = Result<T, TransformError>;
