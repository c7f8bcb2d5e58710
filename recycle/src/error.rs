use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecycleError {
    #[error("argument \"{0}\" is missing, with no default")]
    MissingArgument(String),

    #[error("argument \"{name}\" has {len} elements, expected 1 or {expected}")]
    IncompatibleLength {
        name: String,
        len: usize,
        expected: usize,
    },

    #[error("a parameter spec needs at least one parameter")]
    EmptySpec,

    #[error("parameter \"{0}\" is declared more than once")]
    DuplicateParameter(String),

    #[error("{given} positional arguments given, but only {expected} parameters declared")]
    TooManyArguments { expected: usize, given: usize },

    #[error("unused argument \"{0}\"")]
    UnknownArgument(String),

    #[error("no parameter named \"{0}\" in the broadcast set")]
    UnknownParameter(String),

    #[error("argument \"{0}\" matched by multiple actual arguments")]
    DuplicateArgument(String),

    #[error("expected a {expected} value, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("broadcast length {len} exceeds the limit of {max}")]
    LengthLimitExceeded { len: usize, max: usize },

    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
