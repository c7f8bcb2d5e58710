use crate::error::RecycleError;

/// A single element of an argument.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
        }
    }

    pub fn as_bool(&self) -> Result<bool, RecycleError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch("bool")),
        }
    }

    pub fn as_i64(&self) -> Result<i64, RecycleError> {
        match self {
            Value::Int(i) => Ok(*i),
            other => Err(other.mismatch("int")),
        }
    }

    /// Integers widen to floats, everything else is a mismatch.
    pub fn as_f64(&self) -> Result<f64, RecycleError> {
        match self {
            Value::Float(x) => Ok(*x),
            Value::Int(i) => Ok(*i as f64),
            other => Err(other.mismatch("float")),
        }
    }

    pub fn as_str(&self) -> Result<&str, RecycleError> {
        match self {
            Value::Text(s) => Ok(s),
            other => Err(other.mismatch("text")),
        }
    }

    fn mismatch(&self, expected: &'static str) -> RecycleError {
        RecycleError::TypeMismatch {
            expected,
            found: self.type_name(),
        }
    }
}

/// An argument as supplied at a call site: one value, or an ordered sequence of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Scalar(Value),
    Sequence(Vec<Value>),
}

impl Argument {
    /// 1 for a scalar, N for a sequence of length N.
    pub fn element_count(&self) -> usize {
        match self {
            Argument::Scalar(_) => 1,
            Argument::Sequence(values) => values.len(),
        }
    }

    /// Expands the argument to `len` elements.
    ///
    /// A count of 1 is replicated, a count of `len` passes through, anything
    /// else is `IncompatibleLength` for parameter `name`.
    pub(crate) fn recycle(&self, name: &str, len: usize) -> Result<Vec<Value>, RecycleError> {
        match self {
            Argument::Scalar(value) => Ok(vec![value.clone(); len]),
            Argument::Sequence(values) if values.len() == len => Ok(values.clone()),
            Argument::Sequence(values) if values.len() == 1 => Ok(vec![values[0].clone(); len]),
            Argument::Sequence(values) => Err(RecycleError::IncompatibleLength {
                name: name.to_owned(),
                len: values.len(),
                expected: len,
            }),
        }
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Argument::Scalar(value)
    }
}

impl From<Vec<Value>> for Argument {
    fn from(values: Vec<Value>) -> Self {
        Argument::Sequence(values)
    }
}

impl FromIterator<Value> for Argument {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Argument::Sequence(iter.into_iter().collect())
    }
}

macro_rules! impl_value {
    ($impl_type:ty, $variant:ident) => {
        impl From<$impl_type> for Value {
            fn from(v: $impl_type) -> Self {
                Value::$variant(v.into())
            }
        }

        impl From<$impl_type> for Argument {
            fn from(v: $impl_type) -> Self {
                Argument::Scalar(v.into())
            }
        }

        impl From<Vec<$impl_type>> for Argument {
            fn from(values: Vec<$impl_type>) -> Self {
                values.into_iter().map(Value::from).collect()
            }
        }

        impl<const N: usize> From<[$impl_type; N]> for Argument {
            fn from(values: [$impl_type; N]) -> Self {
                values.into_iter().map(Value::from).collect()
            }
        }

        impl From<&[$impl_type]> for Argument {
            fn from(values: &[$impl_type]) -> Self {
                values.iter().cloned().map(Value::from).collect()
            }
        }
    };
}

impl_value! { bool, Bool }
impl_value! { i32, Int }
impl_value! { i64, Int }
impl_value! { u32, Int }
impl_value! { f32, Float }
impl_value! { f64, Float }
impl_value! { String, Text }

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<&str> for Argument {
    fn from(s: &str) -> Self {
        Argument::Scalar(s.into())
    }
}

impl From<Vec<&str>> for Argument {
    fn from(values: Vec<&str>) -> Self {
        values.into_iter().map(Value::from).collect()
    }
}
