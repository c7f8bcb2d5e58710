use crate::args::CallArguments;
use crate::error::RecycleError;
use crate::value::{Argument, Value};

/// Every parameter of a call, recycled to one common length.
#[derive(Debug, Clone, PartialEq)]
pub struct BroadcastSet {
    len: usize,
    columns: Vec<(String, Vec<Value>)>,
}

impl BroadcastSet {
    pub(crate) fn new(len: usize, columns: Vec<(String, Vec<Value>)>) -> Self {
        debug_assert!(columns.iter().all(|(_, values)| values.len() == len));
        Self { len, columns }
    }

    /// The common length L shared by every column.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.columns
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn get(&self, name: &str) -> Option<&[Value]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
    }

    pub fn column(&self, name: &str) -> Result<&[Value], RecycleError> {
        self.get(name)
            .ok_or_else(|| RecycleError::UnknownParameter(name.to_owned()))
    }

    pub fn column_f64(&self, name: &str) -> Result<Vec<f64>, RecycleError> {
        self.column(name)?.iter().map(Value::as_f64).collect()
    }

    pub fn column_bool(&self, name: &str) -> Result<Vec<bool>, RecycleError> {
        self.column(name)?.iter().map(Value::as_bool).collect()
    }

    pub fn row(&self, index: usize) -> Result<Row<'_>, RecycleError> {
        if index >= self.len {
            return Err(RecycleError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(Row { set: self, index })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        (0..self.len).map(move |index| Row { set: self, index })
    }
}

impl From<BroadcastSet> for CallArguments {
    fn from(set: BroadcastSet) -> Self {
        set.columns
            .into_iter()
            .fold(CallArguments::new(), |call, (name, values)| {
                call.named(name, Argument::Sequence(values))
            })
    }
}

/// Every parameter bound to its element at one index.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    set: &'a BroadcastSet,
    index: usize,
}

impl<'a> Row<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self, name: &str) -> Result<&'a Value, RecycleError> {
        Ok(&self.set.column(name)?[self.index])
    }

    pub fn f64(&self, name: &str) -> Result<f64, RecycleError> {
        self.get(name)?.as_f64()
    }

    pub fn i64(&self, name: &str) -> Result<i64, RecycleError> {
        self.get(name)?.as_i64()
    }

    pub fn bool(&self, name: &str) -> Result<bool, RecycleError> {
        self.get(name)?.as_bool()
    }

    pub fn str(&self, name: &str) -> Result<&'a str, RecycleError> {
        self.get(name)?.as_str()
    }
}
