use ndarray::Array1;
use recycle::{BroadcastSet, RecycleError};

/// Every parameter bound to its whole recycled column, for bodies written
/// in terms of array operations.
#[derive(Debug, Clone, Copy)]
pub struct Columns<'a> {
    set: &'a BroadcastSet,
}

impl<'a> Columns<'a> {
    pub fn from_set(set: &'a BroadcastSet) -> Self {
        Self { set }
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn f64(&self, name: &str) -> Result<Array1<f64>, RecycleError> {
        self.set.column_f64(name).map(Array1::from)
    }

    pub fn bool(&self, name: &str) -> Result<Array1<bool>, RecycleError> {
        self.set.column_bool(name).map(Array1::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use recycle::{args, broadcast, params};

    #[test]
    fn columns_are_arrays_of_common_length() {
        let spec = params![a, b, k, multby2 = true].unwrap();
        let set = broadcast(&spec, &args! { a => 5.0, b => 7.0, k => [1.0, 2.0, 3.0] }).unwrap();
        let cols = Columns::from_set(&set);

        assert_eq!(cols.len(), 3);
        let sum = cols.f64("a").unwrap() + cols.f64("b").unwrap() + cols.f64("k").unwrap();
        assert_eq!(sum, array![13.0, 14.0, 15.0]);
        assert_eq!(cols.bool("multby2").unwrap(), array![true, true, true]);
        assert!(cols.bool("k").is_err());
    }
}
