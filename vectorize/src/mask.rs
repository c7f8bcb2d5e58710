use crate::error::VectorizeError;
use ndarray::{Array1, Zip};

/// Element-wise `if mask { if_true } else { if_false }`.
///
/// A plain `if` on a column only ever looks at one condition; masking picks per element.
pub fn select(
    mask: &Array1<bool>,
    if_true: &Array1<f64>,
    if_false: &Array1<f64>,
) -> Result<Array1<f64>, VectorizeError> {
    for branch in [if_true, if_false] {
        if branch.len() != mask.len() {
            return Err(VectorizeError::OutputLength {
                len: branch.len(),
                expected: mask.len(),
            });
        }
    }
    Ok(Zip::from(mask)
        .and(if_true)
        .and(if_false)
        .map_collect(|&m, &t, &f| if m { t } else { f }))
}
