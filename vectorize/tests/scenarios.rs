use assert_approx_eq::assert_approx_eq;
use recycle::{args, params, CallArguments, RecycleError, Row};
use vectorize::{select, Vectorized, VectorizeError};

/// `a + b * k`, halved unless `full` is set. `full` is usually left implicit.
fn weighted() -> Vectorized<impl Fn(&Row<'_>) -> Result<f64, RecycleError>> {
    Vectorized::new(params![a, b, k, full = false].unwrap(), |row| {
        let value = row.f64("a")? + row.f64("b")? * row.f64("k")?;
        Ok(if row.bool("full")? { value } else { value / 2.0 })
    })
}

#[test]
fn scalar_call_gives_one_result() {
    let out = weighted().call(&args! { a => 1.0, b => 2.0, k => 3.0 }).unwrap();
    assert_eq!(out, vec![3.5]);
}

#[test]
fn sequence_in_any_position_sets_the_length() {
    let f = weighted();

    let out = f.call_array(&args! { a => [3, 4, 5, 6, 7], b => 5, k => 1 }).unwrap();
    assert_eq!(out.len(), 5);
    assert_approx_eq!(out[0], 4.0);
    assert_approx_eq!(out[4], 6.0);

    let call = CallArguments::new()
        .positional(0.0)
        .positional(1.0)
        .positional([0.25, 0.5, 0.75])
        .positional(true);
    assert_eq!(f.call(&call).unwrap(), vec![0.25, 0.5, 0.75]);
}

#[test]
fn element_and_column_bodies_agree() {
    let f = weighted();
    let call = args! { a => [1.0, 2.0, 3.0, 4.0], b => 0.5, k => 2.0, full => [true, false, true, false] };

    let per_element = f.call_array(&call).unwrap();
    let columnwise = f
        .call_columns(&call, |cols| {
            let value = cols.f64("a")? + cols.f64("b")? * cols.f64("k")?;
            let halved = &value / 2.0;
            Ok(select(&cols.bool("full")?, &value, &halved).unwrap())
        })
        .unwrap();

    for (x, y) in per_element.iter().zip(columnwise.iter()) {
        assert_approx_eq!(*x, *y);
    }
}

#[test]
fn missing_and_mismatched_arguments() {
    let f = weighted();
    assert_eq!(
        f.call(&args! { a => 1.0, k => 1.0 }).unwrap_err(),
        VectorizeError::Recycle(RecycleError::MissingArgument("b".into()))
    );
    assert_eq!(
        f.call(&args! { a => [1.0, 2.0], b => [1.0, 2.0, 3.0], k => 1.0 })
            .unwrap_err(),
        VectorizeError::Recycle(RecycleError::IncompatibleLength {
            name: "a".into(),
            len: 2,
            expected: 3
        })
    );
}

#[test]
fn empty_sequence_gives_empty_output() {
    let out = weighted()
        .call(&args! { a => Vec::<f64>::new(), b => 1.0, k => 1.0 })
        .unwrap();
    assert!(out.is_empty());
}
