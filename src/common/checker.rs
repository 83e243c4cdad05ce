//! This file defines some functions that check caller-side pre-conditions,
//! E.g., shape of data.

/// Check whether the given rows form a valid training matrix
/// for the given target.
/// Every row must have the same number of features and
/// the number of rows must match the number of target labels.
#[inline(always)]
pub(crate) fn check_rows(rows: &[Vec<f64>], target: &[i64]) {
    let n_rows = rows.len();
    let n_target = target.len();
    assert!(
        n_rows == n_target,
        "the number of rows must match the number of labels. \
         got {n_rows} rows and {n_target} labels."
    );

    if let Some(first) = rows.first() {
        let n_feature = first.len();
        assert!(
            rows.iter().all(|row| row.len() == n_feature),
            "all rows must have the same number of features. \
             the first row has {n_feature} features."
        );
    }
}

/// Check whether the given row has as many features
/// as the sample the tree was fitted on.
#[inline(always)]
pub(crate) fn check_row_width(n_feature: usize, row: &[f64]) {
    let width = row.len();
    assert!(
        width == n_feature,
        "the row width must match the fitted sample. \
         expected {n_feature} features, got {width}."
    );
}
