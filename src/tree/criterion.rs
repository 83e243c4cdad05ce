//! Defines the splitting criterion and the split search
//! of the decision tree.

use rayon::prelude::*;

use serde::{Serialize, Deserialize};

use std::fmt;
use std::collections::HashMap;

use crate::Sample;
use crate::common::type_and_struct::Threshold;
use super::split_rule::*;


/// Splitting criteria for growing decision tree.
/// * `Criterion::Gini` minimizes the weighted Gini impurity
///   of the two sides of a candidate split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Criterion {
    /// Gini index.
    Gini,
}


impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gini => "Gini index",
        };

        write!(f, "{name}")
    }
}


impl Criterion {
    /// Returns the best splitting rule for the rows `indices`
    /// of `sample`, or `None` when the node is terminal.
    ///
    /// A node is terminal when it is empty,
    /// when all its labels are equal, or
    /// when every feature is constant over its rows
    /// so that no cut point exists.
    pub(crate) fn best_split(&self, sample: &Sample, indices: &[usize])
        -> Option<Splitter>
    {
        if indices.is_empty() {
            return None;
        }

        let target = sample.target();
        let first = target[indices[0]];
        if indices.iter().all(|&i| target[i] == first) {
            return None;
        }

        match self {
            Criterion::Gini => {
                sample.features()
                    .par_iter()
                    .enumerate()
                    .filter_map(|(feature, feat)| {
                        let values = feat.distinct_values(indices);

                        // Cut points are the midpoints of
                        // consecutive distinct values.
                        // A constant feature yields no candidate.
                        let mut best: Option<(f64, f64)> = None;
                        for pair in values.windows(2) {
                            let threshold = (pair[0] + pair[1]) / 2.0;

                            let mut left = Vec::new();
                            let mut right = Vec::new();
                            for &i in indices {
                                if feat[i] <= threshold {
                                    left.push(target[i]);
                                } else {
                                    right.push(target[i]);
                                }
                            }

                            let score = split_impurity(
                                indices.len(), &left[..], &right[..]
                            );

                            // A strictly smaller score wins,
                            // so ties keep the lowest cut point.
                            let improved = best
                                .map_or(true, |(s, _)| score < s);
                            if improved {
                                best = Some((score, threshold));
                            }
                        }

                        best.map(|(score, thr)| (score, feature, thr))
                    })
                    .min_by(|x, y| {
                        // Ties across features keep
                        // the lowest feature index.
                        x.0.partial_cmp(&y.0)
                            .expect("impurity scores must not be NaN")
                            .then(x.1.cmp(&y.1))
                    })
                    .map(|(_, feature, thr)| {
                        Splitter::new(feature, Threshold::from(thr))
                    })
            },
        }
    }
}


/// Returns the Gini impurity `1 - sum_y p(y)^2` of the given labels.
/// A homogeneous (or empty) set has impurity `0`.
#[inline(always)]
pub(crate) fn gini_impurity(labels: &[i64]) -> f64 {
    let total = labels.len() as f64;
    if labels.is_empty() { return 0.0; }

    let mut counter: HashMap<i64, usize> = HashMap::new();
    for &y in labels {
        let cnt = counter.entry(y).or_insert(0);
        *cnt += 1;
    }

    let correct = counter.values()
        .map(|&c| (c as f64 / total).powi(2))
        .sum::<f64>();

    (1.0 - correct).max(0.0)
}


/// Returns the weighted impurity of a binary partition.
/// Both sides are weighted by the **parent** row count
/// `parent_size`, not by `left.len() + right.len()`.
#[inline(always)]
pub(crate) fn split_impurity(
    parent_size: usize,
    left: &[i64],
    right: &[i64],
) -> f64
{
    let parent_size = parent_size as f64;
    let lp = left.len() as f64 / parent_size;
    let rp = right.len() as f64 / parent_size;

    lp * gini_impurity(left) + rp * gini_impurity(right)
}
