//! This file defines split rules for decision tree.
use serde::{Serialize, Deserialize};

use crate::common::type_and_struct::Threshold;
use crate::Sample;


/// The output of the function `split` of `Splitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LR {
    Left,
    Right,
}


/// An axis-aligned splitting rule.
/// A row goes `Left` when its value at `feature` is
/// less than or equals to `threshold`, and `Right` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Splitter {
    pub(crate) feature: usize,
    pub(crate) threshold: Threshold,
}


impl Splitter {
    #[inline]
    pub(crate) fn new(feature: usize, threshold: Threshold) -> Self {
        Self {
            feature,
            threshold,
        }
    }


    pub(crate) fn feature(&self) -> usize {
        self.feature
    }


    pub(crate) fn threshold(&self) -> f64 {
        self.threshold.0
    }


    /// Defines the splitting of a training sample row.
    #[inline]
    pub(crate) fn split(&self, sample: &Sample, row: usize) -> LR {
        let value = sample.features()[self.feature][row];

        self.split_value(value)
    }


    /// Defines the splitting of an arbitrary feature vector.
    #[inline]
    pub(crate) fn split_row(&self, row: &[f64]) -> LR {
        self.split_value(row[self.feature])
    }


    #[inline]
    fn split_value(&self, value: f64) -> LR {
        if value <= self.threshold.0 {
            LR::Left
        } else {
            LR::Right
        }
    }
}
