use serde::{Serialize, Deserialize};
use std::cmp;


/// A threshold of a splitting rule.
/// This is just a wrapper for `f64`.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[repr(transparent)]
pub(crate) struct Threshold(pub(crate) f64);


impl From<f64> for Threshold {
    #[inline]
    fn from(threshold: f64) -> Self {
        Self(threshold)
    }
}


impl cmp::PartialEq<f64> for Threshold {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.0.eq(other)
    }
}


impl cmp::PartialOrd<f64> for Threshold {
    #[inline]
    fn partial_cmp(&self, other: &f64) -> Option<cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}
