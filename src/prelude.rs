//! Exports the standard structs and functions of this crate.

pub use crate::sample::{
    Feature,
    Sample,
    SampleReader,
};


pub use crate::tree::{
    Criterion,
    DecisionTree,
};


pub use crate::boundary::{
    Boundary,
    LeafRegion,
    LineSegment,
};


pub use crate::research::{
    accuracy,
    zero_one_loss,
    CrossValidation,
};
