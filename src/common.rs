//! Items shared by the modules of this crate.

// Provides functions that check caller-side pre-conditions.
pub(crate) mod checker;
// Provides small wrapper types.
pub(crate) mod type_and_struct;
