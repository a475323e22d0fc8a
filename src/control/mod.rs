//! Control structures - the data types the effects are built from.
//!
//! - [`Either`]: a failure or a success, the representation of the error effect
//! - [`NonEmptyVec`]: a vector with at least one element, plus [`scan_left`]

mod either;
mod non_empty;

pub use either::Either;
pub use non_empty::{EmptySequenceError, NonEmptyVec, scan_left};
