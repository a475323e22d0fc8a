//! Function composition utilities.
//!
//! - [`pipe!`](crate::pipe): apply a value to functions left to right
//! - [`flow!`](crate::flow): compose functions left to right
//! - [`identity`], [`constant`], [`flip`], [`uncurry`]: small function helpers

mod pipe_macro;
mod utils;

pub use utils::{constant, flip, identity, uncurry};

pub use crate::flow;
pub use crate::pipe;
