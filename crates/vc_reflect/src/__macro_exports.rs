//! Items used by the code generated from `#[derive(Reflect)]`.
//!
//! The generated code cannot assume `alloc` is reachable from the user's
//! crate, so the allocation types are re-exported here.

pub use alloc::boxed::Box;
pub use alloc::vec::Vec;

pub use crate::impls::clone_as as __reflect_clone_field;
