//! Provide some utilities for implementing reflection traits.
//!
//! - [`NonGenericTypeInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`GenericTypeInfoCell`]: Used to implement [`Typed`] for generic types.
//! - `xxx_debug`: Used to implement [`Reflect::reflect_debug`] (e.g. [`list_debug`]).
//! - [`clone_as`]: Clone a value through reflection while keeping its type.
//!
//! ## Implemented Menu
//!
//! - basic:
//!     - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`, `bool`, `char`, `()`
//!     - `[T; N]`
//!     - `&'static str`, `String`
//! - core:
//!     - `Option<T>`
//! - alloc:
//!     - `Vec<T>`, `BTreeMap<K, V>`
//!     - `Box<T>`, `Arc<T>`
//! - std:
//!     - `HashMap<K, V, S>`
//! - ops:
//!     - [`Func`], [`Chan<T>`], [`Dyn<I>`]
//! - json: ("json" feature)
//!     - `serde_json::Value`, `serde_json::Number`, `serde_json::Map<String, Value>`
//!
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
//! [`Typed`]: crate::info::Typed
//! [`Func`]: crate::ops::Func
//! [`Chan<T>`]: crate::ops::Chan
//! [`Dyn<I>`]: crate::ops::Dyn

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod utils;

mod alloc;
mod core;
mod native;
mod ops;
mod std;

#[cfg(feature = "json")]
mod json;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};

pub use utils::*;

pub(crate) use utils::{impl_reflect_for_map, impl_simple_type_reflect};

#[cfg(feature = "json")]
pub use json::into_json;
