//! Provide per-kind interfaces and the dynamic value types.
//!
//! ## Menu
//!
//! ### Interface
//!
//! The following are subtraits of [`Reflect`], one per shape kind,
//! giving path traversal a way to reach children.
//!
//! - [`Struct`]: For struct (e.g. `A{ .. }`), fields by name and methods.
//! - [`List`]: For list-like (e.g. `Vec<i32>`, `[i32; 4]`), items by index.
//! - [`Map`]: For map-like (e.g. `HashMap<String, f32>`), values by key text.
//! - [`Pointer`]: For single-child containers (e.g. `Option<T>`, `Box<T>`).
//! - [`Function`]: For callable values.
//! - [`Stream`]: For channel-like streams.
//!
//! ### Value types
//!
//! - [`Func`]: a nullable callable built from a closure.
//! - [`Chan`]: a bounded, closable FIFO channel handle.
//! - [`Dyn`]: a nullable slot holding any value satisfying an [`Interface`].
//!
//! [`Reflect`]: crate::Reflect

// -----------------------------------------------------------------------------
// Modules

mod clone_error;
mod dyn_ops;
mod func_ops;
mod kind;
mod list_ops;
mod map_ops;
mod pointer_ops;
mod stream_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use clone_error::ReflectCloneError;

pub use kind::{ReflectMut, ReflectRef};

pub use dyn_ops::{AnyValue, Dyn, Interface};
pub use func_ops::{BoxError, CallError, Func, Function};
pub use list_ops::List;
pub use map_ops::{Map, MapKey};
pub use pointer_ops::Pointer;
pub use stream_ops::{Chan, Direction, Stream, StreamError};
pub use struct_ops::{Struct, StructFieldIter};
