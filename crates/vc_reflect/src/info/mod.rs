//! Provide type descriptors for the seven reflected shape kinds.
//!
//! ## Menu
//!
//! - [`Type`]: A `TypeId` plus the type path reported by [`core::any::type_name`].
//!
//! - [`TypeInfo`]: An enum describing a reflected type, the inner is one of following:
//!     - [`StructInfo`]: named fields (with serialization names) and the method table.
//!     - [`ListInfo`]: item type and, for arrays, the fixed capacity.
//!     - [`MapInfo`]: key type, value type and whether keys are string-like.
//!     - [`PointerInfo`]: pointee type, or nothing for dynamic (interface-like) slots.
//!     - [`FuncInfo`]: callable values, whose signature is only known at runtime.
//!     - [`StreamInfo`]: item type of a channel-like stream.
//!     - [`OpaqueInfo`]: leaf values such as numbers and strings.
//!
//! - Method tables:
//!     - [`MethodInfo`]: a named, type-erased method of a struct.
//!     - [`Signature`]: parameters and output shape, used to classify getters and setters.
//!
//! - [`ReflectKind`]: the shape kind, one of `Struct`, `List`, `Map`, `Pointer`, `Func`, `Stream`, `Opaque`.
//!
//! - [`Typed`]: A trait for obtaining `TypeInfo` data.
//!
//! - [`DynamicTyped`]: Provide dynamic dispatch for `Typed`.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod func_info;
mod list_info;
mod map_info;
mod method_info;
mod opaque_info;
mod pointer_info;
mod stream_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use method_info::{expect_args, take_single_arg};
pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::NamedField;
pub use func_info::FuncInfo;
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use method_info::{CallResult, MethodCall, MethodInfo};
pub use method_info::{Output, ParamInfo, Signature};
pub use opaque_info::OpaqueInfo;
pub use pointer_info::PointerInfo;
pub use stream_info::StreamInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::Type;
pub use typed::{DynamicTyped, Typed};
