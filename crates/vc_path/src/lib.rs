#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

extern crate alloc;
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod alias;
mod apply;
mod context;
mod ensure;
mod error;
mod ops;
mod path;
mod schema;
mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports {
    pub use alloc::format;
}

pub use alias::{json_aliases, json_aliases_of};
pub use context::{Context, Frame, Visit, Visitor};
pub use error::{ErrorKind, PathError};
pub use ops::ReflectPath;
pub use path::{CALL, Path, RECV_ONE, WILDCARD};
pub use schema::{json_schema, json_schema_of, json_schema_string};
pub use value::{Node, Value};
