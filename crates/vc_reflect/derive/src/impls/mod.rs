// -----------------------------------------------------------------------------
// Modules

mod method_table;
mod struct_clone;
mod struct_kind;
mod trait_reflect;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use struct_clone::get_struct_clone_impl;
use trait_reflect::impl_trait_reflect;
use trait_typed::impl_trait_typed;

pub(crate) use method_table::get_method_table_tokens;
pub(crate) use struct_kind::impl_struct;
