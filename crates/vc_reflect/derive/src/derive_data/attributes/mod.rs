//! Provide some tools for parsing attributes.
//!
//! Type level: `#[reflect(clone, getter(..), try_getter(..), setter(..), try_setter(..))]`.
//! Field level: `#[reflect(skip, serial = "..")]` and `#[serde(rename = "..")]`.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use type_attributes::{MethodKind, TypeAttributes};

use syn::meta::ParseNestedMeta;
use syn::{Token, token::Paren};

/// Consume the value of an attribute we do not interpret, e.g.
/// `default`, `skip_serializing_if = ".."` or `with(..)`.
fn skip_meta_value(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(Paren) {
        meta.parse_nested_meta(|inner| skip_meta_value(&inner))?;
    }
    Ok(())
}
