//! This independent module is used to provide the required path.
//! So as to minimize changes when the `vc_reflect` structure is modified.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the access path to the `vc_reflect` crate.
///
/// `vc_reflect` declares `extern crate self as vc_reflect`, so the
/// generated code also compiles inside the crate itself.
pub(crate) fn vc_reflect() -> syn::Path {
    syn::parse_quote!(::vc_reflect)
}

// -----------------------------------------------------------------------------
// Modules

mod info;
mod ops;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use info::*;
pub(crate) use ops::*;

#[inline(always)]
pub(crate) fn macro_exports_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::__macro_exports
    }
}

#[inline(always)]
pub(crate) fn reflect_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::Reflect
    }
}
