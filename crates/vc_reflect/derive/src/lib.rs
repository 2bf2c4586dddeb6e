//! See following macros:
//!
//! - [`Reflect`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";
static SERDE_ATTRIBUTE_NAME: &str = "serde";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Full Reflection Derivation
///
/// `#[derive(Reflect)]` automatically implements the following traits
/// for structs with named fields:
///
/// - `Typed`
/// - `Reflect`
/// - `Struct`
///
/// Tuple structs, unit structs, enums and unions are rejected.
///
/// ## Methods
///
/// Paths reach methods by name when no field matches. Methods are declared
/// at the type level and must be inherent methods of the type:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(getter(total), try_getter(checked), setter(reset), try_setter(update))]
/// struct Account {
///     debit: i64,
///     credit: i64,
/// }
///
/// impl Account {
///     fn total(&self) -> i64 { /* ... */ }
///     fn checked(&self) -> Result<i64, MyError> { /* ... */ }
///     fn reset(&mut self, value: i64) { /* ... */ }
///     fn update(&mut self, value: i64) -> Result<(), MyError> { /* ... */ }
/// }
/// ```
///
/// - `getter`: `fn(&self) -> R`
/// - `try_getter`: `fn(&self) -> Result<R, E>`
/// - `setter`: `fn(&mut self, A)`
/// - `try_setter`: `fn(&mut self, A) -> Result<(), E>`
///
/// `R` and `A` must implement `Reflect` and `Typed`, `E` must convert
/// into a boxed error.
///
/// The method is exposed under its Rust name unless renamed:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(getter(total = "Total"))]
/// struct Account { /* ... */ }
/// ```
///
/// ## Optimization with `Clone`
///
/// By default, `reflect_clone` clones field by field through reflection.
/// If the type implements `Clone`, mark it with the `clone` flag so the
/// standard implementation is used instead:
///
/// ```rust, ignore
/// #[derive(Reflect, Clone)]
/// #[reflect(clone)]
/// struct Foo { /* ... */ }
/// ```
///
/// These attributes can only be applied at the type level.
///
/// ## Serialization Names
///
/// A field may declare the name it carries once serialized, used to
/// translate external paths into field paths:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Foo {
///     #[reflect(serial = "id")]
///     identifier: u64,
///     #[serde(rename = "label")]
///     name: String,
/// }
/// ```
///
/// `#[reflect(serial = "..")]` takes precedence over `#[serde(rename = "..")]`.
///
/// ## Ignore Field
///
/// `#[reflect(skip)]` removes a field from reflection entirely: it is not part
/// of the type information, not counted by `field_len` and not reachable by
/// any path. Without the `clone` flag, skipped fields are reset to their
/// `Default` value by `reflect_clone`.
///
/// This attribute can only be used on fields.
#[proc_macro_derive(Reflect, attributes(reflect, serde))]
pub fn derive_full_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectStruct::from_input(&ast) {
        Ok(info) => impls::impl_struct(&info).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
