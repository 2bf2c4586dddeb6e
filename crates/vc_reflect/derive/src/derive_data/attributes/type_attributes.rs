use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, Ident, LitStr, Token};

use crate::REFLECT_ATTRIBUTE_NAME;

/// The shape of a method listed in the type attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MethodKind {
    /// `fn(&self) -> R`
    Getter,
    /// `fn(&self) -> Result<R, E>`
    TryGetter,
    /// `fn(&mut self, A)`
    Setter,
    /// `fn(&mut self, A) -> Result<(), E>`
    TrySetter,
}

impl MethodKind {
    fn from_ident(ident: &Ident) -> Option<Self> {
        match ident.to_string().as_str() {
            "getter" => Some(Self::Getter),
            "try_getter" => Some(Self::TryGetter),
            "setter" => Some(Self::Setter),
            "try_setter" => Some(Self::TrySetter),
            _ => None,
        }
    }
}

/// A method exposed to paths, e.g. `getter(total = "Total")`.
#[derive(Debug)]
pub(crate) struct MethodAttr {
    pub kind: MethodKind,
    /// The inherent method to call.
    pub ident: Ident,
    /// The name paths use.
    pub name: String,
}

/// Type level attributes.
#[derive(Debug, Default)]
pub(crate) struct TypeAttributes {
    /// The type implements `Clone`.
    pub clone: Option<Span>,
    pub methods: Vec<MethodAttr>,
}

impl TypeAttributes {
    /// Parse every `#[reflect(..)]` attribute of the type.
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("clone") {
            if self.clone.is_some() {
                return Err(meta.error("duplicate `clone` flag"));
            }
            self.clone = Some(meta.path.span());
            return Ok(());
        }

        let kind = meta.path.get_ident().and_then(MethodKind::from_ident);
        let Some(kind) = kind else {
            return Err(meta.error(
                "unsupported type attribute, expected `clone`, `getter`, `try_getter`, `setter` or `try_setter`",
            ));
        };

        meta.parse_nested_meta(|inner| {
            let ident = inner.path.require_ident()?.clone();
            let name = if inner.input.peek(Token![=]) {
                inner.value()?.parse::<LitStr>()?.value()
            } else {
                ident.to_string()
            };

            if self.methods.iter().any(|method| method.name == name) {
                return Err(inner.error(format!("duplicate method `{name}`")));
            }

            self.methods.push(MethodAttr { kind, ident, name });
            Ok(())
        })
    }
}
