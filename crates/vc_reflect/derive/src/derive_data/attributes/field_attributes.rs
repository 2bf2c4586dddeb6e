use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr, token::Paren};

use super::skip_meta_value;
use crate::{REFLECT_ATTRIBUTE_NAME, SERDE_ATTRIBUTE_NAME};

/// Field level attributes.
#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(skip)]`, the field is invisible to reflection.
    pub skip: Option<Span>,
    /// `#[reflect(serial = "..")]`
    serial: Option<LitStr>,
    /// `#[serde(rename = "..")]`
    serde_rename: Option<LitStr>,
}

impl FieldAttributes {
    /// Parse the `#[reflect(..)]` and `#[serde(..)]` attributes of a field.
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_reflect_meta(meta))?;
            } else if attr.path().is_ident(SERDE_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_serde_meta(meta))?;
            }
        }
        Ok(this)
    }

    /// The serialization name, if any.
    pub fn serial_name(&self) -> Option<&LitStr> {
        self.serial.as_ref().or(self.serde_rename.as_ref())
    }

    fn parse_reflect_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("skip") {
            self.skip = Some(meta.path.span());
            Ok(())
        } else if meta.path.is_ident("serial") {
            if self.serial.is_some() {
                return Err(meta.error("duplicate `serial` name"));
            }
            self.serial = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported field attribute, expected `skip` or `serial`"))
        }
    }

    fn parse_serde_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if !meta.path.is_ident("rename") {
            return skip_meta_value(&meta);
        }

        if meta.input.peek(Paren) {
            // `rename(serialize = "..", deserialize = "..")`
            meta.parse_nested_meta(|inner| {
                if inner.path.is_ident("serialize") {
                    self.serde_rename = Some(inner.value()?.parse()?);
                    Ok(())
                } else {
                    skip_meta_value(&inner)
                }
            })
        } else {
            self.serde_rename = Some(meta.value()?.parse()?);
            Ok(())
        }
    }
}
