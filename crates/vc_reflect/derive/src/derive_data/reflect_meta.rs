use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{GenericParam, Generics, Ident, Path, Type};

use super::TypeAttributes;

/// Type level data shared by every generated implementation.
pub(crate) struct ReflectMeta<'a> {
    vc_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("vc_reflect_path", &self.vc_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> syn::Result<Self> {
        if let Some(param) = generics.lifetimes().next() {
            return Err(syn::Error::new_spanned(
                param,
                "`Reflect` types must be `'static`, lifetime parameters are not supported",
            ));
        }

        Ok(Self {
            vc_reflect_path: crate::path::vc_reflect(),
            attrs,
            ident,
            generics,
        })
    }

    #[inline]
    pub fn vc_reflect_path(&self) -> &Path {
        &self.vc_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn real_ident(&self) -> &Ident {
        self.ident
    }

    /// Whether `Typed` must cache one descriptor per instantiation.
    pub fn impl_with_generic(&self) -> bool {
        self.generics
            .params
            .iter()
            .any(|param| matches!(param, GenericParam::Type(_) | GenericParam::Const(_)))
    }

    /// Return the `impl_generics`, `ty_generics` and `where_clause` of the impls.
    ///
    /// For generic types, every type parameter and every reflected field
    /// type must implement `Reflect + Typed`.
    ///
    /// ```ignore
    /// let (impl_generics, ty_generics, where_clause) = meta.split_generics(&field_types);
    ///
    /// quote! {
    ///     impl #impl_generics TraitName for #real_ident #ty_generics #where_clause {
    ///         /* ... */
    ///     }
    /// }
    /// ```
    pub fn split_generics(
        &self,
        field_types: &[&Type],
    ) -> (
        syn::ImplGenerics<'a>,
        syn::TypeGenerics<'a>,
        TokenStream,
    ) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        if !self.impl_with_generic() {
            return (impl_generics, ty_generics, where_clause.to_token_stream());
        }

        let reflect_ = crate::path::reflect_(&self.vc_reflect_path);
        let typed_ = crate::path::typed_(&self.vc_reflect_path);

        let predicates = where_clause.map(|clause| {
            let predicates = clause.predicates.iter();
            quote! { #(#predicates,)* }
        });

        let params = self.generics.type_params().map(|param| &param.ident);

        let where_clause = quote! {
            where
                #predicates
                #(#params: #reflect_ + #typed_,)*
                #(#field_types: #reflect_ + #typed_,)*
        };

        (impl_generics, ty_generics, where_clause)
    }
}
