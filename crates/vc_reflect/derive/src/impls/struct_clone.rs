use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use crate::derive_data::ReflectStruct;

// Generate `Reflect::reflect_clone` tokens for struct.
pub(crate) fn get_struct_clone_impl(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let vc_reflect_path = meta.vc_reflect_path();
    let macro_exports_ = crate::path::macro_exports_(vc_reflect_path);
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let reflect_clone_error_ = crate::path::reflect_clone_error_(vc_reflect_path);

    if let Some(span) = meta.attrs().clone {
        return quote_spanned! { span =>
            #[inline]
            fn reflect_clone(&self) -> ::core::result::Result<#macro_exports_::Box<dyn #reflect_>, #reflect_clone_error_> {
                ::core::result::Result::Ok(#macro_exports_::Box::new(<Self as ::core::clone::Clone>::clone(self)))
            }
        };
    }

    let mut tokens = TokenStream::new();

    for field in info.fields() {
        let field_ty = &field.data.ty;
        let member = field.to_member();

        if field.is_active() {
            tokens.extend(quote! {
                #member: #macro_exports_::__reflect_clone_field::<#field_ty>(&self.#member)?,
            });
        } else {
            tokens.extend(quote! {
                #member: ::core::default::Default::default(),
            });
        }
    }

    quote! {
        fn reflect_clone(&self) -> ::core::result::Result<#macro_exports_::Box<dyn #reflect_>, #reflect_clone_error_> {
            ::core::result::Result::Ok(#macro_exports_::Box::new(
                Self {
                    #tokens
                }
            ) as #macro_exports_::Box<dyn #reflect_>)
        }
    }
}
