use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{MethodKind, ReflectMeta};

/// Generate the `.with_methods([..])` call of the type info, or nothing
/// if the type exposes no method.
///
/// Similar to following:
///
/// ```ignore
/// .with_methods([
///     _path_::MethodInfo::getter::<Self, _>("total", |__this: &Self| Self::total(__this)),
///     ......
/// ])
/// ```
pub(crate) fn get_method_table_tokens(meta: &ReflectMeta) -> TokenStream {
    let methods = &meta.attrs().methods;
    if methods.is_empty() {
        return TokenStream::new();
    }

    let method_info_ = crate::path::method_info_(meta.vc_reflect_path());

    let entries = methods.iter().map(|method| {
        let ident = &method.ident;
        let name = &method.name;
        match method.kind {
            MethodKind::Getter => quote! {
                #method_info_::getter::<Self, _>(#name, |__this: &Self| Self::#ident(__this))
            },
            MethodKind::TryGetter => quote! {
                #method_info_::try_getter::<Self, _, _>(#name, |__this: &Self| Self::#ident(__this))
            },
            MethodKind::Setter => quote! {
                #method_info_::setter::<Self, _>(#name, |__this: &mut Self, __value| Self::#ident(__this, __value))
            },
            MethodKind::TrySetter => quote! {
                #method_info_::try_setter::<Self, _, _>(#name, |__this: &mut Self, __value| Self::#ident(__this, __value))
            },
        }
    });

    quote! {
        .with_methods([
            #(#entries,)*
        ])
    }
}
