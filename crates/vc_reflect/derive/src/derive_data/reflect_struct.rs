use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, Member, Type};

use super::{FieldAttributes, ReflectMeta, TypeAttributes};

/// A reflected struct field.
pub(crate) struct StructField<'a> {
    /// The raw field.
    pub data: &'a Field,
    /// The parsed attributes.
    pub attrs: FieldAttributes,
}

impl StructField<'_> {
    /// The field ident, structs are required to have named fields.
    pub fn to_member(&self) -> Member {
        match &self.data.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(0.into()),
        }
    }

    /// The name paths use to address the field.
    pub fn name(&self) -> String {
        self.data
            .ident
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.attrs.skip.is_none()
    }
}

/// A struct with named fields, ready for code generation.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let Data::Struct(data) = &input.data else {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "`Reflect` can only be derived for structs with named fields",
            ));
        };
        let Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &data.fields,
                "`Reflect` can only be derived for structs with named fields",
            ));
        };

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let meta = ReflectMeta::new(attrs, &input.ident, &input.generics)?;

        let fields = named
            .named
            .iter()
            .map(|data| {
                Ok(StructField {
                    data,
                    attrs: FieldAttributes::parse_attrs(&data.attrs)?,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// All fields, including skipped ones.
    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// Fields visible to reflection, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.is_active())
    }

    /// Types of the reflected fields, used for `where` bounds.
    pub fn active_types(&self) -> Vec<&Type> {
        self.active_fields().map(|field| &field.data.ty).collect()
    }

    /// Generate the `StructInfo` construction tokens.
    ///
    /// Similar to following:
    ///
    /// ```ignore
    /// _path_::TypeInfo::Struct(
    ///     _path_::StructInfo::new::<Self>(&[
    ///         _path_::NamedField::new::<u32>("a").with_serial_name("A"),
    ///         ......
    ///     ])
    ///     .with_methods([ ...... ])
    /// )
    /// ```
    pub fn to_info_tokens(&self) -> TokenStream {
        let vc_reflect_path = self.meta.vc_reflect_path();
        let type_info_ = crate::path::type_info_(vc_reflect_path);
        let struct_info_ = crate::path::struct_info_(vc_reflect_path);
        let named_field_ = crate::path::named_field_(vc_reflect_path);

        let fields = self.active_fields().map(|field| {
            let ty = &field.data.ty;
            let name = field.name();
            let with_serial = field
                .attrs
                .serial_name()
                .map(|serial| quote!(.with_serial_name(#serial)));
            quote! {
                #named_field_::new::<#ty>(#name) #with_serial
            }
        });

        let with_methods = crate::impls::get_method_table_tokens(&self.meta);

        quote! {
            #type_info_::Struct(
                #struct_info_::new::<Self>(&[
                    #(#fields,)*
                ])
                #with_methods
            )
        }
    }
}

/// Per field tokens for the `Struct` trait.
pub(crate) struct FieldAccessors {
    /// `&self.field`
    pub fields_ref: Vec<TokenStream>,
    /// `&mut self.field`
    pub fields_mut: Vec<TokenStream>,
    /// `0`, `1`, ...
    pub field_indices: Vec<Literal>,
    /// The number of reflected fields.
    pub field_count: usize,
}

impl FieldAccessors {
    pub fn new(info: &ReflectStruct) -> Self {
        let members = info
            .active_fields()
            .map(StructField::to_member)
            .collect::<Vec<_>>();

        Self {
            fields_ref: members.iter().map(|member| quote!(&self.#member)).collect(),
            fields_mut: members.iter().map(|member| quote!(&mut self.#member)).collect(),
            field_indices: (0..members.len()).map(Literal::usize_unsuffixed).collect(),
            field_count: members.len(),
        }
    }
}
