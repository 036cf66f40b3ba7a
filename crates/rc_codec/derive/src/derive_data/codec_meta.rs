use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericParam, Generics, Ident, parse_quote, spanned::Spanned};

use super::TypeAttributes;

/// Information shared by every kind of derived type.
pub(crate) struct CodecMeta<'a> {
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
    rc_codec_path: syn::Path,
}

impl<'a> CodecMeta<'a> {
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> syn::Result<Self> {
        // Codable values are `'static`.
        if let Some(lifetime) = generics.lifetimes().next() {
            return Err(syn::Error::new(
                lifetime.span(),
                "`Codable` types cannot have lifetime parameters",
            ));
        }

        Ok(Self {
            attrs,
            ident,
            generics,
            rc_codec_path: crate::path::rc_codec(),
        })
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn ident(&self) -> &'a Ident {
        self.ident
    }

    #[inline]
    pub fn rc_codec_path(&self) -> &syn::Path {
        &self.rc_codec_path
    }

    /// Whether the implementations are generic over type parameters.
    pub fn impl_with_generic(&self) -> bool {
        self.generics
            .params
            .iter()
            .any(|param| matches!(param, GenericParam::Type(_)))
    }

    /// Type parameter idents, in declaration order.
    pub fn type_params(&self) -> impl Iterator<Item = &'a Ident> {
        self.generics.type_params().map(|param| &param.ident)
    }

    /// Returns `(impl_generics, ty_generics, where_clause)`, with a `Typed`
    /// bound added for every type parameter.
    pub fn split_generics(&self) -> (TokenStream, TokenStream, TokenStream) {
        let typed_ = crate::path::typed_(&self.rc_codec_path);

        let mut generics = self.generics.clone();
        let where_clause = generics.make_where_clause();
        for ident in self.type_params() {
            where_clause.predicates.push(parse_quote!(#ident: #typed_));
        }

        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
        (
            quote!(#impl_generics),
            quote!(#ty_generics),
            quote!(#where_clause),
        )
    }
}
