use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{CodecMeta, WrappedField};

/// Implement `Codable` and `Typed` for a single-field wrapper that is
/// converted as its field.
///
/// The wrapper reports the `TypeInfo` of the field type and exposes the field
/// through `as_any`, the way `Box<T>` does.
pub(crate) fn impl_transparent(meta: &CodecMeta, field: &WrappedField) -> TokenStream {
    let rc_codec_path = meta.rc_codec_path();
    let codable_ = crate::path::codable_(rc_codec_path);
    let typed_ = crate::path::typed_(rc_codec_path);
    let type_info_ = crate::path::type_info_(rc_codec_path);
    let codable_ref_ = crate::path::codable_ref_(rc_codec_path);
    let codec_error_ = crate::path::codec_error_(rc_codec_path);
    let box_ = crate::path::box_(rc_codec_path);

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();
    let member = &field.member;
    let ty = field.ty;

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            #[inline]
            fn type_info() -> &'static #type_info_ {
                <#ty as #typed_>::type_info()
            }

            #[inline]
            fn take_from(
                value: #box_<dyn #codable_>,
            ) -> ::core::result::Result<Self, #codec_error_> {
                <#ty as #typed_>::take_from(value).map(|inner| Self { #member: inner })
            }
        }

        impl #impl_generics #codable_ for #ident #ty_generics #where_clause {
            #[inline]
            fn as_any(&self) -> &dyn ::core::any::Any {
                #codable_::as_any(&self.#member)
            }

            #[inline]
            fn into_any(self: #box_<Self>) -> #box_<dyn ::core::any::Any> {
                #codable_::into_any(#box_::new(self.#member))
            }

            #[inline]
            fn codable_info(&self) -> &'static #type_info_ {
                <#ty as #typed_>::type_info()
            }

            #[inline]
            fn codable_ref(&self) -> #codable_ref_<'_> {
                #codable_::codable_ref(&self.#member)
            }
        }
    }
}
