use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::CodecMeta;

/// Generate implementation code for `Codable`.
///
/// `codable_ref_tokens` is the body of `codable_ref`.
pub(crate) fn impl_trait_codable(meta: &CodecMeta, codable_ref_tokens: TokenStream) -> TokenStream {
    let rc_codec_path = meta.rc_codec_path();
    let codable_ = crate::path::codable_(rc_codec_path);
    let typed_ = crate::path::typed_(rc_codec_path);
    let type_info_ = crate::path::type_info_(rc_codec_path);
    let codable_ref_ = crate::path::codable_ref_(rc_codec_path);
    let box_ = crate::path::box_(rc_codec_path);

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #codable_ for #ident #ty_generics #where_clause {
            #[inline]
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            #[inline]
            fn into_any(self: #box_<Self>) -> #box_<dyn ::core::any::Any> {
                self
            }

            #[inline]
            fn codable_info(&self) -> &'static #type_info_ {
                <Self as #typed_>::type_info()
            }

            #[inline]
            fn codable_ref(&self) -> #codable_ref_<'_> {
                #codable_ref_tokens
            }
        }
    }
}
