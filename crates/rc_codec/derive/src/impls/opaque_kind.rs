use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::CodecMeta;
use crate::impls::{impl_trait_codable, impl_trait_typed};

/// Implement `Codable` and `Typed` for an opaque type.
pub(crate) fn impl_opaque(meta: &CodecMeta) -> TokenStream {
    let rc_codec_path = meta.rc_codec_path();
    let type_info_ = crate::path::type_info_(rc_codec_path);
    let opaque_info_ = crate::path::opaque_info_(rc_codec_path);
    let codable_ref_ = crate::path::codable_ref_(rc_codec_path);

    let typed_trait_tokens = impl_trait_typed(
        meta,
        quote! {
            #type_info_::Opaque(#opaque_info_::new::<Self>())
        },
    );

    let codable_trait_tokens = impl_trait_codable(
        meta,
        quote! {
            #codable_ref_::Opaque(self)
        },
    );

    quote! {
        #typed_trait_tokens

        #codable_trait_tokens
    }
}
