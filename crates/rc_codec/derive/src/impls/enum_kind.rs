use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{CodecMeta, EnumMember, MemberValue};
use crate::impls::{impl_trait_codable, impl_trait_typed};

/// Implement `Codable` and `Typed` for an enum of unit variants.
pub(crate) fn impl_enum(meta: &CodecMeta, members: &[EnumMember]) -> TokenStream {
    let rc_codec_path = meta.rc_codec_path();
    let codable_ = crate::path::codable_(rc_codec_path);
    let type_info_ = crate::path::type_info_(rc_codec_path);
    let enum_info_ = crate::path::enum_info_(rc_codec_path);
    let member_info_ = crate::path::member_info_(rc_codec_path);
    let member_value_ = crate::path::member_value_(rc_codec_path);
    let codable_ref_ = crate::path::codable_ref_(rc_codec_path);
    let box_ = crate::path::box_(rc_codec_path);

    let values: Vec<_> = members
        .iter()
        .map(|member| match &member.value {
            MemberValue::Text(text) => quote! { #member_value_::Text(#text) },
            MemberValue::Integer(int, _) => quote! { #member_value_::Integer(#int) },
        })
        .collect();
    let idents: Vec<_> = members.iter().map(|member| member.ident).collect();
    let names = idents.iter().map(|ident| ident.to_string());

    let typed_trait_tokens = impl_trait_typed(
        meta,
        quote! {
            #type_info_::Enum(#enum_info_::new::<Self>(&[
                #(#member_info_::new(
                    #names,
                    #values,
                    || #box_::new(Self::#idents) as #box_<dyn #codable_>,
                ),)*
            ]))
        },
    );

    let codable_trait_tokens = impl_trait_codable(
        meta,
        quote! {
            #codable_ref_::Enum(match *self {
                #(Self::#idents => #values,)*
            })
        },
    );

    quote! {
        #typed_trait_tokens

        #codable_trait_tokens
    }
}
