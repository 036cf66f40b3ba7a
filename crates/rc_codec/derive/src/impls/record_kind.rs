use proc_macro2::{Literal, TokenStream};
use quote::quote;

use crate::derive_data::{CodecMeta, RecordField};
use crate::impls::trait_typed::get_generics_tokens;
use crate::impls::{impl_trait_codable, impl_trait_typed};

/// Implement `Codable`, `Typed` and `Record` for a struct with named fields.
pub(crate) fn impl_record(meta: &CodecMeta, fields: &[RecordField]) -> TokenStream {
    let rc_codec_path = meta.rc_codec_path();
    let codable_ = crate::path::codable_(rc_codec_path);
    let type_info_ = crate::path::type_info_(rc_codec_path);
    let record_info_ = crate::path::record_info_(rc_codec_path);
    let field_info_ = crate::path::field_info_(rc_codec_path);
    let field_values_ = crate::path::field_values_(rc_codec_path);
    let codable_ref_ = crate::path::codable_ref_(rc_codec_path);
    let record_ = crate::path::record_(rc_codec_path);
    let box_ = crate::path::box_(rc_codec_path);

    let members: Vec<_> = fields.iter().map(|field| field.member).collect();

    let field_infos = fields.iter().map(|field| {
        let ty = field.ty;
        let name = &field.name;
        quote! {
            #field_info_::new::<#ty>(#name)
        }
    });

    // Fields are taken in declaration order, the order of `FieldInfo`s.
    let construct_tokens = if fields.is_empty() {
        quote! {
            |_: #field_values_| {
                ::core::result::Result::Ok(#box_::new(Self {}) as #box_<dyn #codable_>)
            }
        }
    } else {
        quote! {
            |mut values: #field_values_| {
                ::core::result::Result::Ok(#box_::new(Self {
                    #(#members: values.take()?,)*
                }) as #box_<dyn #codable_>)
            }
        }
    };

    let generics_tokens = get_generics_tokens(meta);

    let typed_trait_tokens = impl_trait_typed(
        meta,
        quote! {
            #type_info_::Record(
                #record_info_::new::<Self>(
                    &[#(#field_infos),*],
                    #construct_tokens,
                )
                #generics_tokens
            )
        },
    );

    let codable_trait_tokens = impl_trait_codable(
        meta,
        quote! {
            #codable_ref_::Record(self)
        },
    );

    let indices = (0..fields.len()).map(Literal::usize_unsuffixed);
    let field_len = fields.len();
    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        #typed_trait_tokens

        #codable_trait_tokens

        impl #impl_generics #record_ for #ident #ty_generics #where_clause {
            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #codable_> {
                match index {
                    #(#indices => ::core::option::Option::Some(&self.#members),)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }
        }
    }
}
