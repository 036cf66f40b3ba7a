use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::CodecMeta;

/// Generate implementation code for `Typed`.
///
/// `type_info_tokens` is an expression building the `TypeInfo`, evaluated
/// once per concrete type.
pub(crate) fn impl_trait_typed(meta: &CodecMeta, type_info_tokens: TokenStream) -> TokenStream {
    let rc_codec_path = meta.rc_codec_path();
    let typed_ = crate::path::typed_(rc_codec_path);
    let type_info_ = crate::path::type_info_(rc_codec_path);

    let inner_cell_tokens = if meta.impl_with_generic() {
        let info_cell = crate::path::generic_type_info_cell_(rc_codec_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_insert::<Self>(|| {
                #type_info_tokens
            })
        }
    } else {
        let info_cell = crate::path::non_generic_type_info_cell_(rc_codec_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_init(|| {
                #type_info_tokens
            })
        }
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #inner_cell_tokens
            }
        }
    }
}

/// Generate `.with_generics(...)` for generic types, nothing otherwise.
pub(crate) fn get_generics_tokens(meta: &CodecMeta) -> TokenStream {
    if !meta.impl_with_generic() {
        return crate::utils::empty();
    }

    let rc_codec_path = meta.rc_codec_path();
    let generics_ = crate::path::generics_(rc_codec_path);
    let type_param_info_ = crate::path::type_param_info_(rc_codec_path);

    let params = meta.type_params().map(|ident| {
        let name = ident.to_string();
        quote! {
            #type_param_info_::new::<#ident>(#name)
        }
    });

    quote! {
        .with_generics(#generics_::from([#(#params),*]))
    }
}
