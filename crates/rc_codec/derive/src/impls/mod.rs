// -----------------------------------------------------------------------------
// Modules

mod enum_kind;
mod opaque_kind;
mod record_kind;
mod transparent_kind;

mod auto_register;
mod trait_codable;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use auto_register::get_auto_register_impl;
use enum_kind::impl_enum;
use opaque_kind::impl_opaque;
use record_kind::impl_record;
use transparent_kind::impl_transparent;
use trait_codable::impl_trait_codable;
use trait_typed::impl_trait_typed;

use proc_macro2::TokenStream;
use syn::DeriveInput;

use crate::derive_data::CodecDerive;

/// Expands `#[derive(Codable)]`, or returns the compile error.
pub(crate) fn match_codec_impls(ast: &DeriveInput) -> TokenStream {
    let derive = match CodecDerive::from_input(ast) {
        Ok(derive) => derive,
        Err(err) => return err.into_compile_error(),
    };

    let kind_tokens = match &derive {
        CodecDerive::Record(meta, fields) => impl_record(meta, fields),
        CodecDerive::Enum(meta, members) => impl_enum(meta, members),
        CodecDerive::Opaque(meta) => impl_opaque(meta),
        CodecDerive::Transparent(meta, field) => impl_transparent(meta, field),
    };
    let auto_register_tokens = get_auto_register_impl(derive.meta());

    quote::quote! {
        #kind_tokens

        #auto_register_tokens
    }
}
