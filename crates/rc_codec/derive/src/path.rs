//! Paths into `rc_codec` used by the generated code.
//!
//! Kept in one place so that moving an item in `rc_codec` only needs a
//! change here.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the access path to the `rc_codec` crate, as seen from the crate being
/// compiled.
///
/// 1. For crates that depend on `rc_codec`, `::rc_codec` is returned.
/// 2. For crates that depend on `rc_core`, `::rc_core::codec` is returned.
/// 3. Otherwise `::rc_codec` is returned, which works inside `rc_codec` itself.
///
/// This reads the caller's Cargo.toml, so it is resolved once per derive and
/// passed along.
pub(crate) fn rc_codec() -> syn::Path {
    rc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("rc_codec"))
}

// -----------------------------------------------------------------------------
// Items

macro_rules! define_path {
    ($($name:ident => $($segment:ident)::+;)*) => {$(
        #[inline(always)]
        pub(crate) fn $name(rc_codec_path: &syn::Path) -> TokenStream {
            quote! { #rc_codec_path::$($segment)::+ }
        }
    )*};
}

define_path! {
    codable_ => Codable;
    codec_error_ => CodecError;
    typed_ => info::Typed;
    type_info_ => info::TypeInfo;
    record_info_ => info::RecordInfo;
    field_info_ => info::FieldInfo;
    enum_info_ => info::EnumInfo;
    member_info_ => info::MemberInfo;
    member_value_ => info::MemberValue;
    opaque_info_ => info::OpaqueInfo;
    generics_ => info::Generics;
    type_param_info_ => info::TypeParamInfo;
    codable_ref_ => ops::CodableRef;
    record_ => ops::Record;
    field_values_ => ops::FieldValues;
    non_generic_type_info_cell_ => impls::NonGenericTypeInfoCell;
    generic_type_info_cell_ => impls::GenericTypeInfoCell;
    box_ => __macro_exports::Box;
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(rc_codec_path: &syn::Path) -> TokenStream {
    quote! {
        #rc_codec_path::__macro_exports::auto_register
    }
}
