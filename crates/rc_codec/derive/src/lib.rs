//! Derive macro for `rc_codec`.
//!
//! See [`Codable`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static CODEC_ATTRIBUTE_NAME: &str = "codec";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Codable Derivation
///
/// `#[derive(Codable)]` implements the following traits:
///
/// - `Codable`
/// - `Typed`
/// - `Record` (for `struct T { ... }`)
///
/// The generated `TypeInfo` depends on the shape of the type:
///
/// | Type                       | `TypeInfo` |
/// |----------------------------|------------|
/// | `struct T { a: A, .. }`    | `Record`   |
/// | `enum T { A, B = 2, .. }`  | `Enum`     |
/// | `struct T;`                | `Opaque`   |
/// | `#[codec(opaque)]` types   | `Opaque`   |
/// | `#[codec(transparent)]`    | the field's `TypeInfo` |
///
/// Tuple structs must be marked `transparent` or `opaque`, enums with
/// data-carrying variants must be marked `opaque`.
///
/// Generic records are supported, every type parameter must itself be `Typed`.
///
/// ## Record Fields
///
/// A field is keyed by its name in the tree. Use `rename` to choose another key:
///
/// ```rust, ignore
/// #[derive(Codable)]
/// struct Contact {
///     #[codec(rename = "e-mail")]
///     email: String,
/// }
/// ```
///
/// This attribute can only be applied to fields.
///
/// ## Enum Members
///
/// Every variant must be a unit variant. Its tree value is, in order of preference:
///
/// 1. the `value` attribute, a string or integer literal;
/// 2. the explicit discriminant, as an integer;
/// 3. the variant name, as text.
///
/// ```rust, ignore
/// #[derive(Codable)]
/// enum Level {
///     #[codec(value = "lo")]
///     Low,
///     High,          // "High"
/// }
///
/// #[derive(Codable)]
/// enum Priority {
///     Minor = 1,     // 1
///     #[codec(value = 5)]
///     Major = 2,     // 5
/// }
/// ```
///
/// Member values must be unique within an enum.
///
/// ## Opaque Types
///
/// An opaque type is a leaf: it is converted only through a scalar codec
/// registered in a `CodecRegistry`.
///
/// ```rust, ignore
/// #[derive(Codable)]
/// #[codec(opaque)]
/// struct Money(i64, &'static str);
/// ```
///
/// This attribute can only be applied at the type level.
///
/// ## Transparent Wrappers
///
/// A struct with exactly one field can be converted as that field. It reports
/// the field's `TypeInfo`, so `UserId` below is decoded and encoded with the
/// `Uuid` scalar codec.
///
/// ```rust, ignore
/// #[derive(Codable)]
/// #[codec(transparent)]
/// struct UserId(uuid::Uuid);
/// ```
///
/// `transparent` and `opaque` are exclusive. This attribute can only be
/// applied at the type level.
///
/// ## Auto Registration
///
/// Records marked `auto_register` are registered by `CodecRegistry::auto_register`.
///
/// ```rust, ignore
/// #[derive(Codable)]
/// #[codec(auto_register)]
/// struct Event { /* ... */ }
/// ```
///
/// The attribute has no effect on generic records, and is a no-op when the
/// `auto_register` feature is disabled. It is an error on enums and opaque types.
///
/// This attribute can only be applied at the type level.
#[proc_macro_derive(Codable, attributes(codec))]
pub fn derive_codable(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_codec_impls(&ast).into()
}
