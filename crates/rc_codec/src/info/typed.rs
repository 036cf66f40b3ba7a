use crate::info::TypeInfo;
use crate::{Codable, CodecError};

/// A static accessor to compile-time type information.
///
/// Automatically implemented by `#[derive(Codable)]`, and implemented in this
/// crate for the primitives, `String`, the standard containers, `Option`,
/// `Box` and the built-in scalar types.
///
/// # Implementation
///
/// The info is stored in a static cell, see [`NonGenericTypeInfoCell`] and
/// [`GenericTypeInfoCell`].
///
/// ```
/// use rc_codec::impls::NonGenericTypeInfoCell;
/// use rc_codec::info::{OpaqueInfo, TypeInfo, Typed};
/// use rc_codec::ops::CodableRef;
/// use rc_codec::Codable;
/// use core::any::Any;
///
/// struct Token(u64);
///
/// impl Codable for Token {
///     fn as_any(&self) -> &dyn Any { self }
///     fn into_any(self: Box<Self>) -> Box<dyn Any> { self }
///     fn codable_info(&self) -> &'static TypeInfo { Self::type_info() }
///     fn codable_ref(&self) -> CodableRef<'_> { CodableRef::Opaque(self) }
/// }
///
/// impl Typed for Token {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert!(Token::type_info().type_is::<Token>());
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: Codable + Sized {
    /// Returns the compile-time info for the underlying type.
    fn type_info() -> &'static TypeInfo;

    /// Takes a decoded value as `Self`.
    ///
    /// The default implementation downcasts. Transparent wrappers such as
    /// `Box<T>` override it.
    fn take_from(value: Box<dyn Codable>) -> Result<Self, CodecError> {
        let found = value.codable_info().type_name();
        match value.into_any().downcast::<Self>() {
            Ok(value) => Ok(*value),
            Err(_) => Err(CodecError::coercion(
                core::any::type_name::<Self>(),
                format_args!("decoded value has type `{found}`"),
            )),
        }
    }
}
