use core::any::Any;
use core::fmt;

use crate::CodecError;
use crate::info::TypeInfo;
use crate::ops::CodableRef;

/// A value that can be converted to and from a [`TreeValue`](crate::TreeValue).
///
/// This is the object-safe half of the codec contract, [`Typed`] is the
/// static half. Both are implemented by `#[derive(Codable)]`.
///
/// `Box<T>` is transparent: it reports and exposes the inner `T`.
///
/// [`Typed`]: crate::info::Typed
pub trait Codable: Any + Send + Sync {
    /// Returns the value as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;

    /// Returns the value as `Box<dyn Any>`.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Returns the [`TypeInfo`] of the runtime type.
    fn codable_info(&self) -> &'static TypeInfo;

    /// Returns a view of the value by kind, used by the encoder.
    fn codable_ref(&self) -> CodableRef<'_>;
}

impl dyn Codable {
    /// Returns `true` if the runtime type is `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Downcasts the value to `&T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// Downcasts the value to `&T`, failing with a coercion error.
    pub(crate) fn expect_ref<T: Any>(&self) -> Result<&T, CodecError> {
        self.downcast_ref().ok_or_else(|| {
            CodecError::coercion(
                core::any::type_name::<T>(),
                format_args!("received a `{}`", self.codable_info().type_name()),
            )
        })
    }
}

impl fmt::Debug for dyn Codable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Codable")
            .field(&self.codable_info().ty())
            .finish()
    }
}
