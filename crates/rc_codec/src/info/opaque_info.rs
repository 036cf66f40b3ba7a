use core::fmt;

use crate::info::{Type, impl_type_fn};
use crate::{Codable, CodecError, TreeValue};

// -----------------------------------------------------------------------------
// NativeCodec

/// Conversion for a type the tree holds directly, such as `String` or `i64`.
///
/// Native codecs belong to the type, not to a registry. A registered scalar
/// codec for the same type takes precedence.
#[derive(Clone, Copy)]
pub struct NativeCodec {
    encode: fn(&dyn Codable) -> Result<TreeValue, CodecError>,
    decode: fn(&TreeValue) -> Result<Box<dyn Codable>, CodecError>,
}

impl NativeCodec {
    #[inline]
    pub const fn new(
        encode: fn(&dyn Codable) -> Result<TreeValue, CodecError>,
        decode: fn(&TreeValue) -> Result<Box<dyn Codable>, CodecError>,
    ) -> Self {
        Self { encode, decode }
    }

    #[inline]
    pub fn encode(&self, value: &dyn Codable) -> Result<TreeValue, CodecError> {
        (self.encode)(value)
    }

    #[inline]
    pub fn decode(&self, value: &TreeValue) -> Result<Box<dyn Codable>, CodecError> {
        (self.decode)(value)
    }
}

impl fmt::Debug for NativeCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeCodec").finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// OpaqueInfo

/// A container for opaque type info.
///
/// An opaque type is a leaf. Without a [`NativeCodec`] it can only be
/// converted through a scalar codec registered in a
/// [`CodecRegistry`](crate::CodecRegistry).
///
/// # Examples
///
/// ```rust
/// use rc_codec::info::Typed;
///
/// assert!(String::type_info().as_opaque().unwrap().native().is_some());
/// assert!(uuid::Uuid::type_info().as_opaque().unwrap().native().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
    native: Option<NativeCodec>,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<T: Codable>() -> Self {
        Self {
            ty: Type::of::<T>(),
            native: None,
        }
    }

    #[inline]
    pub const fn with_native(mut self, native: NativeCodec) -> Self {
        self.native = Some(native);
        self
    }

    #[inline]
    pub const fn native(&self) -> Option<&NativeCodec> {
        self.native.as_ref()
    }
}
