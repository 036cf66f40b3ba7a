use core::any::type_name;
use core::fmt;
use alloc::sync::Arc;

use crate::info::{Type, Typed};
use crate::{Codable, CodecError, TreeShape, TreeValue};

/// Shared encode function of a [`ScalarCodec`].
pub type EncodeFn = Arc<dyn Fn(&dyn Codable) -> Result<TreeValue, CodecError> + Send + Sync>;

/// Shared decode function of a [`ScalarCodec`].
pub type DecodeFn = Arc<dyn Fn(&TreeValue) -> Result<Box<dyn Codable>, CodecError> + Send + Sync>;

/// A pair of conversions between a leaf type and a tree value.
///
/// Scalar codecs are looked up by exact [`TypeId`](core::any::TypeId) and take
/// precedence over every other way of handling the type.
///
/// # Examples
///
/// ```
/// use rc_codec::registry::ScalarCodec;
/// use serde_json::json;
///
/// let codec = ScalarCodec::text(|id: &uuid::Uuid| id.to_string(), uuid::Uuid::parse_str);
///
/// let id = uuid::Uuid::nil();
/// let tree = codec.encode(&id).unwrap();
/// assert_eq!(tree, json!("00000000-0000-0000-0000-000000000000"));
///
/// let back = codec.decode(&tree).unwrap();
/// assert_eq!(back.downcast_ref::<uuid::Uuid>(), Some(&id));
///
/// assert!(codec.decode(&json!("not a uuid")).unwrap_err().is_coercion());
/// assert!(codec.decode(&json!(7)).unwrap_err().is_shape());
/// ```
#[derive(Clone)]
pub struct ScalarCodec {
    ty: Type,
    encode: EncodeFn,
    decode: DecodeFn,
}

impl ScalarCodec {
    /// Creates a codec for `T`.
    pub fn new<T: Typed>(
        encode: impl Fn(&T) -> Result<TreeValue, CodecError> + Send + Sync + 'static,
        decode: impl Fn(&TreeValue) -> Result<T, CodecError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            ty: Type::of::<T>(),
            encode: Arc::new(move |value: &dyn Codable| encode(value.expect_ref::<T>()?)),
            decode: Arc::new(move |tree: &TreeValue| {
                decode(tree).map(|value| Box::new(value) as Box<dyn Codable>)
            }),
        }
    }

    /// Creates a codec for `T` whose tree form is text.
    ///
    /// A non-text tree value is a shape error, a parse failure is a coercion error.
    pub fn text<T, E>(
        write: impl Fn(&T) -> String + Send + Sync + 'static,
        parse: impl Fn(&str) -> Result<T, E> + Send + Sync + 'static,
    ) -> Self
    where
        T: Typed,
        E: fmt::Display,
    {
        Self::new(
            move |value: &T| Ok(TreeValue::String(write(value))),
            move |tree: &TreeValue| {
                parse(expect_text(tree)?).map_err(|err| CodecError::coercion(type_name::<T>(), err))
            },
        )
    }

    /// Returns the type this codec converts.
    #[inline]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    #[inline]
    pub fn encode(&self, value: &dyn Codable) -> Result<TreeValue, CodecError> {
        (self.encode)(value)
    }

    #[inline]
    pub fn decode(&self, tree: &TreeValue) -> Result<Box<dyn Codable>, CodecError> {
        (self.decode)(tree)
    }

    // Decode plans keep the function they were derived with.
    #[inline]
    pub(crate) fn decoder(&self) -> DecodeFn {
        Arc::clone(&self.decode)
    }
}

impl fmt::Debug for ScalarCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarCodec")
            .field("ty", &self.ty)
            .finish_non_exhaustive()
    }
}

/// Returns the text of a tree text value, or a shape error.
pub(crate) fn expect_text(tree: &TreeValue) -> Result<&str, CodecError> {
    match tree {
        TreeValue::String(text) => Ok(text),
        other => Err(CodecError::shape(TreeShape::Text, other)),
    }
}
