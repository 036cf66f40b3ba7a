use crate::info::{Generics, Type, TypeInfo, Typed};
use crate::info::{impl_generic_fn, impl_type_fn};
use crate::{Codable, CodecError};

/// Wraps a decoded alternative, or its absence, into the union type.
pub type LiftFn = fn(Option<Box<dyn Codable>>) -> Result<Box<dyn Codable>, CodecError>;

/// A container for union info.
///
/// The only decodable union is an optional: exactly two alternatives, the
/// second being the absence marker `()`. `Option<T>` describes itself this
/// way, other layouts are rejected by [`TypeDescriptor::resolve`].
///
/// # Examples
///
/// ```rust
/// use rc_codec::info::Typed;
///
/// let info = <Option<String>>::type_info().as_union().unwrap();
///
/// assert_eq!(info.alternative_len(), 2);
/// assert!(info.alternative_at(1).unwrap().type_is::<()>());
/// ```
///
/// [`TypeDescriptor::resolve`]: crate::TypeDescriptor::resolve
#[derive(Clone, Debug)]
pub struct UnionInfo {
    ty: Type,
    generics: Generics,
    alternatives: Box<[fn() -> &'static TypeInfo]>,
    lift: LiftFn,
}

impl UnionInfo {
    impl_type_fn!(ty);
    impl_generic_fn!(generics);

    /// Creates the info of union `T` from the `type_info` functions of its alternatives.
    pub fn new<T: Typed>(alternatives: &[fn() -> &'static TypeInfo], lift: LiftFn) -> Self {
        Self {
            ty: Type::of::<T>(),
            generics: Generics::new(),
            alternatives: alternatives.into(),
            lift,
        }
    }

    pub fn alternatives(&self) -> impl ExactSizeIterator<Item = &'static TypeInfo> + '_ {
        self.alternatives.iter().map(|info| info())
    }

    #[inline]
    pub fn alternative_at(&self, index: usize) -> Option<&'static TypeInfo> {
        self.alternatives.get(index).map(|info| info())
    }

    #[inline]
    pub fn alternative_len(&self) -> usize {
        self.alternatives.len()
    }

    #[inline]
    pub fn lift(&self, value: Option<Box<dyn Codable>>) -> Result<Box<dyn Codable>, CodecError> {
        (self.lift)(value)
    }

    #[inline]
    pub const fn lift_fn(&self) -> LiftFn {
        self.lift
    }
}
