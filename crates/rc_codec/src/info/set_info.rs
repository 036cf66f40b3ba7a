use crate::info::list_info::collect_items;
use crate::info::{FromItemsFn, Generics, Type, Typed};
use crate::info::{impl_generic_fn, impl_type_fn};
use crate::{Codable, CodecError};

/// A container for set info, such as `BTreeSet<T>` and `HashSet<T>`.
///
/// Sets are written to the tree as sequences.
#[derive(Clone, Debug)]
pub struct SetInfo {
    ty: Type,
    generics: Generics,
    value: Type,
    from_items: FromItemsFn,
}

impl SetInfo {
    impl_type_fn!(ty);
    impl_generic_fn!(generics);

    /// Creates a new [`SetInfo`] without declared type arguments.
    #[inline]
    pub const fn new<TSet, TValue>() -> Self
    where
        TSet: Typed + FromIterator<TValue>,
        TValue: Typed,
    {
        Self {
            ty: Type::of::<TSet>(),
            generics: Generics::new(),
            value: Type::of::<TValue>(),
            from_items: collect_items::<TSet, TValue>,
        }
    }

    /// Returns the [`Type`] of set values.
    #[inline]
    pub const fn value_ty(&self) -> Type {
        self.value
    }

    /// Collects decoded values into the set type, later duplicates are dropped.
    #[inline]
    pub fn from_items(&self, items: Vec<Box<dyn Codable>>) -> Result<Box<dyn Codable>, CodecError> {
        (self.from_items)(items)
    }
}
