use crate::info::{Generics, Type, Typed};
use crate::info::{impl_generic_fn, impl_type_fn};
use crate::{Codable, CodecError};

/// Builds a container from decoded items.
pub type FromItemsFn = fn(Vec<Box<dyn Codable>>) -> Result<Box<dyn Codable>, CodecError>;

/// A container for ordered, single-parameter container info, such as `Vec<T>`.
///
/// The item type that decoding uses is the single declared type argument in
/// [`generics`](Self::generics), a `ListInfo` without one is rejected when a
/// plan is derived.
///
/// # Examples
///
/// ```rust
/// # use core::any::TypeId;
/// use rc_codec::info::Typed;
///
/// let info = <Vec<i32> as Typed>::type_info().as_list().unwrap();
///
/// assert!(info.item_ty().is::<i32>());
/// assert_eq!(info.generics().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct ListInfo {
    ty: Type,
    generics: Generics,
    item: Type,
    from_items: FromItemsFn,
}

impl ListInfo {
    impl_type_fn!(ty);
    impl_generic_fn!(generics);

    /// Creates a new [`ListInfo`] without declared type arguments.
    #[inline]
    pub const fn new<TList, TItem>() -> Self
    where
        TList: Typed + FromIterator<TItem>,
        TItem: Typed,
    {
        Self {
            ty: Type::of::<TList>(),
            generics: Generics::new(),
            item: Type::of::<TItem>(),
            from_items: collect_items::<TList, TItem>,
        }
    }

    /// Returns the [`Type`] of list items.
    #[inline]
    pub const fn item_ty(&self) -> Type {
        self.item
    }

    /// Collects decoded items into the list type.
    #[inline]
    pub fn from_items(&self, items: Vec<Box<dyn Codable>>) -> Result<Box<dyn Codable>, CodecError> {
        (self.from_items)(items)
    }
}

pub(super) fn collect_items<C, T>(items: Vec<Box<dyn Codable>>) -> Result<Box<dyn Codable>, CodecError>
where
    C: Typed + FromIterator<T>,
    T: Typed,
{
    let collection = items.into_iter().map(T::take_from).collect::<Result<C, _>>()?;
    Ok(Box::new(collection))
}
