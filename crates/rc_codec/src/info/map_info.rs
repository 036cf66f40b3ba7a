use crate::info::{Generics, Type, Typed};
use crate::info::{impl_generic_fn, impl_type_fn};
use crate::{Codable, CodecError};

/// Builds a mapping from decoded `(key, value)` pairs.
pub type FromEntriesFn =
    fn(Vec<(Box<dyn Codable>, Box<dyn Codable>)>) -> Result<Box<dyn Codable>, CodecError>;

/// A container for mapping info, such as `HashMap<K, V>`.
///
/// Keys are text in the tree. A number or boolean key is written as its
/// text and read back from it.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use rc_codec::info::Typed;
///
/// let info = <BTreeMap<u32, String>>::type_info().as_map().unwrap();
///
/// assert!(info.key_ty().is::<u32>());
/// assert!(info.value_ty().is::<String>());
/// assert_eq!(info.generics()[1].name(), "V");
/// ```
#[derive(Clone, Debug)]
pub struct MapInfo {
    ty: Type,
    generics: Generics,
    key: Type,
    value: Type,
    from_entries: FromEntriesFn,
}

impl MapInfo {
    impl_type_fn!(ty);
    impl_generic_fn!(generics);

    /// Creates a new [`MapInfo`] without declared type arguments.
    #[inline]
    pub const fn new<TMap, TKey, TValue>() -> Self
    where
        TMap: Typed + FromIterator<(TKey, TValue)>,
        TKey: Typed,
        TValue: Typed,
    {
        Self {
            ty: Type::of::<TMap>(),
            generics: Generics::new(),
            key: Type::of::<TKey>(),
            value: Type::of::<TValue>(),
            from_entries: collect_entries::<TMap, TKey, TValue>,
        }
    }

    #[inline]
    pub const fn key_ty(&self) -> Type {
        self.key
    }

    #[inline]
    pub const fn value_ty(&self) -> Type {
        self.value
    }

    /// Collects decoded entries into the mapping type.
    #[inline]
    pub fn from_entries(
        &self,
        entries: Vec<(Box<dyn Codable>, Box<dyn Codable>)>,
    ) -> Result<Box<dyn Codable>, CodecError> {
        (self.from_entries)(entries)
    }
}

fn collect_entries<M, K, V>(
    entries: Vec<(Box<dyn Codable>, Box<dyn Codable>)>,
) -> Result<Box<dyn Codable>, CodecError>
where
    M: Typed + FromIterator<(K, V)>,
    K: Typed,
    V: Typed,
{
    let map = entries
        .into_iter()
        .map(|(key, value)| Ok((K::take_from(key)?, V::take_from(value)?)))
        .collect::<Result<M, CodecError>>()?;
    Ok(Box::new(map))
}
