use core::any::TypeId;
use core::fmt::Debug;

use crate::hash::NoOpHashState;
use crate::hash::hashbrown::HashMap;

// -----------------------------------------------------------------------------
// TypeIdMap

/// A map with [`TypeId`] as the fixed key type.
///
/// Codec tables and decode plan arenas are looked up once per value,
/// so the key is hashed with [`NoOpHashState`].
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use rc_utils::TypeIdMap;
///
/// let mut map = TypeIdMap::new();
/// assert_eq!(map.insert(TypeId::of::<u8>(), "byte"), None);
/// assert_eq!(map.insert(TypeId::of::<u8>(), "again"), Some("byte"));
///
/// assert_eq!(map.get(&TypeId::of::<u8>()), Some(&"again"));
/// assert_eq!(map.len(), 1);
/// ```
pub struct TypeIdMap<V>(HashMap<TypeId, V, NoOpHashState>);

impl<V> TypeIdMap<V> {
    /// Creates an empty `TypeIdMap`.
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(NoOpHashState))
    }

    /// Returns a reference to the value of the given type.
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    /// Returns the value of the given type, inserting the result of `f` if absent.
    pub fn get_or_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> &mut V {
        self.0.entry(type_id).or_insert_with(f)
    }

    /// Inserts a key-value pair, returning the replaced value.
    pub fn insert(&mut self, type_id: TypeId, v: V) -> Option<V> {
        self.0.insert(type_id, v)
    }

    /// Removes a key, returning its value if it was present.
    pub fn remove(&mut self, type_id: &TypeId) -> Option<V> {
        self.0.remove(type_id)
    }

    /// Returns `true` if the map contains a value for the given type.
    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.0.contains_key(type_id)
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Moves every entry of `other` into `self`, overwriting existing keys.
    pub fn extend(&mut self, other: Self) {
        self.0.extend(other.0);
    }
}

// -----------------------------------------------------------------------------
// Traits

impl<T> Default for TypeIdMap<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for TypeIdMap<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::TypeIdMap;
    use core::any::TypeId;

    #[test]
    fn insert_replaces() {
        let mut map = TypeIdMap::new();
        assert!(map.is_empty());
        assert_eq!(map.insert(TypeId::of::<i32>(), 1), None);
        assert_eq!(map.insert(TypeId::of::<i32>(), 2), Some(1));
        assert_eq!(map.get(&TypeId::of::<i32>()), Some(&2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn extend_overwrites() {
        let mut a = TypeIdMap::new();
        a.insert(TypeId::of::<u8>(), "a");
        a.insert(TypeId::of::<u16>(), "a");

        let mut b = TypeIdMap::new();
        b.insert(TypeId::of::<u16>(), "b");
        b.insert(TypeId::of::<u32>(), "b");

        a.extend(b);
        assert_eq!(a.len(), 3);
        assert_eq!(a.get(&TypeId::of::<u8>()), Some(&"a"));
        assert_eq!(a.get(&TypeId::of::<u16>()), Some(&"b"));
        assert!(a.contains(&TypeId::of::<u32>()));
        assert!(a.remove(&TypeId::of::<u32>()).is_some());
        assert!(!a.contains(&TypeId::of::<u32>()));
    }
}
