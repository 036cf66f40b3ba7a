use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use core::hash::Hash;
use std::collections::{HashMap, HashSet};

use crate::Codable;
use crate::impls::GenericTypeInfoCell;
use crate::info::{Generics, ListInfo, MapInfo, SetInfo, TypeInfo, TypeParamInfo, Typed};
use crate::ops::{CodableRef, Mapping, Sequence};

macro_rules! impl_sequence {
    ($kind:ident, $info:ident, $name:ident $(, $bound:path)*) => {
        impl<T: Typed $(+ $bound)*> Codable for $name<T> {
            impl_codable_any!();

            #[inline]
            fn codable_ref(&self) -> CodableRef<'_> {
                CodableRef::$kind(self)
            }
        }

        impl<T: Typed $(+ $bound)*> Sequence for $name<T> {
            #[inline]
            fn len(&self) -> usize {
                $name::len(self)
            }

            fn iter_items(&self) -> Box<dyn Iterator<Item = &dyn Codable> + '_> {
                Box::new(self.iter().map(|item| item as &dyn Codable))
            }
        }

        impl<T: Typed $(+ $bound)*> Typed for $name<T> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    TypeInfo::$kind(
                        $info::new::<Self, T>()
                            .with_generics(Generics::from([TypeParamInfo::new::<T>("T")])),
                    )
                })
            }
        }
    };
}

impl_sequence!(List, ListInfo, Vec);
impl_sequence!(List, ListInfo, VecDeque);
impl_sequence!(Set, SetInfo, BTreeSet, Ord);
impl_sequence!(Set, SetInfo, HashSet, Eq, Hash);

macro_rules! impl_mapping {
    ($name:ident $(, $bound:path)*) => {
        impl<K: Typed $(+ $bound)*, V: Typed> Codable for $name<K, V> {
            impl_codable_any!();

            #[inline]
            fn codable_ref(&self) -> CodableRef<'_> {
                CodableRef::Map(self)
            }
        }

        impl<K: Typed $(+ $bound)*, V: Typed> Mapping for $name<K, V> {
            #[inline]
            fn len(&self) -> usize {
                $name::len(self)
            }

            fn iter_entries(&self) -> Box<dyn Iterator<Item = (&dyn Codable, &dyn Codable)> + '_> {
                Box::new(
                    self.iter()
                        .map(|(key, value)| (key as &dyn Codable, value as &dyn Codable)),
                )
            }
        }

        impl<K: Typed $(+ $bound)*, V: Typed> Typed for $name<K, V> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    TypeInfo::Map(MapInfo::new::<Self, K, V>().with_generics(Generics::from([
                        TypeParamInfo::new::<K>("K"),
                        TypeParamInfo::new::<V>("V"),
                    ])))
                })
            }
        }
    };
}

impl_mapping!(BTreeMap, Ord);
impl_mapping!(HashMap, Eq, Hash);

// -----------------------------------------------------------------------------
// Tests
