use core::fmt;

use thiserror::Error;

use crate::info::{EnumInfo, Generics, ListInfo, MapInfo, Type};
use crate::info::{OpaqueInfo, RecordInfo, SetInfo, UnionInfo};

// -----------------------------------------------------------------------------
// TypeKind

/// An enumeration of the "kinds" of a codable type.
///
/// A [`TypeKind`] is obtained via [`TypeInfo::kind`] or [`CodableRef::kind`].
///
/// [`CodableRef::kind`]: crate::ops::CodableRef::kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Record,
    Enum,
    List,
    Set,
    Map,
    Union,
    Opaque,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record => f.pad("Record"),
            Self::Enum => f.pad("Enum"),
            Self::List => f.pad("List"),
            Self::Set => f.pad("Set"),
            Self::Map => f.pad("Map"),
            Self::Union => f.pad("Union"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a `TypeInfo` value is not the expected `TypeKind`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("type kind mismatch: expected {expected}, received {received}")]
pub struct TypeKindError {
    pub expected: TypeKind,
    pub received: TypeKind,
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Static type information for a codable type.
///
/// A type's `TypeInfo` is defined by its [`Typed`] implementation, usually
/// generated by `#[derive(Codable)]`, and lives for the whole program.
///
/// - Records, enumerations and opaque types describe themselves.
/// - Containers (`List`, `Set`, `Map`) carry their declared type arguments in
///   [`Generics`], which the [`TypeDescriptor`] resolver checks.
/// - `Option<T>` is the union `[T, ()]`, `()` being the absence marker.
/// - `Box<T>` reports the `TypeInfo` of `T`.
///
/// [`Typed`]: crate::info::Typed
/// [`TypeDescriptor`]: crate::TypeDescriptor
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Record(RecordInfo),
    Enum(EnumInfo),
    List(ListInfo),
    Set(SetInfo),
    Map(MapInfo),
    Union(UnionInfo),
    Opaque(OpaqueInfo),
}

// Helper macro that implements type-safe accessor methods like `as_record`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information.
        pub const fn $name(&self) -> Result<&$info, TypeKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(TypeKindError {
                    expected: TypeKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

macro_rules! impl_is_method {
    ($name:ident : $kind:ident) => {
        /// Returns `true` if this is the given kind.
        #[inline]
        pub const fn $name(&self) -> bool {
            matches!(self, Self::$kind(..))
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_record: Record => RecordInfo);
    impl_cast_method!(as_enum: Enum => EnumInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_set: Set => SetInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_union: Union => UnionInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    impl_is_method!(is_record: Record);
    impl_is_method!(is_enum: Enum);
    impl_is_method!(is_list: List);
    impl_is_method!(is_set: Set);
    impl_is_method!(is_map: Map);
    impl_is_method!(is_union: Union);
    impl_is_method!(is_opaque: Opaque);

    /// Returns the underlying [`Type`] metadata for this `TypeInfo`.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Record(info) => info.ty(),
            Self::Enum(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Set(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Union(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns the kind of this `TypeInfo`.
    pub const fn kind(&self) -> TypeKind {
        match self {
            Self::Record(_) => TypeKind::Record,
            Self::Enum(_) => TypeKind::Enum,
            Self::List(_) => TypeKind::List,
            Self::Set(_) => TypeKind::Set,
            Self::Map(_) => TypeKind::Map,
            Self::Union(_) => TypeKind::Union,
            Self::Opaque(_) => TypeKind::Opaque,
        }
    }

    /// Returns the declared type arguments.
    ///
    /// Enumerations and opaque types never have any.
    pub fn generics(&self) -> &Generics {
        static EMPTY: Generics = Generics::new();
        match self {
            Self::Record(info) => info.generics(),
            Self::List(info) => info.generics(),
            Self::Set(info) => info.generics(),
            Self::Map(info) => info.generics(),
            Self::Union(info) => info.generics(),
            Self::Enum(_) | Self::Opaque(_) => &EMPTY,
        }
    }
}
