use crate::Codable;
use crate::info::{MemberValue, TypeKind};
use crate::ops::{Mapping, Record, Sequence};

/// An immutable view of a codable value, by kind.
pub enum CodableRef<'a> {
    Record(&'a dyn Record),
    /// The underlying value of the current member.
    Enum(MemberValue),
    List(&'a dyn Sequence),
    Set(&'a dyn Sequence),
    Map(&'a dyn Mapping),
    /// An optional, `None` when absent.
    Optional(Option<&'a dyn Codable>),
    Opaque(&'a dyn Codable),
}

impl CodableRef<'_> {
    /// Returns the kind of the viewed value.
    pub const fn kind(&self) -> TypeKind {
        match self {
            Self::Record(_) => TypeKind::Record,
            Self::Enum(_) => TypeKind::Enum,
            Self::List(_) => TypeKind::List,
            Self::Set(_) => TypeKind::Set,
            Self::Map(_) => TypeKind::Map,
            Self::Optional(_) => TypeKind::Union,
            Self::Opaque(_) => TypeKind::Opaque,
        }
    }
}
