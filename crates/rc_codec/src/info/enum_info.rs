use core::fmt;

use crate::info::{Type, impl_type_fn};
use crate::{Codable, TreeValue};

// -----------------------------------------------------------------------------
// MemberValue

/// The underlying value of an enumeration member, which is what the tree holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberValue {
    Text(&'static str),
    Integer(i64),
}

impl MemberValue {
    /// Returns the tree form of the value.
    pub fn to_tree(self) -> TreeValue {
        match self {
            Self::Text(text) => TreeValue::from(text),
            Self::Integer(value) => TreeValue::from(value),
        }
    }

    /// Check if `value` is the tree form of this value.
    pub fn matches(&self, value: &TreeValue) -> bool {
        match (self, value) {
            (Self::Text(text), TreeValue::String(other)) => text == other,
            (Self::Integer(int), TreeValue::Number(other)) => other.as_i64() == Some(*int),
            _ => false,
        }
    }
}

impl fmt::Display for MemberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}

// -----------------------------------------------------------------------------
// MemberInfo

/// A member of an enumeration.
#[derive(Clone, Debug)]
pub struct MemberInfo {
    name: &'static str,
    value: MemberValue,
    make: fn() -> Box<dyn Codable>,
}

impl MemberInfo {
    #[inline]
    pub const fn new(name: &'static str, value: MemberValue, make: fn() -> Box<dyn Codable>) -> Self {
        Self { name, value, make }
    }

    /// Returns the Rust name of the member.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn value(&self) -> MemberValue {
        self.value
    }

    /// Creates the member as a boxed enumeration value.
    #[inline]
    pub fn make(&self) -> Box<dyn Codable> {
        (self.make)()
    }
}

// -----------------------------------------------------------------------------
// EnumInfo

/// A container for enumeration info.
///
/// Only enumerations of unit members are codable. Each member is written to
/// the tree as its underlying value and looked up by that value when decoded.
///
/// # Examples
///
/// ```rust
/// use rc_codec::{derive::Codable, info::{MemberValue, Typed}};
/// use serde_json::json;
///
/// #[derive(Codable)]
/// enum Level {
///     #[codec(value = "lo")]
///     Low,
///     High,
/// }
///
/// let info = Level::type_info().as_enum().unwrap();
///
/// assert_eq!(info.member_at(0).unwrap().value(), MemberValue::Text("lo"));
/// assert_eq!(info.member_by_value(&json!("High")).unwrap().name(), "High");
/// assert!(info.member_by_value(&json!("Low")).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct EnumInfo {
    ty: Type,
    members: Box<[MemberInfo]>,
}

impl EnumInfo {
    impl_type_fn!(ty);

    /// Creates the info of enumeration `T`.
    pub fn new<T: Codable>(members: &[MemberInfo]) -> Self {
        Self {
            ty: Type::of::<T>(),
            members: members.to_vec().into_boxed_slice(),
        }
    }

    #[inline]
    pub fn members(&self) -> &[MemberInfo] {
        &self.members
    }

    #[inline]
    pub fn member_at(&self, index: usize) -> Option<&MemberInfo> {
        self.members.get(index)
    }

    /// Returns the member with the given Rust name.
    pub fn member(&self, name: &str) -> Option<&MemberInfo> {
        self.members.iter().find(|member| member.name() == name)
    }

    /// Returns the member whose underlying value matches `value`.
    pub fn member_by_value(&self, value: &TreeValue) -> Option<&MemberInfo> {
        self.members.iter().find(|member| member.value().matches(value))
    }

    #[inline]
    pub fn member_len(&self) -> usize {
        self.members.len()
    }
}
