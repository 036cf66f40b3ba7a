//! Static type information that drives decoding and encoding.
//!
//! ## Menu
//!
//! - [`Type`]: a [`TypeId`] together with the type's name.
//!
//! - [`Generics`]: the declared type arguments of a container, a list of [`TypeParamInfo`].
//!
//! - [`TypeInfo`]: an enum describing how a type maps to the tree, one of:
//!     - [`RecordInfo`]: named fields and a constructor, see [`FieldInfo`].
//!     - [`EnumInfo`]: members with an underlying text or integer value, see [`MemberInfo`].
//!     - [`ListInfo`]: single-parameter ordered containers (e.g. `Vec<T>`).
//!     - [`SetInfo`]: single-parameter set containers (e.g. `BTreeSet<T>`).
//!     - [`MapInfo`]: two-parameter mappings (e.g. `HashMap<K, V>`).
//!     - [`UnionInfo`]: unions of alternatives, only `[T, ()]` (an optional `T`) is decodable.
//!     - [`OpaqueInfo`]: leaf types, optionally with a [`NativeCodec`] when the tree holds them directly.
//!
//! - [`TypeKind`]: the variant of a [`TypeInfo`].
//!
//! - [`Typed`]: a trait for obtaining the `TypeInfo` of a type.
//!
//! [`TypeId`]: core::any::TypeId

// -----------------------------------------------------------------------------
// Modules

mod enum_info;
mod generics;
mod list_info;
mod map_info;
mod opaque_info;
mod record_info;
mod set_info;
mod ty;
mod type_info;
mod typed;
mod union_info;

// -----------------------------------------------------------------------------
// Internal API

use generics::impl_generic_fn;

pub(crate) use ty::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use enum_info::{EnumInfo, MemberInfo, MemberValue};
pub use generics::{Generics, TypeParamInfo};
pub use list_info::{FromItemsFn, ListInfo};
pub use map_info::{FromEntriesFn, MapInfo};
pub use opaque_info::{NativeCodec, OpaqueInfo};
pub use record_info::{ConstructFn, FieldInfo, RecordInfo};
pub use set_info::SetInfo;
pub use ty::Type;
pub use type_info::{TypeInfo, TypeKind, TypeKindError};
pub use typed::Typed;
pub use union_info::{LiftFn, UnionInfo};
