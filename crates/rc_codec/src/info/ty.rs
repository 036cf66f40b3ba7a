use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// Type

/// The identity of a type: its [`TypeId`] and its name.
///
/// Equality and hashing only look at the [`TypeId`].
///
/// # Example
///
/// ```
/// # use core::any::TypeId;
/// use rc_codec::info::Type;
///
/// let ty = Type::of::<Vec<String>>();
/// assert_eq!(ty.id(), TypeId::of::<Vec<String>>());
/// assert!(ty.is::<Vec<String>>());
/// assert!(ty.name().ends_with("Vec<alloc::string::String>"));
/// ```
#[derive(Copy, Clone)]
pub struct Type {
    id: TypeId,
    // `type_name` is not a const fn, defer the call.
    name: fn() -> &'static str,
}

impl Type {
    /// Creates the [`Type`] of `T`.
    #[inline]
    pub const fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: core::any::type_name::<T>,
        }
    }

    /// Returns the [`TypeId`] of the type.
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full name of the type, as [`core::any::type_name`] reports it.
    #[inline]
    pub fn name(&self) -> &'static str {
        (self.name)()
    }

    /// Check if the given type matches this one.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.id
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the underlying [`Type`](crate::info::Type).
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }
        $crate::info::impl_type_fn!();
    };
    ($self:ident => $expr:expr) => {
        /// Returns the underlying [`Type`](crate::info::Type).
        #[inline(never)]
        pub const fn ty($self: &Self) -> &$crate::info::Type {
            $expr
        }
        $crate::info::impl_type_fn!();
    };
    () => {
        /// Returns the `TypeId`.
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.ty().id()
        }

        /// Check if the given type matches this one.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.ty().is::<T>()
        }

        /// Returns the full type name.
        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.ty().name()
        }
    };
}

pub(crate) use impl_type_fn;
