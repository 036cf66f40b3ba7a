use core::ops::Deref;

use crate::info::{Type, TypeInfo, Typed, impl_type_fn};

// -----------------------------------------------------------------------------
// Type Generic Param

/// A declared type argument, such as the `T` of `Vec<T>`.
///
/// # Examples
///
/// ```
/// use rc_codec::info::Typed;
///
/// let info = <Vec<u8>>::type_info().generics().get("T").unwrap();
/// assert!(info.type_is::<u8>());
/// assert!(info.type_info().as_opaque().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct TypeParamInfo {
    ty: Type,
    name: &'static str,
    info: fn() -> &'static TypeInfo,
}

impl TypeParamInfo {
    impl_type_fn!(ty);

    /// Create a new [`TypeParamInfo`].
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            ty: Type::of::<T>(),
            name,
            info: T::type_info,
        }
    }

    /// Returns the generic parameter name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`TypeInfo`] of the argument.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.info)()
    }
}

// -----------------------------------------------------------------------------
// Generics

/// The declared type arguments of a type, in declaration order.
///
/// Dereferences to `[TypeParamInfo]`.
#[derive(Clone, Default, Debug)]
pub struct Generics(Option<Box<[TypeParamInfo]>>);

impl Generics {
    /// No type arguments.
    #[inline(always)]
    pub const fn new() -> Self {
        Self(None)
    }

    #[inline]
    pub fn from<const P: usize>(buf: [TypeParamInfo; P]) -> Self {
        Self(Some(Box::new(buf)))
    }

    pub fn get(&self, name: &str) -> Option<&TypeParamInfo> {
        self.iter().find(|info| info.name() == name)
    }
}

impl Deref for Generics {
    type Target = [TypeParamInfo];
    #[inline]
    fn deref(&self) -> &Self::Target {
        match &self.0 {
            Some(v) => v,
            None => &[],
        }
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

macro_rules! impl_generic_fn {
    ($field:ident) => {
        /// Returns the declared type arguments.
        #[inline]
        pub const fn generics(&self) -> &$crate::info::Generics {
            &self.$field
        }

        /// Replaces the declared type arguments.
        #[inline]
        pub fn with_generics(mut self, generics: $crate::info::Generics) -> Self {
            self.$field = generics;
            self
        }
    };
}

pub(super) use impl_generic_fn;
