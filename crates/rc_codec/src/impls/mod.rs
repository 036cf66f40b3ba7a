//! Codable implementations for foreign types, and the static info cells.
//!
//! - Tree-native types carry a [`NativeCodec`](crate::info::NativeCodec):
//!   `bool`, the integers, `f32`, `f64`, `String`, `()` and [`TreeValue`](crate::TreeValue).
//! - `Vec`, `VecDeque`, `BTreeSet`, `HashSet`, `BTreeMap` and `HashMap` are containers.
//! - `Option<T>` is the union `[T, ()]`, `Box<T>` is transparent.
//! - `Uuid`, `BigDecimal`, the `chrono` date and time types and
//!   [`TimeOfDay`](crate::format::TimeOfDay) are opaque, their codecs are the
//!   built-in scalar codecs of [`CodecRegistry::new`](crate::CodecRegistry::new).

// `as_any`, `into_any` and `codable_info` for a `Typed` type.
macro_rules! impl_codable_any {
    () => {
        #[inline]
        fn as_any(&self) -> &dyn ::core::any::Any {
            self
        }

        #[inline]
        fn into_any(self: Box<Self>) -> Box<dyn ::core::any::Any> {
            self
        }

        #[inline]
        fn codable_info(&self) -> &'static $crate::info::TypeInfo {
            <Self as $crate::info::Typed>::type_info()
        }
    };
}

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod containers;
mod native;
mod scalars;
mod wrappers;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
