#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Derived code names this crate through the path found by `Manifest`,
// which is `::rc_codec` inside the crate itself.
extern crate self as rc_codec;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod codable;
mod descriptor;
mod error;
mod tree;

pub mod format;
pub mod impls;
pub mod info;
pub mod ops;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use codable::Codable;
pub use descriptor::TypeDescriptor;
pub use error::{CodecError, ErrorKind, FieldPath, PathSegment, SchemaError, ShapeError};
pub use registry::CodecRegistry;
pub use tree::{TreeShape, TreeValue};

#[cfg(feature = "derive")]
#[cfg_attr(docsrs, doc(cfg(feature = "derive")))]
pub use rc_codec_derive as derive;
