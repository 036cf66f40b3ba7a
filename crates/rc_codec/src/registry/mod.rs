//! The codec registry.
//!
//! A [`CodecRegistry`] holds two tables:
//!
//! - scalar codecs, keyed by type id, for leaf types whose tree form is a
//!   convention rather than a structure (identifiers, decimals, dates);
//! - record decode plans, derived from [`RecordInfo`](crate::info::RecordInfo)
//!   the first time a record is decoded or registered.
//!
//! A decode plan resolves every field type once, so decoding never looks at
//! type infos again. Recursive records are supported: a record reached again
//! during its own derivation refers to its plan by type id.
//!
//! Encoding uses no plans, it follows the runtime [`CodableRef`](crate::ops::CodableRef)
//! of the value.

// -----------------------------------------------------------------------------
// Modules

mod builder;
mod builtin;
mod codec_registry;
mod decode;
mod encode;
mod plan;
mod scalar;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Exports

pub use codec_registry::CodecRegistry;
pub use scalar::{DecodeFn, EncodeFn, ScalarCodec};
