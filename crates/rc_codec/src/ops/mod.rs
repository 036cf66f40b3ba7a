//! Kind-specific views of codable values.
//!
//! - [`CodableRef`]: what [`Codable::codable_ref`](crate::Codable::codable_ref) returns.
//! - [`Record`], [`Sequence`], [`Mapping`]: traits for reading the parts of a value.
//! - [`FieldValues`]: the decoded fields a record is constructed from.

// -----------------------------------------------------------------------------
// Modules

mod codable_ref;
mod mapping_ops;
mod record_ops;
mod sequence_ops;

// -----------------------------------------------------------------------------
// Exports

pub use codable_ref::CodableRef;
pub use mapping_ops::Mapping;
pub use record_ops::{FieldValues, Record};
pub use sequence_ops::Sequence;
