use crate::info::Typed;
use crate::{Codable, CodecError};

/// Field access for record values.
///
/// Fields are addressed by position, their names come from the
/// [`RecordInfo`](crate::info::RecordInfo).
pub trait Record: Codable {
    /// Returns the field at `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Codable>;

    /// Returns the number of fields.
    fn field_len(&self) -> usize;
}

// -----------------------------------------------------------------------------
// FieldValues

/// Decoded field values of one record, in declaration order.
///
/// A record constructor takes each field in turn:
///
/// ```
/// use rc_codec::{Codable, ops::FieldValues};
///
/// let decoded: Vec<Box<dyn Codable>> = vec![Box::new(7_u8), Box::new(String::from("x"))];
/// let mut values = FieldValues::new(decoded);
///
/// assert_eq!(values.take::<u8>().unwrap(), 7);
/// assert_eq!(values.take::<String>().unwrap(), "x");
/// assert!(values.take::<u8>().is_err());
/// ```
pub struct FieldValues {
    values: alloc::vec::IntoIter<Box<dyn Codable>>,
}

impl FieldValues {
    #[inline]
    pub fn new(values: Vec<Box<dyn Codable>>) -> Self {
        Self {
            values: values.into_iter(),
        }
    }

    /// Returns the number of values not taken yet.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    /// Takes the next value as `T`.
    pub fn take<T: Typed>(&mut self) -> Result<T, CodecError> {
        match self.values.next() {
            Some(value) => T::take_from(value),
            None => Err(CodecError::coercion(
                core::any::type_name::<T>(),
                "no decoded value left for the field",
            )),
        }
    }
}
