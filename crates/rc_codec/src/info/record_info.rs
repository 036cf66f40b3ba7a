use crate::info::{Generics, Type, TypeInfo, Typed};
use crate::info::{impl_generic_fn, impl_type_fn};
use crate::ops::FieldValues;
use crate::{Codable, CodecError};

/// Builds a record from its decoded fields, in declaration order.
pub type ConstructFn = fn(FieldValues) -> Result<Box<dyn Codable>, CodecError>;

// -----------------------------------------------------------------------------
// FieldInfo

/// A named field of a record.
///
/// The name is the key of the field in the tree mapping,
/// `#[codec(rename = "...")]` changes it.
#[derive(Clone, Debug)]
pub struct FieldInfo {
    name: &'static str,
    ty: Type,
    // `TypeInfo` is created on the first visit, use function pointers to delay it.
    info: fn() -> &'static TypeInfo,
}

impl FieldInfo {
    impl_type_fn!(ty);

    /// Creates a field of type `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            ty: Type::of::<T>(),
            info: T::type_info,
        }
    }

    /// Returns the tree key of the field.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`TypeInfo`] of the field type.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.info)()
    }
}

// -----------------------------------------------------------------------------
// RecordInfo

/// A container for record info: ordered named fields and a constructor.
///
/// # Examples
///
/// ```rust
/// use rc_codec::{derive::Codable, info::Typed};
///
/// #[derive(Codable)]
/// struct Person {
///     name: String,
///     #[codec(rename = "e-mail")]
///     email: Option<String>,
/// }
///
/// let info = Person::type_info().as_record().unwrap();
///
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.field_at(1).unwrap().name(), "e-mail");
/// assert!(info.field("name").unwrap().type_is::<String>());
/// ```
#[derive(Clone, Debug)]
pub struct RecordInfo {
    ty: Type,
    generics: Generics,
    fields: Box<[FieldInfo]>,
    construct: ConstructFn,
}

impl RecordInfo {
    impl_type_fn!(ty);
    impl_generic_fn!(generics);

    /// Creates the info of record `T`.
    pub fn new<T: Typed>(fields: &[FieldInfo], construct: ConstructFn) -> Self {
        Self {
            ty: Type::of::<T>(),
            generics: Generics::new(),
            fields: fields.to_vec().into_boxed_slice(),
            construct,
        }
    }

    /// Returns the fields in declaration order.
    #[inline]
    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    /// Returns the field with the given tree key.
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Returns the field at `index`.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
        self.fields.get(index)
    }

    /// Returns the position of the field with the given tree key.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Builds an instance from decoded field values.
    #[inline]
    pub fn construct(&self, values: FieldValues) -> Result<Box<dyn Codable>, CodecError> {
        (self.construct)(values)
    }
}
