use crate::info::{TypeInfo, TypeKind, UnionInfo};
use crate::{CodecError, SchemaError};

// -----------------------------------------------------------------------------
// TypeDescriptor

/// The resolved shape of a declared type.
///
/// - An optional (`[T, ()]` union) resolves to `T` with `is_optional` set.
///   Optionality is one level only.
/// - A container resolves each declared type argument: exactly one for lists
///   and sets, exactly two for mappings.
/// - Every other type resolves to itself with no type arguments.
///
/// # Examples
///
/// ```
/// use rc_codec::TypeDescriptor;
/// use rc_codec::info::{TypeKind, Typed};
///
/// let descriptor = TypeDescriptor::resolve(<Option<Vec<String>>>::type_info()).unwrap();
///
/// assert!(descriptor.is_optional());
/// assert_eq!(descriptor.kind(), TypeKind::List);
/// assert!(descriptor.type_arguments()[0].effective().type_is::<String>());
///
/// let err = TypeDescriptor::resolve(<Option<Option<i32>>>::type_info()).unwrap_err();
/// assert!(err.is_schema());
/// ```
#[derive(Clone, Debug)]
pub struct TypeDescriptor {
    declared: &'static TypeInfo,
    effective: &'static TypeInfo,
    type_arguments: Box<[TypeDescriptor]>,
    is_optional: bool,
}

impl TypeDescriptor {
    /// Resolves the declared type `declared`.
    ///
    /// Fails with a [`SchemaError`] for unions that are not optionals,
    /// optionals of optionals and containers with the wrong number of
    /// declared type arguments.
    pub fn resolve(declared: &'static TypeInfo) -> Result<Self, CodecError> {
        let TypeInfo::Union(union) = declared else {
            return Self::resolve_plain(declared);
        };

        let inner = optional_inner(union)?;
        if inner.is_union() {
            return Err(SchemaError::NestedOptional {
                ty: declared.type_name(),
            }
            .into());
        }

        Ok(Self {
            declared,
            is_optional: true,
            ..Self::resolve_plain(inner)?
        })
    }

    fn resolve_plain(info: &'static TypeInfo) -> Result<Self, CodecError> {
        let expected = match info.kind() {
            TypeKind::List | TypeKind::Set => 1,
            TypeKind::Map => 2,
            _ => 0,
        };

        let type_arguments = if expected == 0 {
            Box::default()
        } else {
            let generics = info.generics();
            if generics.len() != expected {
                return Err(SchemaError::TypeArguments {
                    ty: info.type_name(),
                    expected,
                    found: generics.len(),
                }
                .into());
            }
            generics
                .iter()
                .map(|param| Self::resolve(param.type_info()))
                .collect::<Result<_, _>>()?
        };

        Ok(Self {
            declared: info,
            effective: info,
            type_arguments,
            is_optional: false,
        })
    }

    /// The type as declared, the union itself for optionals.
    #[inline]
    pub const fn declared(&self) -> &'static TypeInfo {
        self.declared
    }

    /// The type after unwrapping an optional.
    #[inline]
    pub const fn effective(&self) -> &'static TypeInfo {
        self.effective
    }

    #[inline]
    pub fn type_arguments(&self) -> &[TypeDescriptor] {
        &self.type_arguments
    }

    #[inline]
    pub const fn is_optional(&self) -> bool {
        self.is_optional
    }

    /// The kind of the effective type.
    #[inline]
    pub const fn kind(&self) -> TypeKind {
        self.effective.kind()
    }
}

// `[T, ()]` -> `T`
fn optional_inner(union: &UnionInfo) -> Result<&'static TypeInfo, CodecError> {
    let mut alternatives = union.alternatives();
    match (alternatives.next(), alternatives.next(), alternatives.next()) {
        (Some(inner), Some(absent), None) if absent.type_is::<()>() => Ok(inner),
        _ => Err(SchemaError::UnsupportedUnion {
            ty: union.type_name(),
        }
        .into()),
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
pub(crate) mod tests {
    use core::any::Any;
    use std::collections::HashMap;

    use crate::impls::NonGenericTypeInfoCell;
    use crate::info::{ListInfo, TypeInfo, TypeKind, Typed, UnionInfo};
    use crate::ops::CodableRef;
    use crate::{Codable, CodecError, ErrorKind, SchemaError, TypeDescriptor};

    // Manual schemas that derived and built-in types never produce.

    macro_rules! opaque_codable {
        ($ty:ty) => {
            impl Codable for $ty {
                fn as_any(&self) -> &dyn Any {
                    self
                }
                fn into_any(self: Box<Self>) -> Box<dyn Any> {
                    self
                }
                fn codable_info(&self) -> &'static TypeInfo {
                    Self::type_info()
                }
                fn codable_ref(&self) -> CodableRef<'_> {
                    CodableRef::Opaque(self)
                }
            }
        };
    }

    fn lift_never(_: Option<Box<dyn Codable>>) -> Result<Box<dyn Codable>, CodecError> {
        Err(CodecError::coercion("never", "not decodable"))
    }

    /// `i32 | String | ()`
    pub(crate) struct ThreeWay;
    opaque_codable!(ThreeWay);

    impl Typed for ThreeWay {
        fn type_info() -> &'static TypeInfo {
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::Union(UnionInfo::new::<Self>(
                    &[i32::type_info, String::type_info, <()>::type_info],
                    lift_never,
                ))
            })
        }
    }

    /// `i32 | String`
    pub(crate) struct NoAbsence;
    opaque_codable!(NoAbsence);

    impl Typed for NoAbsence {
        fn type_info() -> &'static TypeInfo {
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::Union(UnionInfo::new::<Self>(
                    &[i32::type_info, String::type_info],
                    lift_never,
                ))
            })
        }
    }

    /// A list that declares no item type argument.
    pub(crate) struct BareList(pub(crate) Vec<i32>);
    opaque_codable!(BareList);

    impl FromIterator<i32> for BareList {
        fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
            Self(iter.into_iter().collect())
        }
    }

    impl Typed for BareList {
        fn type_info() -> &'static TypeInfo {
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| TypeInfo::List(ListInfo::new::<Self, i32>()))
        }
    }

    fn schema_error(info: &'static TypeInfo) -> SchemaError {
        match TypeDescriptor::resolve(info).unwrap_err().into_kind() {
            ErrorKind::Schema(err) => err,
            other => panic!("expected a schema error, found {other:?}"),
        }
    }

    #[test]
    fn plain_types() {
        let descriptor = TypeDescriptor::resolve(String::type_info()).unwrap();
        assert!(!descriptor.is_optional());
        assert!(descriptor.type_arguments().is_empty());
        assert!(core::ptr::eq(descriptor.declared(), descriptor.effective()));
    }

    #[test]
    fn optional_keeps_declared_union() {
        let descriptor = TypeDescriptor::resolve(<Option<u8>>::type_info()).unwrap();
        assert!(descriptor.is_optional());
        assert!(descriptor.declared().is_union());
        assert!(descriptor.effective().type_is::<u8>());
    }

    #[test]
    fn mapping_has_two_arguments() {
        let descriptor =
            TypeDescriptor::resolve(<HashMap<String, Option<i64>>>::type_info()).unwrap();
        assert_eq!(descriptor.kind(), TypeKind::Map);

        let [key, value] = descriptor.type_arguments() else {
            panic!("expected two arguments");
        };
        assert!(key.effective().type_is::<String>());
        assert!(value.is_optional());
        assert!(value.effective().type_is::<i64>());
    }

    #[test]
    fn unions_must_be_optionals() {
        assert!(matches!(
            schema_error(ThreeWay::type_info()),
            SchemaError::UnsupportedUnion { .. }
        ));
        assert!(matches!(
            schema_error(NoAbsence::type_info()),
            SchemaError::UnsupportedUnion { .. }
        ));
        assert!(matches!(
            schema_error(<Option<Option<String>>>::type_info()),
            SchemaError::NestedOptional { .. }
        ));
    }

    #[test]
    fn bare_container() {
        assert_eq!(
            schema_error(BareList::type_info()),
            SchemaError::TypeArguments {
                ty: core::any::type_name::<BareList>(),
                expected: 1,
                found: 0,
            }
        );

        // Also inside an optional and as a type argument.
        assert!(matches!(
            schema_error(<Option<BareList>>::type_info()),
            SchemaError::TypeArguments { .. }
        ));
        assert!(matches!(
            schema_error(<Vec<BareList>>::type_info()),
            SchemaError::TypeArguments { .. }
        ));
    }
}
