use core::any::type_name;

use serde_json::Number;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{NativeCodec, OpaqueInfo, TypeInfo, Typed};
use crate::ops::CodableRef;
use crate::{Codable, CodecError, TreeShape, TreeValue};

// `$encode: fn(&$ty) -> Result<TreeValue, CodecError>`
// `$decode: fn(&TreeValue) -> Result<$ty, CodecError>`
macro_rules! impl_native {
    ($ty:ty, $encode:expr, $decode:expr $(,)?) => {
        impl Codable for $ty {
            impl_codable_any!();

            #[inline]
            fn codable_ref(&self) -> CodableRef<'_> {
                CodableRef::Opaque(self)
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    let native = NativeCodec::new(
                        |value| ($encode)(value.expect_ref::<$ty>()?),
                        |tree| ($decode)(tree).map(|value: $ty| Box::new(value) as Box<dyn Codable>),
                    );
                    TypeInfo::Opaque(OpaqueInfo::new::<$ty>().with_native(native))
                })
            }
        }
    };
}

macro_rules! impl_native_integer {
    ($($ty:ty => $read:ident),* $(,)?) => {$(
        impl_native!(
            $ty,
            |value: &$ty| Ok(TreeValue::from(*value)),
            |tree: &TreeValue| match tree {
                TreeValue::Number(number) => number
                    .$read()
                    .and_then(|int| <$ty>::try_from(int).ok())
                    .ok_or_else(|| CodecError::coercion(
                        type_name::<$ty>(),
                        format_args!("{number} is out of range"),
                    )),
                other => Err(CodecError::shape(TreeShape::Number, other)),
            },
        );
    )*};
}

impl_native_integer!(
    i8 => as_i64,
    i16 => as_i64,
    i32 => as_i64,
    i64 => as_i64,
    isize => as_i64,
    u8 => as_u64,
    u16 => as_u64,
    u32 => as_u64,
    u64 => as_u64,
    usize => as_u64,
);

fn finite(ty: &'static str, value: f64) -> Result<TreeValue, CodecError> {
    Number::from_f64(value)
        .map(TreeValue::Number)
        .ok_or_else(|| CodecError::coercion(ty, format_args!("{value} has no tree form")))
}

fn read_f64(tree: &TreeValue) -> Result<f64, CodecError> {
    match tree {
        TreeValue::Number(number) => number
            .as_f64()
            .ok_or_else(|| CodecError::coercion("f64", format_args!("{number} is not a float"))),
        other => Err(CodecError::shape(TreeShape::Number, other)),
    }
}

impl_native!(
    f64,
    |value: &f64| finite("f64", *value),
    read_f64,
);

fn read_f32(tree: &TreeValue) -> Result<f32, CodecError> {
    let value = read_f64(tree)?;
    let narrowed = value as f32;
    if value.is_finite() && !narrowed.is_finite() {
        return Err(CodecError::coercion("f32", format_args!("{value} is out of range")));
    }
    Ok(narrowed)
}

impl_native!(
    f32,
    |value: &f32| finite("f32", f64::from(*value)),
    read_f32,
);

impl_native!(
    bool,
    |value: &bool| Ok(TreeValue::Bool(*value)),
    |tree: &TreeValue| match tree {
        TreeValue::Bool(value) => Ok(*value),
        other => Err(CodecError::shape(TreeShape::Boolean, other)),
    },
);

impl_native!(
    String,
    |value: &String| Ok(TreeValue::String(value.clone())),
    |tree: &TreeValue| match tree {
        TreeValue::String(value) => Ok(value.clone()),
        other => Err(CodecError::shape(TreeShape::Text, other)),
    },
);

// The absence marker of optionals.
impl_native!(
    (),
    |_: &()| Ok(TreeValue::Null),
    |tree: &TreeValue| match tree {
        TreeValue::Null => Ok(()),
        other => Err(CodecError::shape(TreeShape::Null, other)),
    },
);

// Passed through unchanged.
impl_native!(
    TreeValue,
    |value: &TreeValue| Ok(value.clone()),
    |tree: &TreeValue| Ok(tree.clone()),
);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::info::Typed;
    use crate::{ErrorKind, ShapeError, TreeShape};

    fn native<T: Typed>() -> &'static crate::info::NativeCodec {
        T::type_info().as_opaque().unwrap().native().unwrap()
    }

    #[test]
    fn integers_check_range() {
        let value = native::<u8>().decode(&json!(255)).unwrap();
        assert_eq!(value.downcast_ref::<u8>(), Some(&255));

        let err = native::<u8>().decode(&json!(256)).unwrap_err();
        assert!(err.is_coercion());

        let err = native::<i32>().decode(&json!(1.5)).unwrap_err();
        assert!(err.is_coercion());

        let err = native::<i64>().decode(&json!("7")).unwrap_err();
        assert_eq!(
            err.into_kind(),
            ErrorKind::Shape(ShapeError::Expected {
                expected: TreeShape::Number,
                found: TreeShape::Text,
            })
        );
    }

    #[test]
    fn floats_accept_integers() {
        let value = native::<f64>().decode(&json!(3)).unwrap();
        assert_eq!(value.downcast_ref::<f64>(), Some(&3.0));

        assert!(native::<f64>().encode(&f64::NAN).unwrap_err().is_coercion());
        assert_eq!(native::<f32>().encode(&0.5_f32).unwrap(), json!(0.5));
    }

    #[test]
    fn f32_checks_range() {
        let value = native::<f32>().decode(&json!(-2.5)).unwrap();
        assert_eq!(value.downcast_ref::<f32>(), Some(&-2.5));

        let err = native::<f32>().decode(&json!(1e300)).unwrap_err();
        assert!(err.is_coercion());
        assert!(native::<f32>().decode(&json!(-1e300)).unwrap_err().is_coercion());
    }

    #[test]
    fn unit_is_null() {
        assert_eq!(native::<()>().encode(&()).unwrap(), json!(null));
        assert!(native::<()>().decode(&json!(0)).unwrap_err().is_shape());
    }

    #[test]
    fn tree_value_passes_through() {
        let tree = json!({ "any": [1, "two", null] });
        let value = native::<crate::TreeValue>().decode(&tree).unwrap();
        assert_eq!(native::<crate::TreeValue>().encode(&*value).unwrap(), tree);
    }

    #[test]
    fn encoder_rejects_other_types() {
        let err = native::<String>().encode(&5_u8).unwrap_err();
        assert!(err.is_coercion());
    }
}
