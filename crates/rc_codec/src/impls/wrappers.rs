use core::any::Any;

use crate::impls::GenericTypeInfoCell;
use crate::info::{Generics, TypeInfo, TypeParamInfo, Typed, UnionInfo};
use crate::ops::CodableRef;
use crate::{Codable, CodecError};

// -----------------------------------------------------------------------------
// Option

impl<T: Typed> Codable for Option<T> {
    impl_codable_any!();

    #[inline]
    fn codable_ref(&self) -> CodableRef<'_> {
        CodableRef::Optional(self.as_ref().map(|value| value as &dyn Codable))
    }
}

impl<T: Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            let info = UnionInfo::new::<Self>(&[T::type_info, <()>::type_info], lift_option::<T>);
            TypeInfo::Union(info.with_generics(Generics::from([TypeParamInfo::new::<T>("T")])))
        })
    }
}

fn lift_option<T: Typed>(value: Option<Box<dyn Codable>>) -> Result<Box<dyn Codable>, CodecError> {
    let value: Option<T> = value.map(T::take_from).transpose()?;
    Ok(Box::new(value))
}

// -----------------------------------------------------------------------------
// Box

// Transparent, so that `Option<Box<Self>>` fields describe a nested record.
impl<T: Typed> Codable for Box<T> {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }

    #[inline]
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        *self
    }

    #[inline]
    fn codable_info(&self) -> &'static TypeInfo {
        T::type_info()
    }

    #[inline]
    fn codable_ref(&self) -> CodableRef<'_> {
        (**self).codable_ref()
    }
}

impl<T: Typed> Typed for Box<T> {
    #[inline]
    fn type_info() -> &'static TypeInfo {
        T::type_info()
    }

    #[inline]
    fn take_from(value: Box<dyn Codable>) -> Result<Self, CodecError> {
        T::take_from(value).map(Box::new)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::Codable;
    use crate::info::Typed;
    use crate::ops::CodableRef;

    #[test]
    fn option_lifts_absence() {
        let info = <Option<u32>>::type_info().as_union().unwrap();

        let some = info.lift(Some(Box::new(4_u32) as Box<dyn Codable>)).unwrap();
        assert_eq!(some.downcast_ref::<Option<u32>>(), Some(&Some(4)));

        let none = info.lift(None).unwrap();
        assert_eq!(none.downcast_ref::<Option<u32>>(), Some(&None));
    }

    #[test]
    fn box_is_transparent() {
        assert!(<Box<String>>::type_info().type_is::<String>());

        let boxed: Box<String> = Box::new("inner".into());
        assert!(Codable::as_any(&boxed).is::<String>());
        assert!(matches!(boxed.codable_ref(), CodableRef::Opaque(_)));

        let taken = <Box<String>>::take_from(Box::new(String::from("x"))).unwrap();
        assert_eq!(*taken, "x");
    }
}
