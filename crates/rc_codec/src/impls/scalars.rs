use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use uuid::Uuid;

use crate::Codable;
use crate::format::TimeOfDay;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, Typed};
use crate::ops::CodableRef;

// Leaf types converted only through registered scalar codecs.
macro_rules! impl_opaque {
    ($($ty:ty),* $(,)?) => {$(
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
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<$ty>()))
            }
        }
    )*};
}

impl_opaque!(
    Uuid,
    BigDecimal,
    NaiveDate,
    NaiveTime,
    NaiveDateTime,
    DateTime<Utc>,
    DateTime<FixedOffset>,
    TimeOfDay,
);
