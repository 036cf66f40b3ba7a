use core::str::FromStr;

use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::format::{self, TimeOfDay};
use crate::registry::ScalarCodec;
use crate::registry::scalar::expect_text;
use crate::{CodecError, TreeValue};

/// The scalar codecs every [`CodecRegistry::new`](crate::CodecRegistry::new) starts with.
pub(crate) fn builtin_scalars() -> [ScalarCodec; 8] {
    [
        ScalarCodec::text(|id: &Uuid| id.hyphenated().to_string(), Uuid::parse_str),
        ScalarCodec::text(|value: &BigDecimal| value.to_string(), BigDecimal::from_str),
        ScalarCodec::text(format::write_date, format::parse_date),
        ScalarCodec::text(format::write_time, format::parse_time),
        ScalarCodec::text(format::write_naive_datetime, format::parse_naive_datetime),
        ScalarCodec::text(format::write_utc_datetime, format::parse_utc_datetime),
        ScalarCodec::text(format::write_fixed_datetime, format::parse_fixed_datetime),
        ScalarCodec::new(
            |time: &TimeOfDay| {
                time.to_text().map(TreeValue::String).ok_or_else(|| {
                    CodecError::coercion(
                        core::any::type_name::<TimeOfDay>(),
                        "a time of day with a UTC offset has no text form",
                    )
                })
            },
            |tree: &TreeValue| {
                TimeOfDay::parse(expect_text(tree)?).map_err(|err| {
                    CodecError::coercion(core::any::type_name::<TimeOfDay>(), err)
                })
            },
        ),
    ]
}
