use crate::info::{EnumInfo, ListInfo, LiftFn, MapInfo, NativeCodec, RecordInfo, SetInfo};
use crate::registry::DecodeFn;

/// How to decode one declared type, derived once and reused for every value.
#[derive(Clone)]
pub(crate) enum DecodePlan {
    /// A registered scalar codec, as it was when the plan was derived.
    Scalar(DecodeFn),
    Enum(&'static EnumInfo),
    /// A record, decoded through its plan in the registry, keyed by type id.
    /// The plan may still be under derivation when this is created.
    Record(&'static RecordInfo),
    Sequence {
        info: &'static ListInfo,
        item: Box<DecodePlan>,
    },
    Set {
        info: &'static SetInfo,
        item: Box<DecodePlan>,
    },
    Map {
        info: &'static MapInfo,
        key: Box<DecodePlan>,
        value: Box<DecodePlan>,
    },
    Native(NativeCodec),
    /// Null decodes to absence, anything else through `inner`.
    Optional {
        lift: LiftFn,
        inner: Box<DecodePlan>,
    },
}

/// The field plans of one record, in field order.
pub(crate) struct RecordPlan {
    pub info: &'static RecordInfo,
    pub fields: Box<[DecodePlan]>,
}
