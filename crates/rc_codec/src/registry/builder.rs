use log::trace;
use rc_utils::TypeIdMap;

use crate::info::{FieldInfo, RecordInfo, TypeInfo};
use crate::registry::ScalarCodec;
use crate::registry::plan::{DecodePlan, RecordPlan};
use crate::{CodecError, SchemaError, TypeDescriptor};

/// Derives decode plans on top of the published ones.
///
/// New record plans are staged and only published by the caller once the
/// whole derivation succeeded. A record that is reached again while its own
/// fields are being derived resolves to a reference to its plan, which is
/// how recursive records terminate.
///
/// A probing builder derives nothing new: it stops at the first record
/// without a published plan and reports it through [`is_complete`].
///
/// [`is_complete`]: PlanBuilder::is_complete
pub(crate) struct PlanBuilder<'a> {
    scalars: &'a TypeIdMap<ScalarCodec>,
    published: &'a TypeIdMap<RecordPlan>,
    probe: bool,
    unpublished: bool,
    in_progress: TypeIdMap<()>,
    staged: TypeIdMap<RecordPlan>,
}

impl<'a> PlanBuilder<'a> {
    pub(crate) fn new(
        scalars: &'a TypeIdMap<ScalarCodec>,
        published: &'a TypeIdMap<RecordPlan>,
    ) -> Self {
        Self {
            scalars,
            published,
            probe: false,
            unpublished: false,
            in_progress: TypeIdMap::new(),
            staged: TypeIdMap::new(),
        }
    }

    pub(crate) fn probe(
        scalars: &'a TypeIdMap<ScalarCodec>,
        published: &'a TypeIdMap<RecordPlan>,
    ) -> Self {
        Self {
            probe: true,
            ..Self::new(scalars, published)
        }
    }

    /// Returns `false` if a probe reached a record without a published plan.
    #[inline]
    pub(crate) fn is_complete(&self) -> bool {
        !self.unpublished
    }

    /// Returns the staged record plans.
    #[inline]
    pub(crate) fn finish(self) -> TypeIdMap<RecordPlan> {
        self.staged
    }

    /// Derives the plan of a record and of every record reachable from it.
    pub(crate) fn record(&mut self, info: &'static TypeInfo) -> Result<&'static RecordInfo, CodecError> {
        let TypeInfo::Record(record) = info else {
            return Err(SchemaError::NotARecord {
                ty: info.type_name(),
            }
            .into());
        };

        let id = info.ty_id();
        if self.published.contains(&id) || self.staged.contains(&id) || self.in_progress.contains(&id) {
            return Ok(record);
        }
        if self.probe {
            self.unpublished = true;
            return Ok(record);
        }

        trace!("deriving decode plan for `{}`", record.type_name());
        self.in_progress.insert(id, ());
        let fields = record
            .fields()
            .iter()
            .map(|field| self.field(field))
            .collect::<Result<Box<[_]>, _>>()?;
        self.in_progress.remove(&id);

        self.staged.insert(id, RecordPlan { info: record, fields });
        Ok(record)
    }

    fn field(&mut self, field: &FieldInfo) -> Result<DecodePlan, CodecError> {
        TypeDescriptor::resolve(field.type_info())
            .and_then(|descriptor| self.plan(&descriptor))
            .map_err(|err| err.with_field(field.name()))
    }

    /// Derives the plan of a resolved type.
    pub(crate) fn plan(&mut self, descriptor: &TypeDescriptor) -> Result<DecodePlan, CodecError> {
        let plan = self.plan_effective(descriptor)?;
        if !descriptor.is_optional() {
            return Ok(plan);
        }

        let declared = descriptor.declared();
        let union = declared.as_union().map_err(|_| SchemaError::UnsupportedUnion {
            ty: declared.type_name(),
        })?;
        Ok(DecodePlan::Optional {
            lift: union.lift_fn(),
            inner: Box::new(plan),
        })
    }

    fn plan_effective(&mut self, descriptor: &TypeDescriptor) -> Result<DecodePlan, CodecError> {
        let info = descriptor.effective();

        // A registered scalar wins over whatever the type describes itself as.
        if let Some(codec) = self.scalars.get(&info.ty_id()) {
            return Ok(DecodePlan::Scalar(codec.decoder()));
        }

        match (info, descriptor.type_arguments()) {
            (TypeInfo::Enum(enum_info), _) => Ok(DecodePlan::Enum(enum_info)),
            (TypeInfo::Record(_), _) => self.record(info).map(DecodePlan::Record),
            (TypeInfo::List(list_info), [item]) => Ok(DecodePlan::Sequence {
                info: list_info,
                item: Box::new(self.plan(item)?),
            }),
            (TypeInfo::Set(set_info), [item]) => Ok(DecodePlan::Set {
                info: set_info,
                item: Box::new(self.plan(item)?),
            }),
            (TypeInfo::Map(map_info), [key, value]) => Ok(DecodePlan::Map {
                info: map_info,
                key: Box::new(self.plan(key)?),
                value: Box::new(self.plan(value)?),
            }),
            (TypeInfo::List(_) | TypeInfo::Set(_) | TypeInfo::Map(_), arguments) => {
                Err(SchemaError::TypeArguments {
                    ty: info.type_name(),
                    expected: if info.is_map() { 2 } else { 1 },
                    found: arguments.len(),
                }
                .into())
            }
            (TypeInfo::Opaque(opaque_info), _) => match opaque_info.native() {
                Some(native) => Ok(DecodePlan::Native(*native)),
                None => Err(SchemaError::Unresolvable {
                    ty: info.type_name(),
                }
                .into()),
            },
            (TypeInfo::Union(_), _) => Err(SchemaError::NestedOptional {
                ty: descriptor.declared().type_name(),
            }
            .into()),
        }
    }
}
