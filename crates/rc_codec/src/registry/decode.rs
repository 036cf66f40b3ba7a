use rc_utils::TypeIdMap;

use crate::info::{EnumInfo, MemberInfo, RecordInfo};
use crate::ops::{CodableRef, FieldValues};
use crate::registry::plan::{DecodePlan, RecordPlan};
use crate::{Codable, CodecError, TreeShape, TreeValue};

/// Walks a tree value along a [`DecodePlan`].
pub(crate) struct Decoder<'a> {
    plans: &'a TypeIdMap<RecordPlan>,
}

impl<'a> Decoder<'a> {
    #[inline]
    pub(crate) fn new(plans: &'a TypeIdMap<RecordPlan>) -> Self {
        Self { plans }
    }

    pub(crate) fn decode(&self, plan: &DecodePlan, tree: &TreeValue) -> Result<Box<dyn Codable>, CodecError> {
        match plan {
            DecodePlan::Scalar(decode) => decode(tree),
            DecodePlan::Enum(info) => decode_enum(info, tree),
            DecodePlan::Record(info) => self.record(info, tree),
            DecodePlan::Sequence { info, item } => info.from_items(self.items(item, tree)?),
            DecodePlan::Set { info, item } => info.from_items(self.items(item, tree)?),
            DecodePlan::Map { info, key, value } => {
                let entries = self.entries(key, value, tree)?;
                let count = entries.len();
                let map = info.from_entries(entries)?;
                let distinct = match map.codable_ref() {
                    CodableRef::Map(map) => map.len(),
                    _ => count,
                };
                if distinct < count {
                    return Err(CodecError::coercion(
                        info.type_name(),
                        format_args!("{count} keys decode to {distinct} distinct keys"),
                    ));
                }
                Ok(map)
            }
            DecodePlan::Native(native) => native.decode(tree),
            DecodePlan::Optional { lift, inner } => match tree {
                TreeValue::Null => lift(None),
                _ => lift(Some(self.decode(inner, tree)?)),
            },
        }
    }

    fn record(&self, info: &RecordInfo, tree: &TreeValue) -> Result<Box<dyn Codable>, CodecError> {
        let plan = self
            .plans
            .get(&info.ty_id())
            .ok_or_else(|| CodecError::unregistered(info.type_name()))?;
        let info = plan.info;

        let TreeValue::Object(object) = tree else {
            return Err(CodecError::shape(TreeShape::Mapping, tree));
        };

        // Keys without a field are ignored.
        let mut values = Vec::with_capacity(info.field_len());
        for (field, field_plan) in info.fields().iter().zip(plan.fields.iter()) {
            let value = match object.get(field.name()) {
                Some(value) => self.decode(field_plan, value),
                None => Err(CodecError::missing_field(field.name())),
            };
            values.push(value.map_err(|err| err.with_field(field.name()))?);
        }

        info.construct(FieldValues::new(values))
    }

    fn items(&self, item: &DecodePlan, tree: &TreeValue) -> Result<Vec<Box<dyn Codable>>, CodecError> {
        let TreeValue::Array(items) = tree else {
            return Err(CodecError::shape(TreeShape::Sequence, tree));
        };

        items
            .iter()
            .enumerate()
            .map(|(index, value)| self.decode(item, value).map_err(|err| err.with_index(index)))
            .collect()
    }

    fn entries(
        &self,
        key_plan: &DecodePlan,
        value_plan: &DecodePlan,
        tree: &TreeValue,
    ) -> Result<Vec<(Box<dyn Codable>, Box<dyn Codable>)>, CodecError> {
        let TreeValue::Object(object) = tree else {
            return Err(CodecError::shape(TreeShape::Mapping, tree));
        };

        object
            .iter()
            .map(|(key, value)| {
                let decoded_key = self.key(key_plan, key).map_err(|err| err.with_key(key.as_str()))?;
                let decoded_value = self.decode(value_plan, value).map_err(|err| err.with_key(key.as_str()))?;
                Ok::<_, CodecError>((decoded_key, decoded_value))
            })
            .collect()
    }

    // Mapping keys are always text in the tree. Keys of number or boolean
    // type are read back from their text form.
    fn key(&self, plan: &DecodePlan, key: &str) -> Result<Box<dyn Codable>, CodecError> {
        let err = match self.decode(plan, &TreeValue::String(key.to_owned())) {
            Ok(decoded) => return Ok(decoded),
            Err(err) => err,
        };

        match serde_json::from_str::<TreeValue>(key) {
            Ok(reread @ (TreeValue::Number(_) | TreeValue::Bool(_))) => {
                self.decode(plan, &reread).map_err(|_| err)
            }
            _ => Err(err),
        }
    }
}

fn decode_enum(info: &EnumInfo, tree: &TreeValue) -> Result<Box<dyn Codable>, CodecError> {
    info.member_by_value(tree).map(MemberInfo::make).ok_or_else(|| {
        CodecError::coercion(
            info.type_name(),
            format_args!("{tree} matches no member value"),
        )
    })
}
