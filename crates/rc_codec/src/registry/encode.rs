use rc_utils::TypeIdMap;
use serde_json::Map;

use crate::info::TypeInfo;
use crate::ops::{CodableRef, Mapping, Record, Sequence};
use crate::registry::ScalarCodec;
use crate::{Codable, CodecError, TreeShape, TreeValue};

/// Converts values to tree values by their runtime type.
pub(crate) struct Encoder<'a> {
    scalars: &'a TypeIdMap<ScalarCodec>,
}

impl<'a> Encoder<'a> {
    #[inline]
    pub(crate) fn new(scalars: &'a TypeIdMap<ScalarCodec>) -> Self {
        Self { scalars }
    }

    pub(crate) fn encode(&self, value: &dyn Codable) -> Result<TreeValue, CodecError> {
        let info = value.codable_info();
        if let Some(codec) = self.scalars.get(&info.ty_id()) {
            return codec.encode(value);
        }

        match value.codable_ref() {
            CodableRef::Enum(member) => Ok(member.to_tree()),
            CodableRef::Record(record) => self.record(info, record),
            CodableRef::List(items) | CodableRef::Set(items) => self.items(items),
            CodableRef::Map(map) => self.map(map),
            CodableRef::Optional(None) => Ok(TreeValue::Null),
            CodableRef::Optional(Some(inner)) => self.encode(inner),
            CodableRef::Opaque(value) => match info {
                TypeInfo::Opaque(opaque) => match opaque.native() {
                    Some(native) => native.encode(value),
                    None => Err(CodecError::unregistered(info.type_name())),
                },
                _ => Err(CodecError::unregistered(info.type_name())),
            },
        }
    }

    fn record(&self, info: &'static TypeInfo, record: &dyn Record) -> Result<TreeValue, CodecError> {
        let record_info = info
            .as_record()
            .map_err(|_| CodecError::unregistered(info.type_name()))?;

        let mut object = Map::with_capacity(record_info.field_len());
        for (index, field) in record_info.fields().iter().enumerate() {
            let value = record
                .field_at(index)
                .ok_or_else(|| CodecError::missing_field(field.name()))
                .and_then(|value| self.encode(value))
                .map_err(|err| err.with_field(field.name()))?;
            object.insert(field.name().to_owned(), value);
        }
        Ok(TreeValue::Object(object))
    }

    fn items(&self, items: &dyn Sequence) -> Result<TreeValue, CodecError> {
        items
            .iter_items()
            .enumerate()
            .map(|(index, item)| self.encode(item).map_err(|err| err.with_index(index)))
            .collect::<Result<Vec<_>, _>>()
            .map(TreeValue::Array)
    }

    fn map(&self, map: &dyn Mapping) -> Result<TreeValue, CodecError> {
        let mut object = Map::with_capacity(map.len());
        for (key, value) in map.iter_entries() {
            let key = match self.encode(key)? {
                TreeValue::String(text) => text,
                TreeValue::Number(number) => number.to_string(),
                TreeValue::Bool(flag) => flag.to_string(),
                other => {
                    return Err(CodecError::coercion(
                        key.codable_info().type_name(),
                        format_args!("a {} cannot be a mapping key", TreeShape::of(&other)),
                    ));
                }
            };
            if object.contains_key(&key) {
                return Err(CodecError::coercion(
                    map.codable_info().type_name(),
                    format_args!("two keys are written as {key:?}"),
                ));
            }
            let value = self.encode(value).map_err(|err| err.with_key(key.as_str()))?;
            object.insert(key, value);
        }
        Ok(TreeValue::Object(object))
    }
}
