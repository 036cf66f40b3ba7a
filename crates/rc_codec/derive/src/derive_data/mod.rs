//! The parsed form of a `#[derive(Codable)]` input.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod codec_meta;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, MemberValue, TypeAttributes, VariantAttributes};
pub(crate) use codec_meta::CodecMeta;

use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Member, Type, spanned::Spanned};

// -----------------------------------------------------------------------------
// CodecDerive

/// A record field.
pub(crate) struct RecordField<'a> {
    pub member: &'a Ident,
    pub ty: &'a Type,
    /// The tree key.
    pub name: LitStr,
}

/// A unit variant of an enum.
pub(crate) struct EnumMember<'a> {
    pub ident: &'a Ident,
    pub value: MemberValue,
}

/// The only field of a transparent wrapper.
pub(crate) struct WrappedField<'a> {
    pub member: Member,
    pub ty: &'a Type,
}

pub(crate) enum CodecDerive<'a> {
    Record(CodecMeta<'a>, Vec<RecordField<'a>>),
    Enum(CodecMeta<'a>, Vec<EnumMember<'a>>),
    Opaque(CodecMeta<'a>),
    Transparent(CodecMeta<'a>, WrappedField<'a>),
}

impl<'a> CodecDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let is_opaque = attrs.opaque.is_some();
        let transparent = attrs.transparent;
        let auto_register = attrs.auto_register;
        let meta = CodecMeta::new(attrs, &input.ident, &input.generics)?;

        if let Some(span) = transparent
            && !matches!(input.data, Data::Struct(_))
        {
            return Err(syn::Error::new(span, "only structs can be `transparent`"));
        }

        let derive = match &input.data {
            _ if is_opaque => Self::Opaque(meta),
            Data::Struct(data) if transparent.is_some() => {
                Self::Transparent(meta, Self::wrapped_field(&data.fields, &input.ident)?)
            }
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => Self::Record(meta, Self::record_fields(&fields.named)?),
                Fields::Unit => Self::Opaque(meta),
                Fields::Unnamed(_) => {
                    return Err(syn::Error::new(
                        input.ident.span(),
                        "tuple structs are not records, mark them `#[codec(transparent)]` or `#[codec(opaque)]`",
                    ));
                }
            },
            Data::Enum(data) => Self::Enum(meta, Self::enum_members(data.variants.iter())?),
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "unions cannot derive `Codable`",
                ));
            }
        };

        if let Some(span) = auto_register
            && !matches!(derive, Self::Record(..))
        {
            return Err(syn::Error::new(span, "`auto_register` only applies to records"));
        }
        Ok(derive)
    }

    fn wrapped_field(fields: &'a Fields, ident: &Ident) -> syn::Result<WrappedField<'a>> {
        let mut iter = fields.iter();
        let (Some(field), None) = (iter.next(), iter.next()) else {
            return Err(syn::Error::new(
                ident.span(),
                "a `transparent` struct must have exactly one field",
            ));
        };
        if let Some(attr) = field
            .attrs
            .iter()
            .find(|attr| attr.path().is_ident(crate::CODEC_ATTRIBUTE_NAME))
        {
            return Err(syn::Error::new(
                attr.span(),
                "the field of a `transparent` struct takes no attributes",
            ));
        }

        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(0.into()),
        };
        Ok(WrappedField {
            member,
            ty: &field.ty,
        })
    }

    fn record_fields(
        fields: impl IntoIterator<Item = &'a syn::Field>,
    ) -> syn::Result<Vec<RecordField<'a>>> {
        let mut parsed: Vec<RecordField<'a>> = Vec::new();
        for field in fields {
            let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            let member = field
                .ident
                .as_ref()
                .ok_or_else(|| syn::Error::new(field.span(), "expected a named field"))?;
            let name = attrs
                .rename
                .unwrap_or_else(|| LitStr::new(&member.unraw().to_string(), member.span()));

            if parsed.iter().any(|other| other.name.value() == name.value()) {
                return Err(syn::Error::new(
                    name.span(),
                    format!("duplicate field key `{}`", name.value()),
                ));
            }
            parsed.push(RecordField {
                member,
                ty: &field.ty,
                name,
            });
        }
        Ok(parsed)
    }

    fn enum_members(
        variants: impl IntoIterator<Item = &'a syn::Variant>,
    ) -> syn::Result<Vec<EnumMember<'a>>> {
        let mut parsed: Vec<EnumMember<'a>> = Vec::new();
        for variant in variants {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(syn::Error::new(
                    variant.ident.span(),
                    "only unit variants are enum members, mark the enum `#[codec(opaque)]`",
                ));
            }

            let attrs = VariantAttributes::parse_attrs(&variant.attrs)?;
            let value = match (attrs.value, &variant.discriminant) {
                (Some(value), _) => value,
                (None, Some((_, discriminant))) => MemberValue::from_expr(discriminant).map_err(|err| {
                    syn::Error::new(
                        err.span(),
                        "only literal discriminants are member values, add `#[codec(value = ...)]`",
                    )
                })?,
                (None, None) => MemberValue::Text(LitStr::new(
                    &variant.ident.to_string(),
                    variant.ident.span(),
                )),
            };

            if parsed.iter().any(|other| other.value.same_as(&value)) {
                return Err(syn::Error::new(value.span(), "duplicate member value"));
            }
            parsed.push(EnumMember {
                ident: &variant.ident,
                value,
            });
        }
        Ok(parsed)
    }

    pub fn meta(&self) -> &CodecMeta<'a> {
        match self {
            Self::Record(meta, _)
            | Self::Enum(meta, _)
            | Self::Opaque(meta)
            | Self::Transparent(meta, _) => meta,
        }
    }
}
