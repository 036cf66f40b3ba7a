//! Parsing of `#[codec(...)]` attributes.

use proc_macro2::Span;
use syn::{Attribute, Expr, ExprLit, ExprUnary, Lit, LitStr, UnOp, spanned::Spanned};

use crate::CODEC_ATTRIBUTE_NAME;

fn codec_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(CODEC_ATTRIBUTE_NAME))
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// Type level attributes, `#[codec(opaque, transparent, auto_register)]`.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub opaque: Option<Span>,
    pub transparent: Option<Span>,
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();
        for attr in codec_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("opaque") {
                    parsed.opaque = Some(meta.path.span());
                    Ok(())
                } else if meta.path.is_ident("transparent") {
                    parsed.transparent = Some(meta.path.span());
                    Ok(())
                } else if meta.path.is_ident("auto_register") {
                    parsed.auto_register = Some(meta.path.span());
                    Ok(())
                } else {
                    Err(meta.error("expected `opaque`, `transparent` or `auto_register`"))
                }
            })?;
        }

        if let (Some(_), Some(span)) = (parsed.opaque, parsed.transparent) {
            return Err(syn::Error::new(span, "`opaque` and `transparent` are exclusive"));
        }
        Ok(parsed)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Field attributes, `#[codec(rename = "key")]`.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();
        for attr in codec_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let name: LitStr = meta.value()?.parse()?;
                    if name.value().is_empty() {
                        return Err(syn::Error::new(name.span(), "a field key cannot be empty"));
                    }
                    parsed.rename = Some(name);
                    Ok(())
                } else {
                    Err(meta.error("expected `rename = \"...\"`"))
                }
            })?;
        }
        Ok(parsed)
    }
}

// -----------------------------------------------------------------------------
// VariantAttributes

/// The tree value of an enum member.
#[derive(Debug, Clone)]
pub(crate) enum MemberValue {
    Text(LitStr),
    Integer(i64, Span),
}

impl MemberValue {
    /// Reads a string literal, an integer literal or a negated integer literal.
    pub fn from_expr(expr: &Expr) -> syn::Result<Self> {
        match expr {
            Expr::Lit(ExprLit {
                lit: Lit::Str(text),
                ..
            }) => Ok(Self::Text(text.clone())),
            Expr::Lit(ExprLit {
                lit: Lit::Int(int), ..
            }) => Ok(Self::Integer(int.base10_parse()?, int.span())),
            Expr::Unary(ExprUnary {
                op: UnOp::Neg(_),
                expr: inner,
                ..
            }) => match Self::from_expr(inner)? {
                Self::Integer(value, _) => Ok(Self::Integer(-value, expr.span())),
                Self::Text(_) => Err(syn::Error::new(expr.span(), "cannot negate text")),
            },
            _ => Err(syn::Error::new(
                expr.span(),
                "expected a string or integer literal",
            )),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::Text(text) => text.span(),
            Self::Integer(_, span) => *span,
        }
    }

    pub fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.value() == b.value(),
            (Self::Integer(a, _), Self::Integer(b, _)) => a == b,
            _ => false,
        }
    }
}

/// Enum variant attributes, `#[codec(value = "x")]` or `#[codec(value = 3)]`.
#[derive(Default, Debug)]
pub(crate) struct VariantAttributes {
    pub value: Option<MemberValue>,
}

impl VariantAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();
        for attr in codec_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("value") {
                    let expr: Expr = meta.value()?.parse()?;
                    parsed.value = Some(MemberValue::from_expr(&expr)?);
                    Ok(())
                } else {
                    Err(meta.error("expected `value = ...`"))
                }
            })?;
        }
        Ok(parsed)
    }
}
