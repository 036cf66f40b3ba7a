use core::fmt;

use thiserror::Error;

use crate::tree::{TreeShape, TreeValue};

// -----------------------------------------------------------------------------
// Schema and shape errors

/// A type cannot be described or has no decoder.
///
/// Raised while deriving decode plans, so registration fails before any
/// value is decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    #[error("union `{ty}` is not an optional: expected one type and the absence marker")]
    UnsupportedUnion { ty: &'static str },

    #[error("optional `{ty}` wraps another optional")]
    NestedOptional { ty: &'static str },

    #[error("`{ty}` declares {found} type argument(s), expected {expected}")]
    TypeArguments {
        ty: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("`{ty}` has no scalar codec and no tree-native form")]
    Unresolvable { ty: &'static str },

    #[error("`{ty}` is not a record type")]
    NotARecord { ty: &'static str },
}

/// A tree value does not have the shape the schema asks for.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShapeError {
    #[error("expected {expected}, found {found}")]
    Expected {
        expected: TreeShape,
        found: TreeShape,
    },

    #[error("missing field `{field}`")]
    MissingField { field: &'static str },
}

// -----------------------------------------------------------------------------
// ErrorKind

/// The category of a [`CodecError`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("cannot convert `{ty}`: {message}")]
    Coercion { ty: &'static str, message: String },

    #[error("no codec handles `{ty}`")]
    Unregistered { ty: &'static str },

    #[error("malformed text: {0}")]
    Syntax(String),
}

// -----------------------------------------------------------------------------
// FieldPath

/// One step from a parent value to a child value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A record field, by its tree key.
    Field(&'static str),
    /// A mapping entry.
    Key(String),
    /// A sequence element.
    Index(usize),
}

/// Location of a failure, written as `$.friends[2].name`.
///
/// Segments are added from the innermost value outwards
/// while an error propagates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    // innermost first
    reversed: Vec<PathSegment>,
}

impl FieldPath {
    /// The root path, `$`.
    #[inline]
    pub const fn root() -> Self {
        Self {
            reversed: Vec::new(),
        }
    }

    /// Returns `true` if this is the root path.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.reversed.is_empty()
    }

    /// Iterates the segments from the root outwards.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &PathSegment> {
        self.reversed.iter().rev()
    }

    fn prepend(&mut self, segment: PathSegment) {
        self.reversed.push(segment);
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in self.segments() {
            match segment {
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Key(key) => write!(f, "[{key:?}]")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// CodecError

/// Error returned by every fallible operation of the codec.
///
/// # Examples
///
/// ```
/// use rc_codec::{CodecError, ShapeError, TreeShape};
///
/// let err = CodecError::from(ShapeError::Expected {
///     expected: TreeShape::Text,
///     found: TreeShape::Number,
/// })
/// .with_field("name")
/// .with_index(2)
/// .with_field("friends");
///
/// assert_eq!(err.path().to_string(), "$.friends[2].name");
/// assert_eq!(err.to_string(), "expected text, found number at $.friends[2].name");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind} at {path}")]
pub struct CodecError {
    kind: ErrorKind,
    path: FieldPath,
}

impl CodecError {
    /// Creates an error at the root path.
    #[inline]
    pub const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            path: FieldPath::root(),
        }
    }

    pub fn shape(expected: TreeShape, found: &TreeValue) -> Self {
        Self::from(ShapeError::Expected {
            expected,
            found: TreeShape::of(found),
        })
    }

    pub fn missing_field(field: &'static str) -> Self {
        Self::from(ShapeError::MissingField { field })
    }

    pub fn coercion(ty: &'static str, message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Coercion {
            ty,
            message: message.to_string(),
        })
    }

    pub fn unregistered(ty: &'static str) -> Self {
        Self::new(ErrorKind::Unregistered { ty })
    }

    pub fn syntax(error: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Syntax(error.to_string()))
    }

    #[inline]
    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    #[inline]
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn is_schema(&self) -> bool {
        matches!(self.kind, ErrorKind::Schema(_))
    }

    pub fn is_shape(&self) -> bool {
        matches!(self.kind, ErrorKind::Shape(_))
    }

    pub fn is_coercion(&self) -> bool {
        matches!(self.kind, ErrorKind::Coercion { .. })
    }

    pub fn is_unregistered(&self) -> bool {
        matches!(self.kind, ErrorKind::Unregistered { .. })
    }

    /// Places the error under the record field `name`.
    #[must_use]
    pub fn with_field(mut self, name: &'static str) -> Self {
        self.path.prepend(PathSegment::Field(name));
        self
    }

    /// Places the error under the mapping key `key`.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.path.prepend(PathSegment::Key(key.into()));
        self
    }

    /// Places the error under the sequence element `index`.
    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.path.prepend(PathSegment::Index(index));
        self
    }
}

impl From<ErrorKind> for CodecError {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<SchemaError> for CodecError {
    #[inline]
    fn from(error: SchemaError) -> Self {
        Self::new(ErrorKind::Schema(error))
    }
}

impl From<ShapeError> for CodecError {
    #[inline]
    fn from(error: ShapeError) -> Self {
        Self::new(ErrorKind::Shape(error))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{CodecError, SchemaError};

    #[test]
    fn root_path_display() {
        let err = CodecError::from(SchemaError::NotARecord { ty: "i32" });
        assert!(err.path().is_root());
        assert!(err.is_schema());
        assert_eq!(err.to_string(), "`i32` is not a record type at $");
    }

    #[test]
    fn mapping_keys_are_quoted() {
        let err = CodecError::unregistered("u8").with_key("a b").with_field("scores");
        assert_eq!(err.path().to_string(), r#"$.scores["a b"]"#);
        assert!(err.is_unregistered());
    }
}
