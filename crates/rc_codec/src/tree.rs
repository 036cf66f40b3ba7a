use core::fmt;

/// The generic tree value that records are converted to and from.
///
/// Mapping keys are always text.
pub type TreeValue = serde_json::Value;

// -----------------------------------------------------------------------------
// TreeShape

/// The six shapes a [`TreeValue`] can take.
///
/// # Examples
///
/// ```
/// use rc_codec::TreeShape;
/// use serde_json::json;
///
/// assert_eq!(TreeShape::of(&json!([1, 2])), TreeShape::Sequence);
/// assert_eq!(TreeShape::of(&json!({})).to_string(), "mapping");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeShape {
    Null,
    Boolean,
    Number,
    Text,
    Sequence,
    Mapping,
}

impl TreeShape {
    /// Returns the shape of `value`.
    pub const fn of(value: &TreeValue) -> Self {
        match value {
            TreeValue::Null => Self::Null,
            TreeValue::Bool(_) => Self::Boolean,
            TreeValue::Number(_) => Self::Number,
            TreeValue::String(_) => Self::Text,
            TreeValue::Array(_) => Self::Sequence,
            TreeValue::Object(_) => Self::Mapping,
        }
    }
}

impl fmt::Display for TreeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.pad("null"),
            Self::Boolean => f.pad("boolean"),
            Self::Number => f.pad("number"),
            Self::Text => f.pad("text"),
            Self::Sequence => f.pad("sequence"),
            Self::Mapping => f.pad("mapping"),
        }
    }
}
