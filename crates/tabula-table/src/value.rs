#![forbid(unsafe_code)]

//! Cell values and their display strings.

use std::borrow::Cow;

use crate::error::TableError;

/// Type tag of a cell value, as passed through the embedding surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// UTF-8 text.
    Str,
    /// 64-bit float.
    Double,
}

impl ValueType {
    /// Numeric tag for [`ValueType::Str`].
    pub const STR_TAG: u32 = 0;
    /// Numeric tag for [`ValueType::Double`].
    pub const DOUBLE_TAG: u32 = 1;

    /// The numeric tag of this type.
    pub const fn tag(self) -> u32 {
        match self {
            Self::Str => Self::STR_TAG,
            Self::Double => Self::DOUBLE_TAG,
        }
    }
}

impl TryFrom<u32> for ValueType {
    type Error = TableError;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        match tag {
            Self::STR_TAG => Ok(Self::Str),
            Self::DOUBLE_TAG => Ok(Self::Double),
            _ => Err(TableError::InvalidType { tag }),
        }
    }
}

/// Untyped payload accompanying a numeric tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload<'a> {
    /// Borrowed text.
    Text(&'a str),
    /// A number.
    Number(f64),
}

/// A cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text, displayed as-is.
    Str(String),
    /// A float, displayed in fixed-point with six fractional digits.
    Double(f64),
}

impl Value {
    /// Build a value from a numeric tag and its payload.
    ///
    /// Fails with [`TableError::InvalidType`] if the tag is unknown or the
    /// payload is not the kind the tag announces.
    pub fn from_tagged(tag: u32, payload: Payload<'_>) -> Result<Self, TableError> {
        match (ValueType::try_from(tag)?, payload) {
            (ValueType::Str, Payload::Text(text)) => Ok(Self::Str(text.to_owned())),
            (ValueType::Double, Payload::Number(n)) => Ok(Self::Double(n)),
            _ => Err(TableError::InvalidType { tag }),
        }
    }

    /// Type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Str(_) => ValueType::Str,
            Self::Double(_) => ValueType::Double,
        }
    }

    /// The string that is measured and drawn for this value.
    ///
    /// Text is borrowed; numbers are formatted into a fresh string that
    /// lives for one measurement or one render pass.
    pub fn to_display_string(&self) -> Cow<'_, str> {
        match self {
            Self::Str(s) => Cow::Borrowed(s.as_str()),
            Self::Double(n) => Cow::Owned(format!("{n:.6}")),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Double(n)
    }
}
