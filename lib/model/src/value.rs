use crate::error::ValidationError;
use serde_json::Value as Json;

/// The datatype of an entity field, mirroring the XSD datatype used for its
/// literals in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Str,
    Decimal,
    Integer,
    Boolean,
    /// Stored as an `xsd:dateTime` literal, carried around as its lexical form.
    DateTime,
}

impl FieldKind {
    /// The JSON value substituted for an absent optional field in responses.
    pub fn default_json(self) -> Json {
        match self {
            Self::Str | Self::DateTime => Json::String(String::new()),
            Self::Decimal => Json::from(0.0),
            Self::Integer => Json::from(0),
            Self::Boolean => Json::Bool(false),
        }
    }
}

/// A single decoded field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Decimal(f64),
    Integer(i64),
    Boolean(bool),
    DateTime(String),
}

impl FieldValue {
    /// Decodes a JSON request value into a typed field value.
    ///
    /// Numeric fields tolerate string-encoded numbers, and integer fields go
    /// through a float conversion first so that `"500.0"` decodes to `500`.
    pub fn from_json(
        kind: FieldKind,
        field: &'static str,
        value: &Json,
    ) -> Result<Self, ValidationError> {
        let invalid = |reason: String| ValidationError::InvalidField { field, reason };
        match kind {
            FieldKind::Str => match value {
                Json::String(s) => Ok(Self::Str(s.clone())),
                other => Err(invalid(format!("expected a string, got {other}"))),
            },
            FieldKind::DateTime => match value {
                Json::String(s) => Ok(Self::DateTime(s.clone())),
                other => Err(invalid(format!("expected a dateTime string, got {other}"))),
            },
            FieldKind::Decimal => parse_decimal(value)
                .map(Self::Decimal)
                .ok_or_else(|| invalid(format!("expected a number, got {value}"))),
            FieldKind::Integer => parse_decimal(value)
                .map(|v| Self::Integer(v as i64))
                .ok_or_else(|| invalid(format!("expected an integer, got {value}"))),
            FieldKind::Boolean => match value {
                Json::Bool(b) => Ok(Self::Boolean(*b)),
                Json::String(s) if s.eq_ignore_ascii_case("true") => Ok(Self::Boolean(true)),
                Json::String(s) if s.eq_ignore_ascii_case("false") => Ok(Self::Boolean(false)),
                other => Err(invalid(format!("expected a boolean, got {other}"))),
            },
        }
    }

    /// Decodes the lexical form of a store literal.
    ///
    /// Same coercion rules as [`FieldValue::from_json`]; the caller decides
    /// what to do with an invalid lexical form (the mappers substitute the
    /// field default, matching how the API always behaved).
    pub fn from_lexical(kind: FieldKind, lexical: &str) -> Result<Self, ValidationError> {
        let invalid = |reason: String| ValidationError::InvalidField {
            field: "literal",
            reason,
        };
        match kind {
            FieldKind::Str => Ok(Self::Str(lexical.to_owned())),
            FieldKind::DateTime => Ok(Self::DateTime(lexical.to_owned())),
            FieldKind::Decimal => parse_finite(lexical)
                .map(Self::Decimal)
                .ok_or_else(|| invalid(format!("'{lexical}' is not a number"))),
            FieldKind::Integer => parse_finite(lexical)
                .map(|v| Self::Integer(v as i64))
                .ok_or_else(|| invalid(format!("'{lexical}' is not an integer"))),
            FieldKind::Boolean => match lexical {
                "true" => Ok(Self::Boolean(true)),
                "false" => Ok(Self::Boolean(false)),
                other => Err(invalid(format!("'{other}' is not a boolean"))),
            },
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Str(_) => FieldKind::Str,
            Self::Decimal(_) => FieldKind::Decimal,
            Self::Integer(_) => FieldKind::Integer,
            Self::Boolean(_) => FieldKind::Boolean,
            Self::DateTime(_) => FieldKind::DateTime,
        }
    }

    pub fn to_json(&self) -> Json {
        match self {
            Self::Str(s) | Self::DateTime(s) => Json::String(s.clone()),
            Self::Decimal(v) => Json::from(*v),
            Self::Integer(v) => Json::from(*v),
            Self::Boolean(b) => Json::Bool(*b),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) | Self::DateTime(s) => Some(s),
            _ => None,
        }
    }
}

fn parse_decimal(value: &Json) -> Option<f64> {
    match value {
        Json::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Json::String(s) => parse_finite(s),
        _ => None,
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
