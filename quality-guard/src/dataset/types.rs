//! Canonical column type categories.
//!
//! Arrow carries precise physical types (`Int32`, `Int64`, `Utf8View`, ...).
//! Schema checks compare [`TypeCategory`] values instead, so two integer widths
//! are considered the same type.

use crate::error::{QualityError, Result};
use arrow::datatypes::DataType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical classification of a column's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeCategory {
    /// Signed or unsigned integers of any width
    Integer,
    /// Floating point and decimal values
    Float,
    /// UTF-8 strings
    Text,
    /// Booleans
    Boolean,
    /// Dates, times, timestamps, durations and intervals
    Temporal,
    /// Anything else (binary, nested, null, dictionary, ...)
    Other,
}

impl TypeCategory {
    /// All categories, in declaration order.
    pub const ALL: [TypeCategory; 6] = [
        TypeCategory::Integer,
        TypeCategory::Float,
        TypeCategory::Text,
        TypeCategory::Boolean,
        TypeCategory::Temporal,
        TypeCategory::Other,
    ];

    /// Classifies an Arrow data type.
    pub fn from_data_type(data_type: &DataType) -> Self {
        match data_type {
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64 => TypeCategory::Integer,
            DataType::Float16
            | DataType::Float32
            | DataType::Float64
            | DataType::Decimal128(_, _)
            | DataType::Decimal256(_, _) => TypeCategory::Float,
            DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View => TypeCategory::Text,
            DataType::Boolean => TypeCategory::Boolean,
            DataType::Date32
            | DataType::Date64
            | DataType::Time32(_)
            | DataType::Time64(_)
            | DataType::Timestamp(_, _)
            | DataType::Duration(_)
            | DataType::Interval(_) => TypeCategory::Temporal,
            _ => TypeCategory::Other,
        }
    }

    /// Returns true for categories the outlier check can compute statistics on.
    pub fn is_numeric(&self) -> bool {
        matches!(self, TypeCategory::Integer | TypeCategory::Float)
    }

    /// The canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeCategory::Integer => "integer",
            TypeCategory::Float => "float",
            TypeCategory::Text => "text",
            TypeCategory::Boolean => "boolean",
            TypeCategory::Temporal => "temporal",
            TypeCategory::Other => "other",
        }
    }
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeCategory {
    type Err = QualityError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        let category = match normalized.as_str() {
            "integer" | "int" | "int8" | "int16" | "int32" | "int64" | "uint8" | "uint16"
            | "uint32" | "uint64" | "long" => TypeCategory::Integer,
            "float" | "float16" | "float32" | "float64" | "double" | "decimal" | "number" => {
                TypeCategory::Float
            }
            "text" | "string" | "str" | "utf8" | "object" => TypeCategory::Text,
            "boolean" | "bool" => TypeCategory::Boolean,
            "temporal" | "date" | "time" | "datetime" | "timestamp" | "duration" => {
                TypeCategory::Temporal
            }
            "other" => TypeCategory::Other,
            _ => {
                return Err(QualityError::invalid_parameter(
                    "type_category",
                    s,
                    "unknown type category",
                ))
            }
        };
        Ok(category)
    }
}
