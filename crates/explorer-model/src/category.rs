//! Category keys for grouped statistics.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// A distinct value of a grouping column.
///
/// Grouping columns come in several dtypes (`Sex` is text, `Pclass` an
/// integer), so the key keeps the native value and defines a total order:
/// missing values first, then integers, floats and text.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CategoryValue {
    /// A null in the grouping column.
    Missing,
    Int(i64),
    Float(f64),
    Text(String),
}

/// Category name used for ungrouped statistics.
pub const OVERALL_CATEGORY: &str = "Overall";

impl CategoryValue {
    /// The category reported when no grouping column is given.
    pub fn overall() -> Self {
        Self::Text(OVERALL_CATEGORY.to_string())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Missing => 0,
            Self::Int(_) => 1,
            Self::Float(_) => 2,
            Self::Text(_) => 3,
        }
    }
}

impl Ord for CategoryValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for CategoryValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CategoryValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CategoryValue {}

impl fmt::Display for CategoryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("null"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => f.write_str(&format_float(*value)),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for CategoryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CategoryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CategoryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for CategoryValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for CategoryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Formats a float without trailing zeros (`2.0` -> `"2"`, `2.50` -> `"2.5"`).
fn format_float(value: f64) -> String {
    let text = format!("{value}");
    if !text.contains('.') {
        return text;
    }
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_within_variant() {
        assert!(CategoryValue::Int(1) < CategoryValue::Int(2));
        assert!(CategoryValue::from("female") < CategoryValue::from("male"));
        assert!(CategoryValue::Float(-0.5) < CategoryValue::Float(0.25));
    }

    #[test]
    fn test_missing_sorts_first() {
        let mut values = vec![
            CategoryValue::from("b"),
            CategoryValue::Missing,
            CategoryValue::from("a"),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                CategoryValue::Missing,
                CategoryValue::from("a"),
                CategoryValue::from("b"),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(CategoryValue::Int(3).to_string(), "3");
        assert_eq!(CategoryValue::Float(2.0).to_string(), "2");
        assert_eq!(CategoryValue::Float(2.50).to_string(), "2.5");
        assert_eq!(CategoryValue::from("Mr").to_string(), "Mr");
        assert_eq!(CategoryValue::Missing.to_string(), "null");
        assert_eq!(CategoryValue::overall().to_string(), "Overall");
    }

    #[test]
    fn test_serializes_untagged() {
        let values = vec![
            CategoryValue::Missing,
            CategoryValue::Int(1),
            CategoryValue::from("Mr"),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[null,1,"Mr"]"#);
    }
}
