//! Feature rows: the single flat record submitted to the model per request.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use std::fmt;
use std::str::FromStr;

/// One cell of a feature row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Int(i64),
    Float(f64),
    /// Raw categorical text. Only the raw layout produces these.
    Text(String),
}

impl FeatureValue {
    /// Integer when the number has no fractional part, float otherwise.
    pub fn from_number(n: f64) -> Self {
        if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
            FeatureValue::Int(n as i64)
        } else {
            FeatureValue::Float(n)
        }
    }

    /// Numeric view of the value; `None` for text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Int(v) => Some(*v as f64),
            FeatureValue::Float(v) => Some(*v),
            FeatureValue::Text(_) => None,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.as_f64() == Some(0.0)
    }
}

impl From<i64> for FeatureValue {
    fn from(v: i64) -> Self {
        FeatureValue::Int(v)
    }
}

impl From<bool> for FeatureValue {
    fn from(v: bool) -> Self {
        FeatureValue::Int(v as i64)
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Int(v) => write!(f, "{v}"),
            FeatureValue::Float(v) => write!(f, "{v}"),
            FeatureValue::Text(v) => write!(f, "{v}"),
        }
    }
}

/// Ordered column-name -> value mapping.
///
/// Column order is significant: it is the order the model receives the
/// features in. Names are unique; inserting an existing name overwrites the
/// value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureRow {
    cells: Vec<(String, FeatureValue)>,
}

impl FeatureRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a column, keeping the original position on overwrite.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<FeatureValue>) {
        let column = column.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(name, _)| *name == column) {
            Some((_, slot)) => *slot = value,
            None => self.cells.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&FeatureValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    /// Column names in submission order.
    pub fn columns(&self) -> Vec<&str> {
        self.cells.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.cells.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Re-key the row to exactly `columns`, in that order.
    ///
    /// Names not present in the row are filled with 0; columns of the row
    /// not listed are dropped.
    pub fn reconcile<S: AsRef<str>>(&self, columns: &[S]) -> FeatureRow {
        let cells = columns
            .iter()
            .map(|column| {
                let column = column.as_ref();
                let value = self.get(column).cloned().unwrap_or(FeatureValue::Int(0));
                (column.to_string(), value)
            })
            .collect();
        FeatureRow { cells }
    }
}

impl FromIterator<(String, FeatureValue)> for FeatureRow {
    fn from_iter<I: IntoIterator<Item = (String, FeatureValue)>>(iter: I) -> Self {
        let mut row = FeatureRow::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

impl Serialize for FeatureRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Which row shape the builder emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowLayout {
    /// Ordinal/one-hot encoded columns reconciled against the expected list.
    #[default]
    Encoded,
    /// Raw form values with categorical text, submitted as-is.
    Raw,
}

impl fmt::Display for RowLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowLayout::Encoded => write!(f, "encoded"),
            RowLayout::Raw => write!(f, "raw"),
        }
    }
}

impl FromStr for RowLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "encoded" => Ok(RowLayout::Encoded),
            "raw" => Ok(RowLayout::Raw),
            other => Err(format!("invalid row layout: '{other}'")),
        }
    }
}
