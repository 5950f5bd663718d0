//! Typed property records and merging.
//!
//! Scene objects carry a small bag of display properties (color, label,
//! opacity, ...). [`Properties`] stores them as an ordered map of typed
//! values, and [`copy_properties`] merges one bag into another.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single display property value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Boolean flag
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// Text value
    Text(String),
}

/// Ordered property record keyed by property name.
pub type Properties = BTreeMap<String, PropertyValue>;

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(b) => write!(f, "{b}"),
            PropertyValue::Number(n) => write!(f, "{n}"),
            PropertyValue::Text(s) => f.write_str(s),
        }
    }
}

/// Copy every key/value pair of `from` into `to`, overwriting existing keys.
///
/// Works with any map that can be extended with owned pairs, such as
/// `HashMap` and `BTreeMap`. Keys missing from `from` are left untouched.
///
/// # Example
/// ```
/// use drishti_view::props::{copy_properties, Properties};
///
/// let mut to = Properties::new();
/// to.insert("a".into(), 1.0.into());
/// let mut from = Properties::new();
/// from.insert("b".into(), 2.0.into());
///
/// copy_properties(&mut to, &from);
/// assert_eq!(to.len(), 2);
/// ```
pub fn copy_properties<'a, K, V, M, I>(to: &mut M, from: I)
where
    K: Clone + 'a,
    V: Clone + 'a,
    M: Extend<(K, V)>,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    to.extend(from.into_iter().map(|(k, v)| (k.clone(), v.clone())));
}
