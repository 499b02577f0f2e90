//! Reconciling classified tokens with a declared option schema.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};
use tracing::trace;

use crate::classify::ClassifiedResult;
use crate::schema::OptionSchema;

/// The value extracted for one option key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionValue {
    /// A named or positional value.
    Text(String),
    /// A bare flag; serializes as `true`.
    Flag,
}

impl OptionValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// The text value, or `None` for a flag.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Flag => None,
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Flag)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Flag => f.write_str("true"),
        }
    }
}

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(value) => serializer.serialize_str(value),
            Self::Flag => serializer.serialize_bool(true),
        }
    }
}

/// Final mapping from option key to value.
///
/// Declared options that matched nothing are absent rather than present with
/// an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Extraction(BTreeMap<String, OptionValue>);

impl Extraction {
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0.get(key)
    }

    /// The text value for `key`, if it was extracted as text.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(OptionValue::as_str)
    }

    /// Whether `key` was extracted as a flag.
    pub fn is_flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(OptionValue::is_flag)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_inner(self) -> BTreeMap<String, OptionValue> {
        self.0
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for Extraction {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, const N: usize> From<[(K, OptionValue); N]> for Extraction {
    fn from(entries: [(K, OptionValue); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for Extraction {
    type Item = (String, OptionValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Builds the option mapping for `schema` from a classified token set.
///
/// For the option declared at index `i`: the first named value wins (later
/// duplicates are ignored); failing that, the positional token at index `i` is
/// used; failing that, the option is left out.
///
/// Every flag is then set to [`OptionValue::Flag`], declared or not. Flags are
/// applied last, so a flag whose key matches a declared option replaces any
/// value already extracted for it. This overwrite is deliberate and kept as
/// is; a conflicting flag is not treated as an error.
pub fn extract(classified: &ClassifiedResult, schema: &[OptionSchema]) -> Extraction {
    let mut map = BTreeMap::new();
    let ordered = classified.ordered_values(schema);

    for (option, positional) in schema.iter().zip(ordered) {
        let value = match classified.option_values(&option.name).first() {
            Some(named) => named.as_str(),
            None => match positional {
                Some(value) => value,
                None => {
                    trace!(option = %option.name, "No value for option");
                    continue;
                }
            },
        };
        trace!(option = %option.name, value, "Extracted option");
        map.insert(option.name.clone(), OptionValue::text(value));
    }

    for flag in &classified.flags {
        map.insert(flag.clone(), OptionValue::Flag);
    }

    Extraction(map)
}
