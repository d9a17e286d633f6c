use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Segment key → censored flag. Only keys mapped to `true` are stored;
/// an absent key reads as not censored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CensorState {
    censored: BTreeSet<String>,
}

impl CensorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_censored(&self, key: &str) -> bool {
        self.censored.contains(key)
    }

    pub fn set(&mut self, key: impl Into<String>, censored: bool) {
        let key = key.into();
        if censored {
            self.censored.insert(key);
        } else {
            self.censored.remove(&key);
        }
    }

    /// Number of censored keys.
    pub fn len(&self) -> usize {
        self.censored.len()
    }

    pub fn is_empty(&self) -> bool {
        self.censored.is_empty()
    }

    pub fn censored_keys(&self) -> impl Iterator<Item = &str> {
        self.censored.iter().map(String::as_str)
    }

    /// Entries as `(key, true)` pairs, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.censored_keys().map(|k| (k, true))
    }
}

impl<K: Into<String>> FromIterator<K> for CensorState {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            censored: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Serialize for CensorState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for CensorState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, bool>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(key, censored)| censored.then_some(key))
            .collect())
    }
}
