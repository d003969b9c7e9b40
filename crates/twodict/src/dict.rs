//! Insertion-ordered dictionary with symmetric key/value lookup.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DictError;

/// Ordered collection of `(key, value)` pairs where either element of a pair
/// can be used to look up the other.
///
/// Inserting a pair first evicts every existing pair that shares an element
/// with it, so no element ever appears in two pairs. Lookups are linear scans
/// over the pair list; the tables this backs hold a few dozen entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TwoWayOrderedDict<T> {
    items: Vec<(T, T)>,
}

// Deserialization loads pair by pair through `insert` so the no-shared-element
// invariant holds even for hand-edited input.
impl<'de, T> Deserialize<'de> for TwoWayOrderedDict<T>
where
    T: Deserialize<'de> + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pairs = Vec::<(T, T)>::deserialize(deserializer)?;
        Ok(Self::from_pairs(pairs))
    }
}

impl<T: PartialEq> TwoWayOrderedDict<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a dictionary from `(key, value)` pairs, applying the usual
    /// eviction rules pair by pair. Order of the source is preserved.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let mut dict = Self::new();
        dict.update(pairs);
        dict
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Return the element paired with `key`, comparing `key` against both
    /// sides of every pair in insertion order.
    pub fn get(&self, key: &T) -> Option<&T> {
        self.items.iter().find_map(|(a, b)| {
            if a == key {
                Some(b)
            } else if b == key {
                Some(a)
            } else {
                None
            }
        })
    }

    /// Like [`get`](Self::get), but reports a missing key as an error.
    pub fn lookup(&self, key: &T) -> Result<&T, DictError>
    where
        T: fmt::Debug,
    {
        self.get(key)
            .ok_or_else(|| DictError::NotFound(format!("{key:?}")))
    }

    pub fn contains(&self, key: &T) -> bool {
        self.get(key).is_some()
    }

    /// Insert a pair, evicting every existing pair in which `key` or `value`
    /// appears on either side. Both elements of the new pair may collide with
    /// different pairs, so up to two pairs can be evicted. The new pair is
    /// always appended as the most recent one.
    pub fn insert(&mut self, key: T, value: T) {
        self.items
            .retain(|(a, b)| *a != key && *b != key && *a != value && *b != value);
        self.items.push((key, value));
    }

    /// Remove and return the pair containing `key` on either side.
    pub fn remove(&mut self, key: &T) -> Result<(T, T), DictError>
    where
        T: fmt::Debug,
    {
        match self.position(key) {
            Some(index) => Ok(self.items.remove(index)),
            None => Err(DictError::NotFound(format!("{key:?}"))),
        }
    }

    /// Remove the pair containing `key` and return the element paired with it.
    pub fn pop(&mut self, key: &T) -> Result<T, DictError>
    where
        T: fmt::Debug,
    {
        let index = self
            .position(key)
            .ok_or_else(|| DictError::NotFound(format!("{key:?}")))?;
        let (a, b) = self.items.remove(index);
        Ok(if &a == key { b } else { a })
    }

    /// Remove and return the most recently inserted pair.
    pub fn pop_last(&mut self) -> Result<(T, T), DictError> {
        self.items.pop().ok_or(DictError::Empty)
    }

    /// Return the element paired with `key` if present, otherwise insert
    /// `(key, default)` and return `default`. The insertion goes through
    /// [`insert`](Self::insert), so a colliding `default` still evicts.
    pub fn set_default(&mut self, key: T, default: T) -> T
    where
        T: Clone,
    {
        if let Some(found) = self.get(&key) {
            return found.clone();
        }
        self.insert(key, default.clone());
        default
    }

    /// Load pairs into the dictionary, overwriting by eviction. Each loaded
    /// pair becomes the most recent one at the time it is applied.
    pub fn update<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (T, T)>,
    {
        for (key, value) in pairs {
            self.insert(key, value);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate over first elements in insertion order.
    pub fn iter(&self) -> Keys<'_, T> {
        Keys {
            inner: self.items.iter(),
        }
    }

    /// The full pair list in insertion order.
    pub fn items(&self) -> &[(T, T)] {
        &self.items
    }

    pub fn keys(&self) -> Vec<&T> {
        self.items.iter().map(|(a, _)| a).collect()
    }

    pub fn values(&self) -> Vec<&T> {
        self.items.iter().map(|(_, b)| b).collect()
    }

    fn position(&self, key: &T) -> Option<usize> {
        self.items.iter().position(|(a, b)| a == key || b == key)
    }
}

impl<T: PartialEq> Default for TwoWayOrderedDict<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> Extend<(T, T)> for TwoWayOrderedDict<T> {
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, pairs: I) {
        self.update(pairs);
    }
}

impl<T: PartialEq> FromIterator<(T, T)> for TwoWayOrderedDict<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(pairs: I) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<'a, T: PartialEq> IntoIterator for &'a TwoWayOrderedDict<T> {
    type Item = &'a T;
    type IntoIter = Keys<'a, T>;

    fn into_iter(self) -> Keys<'a, T> {
        self.iter()
    }
}

/// Iterator over the first element of each pair, in insertion order.
pub struct Keys<'a, T> {
    inner: std::slice::Iter<'a, (T, T)>,
}

impl<'a, T> Iterator for Keys<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|(key, _)| key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_lookup() {
        let mut dict = TwoWayOrderedDict::new();
        dict.insert("mp4", "Video (mp4)");
        dict.insert("m4a", "Audio (m4a)");

        assert_eq!(dict.get(&"mp4"), Some(&"Video (mp4)"));
        assert_eq!(dict.get(&"Video (mp4)"), Some(&"mp4"));
        assert_eq!(dict.get(&"Audio (m4a)"), Some(&"m4a"));
        assert_eq!(dict.get(&"webm"), None);
    }

    #[test]
    fn test_lookup_missing_is_not_found() {
        let dict: TwoWayOrderedDict<&str> = TwoWayOrderedDict::new();
        assert_eq!(
            dict.lookup(&"mp4"),
            Err(DictError::NotFound("\"mp4\"".to_string()))
        );
    }

    #[test]
    fn test_insert_evicts_pair_sharing_key() {
        let mut dict = TwoWayOrderedDict::from_pairs([("a", "1"), ("b", "2")]);
        dict.insert("a", "3");

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get(&"3"), Some(&"a"));
        assert_eq!(dict.get(&"1"), None);
        // Evicted pair is gone entirely, new pair lands at the end.
        assert_eq!(dict.items(), &[("b", "2"), ("a", "3")]);
    }

    #[test]
    fn test_insert_can_evict_two_pairs() {
        let mut dict = TwoWayOrderedDict::from_pairs([("a", "1"), ("b", "2"), ("c", "3")]);
        // "a" sits in the first pair, "2" in the second; both must go.
        dict.insert("a", "2");

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.items(), &[("c", "3"), ("a", "2")]);
        assert!(!dict.contains(&"1"));
        assert!(!dict.contains(&"b"));
    }

    #[test]
    fn test_remove_by_either_side() {
        let mut dict = TwoWayOrderedDict::from_pairs([("a", "1"), ("b", "2")]);
        assert_eq!(dict.remove(&"2"), Ok(("b", "2")));
        assert_eq!(dict.len(), 1);
        assert!(matches!(dict.remove(&"b"), Err(DictError::NotFound(_))));
    }

    #[test]
    fn test_pop_returns_paired_element() {
        let mut dict = TwoWayOrderedDict::from_pairs([("a", "1"), ("b", "2")]);
        assert_eq!(dict.pop(&"a"), Ok("1"));
        assert_eq!(dict.pop(&"2"), Ok("b"));
        assert!(matches!(dict.pop(&"a"), Err(DictError::NotFound(_))));
        // With-default form goes through Option.
        assert_eq!(dict.pop(&"a").ok().unwrap_or("fallback"), "fallback");
    }

    #[test]
    fn test_pop_last() {
        let mut dict = TwoWayOrderedDict::from_pairs([("a", "1"), ("b", "2")]);
        assert_eq!(dict.pop_last(), Ok(("b", "2")));
        assert_eq!(dict.pop_last(), Ok(("a", "1")));
        assert_eq!(dict.pop_last(), Err(DictError::Empty));
    }

    #[test]
    fn test_set_default() {
        let mut dict = TwoWayOrderedDict::from_pairs([("a", "1")]);
        assert_eq!(dict.set_default("a", "9"), "1");
        assert_eq!(dict.set_default("b", "2"), "2");
        assert_eq!(dict.items(), &[("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_iteration_yields_keys_in_order() {
        let dict = TwoWayOrderedDict::from_pairs([("a", "1"), ("b", "2"), ("c", "3")]);
        let keys: Vec<&&str> = dict.iter().collect();
        assert_eq!(keys, vec![&"a", &"b", &"c"]);
        // Restartable: a second pass sees the same sequence.
        assert_eq!(dict.iter().count(), 3);
        assert_eq!((&dict).into_iter().next(), Some(&"a"));
    }

    #[test]
    fn test_keys_values_items() {
        let dict = TwoWayOrderedDict::from_pairs([("a", "1"), ("b", "2")]);
        assert_eq!(dict.keys(), vec![&"a", &"b"]);
        assert_eq!(dict.values(), vec![&"1", &"2"]);
        assert_eq!(dict.items(), &[("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_update_overwrites_by_eviction() {
        let mut dict = TwoWayOrderedDict::from_pairs([("x", "9"), ("y", "8")]);
        dict.update([("x", "1")]);

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.items().last(), Some(&("x", "1")));
        assert_eq!(dict.get(&"9"), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = TwoWayOrderedDict::from_pairs([("a", "1")]);
        let mut copy = original.clone();
        copy.insert("b", "2");

        assert_eq!(original.len(), 1);
        assert_eq!(copy.len(), 2);
        assert_eq!(original.items(), &[("a", "1")]);
    }

    #[test]
    fn test_clear() {
        let mut dict = TwoWayOrderedDict::from_pairs([("a", "1"), ("b", "2")]);
        dict.clear();
        assert_eq!(dict.len(), 0);
        assert!(dict.is_empty());
        assert_eq!(dict.pop_last(), Err(DictError::Empty));
    }

    #[test]
    fn test_serializes_as_ordered_pair_list() {
        let dict = TwoWayOrderedDict::from_pairs([("a", "1"), ("b", "2")]);
        let json = serde_json::to_string(&dict).unwrap();
        assert_eq!(json, r#"[["a","1"],["b","2"]]"#);

        let back: TwoWayOrderedDict<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back.get(&"a".to_string()), Some(&"1".to_string()));
    }
}
