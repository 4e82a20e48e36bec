//! Sorted area index with nearest-enclosing lookup.
//!
//! This module contains [`AreaMap`], the base ordered index. It keeps keys in
//! a single sorted sequence (driving binary search) next to a hash map
//! (driving exact lookup), and answers approximate queries by scanning
//! backward from a key's sorted insertion point through the
//! [`Resemblance`] strategy.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::AreaIndex;
use crate::order::{Comparator, NaturalOrder};
use crate::resemble::Resemblance;

/// An ordered map over keys that form a containment hierarchy.
///
/// `AreaMap` maintains two views of the same entries: a key sequence always
/// sorted by the configured [`Comparator`], and a hash map from key to value.
/// The sorted sequence exists for binary search placement and for the
/// backward scans of [`get_similar`](AreaMap::get_similar); the hash map
/// gives O(1) exact lookup regardless of sort position.
///
/// Sort order and containment are independent: the comparator is a plain
/// total order (natural `Ord` by default), while the [`Resemblance`]
/// strategy supplied at construction decides which keys enclose which. Both
/// strategies are fixed for the lifetime of the map.
///
/// ## Type Parameters
///
/// - `K`: key type; stored in both views, so `Clone + Eq + Hash`
/// - `V`: value type, owned by the map
/// - `R`: the [`Resemblance`] strategy (usually a closure or fn pointer)
/// - `C`: the [`Comparator`] strategy, [`NaturalOrder`] by default
///
/// ## Examples
///
/// ```rust
/// use areamap::AreaMap;
///
/// fn encloses(ancestor: &String, key: &String) -> bool {
///     key.starts_with(ancestor.as_str())
///         && (key.len() == ancestor.len() || key.as_bytes()[ancestor.len()] == b'/')
/// }
///
/// let mut map = AreaMap::new(encloses);
/// map.insert("etc".to_string(), "base");
/// map.insert("etc/nginx".to_string(), "web");
///
/// assert_eq!(map.get_exact(&"etc/nginx".to_string()), Some(&"web"));
///
/// // "etc/ssh" has no exact entry; the nearest enclosing one is "etc".
/// let mut found = None;
/// map.get_similar(&"etc/ssh".to_string(), |k, v| {
///     found = Some((k.clone(), *v));
///     true
/// });
/// assert_eq!(found, Some(("etc".to_string(), "base")));
/// ```
pub struct AreaMap<K, V, R, C = NaturalOrder>
where
    K: Clone + Eq + Hash,
    R: Resemblance<K>,
    C: Comparator<K>,
{
    pub(crate) keys: Vec<K>,
    pub(crate) values: HashMap<K, V>,
    pub(crate) resemblance: R,
    comparator: C,
}

impl<K, V, R> AreaMap<K, V, R>
where
    K: Clone + Eq + Hash + Ord,
    R: Resemblance<K>,
{
    /// Create an empty map ordered by the key type's natural `Ord`.
    pub fn new(resemblance: R) -> Self {
        Self::with_comparator(resemblance, NaturalOrder)
    }
}

impl<K, V, R, C> AreaMap<K, V, R, C>
where
    K: Clone + Eq + Hash,
    R: Resemblance<K>,
    C: Comparator<K>,
{
    /// Create an empty map with an explicit sort comparator.
    pub fn with_comparator(resemblance: R, comparator: C) -> Self {
        Self {
            keys: Vec::new(),
            values: HashMap::new(),
            resemblance,
            comparator,
        }
    }

    /// Insert or replace an entry, returning its sorted position.
    ///
    /// If the key already exists (equal under the comparator) only its value
    /// is replaced; the sorted position is unchanged. Otherwise the key is
    /// spliced into the sorted sequence at its binary-search insertion point.
    ///
    /// The returned position is part of the contract:
    /// [`MembershipMap::insert_optimal`](crate::MembershipMap::insert_optimal)
    /// uses it to examine the new entry's neighbors.
    pub fn insert(&mut self, key: K, value: V) -> usize {
        match self.search(&key) {
            Ok(idx) => {
                self.values.insert(key, value);
                idx
            }
            Err(idx) => {
                self.keys.insert(idx, key.clone());
                self.values.insert(key, value);
                idx
            }
        }
    }

    /// Exact lookup by key. O(1), independent of sort position.
    #[inline]
    pub fn get_exact(&self, key: &K) -> Option<&V> {
        self.values.get(key)
    }

    /// Mutable exact lookup by key.
    #[inline]
    pub fn get_exact_mut(&mut self, key: &K) -> Option<&mut V> {
        self.values.get_mut(key)
    }

    /// Approximate lookup: feed the consumer the enclosing entries for `key`,
    /// nearest first.
    ///
    /// An exact binary-search hit invokes the consumer once on that entry.
    /// On a miss, candidates are scanned backward from the insertion point;
    /// every candidate for which the resemblance strategy says it encloses
    /// `key` is handed to the consumer. A non-resembling candidate is
    /// skipped, not a stopping point: resemblance can be non-contiguous
    /// across the sort order, so the scan continues toward index 0.
    ///
    /// The consumer returns `true` to stop the scan. Returning `false`
    /// throughout visits every enclosing entry, nearest to farthest.
    pub fn get_similar<'a, F>(&'a self, key: &K, mut consumer: F)
    where
        F: FnMut(&'a K, &'a V) -> bool,
    {
        match self.search(key) {
            Ok(idx) => {
                let found = &self.keys[idx];
                consumer(found, &self.values[found]);
            }
            Err(insertion) => {
                for candidate in self.keys[..insertion].iter().rev() {
                    if !self.resemblance.resembles(candidate, key) {
                        continue;
                    }
                    if consumer(candidate, &self.values[candidate]) {
                        break;
                    }
                }
            }
        }
    }

    /// Remove an entry by key, returning its value. No-op if absent.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let value = self.values.remove(key)?;
        if let Some(pos) = self.keys.iter().position(|k| k == key) {
            self.keys.remove(pos);
        }
        Some(value)
    }

    /// Remove the first entry (in sorted order) whose value equals `value`,
    /// returning its key. O(n). No-op if no entry matches.
    pub fn remove_by_value(&mut self, value: &V) -> Option<K>
    where
        V: PartialEq,
    {
        let pos = self
            .keys
            .iter()
            .position(|k| self.values.get(k) == Some(value))?;
        let key = self.keys.remove(pos);
        self.values.remove(&key);
        Some(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.values.contains_key(key)
    }

    /// The keys in sorted order. Borrowed view; any mutation of the map
    /// invalidates it, which the borrow checker enforces.
    #[inline]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// The values in sorted-key order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.keys.iter().map(move |k| &self.values[k])
    }

    /// Iterate over entries in sorted-key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.keys.iter().map(move |k| (k, &self.values[k]))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    /// Bulk merge by appending another map's keys after this map's.
    ///
    /// This is merge-by-append, not merge-with-resort: the caller must
    /// ensure the two maps cover disjoint, order-compatible key ranges
    /// (every key of `other` sorts after every key of `self`). Violating
    /// that breaks the sortedness invariant and with it every subsequent
    /// binary search; debug builds assert it.
    pub fn append(&mut self, mut other: Self) {
        self.keys.append(&mut other.keys);
        self.values.extend(other.values.drain());
        debug_assert!(
            self.is_sorted(),
            "append requires disjoint, order-compatible key ranges"
        );
    }

    #[inline]
    fn search(&self, key: &K) -> Result<usize, usize> {
        self.keys
            .binary_search_by(|probe| self.comparator.compare(probe, key))
    }

    pub(crate) fn is_sorted(&self) -> bool {
        self.keys
            .windows(2)
            .all(|w| self.comparator.compare(&w[0], &w[1]) == Ordering::Less)
    }
}

impl<K, V, R, C> PartialEq for AreaMap<K, V, R, C>
where
    K: Clone + Eq + Hash,
    V: PartialEq,
    R: Resemblance<K>,
    C: Comparator<K>,
{
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.values == other.values
    }
}

impl<K, V, R, C> Eq for AreaMap<K, V, R, C>
where
    K: Clone + Eq + Hash,
    V: Eq,
    R: Resemblance<K>,
    C: Comparator<K>,
{
}

impl<K, V, R, C> Hash for AreaMap<K, V, R, C>
where
    K: Clone + Eq + Hash,
    V: Hash,
    R: Resemblance<K>,
    C: Comparator<K>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Entry pairs in sorted order; well-defined because the key sequence
        // is exactly the value map's key set.
        for key in &self.keys {
            key.hash(state);
            self.values[key].hash(state);
        }
    }
}

impl<K, V, R, C> fmt::Debug for AreaMap<K, V, R, C>
where
    K: Clone + Eq + Hash + fmt::Debug,
    V: fmt::Debug,
    R: Resemblance<K>,
    C: Comparator<K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, R, C> AreaIndex<K, V> for AreaMap<K, V, R, C>
where
    K: Clone + Eq + Hash,
    R: Resemblance<K>,
    C: Comparator<K>,
{
    fn insert(&mut self, key: K, value: V) -> usize {
        AreaMap::insert(self, key, value)
    }

    fn get_exact(&self, key: &K) -> Option<&V> {
        AreaMap::get_exact(self, key)
    }

    fn get_similar<'a, F>(&'a self, key: &K, consumer: F)
    where
        F: FnMut(&'a K, &'a V) -> bool,
        K: 'a,
        V: 'a,
    {
        AreaMap::get_similar(self, key, consumer)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        AreaMap::remove(self, key)
    }

    fn remove_by_value(&mut self, value: &V) -> Option<K>
    where
        V: PartialEq,
    {
        AreaMap::remove_by_value(self, value)
    }

    fn contains_key(&self, key: &K) -> bool {
        AreaMap::contains_key(self, key)
    }

    fn keys(&self) -> &[K] {
        AreaMap::keys(self)
    }

    fn len(&self) -> usize {
        AreaMap::len(self)
    }

    fn clear(&mut self) {
        AreaMap::clear(self)
    }
}
