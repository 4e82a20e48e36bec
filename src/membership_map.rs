//! Minimal area index: an [`AreaMap`] that prunes covered entries.
//!
//! [`MembershipMap`] layers domain-aware insertion and a global compaction
//! pass on top of the base sorted index. Its steady-state invariant is
//! *membership minimality*: no stored key is enclosed by another stored key.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::AreaIndex;
use crate::area_map::AreaMap;
use crate::order::{Comparator, NaturalOrder};
use crate::resemble::Resemblance;

/// An [`AreaMap`] that keeps itself minimal under the resemblance relation.
///
/// Entries are added with [`insert_optimal`](MembershipMap::insert_optimal),
/// which discards an entry already covered by a stored ancestor and evicts
/// stored descendants covered by the new entry. After any sequence of such
/// inserts, no stored key encloses another stored key.
///
/// The base map's whole surface is available on this type as well; plain
/// [`insert`](MembershipMap::insert) bypasses the pruning.
///
/// ## Examples
///
/// ```rust
/// use areamap::MembershipMap;
///
/// fn encloses(ancestor: &String, key: &String) -> bool {
///     key.starts_with(ancestor.as_str())
///         && (key.len() == ancestor.len() || key.as_bytes()[ancestor.len()] == b'/')
/// }
///
/// let mut map = MembershipMap::new(encloses);
/// map.insert_optimal("a/b/c".to_string(), 1);
/// map.insert_optimal("a".to_string(), 2);
///
/// // "a" subsumed its descendant; only the ancestor remains.
/// assert_eq!(map.keys(), ["a".to_string()]);
/// assert_eq!(
///     map.get_enclosing(&"a/b/z".to_string()),
///     Some((&"a".to_string(), &2))
/// );
/// ```
pub struct MembershipMap<K, V, R, C = NaturalOrder>
where
    K: Clone + Eq + Hash,
    R: Resemblance<K>,
    C: Comparator<K>,
{
    inner: AreaMap<K, V, R, C>,
}

impl<K, V, R> MembershipMap<K, V, R>
where
    K: Clone + Eq + Hash + Ord,
    R: Resemblance<K>,
{
    /// Create an empty map ordered by the key type's natural `Ord`.
    pub fn new(resemblance: R) -> Self {
        Self {
            inner: AreaMap::new(resemblance),
        }
    }
}

impl<K, V, R, C> MembershipMap<K, V, R, C>
where
    K: Clone + Eq + Hash,
    R: Resemblance<K>,
    C: Comparator<K>,
{
    /// Create an empty map with an explicit sort comparator.
    pub fn with_comparator(resemblance: R, comparator: C) -> Self {
        Self {
            inner: AreaMap::with_comparator(resemblance, comparator),
        }
    }

    /// Insert an entry, pruning whatever the resemblance relation makes
    /// redundant.
    ///
    /// The entry is first placed by the base [`insert`](AreaMap::insert).
    /// If some earlier key encloses the new key, the new entry is already
    /// covered and is removed again, making the call a no-op on the map's
    /// contents. Only when no such ancestor exists are the entries after the
    /// insertion point examined: each consecutive key the new key encloses
    /// is evicted, up to the first key it does not.
    ///
    /// When an ancestor is found, descendants are deliberately not examined:
    /// the new entry is discarded whole, so anything it would have covered
    /// stays covered by the same ancestor or remains on its own.
    pub fn insert_optimal(&mut self, key: K, value: V) {
        let idx = self.inner.insert(key, value);

        // Decide what to evict while borrowing the sequence, then apply by
        // key; no index-shift arithmetic to get wrong.
        let mut doomed: Vec<K> = Vec::new();
        let keys = &self.inner.keys;
        let key = &keys[idx];
        for ancestor in keys[..idx].iter().rev() {
            if self.inner.resemblance.resembles(ancestor, key) {
                doomed.push(key.clone());
                break;
            }
        }
        if doomed.is_empty() {
            for follower in &keys[idx + 1..] {
                if self.inner.resemblance.resembles(key, follower) {
                    doomed.push(follower.clone());
                } else {
                    break;
                }
            }
        }

        for key in &doomed {
            self.inner.remove(key);
        }
    }

    /// Compact the map by merging entries into their nearest ancestors.
    ///
    /// A single left-to-right sweep over the sorted sequence. For each entry,
    /// the already-visited entries are scanned backward for the nearest key
    /// enclosing it; if one exists, `merge(ancestor_value, value)` decides
    /// the entry's fate. `true` means the entry was absorbed by its ancestor
    /// and is removed; `false` keeps it. Either way only the nearest
    /// ancestor is consulted. Entries with no enclosing ancestor are always
    /// kept.
    pub fn optimize<F>(&mut self, mut merge: F)
    where
        F: FnMut(&V, &V) -> bool,
    {
        let mut i = 0;
        while i < self.inner.keys.len() {
            let mut absorbed = false;
            let key = &self.inner.keys[i];
            for ancestor in self.inner.keys[..i].iter().rev() {
                if self.inner.resemblance.resembles(ancestor, key) {
                    absorbed = merge(&self.inner.values[ancestor], &self.inner.values[key]);
                    // Nearest ancestor only; a declined merge still ends the scan.
                    break;
                }
            }
            if absorbed {
                let key = self.inner.keys.remove(i);
                self.inner.values.remove(&key);
            } else {
                i += 1;
            }
        }
    }

    /// The nearest enclosing entry for `key`, or `None` if no stored key
    /// encloses it. An exact entry for `key` counts as enclosing.
    pub fn get_enclosing<'a>(&'a self, key: &K) -> Option<(&'a K, &'a V)> {
        let mut found = None;
        self.inner.get_similar(key, |k, v| {
            found = Some((k, v));
            true
        });
        found
    }

    /// Insert or replace without pruning. See [`AreaMap::insert`].
    pub fn insert(&mut self, key: K, value: V) -> usize {
        self.inner.insert(key, value)
    }

    /// Exact lookup by key. See [`AreaMap::get_exact`].
    #[inline]
    pub fn get_exact(&self, key: &K) -> Option<&V> {
        self.inner.get_exact(key)
    }

    /// Mutable exact lookup by key.
    #[inline]
    pub fn get_exact_mut(&mut self, key: &K) -> Option<&mut V> {
        self.inner.get_exact_mut(key)
    }

    /// Approximate lookup. See [`AreaMap::get_similar`].
    pub fn get_similar<'a, F>(&'a self, key: &K, consumer: F)
    where
        F: FnMut(&'a K, &'a V) -> bool,
    {
        self.inner.get_similar(key, consumer)
    }

    /// Remove an entry by key, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.inner.remove(key)
    }

    /// Remove the first entry in sorted order with an equal value.
    pub fn remove_by_value(&mut self, value: &V) -> Option<K>
    where
        V: PartialEq,
    {
        self.inner.remove_by_value(value)
    }

    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    /// The keys in sorted order.
    #[inline]
    pub fn keys(&self) -> &[K] {
        self.inner.keys()
    }

    /// The values in sorted-key order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.inner.values()
    }

    /// Iterate over entries in sorted-key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.inner.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Bulk merge by appending. See [`AreaMap::append`] for the
    /// order-compatibility requirement.
    pub fn append(&mut self, other: Self) {
        self.inner.append(other.inner);
    }
}

impl<K, V, R, C> PartialEq for MembershipMap<K, V, R, C>
where
    K: Clone + Eq + Hash,
    V: PartialEq,
    R: Resemblance<K>,
    C: Comparator<K>,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K, V, R, C> Eq for MembershipMap<K, V, R, C>
where
    K: Clone + Eq + Hash,
    V: Eq,
    R: Resemblance<K>,
    C: Comparator<K>,
{
}

impl<K, V, R, C> Hash for MembershipMap<K, V, R, C>
where
    K: Clone + Eq + Hash,
    V: Hash,
    R: Resemblance<K>,
    C: Comparator<K>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<K, V, R, C> fmt::Debug for MembershipMap<K, V, R, C>
where
    K: Clone + Eq + Hash + fmt::Debug,
    V: fmt::Debug,
    R: Resemblance<K>,
    C: Comparator<K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl<K, V, R, C> AreaIndex<K, V> for MembershipMap<K, V, R, C>
where
    K: Clone + Eq + Hash,
    R: Resemblance<K>,
    C: Comparator<K>,
{
    fn insert(&mut self, key: K, value: V) -> usize {
        MembershipMap::insert(self, key, value)
    }

    fn get_exact(&self, key: &K) -> Option<&V> {
        MembershipMap::get_exact(self, key)
    }

    fn get_similar<'a, F>(&'a self, key: &K, consumer: F)
    where
        F: FnMut(&'a K, &'a V) -> bool,
        K: 'a,
        V: 'a,
    {
        MembershipMap::get_similar(self, key, consumer)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        MembershipMap::remove(self, key)
    }

    fn remove_by_value(&mut self, value: &V) -> Option<K>
    where
        V: PartialEq,
    {
        MembershipMap::remove_by_value(self, value)
    }

    fn contains_key(&self, key: &K) -> bool {
        MembershipMap::contains_key(self, key)
    }

    fn keys(&self) -> &[K] {
        MembershipMap::keys(self)
    }

    fn len(&self) -> usize {
        MembershipMap::len(self)
    }

    fn clear(&mut self) {
        MembershipMap::clear(self)
    }
}
