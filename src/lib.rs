//! Hierarchical area-membership maps.
//!
//! This crate provides ordered associative containers whose keys form a
//! partial containment hierarchy (filesystem-path-like keys being the
//! canonical case), and whose lookups resolve to the *nearest enclosing*
//! entry rather than requiring an exact key match.
//!
//! Two containers, the second built on the first:
//!
//! - [`AreaMap`]: keeps a sorted, duplicate-free key sequence beside a hash
//!   map of values, and answers approximate queries by scanning backward
//!   from a key's sorted insertion point through a caller-supplied
//!   [`Resemblance`] relation.
//! - [`MembershipMap`]: adds pruning insertion
//!   ([`insert_optimal`](MembershipMap::insert_optimal)) and a global
//!   compaction pass ([`optimize`](MembershipMap::optimize)), maintaining
//!   the invariant that no stored key is enclosed by another stored key.
//!
//! Sort order and containment are separate strategies: a [`Comparator`]
//! (natural `Ord` by default) only drives binary search placement, while
//! [`Resemblance`] carries the domain's ancestor/descendant meaning. The
//! maps are single-threaded and caller-synchronized; nothing blocks and
//! "not found" is always an `Option`, never a panic.
//!
//! ```rust
//! use areamap::MembershipMap;
//!
//! fn encloses(ancestor: &String, key: &String) -> bool {
//!     key.starts_with(ancestor.as_str())
//!         && (key.len() == ancestor.len() || key.as_bytes()[ancestor.len()] == b'/')
//! }
//!
//! let mut settings = MembershipMap::new(encloses);
//! settings.insert_optimal("project/src".to_string(), "strict");
//! settings.insert_optimal("project".to_string(), "default");
//!
//! // The broader area subsumed the nested one ...
//! assert_eq!(settings.keys(), ["project".to_string()]);
//! // ... and covers everything underneath it.
//! assert_eq!(
//!     settings.get_enclosing(&"project/docs/readme".to_string()),
//!     Some((&"project".to_string(), &"default"))
//! );
//! ```

pub mod area_map;
pub mod membership_map;
pub mod order;
pub mod resemble;

pub use area_map::AreaMap;
pub use membership_map::MembershipMap;
pub use order::{Comparator, NaturalOrder};
pub use resemble::Resemblance;

/// Common surface of the area map family, implemented by both [`AreaMap`]
/// and [`MembershipMap`].
///
/// Useful for code that works against either container, e.g. loaders that
/// fill an index without caring whether insertion prunes.
pub trait AreaIndex<K, V> {
    /// Insert or replace an entry, returning its sorted position.
    fn insert(&mut self, key: K, value: V) -> usize;

    /// Exact lookup by key.
    fn get_exact(&self, key: &K) -> Option<&V>;

    /// Feed the consumer the enclosing entries for `key`, nearest first,
    /// until it returns `true`.
    fn get_similar<'a, F>(&'a self, key: &K, consumer: F)
    where
        F: FnMut(&'a K, &'a V) -> bool,
        K: 'a,
        V: 'a;

    /// Remove an entry by key, returning its value.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Remove the first entry in sorted order with an equal value,
    /// returning its key.
    fn remove_by_value(&mut self, value: &V) -> Option<K>
    where
        V: PartialEq;

    fn contains_key(&self, key: &K) -> bool;

    /// The keys in sorted order.
    fn keys(&self) -> &[K];

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);
}
