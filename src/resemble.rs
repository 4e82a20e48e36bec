/// Containment strategy between keys: does `ancestor` enclose `descendant`?
///
/// Resemblance is the domain relation that makes an [`AreaMap`](crate::AreaMap)
/// an *area* map rather than a plain sorted map. A key stands for a region
/// (say, a directory) and implicitly for everything underneath it; the
/// resemblance predicate decides what "underneath" means. Typical examples:
/// "is a path prefix of", "is a parent directory of".
///
/// The relation is asymmetric and need not be transitive or total, and it is
/// completely independent of the [`Comparator`](crate::Comparator) order. The
/// scan algorithms only assume that enclosing keys sort before the keys they
/// enclose.
///
/// Any `Fn(&K, &K) -> bool` closure or fn pointer works via the blanket impl:
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
/// map.insert("top/nested".to_string(), 1);
/// ```
pub trait Resemblance<K> {
    /// Returns true when `ancestor` encloses `descendant`.
    fn resembles(&self, ancestor: &K, descendant: &K) -> bool;
}

impl<K, F> Resemblance<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn resembles(&self, ancestor: &K, descendant: &K) -> bool {
        self(ancestor, descendant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_resemblances() {
        let prefix = |a: &&str, b: &&str| b.starts_with(*a);
        assert!(prefix.resembles(&"ab", &"abc"));
        assert!(!prefix.resembles(&"abc", &"ab"));
    }
}
