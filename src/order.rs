use std::cmp::Ordering;

/// Total-order strategy used to keep the sorted key sequence sorted.
///
/// This is only about linear placement for binary search; it carries no
/// domain meaning. Containment between keys is the job of
/// [`Resemblance`](crate::Resemblance), which is a separate strategy on
/// purpose.
///
/// Any `Fn(&K, &K) -> Ordering` closure is a comparator via the blanket
/// impl, and [`NaturalOrder`] delegates to the key's own `Ord`.
pub trait Comparator<K> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Comparator that uses the key type's `Ord` implementation.
///
/// This is the default ordering for maps built with
/// [`AreaMap::new`](crate::AreaMap::new).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

impl<K, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_order_matches_ord() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&2, &2), Ordering::Equal);
        assert_eq!(NaturalOrder.compare(&3, &2), Ordering::Greater);
    }

    #[test]
    fn closures_are_comparators() {
        let reversed = |a: &i32, b: &i32| b.cmp(a);
        assert_eq!(reversed.compare(&1, &2), Ordering::Greater);
    }
}
