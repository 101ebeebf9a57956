/*!
Ready-made extraction rules.

An extraction rule converts one lane's native item into the output type
shared by every lane of a [`Join`](crate::Join). Any `Fn(Item) -> T` works
as a rule; the functions in this module cover the common cases so that call
sites stay short:

```
use std::collections::BTreeMap;

use lanejoin::{extract, Join};

let ids = vec![3u32, 1];
let mut names = BTreeMap::new();
names.insert(7u32, "seven");

let join = Join::builder()
    .lane_with(&ids, extract::copied)
    .lane_with(&names, extract::key_copied)
    .build();
assert_eq!(join.iter().collect::<Vec<u32>>(), vec![3, 1, 7]);
```

Rules must not have side effects. A cursor may apply a rule to the same
position any number of times.
*/

/// Passes the native item through unchanged.
///
/// This is the rule used by [`JoinBuilder::lane`](crate::JoinBuilder::lane).
#[inline]
pub fn identity<T>(item: T) -> T {
    item
}

/// Copies the element out of a borrowed item.
#[inline]
pub fn copied<E: Copy>(item: &E) -> E {
    *item
}

/// Clones the element out of a borrowed item.
#[inline]
pub fn cloned<E: Clone>(item: &E) -> E {
    item.clone()
}

/// Yields only the key of a map entry.
///
/// The key is borrowed from the map itself, so it stays valid for as long
/// as the map is borrowed by the join.
#[inline]
pub fn key<'a, K: ?Sized, V: ?Sized>((k, _): (&'a K, &'a V)) -> &'a K {
    k
}

/// Yields only the value of a map entry.
#[inline]
pub fn value<'a, K: ?Sized, V: ?Sized>((_, v): (&'a K, &'a V)) -> &'a V {
    v
}

/// Yields a copy of the key of a map entry.
#[inline]
pub fn key_copied<K: Copy, V: ?Sized>((k, _): (&K, &V)) -> K {
    *k
}

/// Yields a copy of the value of a map entry.
#[inline]
pub fn value_copied<K: ?Sized, V: Copy>((_, v): (&K, &V)) -> V {
    *v
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn map_entries() {
        let mut map = BTreeMap::new();
        map.insert(1u8, 'a');
        let entry = map.iter().next().unwrap();
        assert_eq!(key(entry), &1);
        assert_eq!(value(entry), &'a');
        assert_eq!(key_copied(entry), 1);
        assert_eq!(value_copied(entry), 'a');
    }

    #[test]
    fn borrowed_elements() {
        let s = String::from("lane");
        assert_eq!(identity(&s), "lane");
        assert_eq!(cloned(&s), "lane");
        assert_eq!(copied(&5i64), 5);
    }
}
