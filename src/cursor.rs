use std::fmt;
use std::iter::FusedIterator;

use log::trace;

use crate::error::{Error, Result};
use crate::lane::Position;

/// A forward cursor over a [`Join`](crate::Join).
///
/// A cursor holds an *active lane* index together with one `(current, end)`
/// position pair per lane. The active index only ever increases. Lanes
/// before it are fully consumed, lanes after it have not been touched yet,
/// and the active lane itself always has an element to read unless the
/// active index equals the number of lanes. In that case the cursor is the
/// sentinel returned by [`Join::end`](crate::Join::end).
///
/// Cursors are cheap to clone and each clone advances independently.
///
/// The `'j` lifetime parameter refers to the lifetime of the join that
/// produced this cursor.
pub struct Cursor<'j, T> {
    active: usize,
    positions: Vec<Box<dyn Position<'j, T> + 'j>>,
}

impl<'j, T> Cursor<'j, T> {
    pub(crate) fn new(
        active: usize,
        positions: Vec<Box<dyn Position<'j, T> + 'j>>,
    ) -> Cursor<'j, T> {
        let mut cursor = Cursor { active, positions };
        cursor.settle();
        cursor
    }

    /// Returns the index of the lane this cursor currently reads from.
    ///
    /// When this equals the number of lanes, the cursor is past the end.
    pub fn active_lane(&self) -> usize {
        self.active
    }

    /// Returns true if and only if this cursor is past the last lane.
    pub fn is_end(&self) -> bool {
        self.active >= self.positions.len()
    }

    /// Returns the number of elements left to read, including the current
    /// one.
    pub fn remaining(&self) -> usize {
        self.positions
            .iter()
            .skip(self.active)
            .map(|pos| pos.end() - pos.current())
            .sum()
    }

    /// Moves this cursor forward by one element.
    ///
    /// Lanes that run out of elements are skipped, along with any number of
    /// empty lanes that follow them. Advancing the sentinel does nothing.
    pub fn advance(&mut self) {
        if let Some(pos) = self.positions.get_mut(self.active) {
            pos.step();
            self.settle();
        }
    }

    /// Reads the element at this cursor, converted by its lane's extraction
    /// rule.
    ///
    /// # Panics
    ///
    /// When this cursor is past the end. Use [`Cursor::try_get`] to get an
    /// error instead.
    pub fn get(&self) -> T {
        match self.try_get() {
            Ok(item) => item,
            Err(err) => panic!("{}", err),
        }
    }

    /// Reads the element at this cursor, converted by its lane's extraction
    /// rule.
    ///
    /// If this cursor is past the end, then `Error::PastEnd` is returned.
    pub fn try_get(&self) -> Result<T> {
        self.positions
            .get(self.active)
            .and_then(|pos| pos.extract())
            .ok_or(Error::PastEnd)
    }

    /// Moves the active index past every exhausted lane.
    fn settle(&mut self) {
        while let Some(pos) = self.positions.get(self.active) {
            if !pos.is_exhausted() {
                break;
            }
            self.active += 1;
            trace!("cursor moved to lane {}", self.active);
        }
    }
}

impl<'j, T> Clone for Cursor<'j, T> {
    fn clone(&self) -> Cursor<'j, T> {
        Cursor {
            active: self.active,
            positions: self.positions.iter().map(|pos| pos.box_clone()).collect(),
        }
    }
}

/// Cursors compare their active lane first. Only when those agree are the
/// position pairs of each lane compared.
///
/// A live cursor still holds the untouched `(start, end)` pairs of the lanes
/// ahead of it, which differ from the `(end, end)` pairs of the sentinel.
/// Comparing against the sentinel therefore relies on the active lanes
/// differing first.
///
/// Comparing cursors from different joins is meaningless.
impl<'j, T> PartialEq for Cursor<'j, T> {
    fn eq(&self, other: &Cursor<'j, T>) -> bool {
        if self.active != other.active {
            return false;
        }
        self.positions.len() == other.positions.len()
            && self.positions.iter().zip(&other.positions).all(|(a, b)| {
                a.current() == b.current() && a.end() == b.end()
            })
    }
}

impl<'j, T> Eq for Cursor<'j, T> {}

impl<'j, T> fmt::Debug for Cursor<'j, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<(usize, usize)> = self
            .positions
            .iter()
            .map(|pos| (pos.current(), pos.end()))
            .collect();
        f.debug_struct("Cursor")
            .field("active", &self.active)
            .field("positions", &pairs)
            .finish()
    }
}

/// An iterator over the elements of a [`Join`](crate::Join).
///
/// This drives a begin cursor forward until it equals the end cursor.
///
/// The `'j` lifetime parameter refers to the lifetime of the join.
pub struct Iter<'j, T> {
    front: Cursor<'j, T>,
    back: Cursor<'j, T>,
}

impl<'j, T> Iter<'j, T> {
    pub(crate) fn new(front: Cursor<'j, T>, back: Cursor<'j, T>) -> Self {
        Iter { front, back }
    }
}

impl<'j, T> Clone for Iter<'j, T> {
    fn clone(&self) -> Iter<'j, T> {
        Iter { front: self.front.clone(), back: self.back.clone() }
    }
}

impl<'j, T> fmt::Debug for Iter<'j, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

impl<'j, T> Iterator for Iter<'j, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let item = self.front.try_get().ok()?;
        self.front.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.front.remaining().saturating_sub(self.back.remaining());
        (n, Some(n))
    }
}

impl<'j, T> ExactSizeIterator for Iter<'j, T> {}

impl<'j, T> FusedIterator for Iter<'j, T> {}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::{extract, Join};

    #[test]
    fn walk_by_hand() {
        let (a, b) = (vec![1, 2], vec![3]);
        let join = Join::builder().lane(&a).lane(&b).build();
        let end = join.end();
        let mut cur = join.begin();
        let mut got = vec![];
        while cur != end {
            got.push(*cur.get());
            cur.advance();
        }
        assert_eq!(got, vec![1, 2, 3]);
        assert_eq!(cur, end);
        assert_eq!(cur.active_lane(), 2);
    }

    #[test]
    fn leading_empty_lanes_are_skipped_by_begin() {
        let (a, b) = (Vec::<i32>::new(), vec![7]);
        let join = Join::builder().lane(&a).lane(&a).lane(&b).build();
        let cur = join.begin();
        assert_eq!(cur.active_lane(), 2);
        assert_eq!(cur.get(), &7);
    }

    #[test]
    fn all_lanes_empty() {
        let a = Vec::<i32>::new();
        let join = Join::builder().lane(&a).lane(&a).build();
        assert_eq!(join.begin(), join.end());
        assert_eq!(join.iter().count(), 0);
    }

    #[test]
    fn sentinel_read_fails() {
        let a = vec![1];
        let join = Join::builder().lane(&a).build();
        assert_eq!(join.end().try_get(), Err(Error::PastEnd));
        assert!(join.begin().try_get().is_ok());
    }

    #[test]
    #[should_panic(expected = "past the end of the joined sequence")]
    fn sentinel_get_panics() {
        let a = vec![1];
        let join = Join::builder().lane(&a).build();
        join.end().get();
    }

    #[test]
    fn advance_sentinel_is_noop() {
        let a = vec![1];
        let join = Join::builder().lane(&a).build();
        let mut end = join.end();
        end.advance();
        assert_eq!(end, join.end());
        assert!(end.is_end());
    }

    #[test]
    fn live_cursor_differs_from_sentinel() {
        let (a, b) = (vec![1], vec![2, 3]);
        let join = Join::builder().lane(&a).lane(&b).build();
        let mut cur = join.begin();
        assert_ne!(cur, join.end());
        cur.advance();
        assert_eq!(cur.active_lane(), 1);
        assert_ne!(cur, join.end());
        cur.advance();
        cur.advance();
        assert_eq!(cur, join.end());
    }

    #[test]
    fn clones_advance_independently() {
        let a = vec!['a', 'b', 'c'];
        let join = Join::builder().lane_with(&a, extract::copied).build();
        let mut first = join.begin();
        let second = first.clone();
        first.advance();
        assert_eq!(first.get(), 'b');
        assert_eq!(second.get(), 'a');
        assert_ne!(first, second);
    }

    #[test]
    fn remaining_and_size_hint() {
        let (a, b) = (vec![1, 2, 3], vec![4, 5]);
        let join = Join::builder().lane(&a).lane(&b).build();
        let mut cur = join.begin();
        assert_eq!(cur.remaining(), 5);
        cur.advance();
        cur.advance();
        cur.advance();
        assert_eq!(cur.remaining(), 2);
        let mut it = join.iter();
        assert_eq!(it.len(), 5);
        it.next();
        assert_eq!(it.size_hint(), (4, Some(4)));
        assert_eq!(it.by_ref().count(), 4);
        assert_eq!(it.next(), None);
    }
}
