use std::any;

/// A lane erased down to the operations a join needs.
///
/// Every lane of a join has its own concrete source type and item type. This
/// trait hides both behind the join's output type `T`, so that a join can
/// keep an ordered list of lanes and dispatch to them uniformly.
pub(crate) trait Lane<T> {
    /// The name of the source type, for debugging.
    fn name(&self) -> &'static str;

    /// The number of elements in this lane.
    fn len(&self) -> usize;

    /// A position pair of `(start, end)`.
    fn begin<'j>(&'j self) -> Box<dyn Position<'j, T> + 'j>;

    /// A position pair of `(end, end)`.
    fn end<'j>(&'j self) -> Box<dyn Position<'j, T> + 'j>;
}

/// A lane's `(current, end)` pair, as held by a cursor.
///
/// Both handles are offsets into the lane's native order. Two positions from
/// the same lane are equal exactly when their offsets are.
pub(crate) trait Position<'j, T> {
    fn current(&self) -> usize;

    fn end(&self) -> usize;

    fn is_exhausted(&self) -> bool {
        self.current() >= self.end()
    }

    /// Moves `current` forward by one native step. Does nothing when the
    /// position is already exhausted.
    fn step(&mut self);

    /// Applies the lane's extraction rule to the element at `current`, or
    /// returns `None` when the position is exhausted.
    fn extract(&self) -> Option<T>;

    fn box_clone(&self) -> Box<dyn Position<'j, T> + 'j>;
}

/// A borrowed source paired with its extraction rule.
pub(crate) struct SourceLane<'s, C: ?Sized, F> {
    source: &'s C,
    rule: F,
}

impl<'s, C: ?Sized, F> SourceLane<'s, C, F> {
    pub(crate) fn new(source: &'s C, rule: F) -> SourceLane<'s, C, F> {
        SourceLane { source, rule }
    }
}

impl<'s, C, F, T> Lane<T> for SourceLane<'s, C, F>
where
    C: ?Sized,
    &'s C: IntoIterator,
    <&'s C as IntoIterator>::IntoIter: Clone + ExactSizeIterator,
    F: Fn(<&'s C as IntoIterator>::Item) -> T,
{
    fn name(&self) -> &'static str {
        any::type_name::<C>()
    }

    fn len(&self) -> usize {
        IntoIterator::into_iter(self.source).len()
    }

    fn begin<'j>(&'j self) -> Box<dyn Position<'j, T> + 'j> {
        let iter = IntoIterator::into_iter(self.source);
        let end = iter.len();
        Box::new(Bound { iter, current: 0, end, rule: &self.rule })
    }

    fn end<'j>(&'j self) -> Box<dyn Position<'j, T> + 'j> {
        // The iterator is never consulted once `current` has reached `end`,
        // so there is no need to walk it forward.
        let iter = IntoIterator::into_iter(self.source);
        let end = iter.len();
        Box::new(Bound { iter, current: end, end, rule: &self.rule })
    }
}

/// A position over one lane, bound to that lane's extraction rule.
///
/// `iter` always yields the element at `current` next.
struct Bound<'j, I, F> {
    iter: I,
    current: usize,
    end: usize,
    rule: &'j F,
}

impl<'j, I, F, T> Position<'j, T> for Bound<'j, I, F>
where
    I: Iterator + Clone + 'j,
    F: Fn(I::Item) -> T + 'j,
{
    fn current(&self) -> usize {
        self.current
    }

    fn end(&self) -> usize {
        self.end
    }

    fn step(&mut self) {
        if self.current < self.end {
            self.iter.next();
            self.current += 1;
        }
    }

    fn extract(&self) -> Option<T> {
        if self.is_exhausted() {
            return None;
        }
        self.iter.clone().next().map(self.rule)
    }

    fn box_clone(&self) -> Box<dyn Position<'j, T> + 'j> {
        Box::new(Bound {
            iter: self.iter.clone(),
            current: self.current,
            end: self.end,
            rule: self.rule,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{Lane, SourceLane};
    use crate::extract;

    #[test]
    fn begin_and_end_pairs() {
        let v = vec![4, 5, 6];
        let lane = SourceLane::new(&v, extract::copied);
        let begin = lane.begin();
        let end = lane.end();
        assert_eq!((begin.current(), begin.end()), (0, 3));
        assert_eq!((end.current(), end.end()), (3, 3));
        assert_eq!(begin.extract(), Some(4));
        assert_eq!(end.extract(), None);
    }

    #[test]
    fn step_stops_at_end() {
        let v = vec!['x'];
        let lane = SourceLane::new(&v, extract::copied);
        let mut pos = lane.begin();
        pos.step();
        assert!(pos.is_exhausted());
        pos.step();
        assert_eq!(pos.current(), 1);
        assert_eq!(pos.extract(), None);
    }

    #[test]
    fn clone_is_independent() {
        let mut m = BTreeMap::new();
        m.insert("b", 2);
        m.insert("a", 1);
        let lane = SourceLane::new(&m, extract::key);
        let mut pos = lane.begin();
        let snapshot = pos.box_clone();
        pos.step();
        assert_eq!(snapshot.extract(), Some(&"a"));
        assert_eq!(pos.extract(), Some(&"b"));
    }

    #[test]
    fn empty_lane() {
        let v: Vec<u8> = vec![];
        let lane = SourceLane::new(&v, extract::copied);
        assert_eq!(lane.len(), 0);
        assert!(lane.begin().is_exhausted());
    }
}
