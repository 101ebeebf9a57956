use std::fmt;

use log::debug;

use crate::cursor::{Cursor, Iter};
use crate::error::{Error, Result};
use crate::extract;
use crate::lane::{Lane, SourceLane};

/// A read-only view over several sources joined end to end.
///
/// Each source is a *lane*. Lanes may have different element types. Every
/// lane carries an extraction rule that converts its elements to `T`, the
/// output type of the join. Traversal visits lane `0` from start to finish,
/// then lane `1`, and so on, preserving each lane's own order.
///
/// A join never copies or owns elements. It borrows every source for the
/// lifetime `'s`, and every cursor it hands out borrows the join.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
///
/// use lanejoin::{extract, Join};
///
/// let seq = vec![1, 12, 13, 14];
/// let mut map = BTreeMap::new();
/// map.insert(15, 34.0);
/// map.insert(230, 34.0);
/// map.insert(61, 34.0);
///
/// let join = Join::builder()
///     .lane(&seq)
///     .lane_with(&map, extract::key)
///     .build();
/// let got: Vec<&i32> = join.iter().collect();
/// assert_eq!(got, vec![&1, &12, &13, &14, &15, &61, &230]);
/// ```
pub struct Join<'s, T> {
    lanes: Vec<Box<dyn Lane<T> + 's>>,
}

impl<'s, T> Join<'s, T> {
    /// Create a builder for adding lanes one at a time.
    pub fn builder() -> JoinBuilder<'s, T> {
        JoinBuilder::new()
    }

    /// Create a join from sources of one type with rules given separately.
    ///
    /// The `i`th rule applies to the `i`th source. If the number of rules
    /// differs from the number of sources, then this returns an error and
    /// no join is built.
    ///
    /// When sources have different types, use [`Join::builder`] instead,
    /// which binds each rule to its source and cannot be given the wrong
    /// number of rules.
    pub fn from_parts<C, F>(
        sources: Vec<&'s C>,
        rules: Vec<F>,
    ) -> Result<Join<'s, T>>
    where
        C: ?Sized,
        &'s C: IntoIterator,
        <&'s C as IntoIterator>::IntoIter: Clone + ExactSizeIterator,
        F: Fn(<&'s C as IntoIterator>::Item) -> T + 's,
    {
        if sources.len() != rules.len() {
            return Err(Error::RuleCount {
                sources: sources.len(),
                rules: rules.len(),
            });
        }
        let mut builder = JoinBuilder::new();
        for (source, rule) in sources.into_iter().zip(rules) {
            builder.push_with(source, rule);
        }
        Ok(builder.build())
    }

    /// Returns the number of lanes in this join.
    pub fn lanes(&self) -> usize {
        self.lanes.len()
    }

    /// Returns the total number of elements across all lanes.
    pub fn len(&self) -> usize {
        self.lanes.iter().map(|lane| lane.len()).sum()
    }

    /// Returns true if and only if no lane has any elements.
    ///
    /// This is also true when the join has no lanes at all.
    pub fn is_empty(&self) -> bool {
        self.lanes.iter().all(|lane| lane.len() == 0)
    }

    /// Returns a cursor at the first element of the join.
    ///
    /// Leading lanes without elements are skipped over, so the returned
    /// cursor is either readable or equal to [`Join::end`].
    pub fn begin(&self) -> Cursor<'_, T> {
        let positions = self.lanes.iter().map(|lane| lane.begin()).collect();
        Cursor::new(0, positions)
    }

    /// Returns the sentinel cursor positioned past the last lane.
    ///
    /// The sentinel can only be compared against. Reading from it fails.
    pub fn end(&self) -> Cursor<'_, T> {
        let positions = self.lanes.iter().map(|lane| lane.end()).collect();
        Cursor::new(self.lanes.len(), positions)
    }

    /// Returns an iterator over every element of the join, in order.
    ///
    /// Each call starts a fresh traversal. Since sources are never mutated,
    /// every traversal yields the same sequence.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.begin(), self.end())
    }
}

impl<'j, 's, T> IntoIterator for &'j Join<'s, T> {
    type Item = T;
    type IntoIter = Iter<'j, T>;

    fn into_iter(self) -> Iter<'j, T> {
        self.iter()
    }
}

impl<'s, T> fmt::Debug for Join<'s, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for lane in &self.lanes {
            list.entry(&format_args!("{}(len={})", lane.name(), lane.len()));
        }
        list.finish()
    }
}

/// A builder for collecting the lanes of a [`Join`].
///
/// Lanes are visited in the order in which they are added. The `'s`
/// lifetime parameter refers to the lifetime of the borrowed sources.
pub struct JoinBuilder<'s, T> {
    lanes: Vec<Box<dyn Lane<T> + 's>>,
}

impl<'s, T> JoinBuilder<'s, T> {
    /// Create a new builder with no lanes.
    pub fn new() -> Self {
        JoinBuilder { lanes: vec![] }
    }

    /// Add a lane whose items are already of the output type.
    ///
    /// This is useful for a chaining style pattern, e.g.,
    /// `builder.lane(&a).lane(&b).build()`.
    pub fn lane<C>(mut self, source: &'s C) -> Self
    where
        C: ?Sized,
        T: 's,
        &'s C: IntoIterator<Item = T>,
        <&'s C as IntoIterator>::IntoIter: Clone + ExactSizeIterator,
    {
        self.push(source);
        self
    }

    /// Add a lane along with the rule that converts its items to the output
    /// type.
    pub fn lane_with<C, F>(mut self, source: &'s C, rule: F) -> Self
    where
        C: ?Sized,
        &'s C: IntoIterator,
        <&'s C as IntoIterator>::IntoIter: Clone + ExactSizeIterator,
        F: Fn(<&'s C as IntoIterator>::Item) -> T + 's,
    {
        self.push_with(source, rule);
        self
    }

    /// Add a lane whose items are already of the output type.
    pub fn push<C>(&mut self, source: &'s C)
    where
        C: ?Sized,
        T: 's,
        &'s C: IntoIterator<Item = T>,
        <&'s C as IntoIterator>::IntoIter: Clone + ExactSizeIterator,
    {
        self.push_with(source, extract::identity::<T>);
    }

    /// Add a lane along with the rule that converts its items to the output
    /// type.
    pub fn push_with<C, F>(&mut self, source: &'s C, rule: F)
    where
        C: ?Sized,
        &'s C: IntoIterator,
        <&'s C as IntoIterator>::IntoIter: Clone + ExactSizeIterator,
        F: Fn(<&'s C as IntoIterator>::Item) -> T + 's,
    {
        self.lanes.push(Box::new(SourceLane::new(source, rule)));
    }

    /// Finish adding lanes. The lane list of the returned join is fixed.
    pub fn build(self) -> Join<'s, T> {
        debug!("built join over {} lanes", self.lanes.len());
        Join { lanes: self.lanes }
    }
}

impl<'s, T> Default for JoinBuilder<'s, T> {
    fn default() -> Self {
        JoinBuilder::new()
    }
}
