use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::error::OverlapError;
use crate::range::Interval;

/// Associates a source-value lookup range with a destination value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LookupEntry<T, U> {
    range: Interval<T>,
    value: U,
}

impl<T, U> LookupEntry<T, U> {
    pub fn new(range: Interval<T>, value: U) -> Self {
        LookupEntry { range, value }
    }

    pub fn range(&self) -> &Interval<T> {
        &self.range
    }

    pub fn value(&self) -> &U {
        &self.value
    }
}

impl<T: fmt::Display, U: fmt::Display> fmt::Display for LookupEntry<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.range, self.value)
    }
}

/// Maps disjoint source-value ranges to destination values.
///
/// Entries are kept sorted by range so that a query is a binary search to
/// a single candidate plus one containment check. Queries take `&self`
/// and touch no shared mutable state, so a fully built table can be
/// consulted from many worker threads at once; build it first, publish
/// it, then query.
#[derive(Clone, Debug)]
pub struct RangeLookupTable<T, U> {
    entries: Vec<LookupEntry<T, U>>,
}

impl<T, U> RangeLookupTable<T, U>
where
    T: PartialOrd + Copy + fmt::Display,
    U: Clone,
{
    pub fn new() -> Self {
        RangeLookupTable {
            entries: Vec::new(),
        }
    }

    /// Builds a table from an unordered entry list, failing on the first
    /// pair of entries whose ranges share a point. Nothing is dropped or
    /// merged; the caller gets both conflicting entries back.
    pub fn build(
        entries: impl IntoIterator<Item = LookupEntry<T, U>>,
    ) -> Result<Self, OverlapError<T, U>> {
        let mut entries: Vec<LookupEntry<T, U>> = entries.into_iter().collect();
        entries.sort_by(|a, b| a.range.ordering(&b.range));
        // sorted by lower bound, so disjointness of every adjacent pair
        // implies disjointness of every pair
        for pair in entries.windows(2) {
            if pair[0].range.overlaps(&pair[1].range) {
                return Err(OverlapError {
                    first: pair[0].clone(),
                    second: pair[1].clone(),
                });
            }
        }
        debug!("built range lookup table with {} entries", entries.len());
        Ok(RangeLookupTable { entries })
    }

    /// Inserts one entry, keeping the sort order. Only the would-be
    /// neighbors need an overlap check, since the existing entries are
    /// already mutually disjoint. On failure the table is unchanged.
    pub fn add_entry(&mut self, entry: LookupEntry<T, U>) -> Result<(), OverlapError<T, U>> {
        let index = self
            .entries
            .partition_point(|e| e.range.ordering(&entry.range) == Ordering::Less);
        if index > 0 && self.entries[index - 1].range.overlaps(&entry.range) {
            return Err(OverlapError {
                first: self.entries[index - 1].clone(),
                second: entry,
            });
        }
        if index < self.entries.len() && self.entries[index].range.overlaps(&entry.range) {
            return Err(OverlapError {
                first: self.entries[index].clone(),
                second: entry,
            });
        }
        self.entries.insert(index, entry);
        Ok(())
    }

    /// Resolves the entry whose range contains `x`. `None` means no
    /// configured range matched; it is an expected outcome for gap
    /// values, not an error.
    pub fn lookup(&self, x: T) -> Option<&U> {
        // the candidate is the last entry whose lower constraint admits x;
        // every later entry starts strictly above x
        let admitting = self.entries.partition_point(|e| e.range.lower_admits(x));
        if admitting == 0 {
            return None;
        }
        let entry = &self.entries[admitting - 1];
        if entry.range.contains(x) {
            Some(&entry.value)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only view of the entries in range order.
    pub fn entries(&self) -> &[LookupEntry<T, U>] {
        &self.entries
    }
}

impl<T, U> Default for RangeLookupTable<T, U>
where
    T: PartialOrd + Copy + fmt::Display,
    U: Clone,
{
    fn default() -> Self {
        RangeLookupTable::new()
    }
}
