//! Ranked frequency table.

use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;

use rustc_hash::FxHashMap;

/// A unit and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry<K> {
    /// The counted unit.
    pub key: K,
    /// Occurrences, always at least 1.
    pub count: usize,
}

/// Occurrence counts ranked by count, highest first.
///
/// Units with equal counts keep the order in which they were first seen.
/// Every call that produces a table builds it from scratch; tables are
/// plain owned values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<K> {
    entries: Vec<FrequencyEntry<K>>,
    total: usize,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            total: 0,
        }
    }
}

impl<K> FrequencyTable<K> {
    /// Number of distinct units.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// All entries in rank order.
    #[inline]
    pub fn entries(&self) -> &[FrequencyEntry<K>] {
        &self.entries
    }

    /// The `k` highest-ranked entries, or all of them if there are fewer.
    #[inline]
    pub fn top(&self, k: usize) -> &[FrequencyEntry<K>] {
        &self.entries[..k.min(self.entries.len())]
    }

    /// Iterates entries in rank order.
    pub fn iter(&self) -> core::slice::Iter<'_, FrequencyEntry<K>> {
        self.entries.iter()
    }

    /// Consumes the table, returning its entries in rank order.
    pub fn into_entries(self) -> Vec<FrequencyEntry<K>> {
        self.entries
    }

    /// Count for `key`, or `None` if it never occurred.
    ///
    /// Linear in the number of distinct units.
    pub fn get<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries
            .iter()
            .find(|e| Borrow::<Q>::borrow(&e.key) == key)
            .map(|e| e.count)
    }

    /// Rank position of `key` (0 is the most frequent).
    pub fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries.iter().position(|e| Borrow::<Q>::borrow(&e.key) == key)
    }
}

impl<K: fmt::Display> FrequencyTable<K> {
    /// The top `k` entries as `(label, count)` pairs for charting.
    pub fn labelled(&self, k: usize) -> Vec<(String, usize)> {
        self.top(k)
            .iter()
            .map(|e| (e.key.to_string(), e.count))
            .collect()
    }
}

impl<'a, K> IntoIterator for &'a FrequencyTable<K> {
    type Item = &'a FrequencyEntry<K>;
    type IntoIter = core::slice::Iter<'a, FrequencyEntry<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Hash + Eq> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = FrequencyCounter::new();
        for key in iter {
            counter.add(key);
        }
        counter.finish()
    }
}

#[derive(Clone, Copy)]
struct Slot {
    first_seen: usize,
    count: usize,
}

/// Accumulates counts, then ranks them into a [`FrequencyTable`].
///
/// Matching is exact on the key's `Eq`; no folding happens here.
pub struct FrequencyCounter<K> {
    slots: FxHashMap<K, Slot>,
    seen: usize,
}

impl<K: Hash + Eq> Default for FrequencyCounter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq> FrequencyCounter<K> {
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self {
            slots: FxHashMap::default(),
            seen: 0,
        }
    }

    /// Creates a counter sized for about `capacity` distinct units.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            seen: 0,
        }
    }

    /// Records one occurrence of `key`.
    #[inline]
    pub fn add(&mut self, key: K) {
        let first_seen = self.slots.len();
        self.slots
            .entry(key)
            .or_insert(Slot {
                first_seen,
                count: 0,
            })
            .count += 1;
        self.seen += 1;
    }

    /// Occurrences recorded so far.
    #[inline]
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Ranks by count descending, then by first occurrence.
    pub fn finish(self) -> FrequencyTable<K> {
        let mut ranked: Vec<(K, Slot)> = self.slots.into_iter().collect();
        ranked.sort_unstable_by(|(_, a), (_, b)| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        });

        FrequencyTable {
            entries: ranked
                .into_iter()
                .map(|(key, slot)| FrequencyEntry {
                    key,
                    count: slot.count,
                })
                .collect(),
            total: self.seen,
        }
    }
}
