// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canonical run partition.

use alloc::vec::Vec;
use core::ops::Range;

use crate::{Error, TextRange};

#[derive(Clone, Debug, PartialEq)]
struct Entry<A> {
    /// Exclusive end offset of the run. The start is the previous entry's end (or `0`).
    end: usize,
    attributes: A,
}

/// A run of text sharing one attribute value, as yielded by [`RunPartition::iter`].
#[derive(Clone, Debug, PartialEq)]
pub struct Run<'a, A> {
    /// The byte range covered by this run. Never empty.
    pub range: Range<usize>,
    /// The attributes carried by every byte in `range`.
    pub attributes: &'a A,
}

/// A partition of `0..len` into maximal runs of equal attributes.
///
/// The partition keeps these invariants after every operation:
///
/// - runs are non-empty and contiguous, covering exactly `0..len`
/// - no two neighbouring runs carry equal attributes
///
/// An empty partition (`len == 0`) has no runs at all.
///
/// Offsets are plain byte offsets; the partition knows nothing about the text it describes.
/// [`StyledRuns`](crate::StyledRuns) pairs it with text storage and validates UTF-8 boundaries.
#[derive(Clone, Debug, PartialEq)]
pub struct RunPartition<A> {
    entries: Vec<Entry<A>>,
}

impl<A> Default for RunPartition<A> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<A: Clone + PartialEq> RunPartition<A> {
    /// Creates a partition with a single run covering `0..len`.
    pub fn new(len: usize, attributes: A) -> Self {
        let mut entries = Vec::new();
        if len > 0 {
            entries.push(Entry {
                end: len,
                attributes,
            });
        }
        Self { entries }
    }

    /// Creates a partition from `(length, attributes)` pairs, canonicalizing the result.
    ///
    /// Zero-length pieces are dropped and equal neighbours are merged.
    pub fn from_lengths(pieces: impl IntoIterator<Item = (usize, A)>) -> Self {
        let mut end = 0;
        let mut entries = Vec::new();
        for (len, attributes) in pieces {
            if len == 0 {
                continue;
            }
            end += len;
            entries.push(Entry { end, attributes });
        }
        let mut partition = Self { entries };
        partition.coalesce();
        partition
    }

    /// The total length covered by the partition.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.last().map_or(0, |entry| entry.end)
    }

    /// Returns `true` if the partition covers no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of runs.
    #[inline]
    pub fn run_count(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over all runs in text order.
    pub fn iter(&self) -> Runs<'_, A> {
        Runs {
            entries: &self.entries,
            start: 0,
        }
    }

    /// Iterate over the runs sharing at least one byte with `range`, in text order.
    ///
    /// Runs are reported whole; they are not clipped to `range`. A collapsed range intersects
    /// nothing.
    pub fn intersecting(&self, range: TextRange) -> Runs<'_, A> {
        if range.is_collapsed() {
            return Runs {
                entries: &[],
                start: 0,
            };
        }
        let first = self.entries.partition_point(|e| e.end <= range.start());
        let last = (self.entries.partition_point(|e| e.end < range.end()) + 1)
            .min(self.entries.len())
            .max(first);
        Runs {
            entries: &self.entries[first..last],
            start: self.run_start(first),
        }
    }

    /// Returns the attributes of the run containing `offset`.
    ///
    /// Fails with [`ErrorKind::OutOfBounds`](crate::ErrorKind::OutOfBounds) if `offset >= len`.
    pub fn attributes_at(&self, offset: usize) -> Result<&A, Error> {
        let ix = self.entries.partition_point(|e| e.end <= offset);
        self.entries
            .get(ix)
            .map(|entry| &entry.attributes)
            .ok_or_else(|| Error::offset_out_of_bounds(offset, self.len()))
    }

    /// Applies `f` to the attributes of every byte in `range`, splitting the runs at the range
    /// boundaries and re-merging equal neighbours afterwards.
    ///
    /// A collapsed range is a no-op.
    pub fn update(&mut self, range: TextRange, mut f: impl FnMut(&mut A)) {
        let range = self.clamp(range);
        if range.is_collapsed() {
            return;
        }
        let first = self.split_at(range.start());
        let last = self.split_at(range.end());
        for entry in &mut self.entries[first..last] {
            f(&mut entry.attributes);
        }
        self.coalesce();
    }

    /// Inserts `len` bytes carrying `attributes` at `offset`, shifting later runs.
    ///
    /// If the inserted run equals a neighbour it is merged into it.
    pub fn insert(&mut self, offset: usize, len: usize, attributes: A) {
        if len == 0 {
            return;
        }
        let offset = self.clamp_offset(offset);
        let ix = self.split_at(offset);
        for entry in &mut self.entries[ix..] {
            entry.end += len;
        }
        self.entries.insert(
            ix,
            Entry {
                end: offset + len,
                attributes,
            },
        );
        self.coalesce();
    }

    /// Removes the bytes in `range`, shifting later runs back.
    pub fn remove(&mut self, range: TextRange) {
        let range = self.clamp(range);
        if range.is_collapsed() {
            return;
        }
        let first = self.split_at(range.start());
        let last = self.split_at(range.end());
        self.entries.drain(first..last);
        for entry in &mut self.entries[first..] {
            entry.end -= range.len();
        }
        self.coalesce();
    }

    /// Merges neighbouring runs with equal attributes and drops empty runs.
    ///
    /// Returns the number of runs removed. Running this on a canonical partition returns `0`.
    pub fn coalesce(&mut self) -> usize {
        let before = self.entries.len();
        let mut prev_end = 0;
        self.entries.retain(|entry| {
            let keep = entry.end > prev_end;
            prev_end = prev_end.max(entry.end);
            keep
        });
        self.entries.dedup_by(|next, prev| {
            if next.attributes == prev.attributes {
                prev.end = next.end;
                true
            } else {
                false
            }
        });
        before - self.entries.len()
    }

    /// Returns `true` if the partition is in canonical form.
    pub fn is_canonical(&self) -> bool {
        let mut prev_end = 0;
        for entry in &self.entries {
            if entry.end <= prev_end {
                return false;
            }
            prev_end = entry.end;
        }
        self.entries
            .windows(2)
            .all(|pair| pair[0].attributes != pair[1].attributes)
    }

    /// Ensures a run boundary at `offset` and returns the index of the run starting there.
    ///
    /// Returns `run_count()` when `offset == len`.
    fn split_at(&mut self, offset: usize) -> usize {
        let ix = self.entries.partition_point(|e| e.end <= offset);
        if ix == self.entries.len() || self.run_start(ix) == offset {
            return ix;
        }
        let attributes = self.entries[ix].attributes.clone();
        self.entries.insert(
            ix,
            Entry {
                end: offset,
                attributes,
            },
        );
        ix + 1
    }

    fn run_start(&self, ix: usize) -> usize {
        match ix {
            0 => 0,
            _ => self.entries[ix - 1].end,
        }
    }

    fn clamp(&self, range: TextRange) -> TextRange {
        let len = self.len();
        debug_assert!(
            range.end() <= len,
            "range {:?} exceeds partition length {len}",
            range.as_range()
        );
        if range.end() <= len {
            return range;
        }
        log::warn!(
            "clamping range {:?} to partition length {len}",
            range.as_range()
        );
        TextRange::new_unchecked(range.start().min(len), len)
    }

    fn clamp_offset(&self, offset: usize) -> usize {
        let len = self.len();
        debug_assert!(offset <= len, "offset {offset} exceeds partition length {len}");
        if offset > len {
            log::warn!("clamping offset {offset} to partition length {len}");
        }
        offset.min(len)
    }
}

/// Iterator over the runs of a [`RunPartition`].
#[derive(Clone, Debug)]
pub struct Runs<'a, A> {
    entries: &'a [Entry<A>],
    start: usize,
}

impl<'a, A> Iterator for Runs<'a, A> {
    type Item = Run<'a, A>;

    fn next(&mut self) -> Option<Self::Item> {
        let (entry, rest) = self.entries.split_first()?;
        let range = self.start..entry.end;
        self.entries = rest;
        self.start = entry.end;
        Some(Run {
            range,
            attributes: &entry.attributes,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.entries.len(), Some(self.entries.len()))
    }
}

impl<A> ExactSizeIterator for Runs<'_, A> {}
