// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;
use core::ops::Range;

use crate::{EditableStorage, Error, RunPartition, Runs, TextRange, TextStorage};

/// A block of text partitioned into runs of equal attributes.
///
/// The run partition always covers exactly the text; edits through [`StyledRuns::insert`],
/// [`StyledRuns::replace`] and [`StyledRuns::remove`] keep both in step.
#[derive(Clone, Debug)]
pub struct StyledRuns<T: Debug + TextStorage, A: Debug> {
    text: T,
    runs: RunPartition<A>,
}

impl<T: Debug + TextStorage, A: Debug + Clone + PartialEq> StyledRuns<T, A> {
    /// Create a `StyledRuns` with one run carrying `attributes` over the whole text.
    pub fn new(text: T, attributes: A) -> Self {
        let runs = RunPartition::new(text.len(), attributes);
        Self { text, runs }
    }

    /// Create a `StyledRuns` from text and an existing partition.
    ///
    /// Fails with [`ErrorKind::OutOfBounds`](crate::ErrorKind::OutOfBounds) if the partition
    /// does not cover exactly the text, or [`ErrorKind::NotOnCharBoundary`](crate::ErrorKind::NotOnCharBoundary)
    /// if a run boundary splits a codepoint.
    pub fn from_parts(text: T, runs: RunPartition<A>) -> Result<Self, Error> {
        if runs.len() != text.len() {
            return Err(Error::out_of_bounds(0, runs.len(), text.len()));
        }
        for run in runs.iter() {
            TextRange::new(&text, run.range)?;
        }
        Ok(Self { text, runs })
    }

    /// Borrow the underlying text storage.
    pub fn text(&self) -> &T {
        &self.text
    }

    /// Borrow the run partition.
    pub fn partition(&self) -> &RunPartition<A> {
        &self.runs
    }

    /// Returns the length of the underlying text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Borrow the underlying text as `&str` when the storage is contiguous.
    pub fn as_str(&self) -> &str
    where
        T: AsRef<str>,
    {
        self.text.as_ref()
    }

    /// Validates a byte `range` against this text and returns a [`TextRange`].
    pub fn range(&self, range: Range<usize>) -> Result<TextRange, Error> {
        TextRange::new(&self.text, range)
    }

    /// Iterate over all runs in text order.
    pub fn runs(&self) -> Runs<'_, A> {
        self.runs.iter()
    }

    /// Iterate over the runs intersecting `range`.
    pub fn intersecting(&self, range: TextRange) -> Runs<'_, A> {
        self.runs.intersecting(range)
    }

    /// Returns the attributes of the run containing byte `offset`.
    pub fn attributes_at(&self, offset: usize) -> Result<&A, Error> {
        self.runs.attributes_at(offset)
    }

    /// Applies `f` to the attributes over `range`, keeping the partition canonical.
    pub fn update(&mut self, range: TextRange, f: impl FnMut(&mut A)) {
        self.runs.update(range, f);
    }
}

impl<T: Debug + EditableStorage, A: Debug + Clone + PartialEq> StyledRuns<T, A> {
    /// Inserts `text` at byte `offset`, carrying `attributes`.
    ///
    /// Returns the range now covered by the inserted text.
    pub fn insert(&mut self, offset: usize, text: &str, attributes: A) -> Result<TextRange, Error> {
        let at = TextRange::caret(&self.text, offset)?;
        Ok(self.replace(at, text, attributes))
    }

    /// Replaces the text in `range` with `text` carrying `attributes`.
    ///
    /// Returns the range now covered by the inserted text.
    pub fn replace(&mut self, range: TextRange, text: &str, attributes: A) -> TextRange {
        self.remove(range);
        self.text.insert_str(range.start(), text);
        self.runs.insert(range.start(), text.len(), attributes);
        TextRange::new_unchecked(range.start(), range.start() + text.len())
    }

    /// Removes the text in `range`.
    pub fn remove(&mut self, range: TextRange) {
        if range.is_collapsed() {
            return;
        }
        self.text.remove_range(range.as_range());
        self.runs.remove(range);
    }
}
