// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use super::{Alignment, AttachmentId, AttributeKey, AttributeValue, Color, Font, LineStyle};

/// A set of attribute values with at most one value per [`AttributeKey`].
///
/// Values are kept sorted by key, so two maps holding the same values compare equal regardless
/// of insertion order. This is what makes run coalescing work: neighbouring runs are merged
/// exactly when their maps are equal.
///
/// ```
/// use rich_format::{Alignment, AttributeKey, AttributeMap, Font};
///
/// let map = AttributeMap::new()
///     .with(Alignment::Center)
///     .with(Font::system(14.0));
/// assert_eq!(map.keys().collect::<Vec<_>>(), [AttributeKey::Font, AttributeKey::Alignment]);
/// assert_eq!(map.font(), Some(&Font::system(14.0)));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeMap {
    values: SmallVec<[AttributeValue; 4]>,
}

impl AttributeMap {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of attributes in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the map holds no attributes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: AttributeKey) -> Option<&AttributeValue> {
        self.position(key).ok().map(|ix| &self.values[ix])
    }

    /// Returns `true` if the map holds a value for `key`.
    pub fn contains_key(&self, key: AttributeKey) -> bool {
        self.position(key).is_ok()
    }

    /// Inserts `value`, returning the value it replaced for the same key.
    pub fn insert(&mut self, value: impl Into<AttributeValue>) -> Option<AttributeValue> {
        let value = value.into();
        match self.position(value.key()) {
            Ok(ix) => Some(core::mem::replace(&mut self.values[ix], value)),
            Err(ix) => {
                self.values.insert(ix, value);
                None
            }
        }
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, value: impl Into<AttributeValue>) -> Self {
        self.insert(value);
        self
    }

    /// Removes and returns the value for `key`.
    pub fn remove(&mut self, key: AttributeKey) -> Option<AttributeValue> {
        self.position(key).ok().map(|ix| self.values.remove(ix))
    }

    /// Iterate over the values in key order.
    pub fn iter(&self) -> core::slice::Iter<'_, AttributeValue> {
        self.values.iter()
    }

    /// Iterate over the keys present, in order.
    pub fn keys(&self) -> impl Iterator<Item = AttributeKey> + '_ {
        self.values.iter().map(AttributeValue::key)
    }

    /// Inserts every value of `other`, overwriting values for keys already present.
    pub fn merge(&mut self, other: &Self) {
        for value in other {
            self.insert(value.clone());
        }
    }

    /// Inserts the values of `other` whose keys are not yet present.
    ///
    /// Values already in `self` win.
    pub fn merge_missing(&mut self, other: &Self) {
        for value in other {
            if let Err(ix) = self.position(value.key()) {
                self.values.insert(ix, value.clone());
            }
        }
    }

    /// Keeps only the values for which `f` returns `true`.
    pub fn retain(&mut self, mut f: impl FnMut(&AttributeValue) -> bool) {
        self.values.retain(|value| f(value));
    }

    /// The font, if present.
    pub fn font(&self) -> Option<&Font> {
        match self.get(AttributeKey::Font) {
            Some(AttributeValue::Font(font)) => Some(font),
            _ => None,
        }
    }

    /// The underline style, if present.
    pub fn underline(&self) -> Option<LineStyle> {
        match self.get(AttributeKey::Underline) {
            Some(AttributeValue::Underline(style)) => Some(*style),
            _ => None,
        }
    }

    /// The strikethrough style, if present.
    pub fn strikethrough(&self) -> Option<LineStyle> {
        match self.get(AttributeKey::Strikethrough) {
            Some(AttributeValue::Strikethrough(style)) => Some(*style),
            _ => None,
        }
    }

    /// The foreground color, if present.
    pub fn foreground_color(&self) -> Option<Color> {
        match self.get(AttributeKey::ForegroundColor) {
            Some(AttributeValue::ForegroundColor(color)) => Some(*color),
            _ => None,
        }
    }

    /// The paragraph alignment, if present.
    pub fn alignment(&self) -> Option<Alignment> {
        match self.get(AttributeKey::Alignment) {
            Some(AttributeValue::Alignment(alignment)) => Some(*alignment),
            _ => None,
        }
    }

    /// The attachment, if present.
    pub fn attachment(&self) -> Option<AttachmentId> {
        match self.get(AttributeKey::Attachment) {
            Some(AttributeValue::Attachment(id)) => Some(*id),
            _ => None,
        }
    }

    fn position(&self, key: AttributeKey) -> Result<usize, usize> {
        self.values.binary_search_by_key(&key, AttributeValue::key)
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = &'a AttributeValue;
    type IntoIter = core::slice::Iter<'a, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl Extend<AttributeValue> for AttributeMap {
    fn extend<I: IntoIterator<Item = AttributeValue>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<AttributeValue> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = AttributeValue>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl From<AttributeValue> for AttributeMap {
    fn from(value: AttributeValue) -> Self {
        Self::new().with(value)
    }
}
