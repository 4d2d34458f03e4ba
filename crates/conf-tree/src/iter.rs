//! Iteration over list and map values

use std::fmt;
use std::iter::Enumerate;
use std::slice;

use serde_json::{Map, Value, map};

use crate::value::ConfigValue;

/// One step of an [`Iter`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry<'a> {
    index: usize,
    key: Option<&'a str>,
    value: ConfigValue<'a>,
}

impl<'a> Entry<'a> {
    /// Zero-based position within the list or map
    pub fn index(&self) -> usize {
        self.index
    }

    /// Map key, `None` for list elements
    pub fn key(&self) -> Option<&'a str> {
        self.key
    }

    pub fn value(&self) -> ConfigValue<'a> {
        self.value
    }
}

/// Remaining elements of a list value
pub struct ListEntries<'a>(Enumerate<slice::Iter<'a, Value>>);

/// Remaining entries of a map value
pub struct MapEntries<'a>(Enumerate<map::Iter<'a>>);

/// Iterator over the elements of a list value or the entries of a map value.
///
/// Values that are neither produce [`Iter::Empty`]. The `List` and `Map`
/// variants are built through [`Iter::over_list`] and [`Iter::over_map`].
#[derive(Default)]
pub enum Iter<'a> {
    List(ListEntries<'a>),
    Map(MapEntries<'a>),
    #[default]
    Empty,
}

impl<'a> Iter<'a> {
    pub fn over_list(items: &'a [Value]) -> Self {
        Self::List(ListEntries(items.iter().enumerate()))
    }

    pub fn over_map(map: &'a Map<String, Value>) -> Self {
        Self::Map(MapEntries(map.iter().enumerate()))
    }

    /// True when no entries remain
    pub fn is_finished(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::List(ListEntries(items)) => items.next().map(|(index, value)| Entry {
                index,
                key: None,
                value: ConfigValue::new(Some(value)),
            }),
            Self::Map(MapEntries(entries)) => entries.next().map(|(index, (key, value))| Entry {
                index,
                key: Some(key.as_str()),
                value: ConfigValue::new(Some(value)),
            }),
            Self::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::List(ListEntries(items)) => items.size_hint(),
            Self::Map(MapEntries(entries)) => entries.size_hint(),
            Self::Empty => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant = match self {
            Self::List(_) => "List",
            Self::Map(_) => "Map",
            Self::Empty => "Empty",
        };
        f.debug_struct(variant)
            .field("remaining", &self.len())
            .finish()
    }
}
