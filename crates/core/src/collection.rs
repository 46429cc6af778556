//! Ordered, identifiable sub-record lists
//!
//! A `CollectionEditor` owns the partners, prizes and FAQs of a draft.
//! Ids come from a per-collection counter, so two adds in quick succession
//! can never collide.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a record inside one collection
///
/// Records built outside an editor carry id 0 until they are added.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RecordId {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(RecordId)
            .map_err(|_| crate::Error::Parse(format!("'{}' is not a record id", s)))
    }
}

/// A record shape that can live in a `CollectionEditor`
pub trait Record: Clone {
    /// Editable fields of this record
    type Field: Copy + fmt::Debug + 'static;

    /// Short name used in logs ("partner", "prize", ...)
    const KIND: &'static str;

    /// Editable fields in form order
    const FIELDS: &'static [Self::Field];

    fn id(&self) -> RecordId;

    fn set_id(&mut self, id: RecordId);

    fn field(&self, field: Self::Field) -> &str;

    fn set_field(&mut self, field: Self::Field, value: String);
}

/// Ordered list of records with add / update-by-id / remove-by-id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "RawEditor<T>",
    bound(deserialize = "T: Record + Deserialize<'de>")
)]
pub struct CollectionEditor<T> {
    items: Vec<T>,
    /// Next id to hand out; never reused within this editor
    next_id: u64,
}

impl<T> Default for CollectionEditor<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

/// Wire form of an editor before the id counter is checked
#[derive(Deserialize)]
struct RawEditor<T> {
    items: Vec<T>,
    #[serde(default)]
    next_id: u64,
}

impl<T: Record> From<RawEditor<T>> for CollectionEditor<T> {
    fn from(raw: RawEditor<T>) -> Self {
        // the counter must stay ahead of every loaded id
        let floor = raw
            .items
            .iter()
            .map(|r| r.id().get())
            .max()
            .map_or(1, |max| max + 1);
        if raw.next_id < floor {
            tracing::debug!(
                kind = T::KIND,
                stored = raw.next_id,
                next_id = floor,
                "Raised id counter past loaded records"
            );
        }
        Self {
            items: raw.items,
            next_id: raw.next_id.max(floor),
        }
    }
}

impl<T: Record> CollectionEditor<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record built from `defaults`, assigning it a fresh id
    pub fn add(&mut self, mut defaults: T) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        defaults.set_id(id);
        self.items.push(defaults);
        tracing::debug!(kind = T::KIND, %id, len = self.items.len(), "Added record");
        id
    }

    /// Append a record with every field empty
    pub fn add_blank(&mut self) -> RecordId
    where
        T: Default,
    {
        self.add(T::default())
    }

    /// Remove the record with `id`, returning it if it was present
    pub fn remove_by_id(&mut self, id: RecordId) -> Option<T> {
        let Some(index) = self.position(id) else {
            tracing::debug!(kind = T::KIND, %id, "Remove ignored, no such record");
            return None;
        };
        let removed = self.items.remove(index);
        tracing::debug!(kind = T::KIND, %id, "Removed record");
        Some(removed)
    }

    /// Replace one field of the record with `id`
    ///
    /// Returns false (and changes nothing) when the id is unknown.
    pub fn update_field(&mut self, id: RecordId, field: T::Field, value: impl Into<String>) -> bool {
        match self.items.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                record.set_field(field, value.into());
                tracing::debug!(kind = T::KIND, %id, ?field, "Updated record field");
                true
            }
            None => {
                tracing::debug!(kind = T::KIND, %id, ?field, "Update ignored, no such record");
                false
            }
        }
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.items.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.items.iter().position(|r| r.id() == id)
    }

    /// Records in display order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.items.iter().map(Record::id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T: Record> IntoIterator for &'a CollectionEditor<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
