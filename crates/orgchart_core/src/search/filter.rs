//! Substring search over the flat entity collection.
//!
//! # Responsibility
//! - Compute the ordered set of entity ids matching a query.
//! - Track a circular cursor over the current match list.
//!
//! # Invariants
//! - A blank query means search is inactive and yields no matches.
//! - Match order is the source order of the collection, independent of the
//!   tree shape.
//! - `next`/`prev` on an empty match list are no-ops.

use crate::model::entity::{Entity, EntityId};

/// Returns ids of entities whose display text matches the query.
///
/// Matching is a case-insensitive substring test over `name` for every kind
/// and additionally over `title` for persons.
pub fn search_entities(entities: &[Entity], query: &str) -> Vec<EntityId> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    entities
        .iter()
        .filter(|entity| {
            if entity.name.to_lowercase().contains(&needle) {
                return true;
            }
            entity.is_person()
                && entity
                    .title
                    .as_deref()
                    .is_some_and(|title| title.to_lowercase().contains(&needle))
        })
        .map(|entity| entity.id.clone())
        .collect()
}

/// Stateful cursor over an ordered match list.
///
/// `current` is `None` exactly when the match list is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCursor {
    results: Vec<EntityId>,
    current: Option<usize>,
}

impl SearchCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the match list for the given collection and query and
    /// resets the cursor to the first hit.
    pub fn refresh(&mut self, entities: &[Entity], query: &str) {
        self.set_results(search_entities(entities, query));
    }

    /// Replaces the match list; the cursor resets to the first hit.
    pub fn set_results(&mut self, results: Vec<EntityId>) {
        self.current = if results.is_empty() { None } else { Some(0) };
        self.results = results;
    }

    pub fn results(&self) -> &[EntityId] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Zero-based position of the highlighted match, when any.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Id of the highlighted match, when any.
    pub fn current_id(&self) -> Option<&str> {
        self.current.map(|index| self.results[index].as_str())
    }

    /// Advances circularly through the match list.
    pub fn next(&mut self) {
        if let Some(index) = self.current {
            self.current = Some((index + 1) % self.results.len());
        }
    }

    /// Retreats circularly through the match list.
    pub fn prev(&mut self) {
        if let Some(index) = self.current {
            self.current = Some((index + self.results.len() - 1) % self.results.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SearchCursor;

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut cursor = SearchCursor::new();
        cursor.set_results(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(cursor.current_id(), Some("a"));

        cursor.prev();
        assert_eq!(cursor.current_id(), Some("c"));
        cursor.next();
        assert_eq!(cursor.current_id(), Some("a"));
        cursor.next();
        assert_eq!(cursor.current_id(), Some("b"));
    }

    #[test]
    fn cursor_is_noop_when_empty() {
        let mut cursor = SearchCursor::new();
        cursor.next();
        cursor.prev();
        assert_eq!(cursor.current_index(), None);
        assert_eq!(cursor.current_id(), None);
    }
}
