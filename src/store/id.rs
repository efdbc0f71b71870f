//! Id generation
//!
//! Ids are wall-clock milliseconds, bumped past the largest id already in the
//! collection so two inserts within the same millisecond never collide.

use chrono::Utc;

use super::errors::{StoreError, StoreResult};
use super::model::{TodoDocument, TodoId};

/// Next id for a new item in `document`
pub fn next_id(document: &TodoDocument) -> StoreResult<TodoId> {
    next_id_at(document, now_millis())
}

/// Next id given the current time in milliseconds
///
/// Fails if the collection already holds the largest representable id.
pub fn next_id_at(document: &TodoDocument, now_ms: TodoId) -> StoreResult<TodoId> {
    match document.max_id() {
        Some(max) if max >= now_ms => max
            .checked_add(1)
            .ok_or_else(|| StoreError::Write("todo id space exhausted".to_string())),
        _ => Ok(now_ms),
    }
}

fn now_millis() -> TodoId {
    // Clocks before the epoch are treated as zero; the max-id bump keeps ids unique.
    Utc::now().timestamp_millis().max(0) as TodoId
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::model::Todo;

    #[test]
    fn test_empty_document_uses_clock() {
        let doc = TodoDocument::default();
        assert_eq!(next_id_at(&doc, 1_700_000_000_000).unwrap(), 1_700_000_000_000);
    }

    #[test]
    fn test_same_tick_does_not_collide() {
        let doc = TodoDocument::new(vec![Todo::new(1_000, "a")]);
        assert_eq!(next_id_at(&doc, 1_000).unwrap(), 1_001);
    }

    #[test]
    fn test_clock_behind_existing_ids() {
        let doc = TodoDocument::new(vec![Todo::new(5_000, "a"), Todo::new(4_000, "b")]);
        assert_eq!(next_id_at(&doc, 10).unwrap(), 5_001);
    }

    #[test]
    fn test_clock_ahead_of_existing_ids() {
        let doc = TodoDocument::new(vec![Todo::new(5, "a")]);
        assert_eq!(next_id_at(&doc, 9_000).unwrap(), 9_000);
    }

    #[test]
    fn test_exhausted_id_space_is_an_error() {
        let doc = TodoDocument::new(vec![Todo::new(TodoId::MAX, "last")]);
        assert!(matches!(next_id_at(&doc, 1_000), Err(StoreError::Write(_))));
    }

    #[test]
    fn test_real_clock_is_positive() {
        assert!(next_id(&TodoDocument::default()).unwrap() > 0);
    }
}
