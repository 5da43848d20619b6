//! Domain Layer - Core Entity Trait
//!
//! Every list and item carries a numeric id that is unique among its
//! siblings at the time it was created.

use crate::config::IdPolicy;
use crate::error::{ListError, ListResult};

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// Returns the entity's identifier among its siblings
    fn id(&self) -> u32;
}

/// Picks the id for an entity about to be appended after `siblings`.
///
/// `CountBased` reproduces `len + 1` and can hand out an id that is still in
/// use once something has been deleted. `NextAfterMax` never does.
/// Fails with `IdsExhausted` when the next id would not fit in a `u32`.
pub fn next_id<T: Entity>(siblings: &[T], policy: IdPolicy) -> ListResult<u32> {
    let last = match policy {
        IdPolicy::CountBased => u32::try_from(siblings.len()).ok(),
        IdPolicy::NextAfterMax => Some(siblings.iter().map(Entity::id).max().unwrap_or(0)),
    };
    last.and_then(|last| last.checked_add(1)).ok_or(ListError::IdsExhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Item;

    fn items(ids: &[u32]) -> Vec<Item> {
        ids.iter().map(|id| Item::new(*id, format!("Item {}", id))).collect()
    }

    #[test]
    fn test_next_id_empty() {
        assert_eq!(next_id::<Item>(&[], IdPolicy::CountBased), Ok(1));
        assert_eq!(next_id::<Item>(&[], IdPolicy::NextAfterMax), Ok(1));
    }

    #[test]
    fn test_next_id_after_gap() {
        // Item 1 of 2 was deleted
        let remaining = items(&[2]);
        assert_eq!(next_id(&remaining, IdPolicy::CountBased), Ok(2));
        assert_eq!(next_id(&remaining, IdPolicy::NextAfterMax), Ok(3));
    }

    #[test]
    fn test_next_id_at_u32_max() {
        let stored = items(&[u32::MAX]);
        assert_eq!(next_id(&stored, IdPolicy::NextAfterMax), Err(ListError::IdsExhausted));
        // Count-based ignores the stored value
        assert_eq!(next_id(&stored, IdPolicy::CountBased), Ok(2));
    }
}
