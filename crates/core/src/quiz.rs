//! Quiz question selection.
//!
//! The store supplies the ids of every question in the requested category
//! and the caller supplies what the player has already seen. One of the
//! remaining ids is drawn uniformly at random.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::types::DbId;

/// Category id meaning "questions from every category".
pub const ANY_CATEGORY: DbId = 0;

/// Returns the category filter for a quiz request, or `None` for all categories.
pub fn category_filter(category_id: DbId) -> Option<DbId> {
    (category_id != ANY_CATEGORY).then_some(category_id)
}

/// Ids from `pool` that are not in `previous`, preserving `pool` order.
pub fn remaining_candidates(pool: &[DbId], previous: &[DbId]) -> Vec<DbId> {
    let seen: HashSet<DbId> = previous.iter().copied().collect();
    pool.iter().copied().filter(|id| !seen.contains(id)).collect()
}

/// Pick the next question id, or `None` when every candidate has been seen.
pub fn pick_next(pool: &[DbId], previous: &[DbId]) -> Option<DbId> {
    pick_next_with(&mut rand::rng(), pool, previous)
}

/// [`pick_next`] with a caller-supplied random source.
pub fn pick_next_with<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[DbId],
    previous: &[DbId],
) -> Option<DbId> {
    remaining_candidates(pool, previous).choose(rng).copied()
}
