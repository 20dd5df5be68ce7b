//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every write runs inside a
//! transaction: if any statement fails the transaction is dropped without
//! committing, so the store is left as it was.

pub mod artist_repo;
pub mod category_repo;
pub mod drink_repo;
pub mod question_repo;
pub mod show_repo;
pub mod venue_repo;

pub use artist_repo::ArtistRepo;
pub use category_repo::CategoryRepo;
pub use drink_repo::DrinkRepo;
pub use question_repo::QuestionRepo;
pub use show_repo::ShowRepo;
pub use venue_repo::VenueRepo;

/// Bind value for a clearable column: `None` keeps the stored value and a
/// cleared field becomes `""`, which the update turns into `NULL` via
/// `NULLIF(COALESCE($n, col), '')`.
pub(crate) fn clearable(field: &Option<Option<String>>) -> Option<&str> {
    field.as_ref().map(|value| value.as_deref().unwrap_or(""))
}
