//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts (unknown keys rejected)
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod artist;
pub mod category;
pub mod drink;
pub mod question;
pub mod show;
pub mod venue;
