//! Domain logic shared by the database and API crates.
//!
//! Nothing in here talks to PostgreSQL or HTTP, so every module is unit
//! testable on its own.

pub mod booking;
pub mod error;
pub mod lenient;
pub mod pagination;
pub mod permissions;
pub mod quiz;
pub mod recipe;
pub mod search;
pub mod types;
pub mod validation;
