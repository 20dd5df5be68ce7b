//! Well-known permission scopes.
//!
//! These must match the permissions configured on the token issuer's API.

pub const GET_DRINKS_DETAIL: &str = "get:drinks-detail";
pub const POST_DRINKS: &str = "post:drinks";
pub const PATCH_DRINKS: &str = "patch:drinks";
pub const DELETE_DRINKS: &str = "delete:drinks";

/// Whether `granted` contains `required` exactly.
pub fn is_granted(granted: &[String], required: &str) -> bool {
    granted.iter().any(|p| p == required)
}
