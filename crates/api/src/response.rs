//! Shared success envelope for API handlers.
//!
//! Every successful response is a JSON object with `"success": true` next to
//! the endpoint's own fields. Wrap a typed body in [`Success`] instead of
//! building ad-hoc `serde_json::json!` values.

use serde::Serialize;

/// `{ "success": true, ...body }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Success::new(DrinkList { drinks })))
/// ```
#[derive(Debug, Serialize)]
pub struct Success<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Success<T> {
    pub fn new(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Deleted {
        deleted: i64,
    }

    #[test]
    fn body_fields_sit_next_to_success() {
        let value = serde_json::to_value(Success::new(Deleted { deleted: 5 })).unwrap();
        assert_eq!(value, serde_json::json!({"success": true, "deleted": 5}));
    }
}
