//! Checkout records

use serde::{Deserialize, Serialize};

/// Terminal record written when a guest leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRecord {
    /// Room key of the stay being closed
    pub room_key: String,
    /// Checkout instant, Unix seconds UTC
    pub checkout_time: i64,
}

impl CheckoutRecord {
    /// Checkout of `room_key` at `checkout_time`
    pub fn new(room_key: impl Into<String>, checkout_time: i64) -> Self {
        Self {
            room_key: room_key.into(),
            checkout_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_record_field_names() {
        let record = CheckoutRecord::new("ab".repeat(32), 1_784_000_000);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["room_key"], serde_json::json!("ab".repeat(32)));
        assert_eq!(value["checkout_time"], serde_json::json!(1_784_000_000));
    }
}
