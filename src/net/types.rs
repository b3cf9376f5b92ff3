//! Wire DTOs for the post store boundary.
//!
//! DESIGN
//! ======
//! These types mirror the store's JSON payloads so serde round-trips stay
//! lossless. Timestamps travel as nanoseconds since the Unix epoch and are
//! accepted as either integer or float JSON numbers, since some store
//! runtimes widen large integers on the way out.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A stored post as returned by the remote store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    /// Rich HTML fragment produced by the editor.
    pub body: String,
    pub author: String,
    /// Store-assigned creation time, nanoseconds since the Unix epoch.
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub timestamp: u64,
}

/// Payload for creating a new post. The store assigns the timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
    pub author: String,
}

fn deserialize_u64_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected non-negative integer-compatible number"))
        }
        other => Err(D::Error::custom(format!(
            "expected number for timestamp, got {other}"
        ))),
    }
}
