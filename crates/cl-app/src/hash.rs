//! Content-based fingerprint of a sizing input.

use cl_sizing::SizingInput;
use sha2::{Digest, Sha256};

/// Hex SHA-256 of the input's canonical JSON form.
pub fn input_fingerprint(input: &SizingInput) -> String {
    let mut hasher = Sha256::new();

    let input_json = serde_json::to_string(input).unwrap_or_default();
    hasher.update(input_json.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
