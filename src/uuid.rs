//! UUID text formatting.

use ::uuid::Uuid;

/// Length of the hyphenated text form.
pub const TEXT_LEN: usize = 36;

/// Formats 16 bytes as `8-4-4-4-12` lowercase hex groups.
pub fn encode(bytes: &[u8; 16]) -> [u8; TEXT_LEN] {
    let mut out = [0u8; TEXT_LEN];
    Uuid::from_bytes(*bytes).hyphenated().encode_lower(&mut out);
    out
}

/// [`encode`] as a `String`.
pub fn to_string(bytes: &[u8; 16]) -> String {
    Uuid::from_bytes(*bytes).hyphenated().to_string()
}
