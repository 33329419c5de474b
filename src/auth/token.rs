//! Bearer token claim extraction.
//!
//! The API issues compact three-segment tokens whose middle segment is a
//! base64url-encoded JSON object. The client only reads claims for UX
//! purposes (expiry display and the refresh-before-expiry margin); it never
//! verifies the signature. Authorization is enforced by the server.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses to `None`. A token whose claims cannot be read
//! is still a usable token; the session just proceeds with no known expiry.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::{Map, Value};

/// Safety margin subtracted from the token's real expiry so the client
/// stops using it during its final minute.
const EXPIRY_MARGIN_MS: i64 = 60_000;

/// Decode the claims object embedded in a compact bearer token.
///
/// Returns `None` when the token does not have exactly three segments,
/// the payload segment is not valid base64url, the decoded bytes are not
/// UTF-8, or the text is not a JSON object. Never panics.
pub fn decode_claims(token: &str) -> Option<Map<String, Value>> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return None,
    };

    // Tokens are normally unpadded; tolerate padded ones.
    let raw = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let text = String::from_utf8(raw).ok()?;

    match serde_json::from_str::<Value>(&text).ok()? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Compute the client-side expiry instant (epoch milliseconds) from a
/// claims object: `exp * 1000` minus the safety margin. `None` when the
/// `exp` claim is missing or not numeric.
#[allow(clippy::cast_possible_truncation)]
pub fn expiry_millis(claims: &Map<String, Value>) -> Option<i64> {
    let exp = claims.get("exp")?.as_f64()?;
    Some((exp * 1000.0) as i64 - EXPIRY_MARGIN_MS)
}

/// Decode a token and compute its client-side expiry in one step.
pub fn token_expiry(token: &str) -> Option<i64> {
    expiry_millis(&decode_claims(token)?)
}
