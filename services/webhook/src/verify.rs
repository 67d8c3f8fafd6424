//! Inbound webhook signature verification.
//!
//! The identity provider signs each delivery with HMAC-SHA256 over
//! `"{id}.{timestamp}.{body}"` using a shared secret, and attaches the
//! message id, the send timestamp, and one or more versioned signatures as
//! headers. Verification is over the exact wire bytes of the body, so the
//! handler must hand the same `String` to [`verify`] and to the JSON parser.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq as _;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the unique message id.
pub const HEADER_MESSAGE_ID: &str = "svix-id";
/// Header carrying the send timestamp (Unix seconds, decimal string).
pub const HEADER_TIMESTAMP: &str = "svix-timestamp";
/// Header carrying space-separated `{version},{base64sig}` entries.
pub const HEADER_SIGNATURE: &str = "svix-signature";

/// Maximum accepted clock skew between the signed timestamp and server time,
/// in either direction. Rejects both stale replays and future-dated requests.
pub const SIGNATURE_TOLERANCE_SECS: i64 = 300;

/// Mandatory prefix of the shared secret; the remainder is the base64-encoded
/// HMAC key.
const SECRET_PREFIX: &str = "whsec_";

/// Raw header values lifted off an inbound delivery.
#[derive(Debug, Clone, Copy)]
pub struct SignedHeaders<'a> {
    pub message_id: &'a str,
    pub timestamp: &'a str,
    pub signatures: &'a str,
}

/// Reasons a delivery fails verification. All of them collapse to 401 at the
/// HTTP boundary; the distinction exists for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("webhook secret is not a whsec_-prefixed base64 key")]
    BadSecret,
    #[error("timestamp header is not unix seconds")]
    BadTimestamp,
    #[error("timestamp outside the tolerance window")]
    StaleTimestamp,
    #[error("no signature entry matched")]
    SignatureMismatch,
}

/// Verify an inbound delivery against the shared secret.
///
/// `now` is injected so the tolerance boundary is testable; production
/// callers pass `Utc::now()`.
pub fn verify(
    secret: &str,
    headers: &SignedHeaders<'_>,
    body: &str,
    now: DateTime<Utc>,
) -> Result<(), VerifyError> {
    let timestamp: i64 = headers
        .timestamp
        .trim()
        .parse()
        .map_err(|_| VerifyError::BadTimestamp)?;
    let skew = (now.timestamp() - timestamp).abs();
    if skew > SIGNATURE_TOLERANCE_SECS {
        return Err(VerifyError::StaleTimestamp);
    }

    // Sign over the raw header string, not the parsed integer: the provider
    // signed whatever bytes it sent.
    let expected = compute_signature(secret, headers.message_id, headers.timestamp.trim(), body)?;

    // Multiple entries support provider-side key rotation: any match wins.
    for entry in headers.signatures.split_ascii_whitespace() {
        let Some((_version, candidate)) = entry.split_once(',') else {
            continue;
        };
        if bool::from(candidate.as_bytes().ct_eq(expected.as_bytes())) {
            return Ok(());
        }
    }
    Err(VerifyError::SignatureMismatch)
}

/// Compute the base64 HMAC-SHA256 signature for `"{id}.{timestamp}.{body}"`.
pub fn compute_signature(
    secret: &str,
    message_id: &str,
    timestamp: &str,
    body: &str,
) -> Result<String, VerifyError> {
    let encoded_key = secret
        .strip_prefix(SECRET_PREFIX)
        .ok_or(VerifyError::BadSecret)?;
    let key = BASE64
        .decode(encoded_key)
        .map_err(|_| VerifyError::BadSecret)?;
    let mut mac = <HmacSha256 as Mac>::new_from_slice(&key).map_err(|_| VerifyError::BadSecret)?;
    mac.update(message_id.as_bytes());
    mac.update(b".");
    mac.update(timestamp.as_bytes());
    mac.update(b".");
    mac.update(body.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}
