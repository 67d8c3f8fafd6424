//! Provider-side webhook signing.
//!
//! Reproduces what the identity provider's dispatcher does when signing a
//! webhook delivery, so tests can mint valid (and deliberately invalid)
//! signed requests without a live provider.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Shared secret used across webhook tests: `whsec_` + base64 of a fixed key.
pub const TEST_WEBHOOK_SECRET: &str = "whsec_bmF2ZXR0ZS13ZWJob29rLXRlc3Qta2V5LTMyYnl0ZXM=";

/// Compute the provider-side signature over `{id}.{timestamp}.{body}`.
///
/// # Panics
///
/// Panics on a malformed secret — test secrets are fixed literals.
pub fn sign(secret: &str, message_id: &str, timestamp: i64, body: &str) -> String {
    let encoded_key = secret
        .strip_prefix("whsec_")
        .expect("test secret must carry the whsec_ prefix");
    let key = BASE64
        .decode(encoded_key)
        .expect("test secret key must be valid base64");
    let mut mac =
        <HmacSha256 as Mac>::new_from_slice(&key).expect("HMAC accepts keys of any length");
    mac.update(format!("{message_id}.{timestamp}.{body}").as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

/// Build the three signed headers the provider attaches to a delivery.
pub fn signed_headers(secret: &str, message_id: &str, timestamp: i64, body: &str) -> HeaderMap {
    let signature = sign(secret, message_id, timestamp, body);
    let mut map = HeaderMap::new();
    map.insert(
        HeaderName::from_static("svix-id"),
        HeaderValue::from_str(message_id).expect("message id is a valid header value"),
    );
    map.insert(
        HeaderName::from_static("svix-timestamp"),
        HeaderValue::from_str(&timestamp.to_string()).expect("timestamp is a valid header value"),
    );
    map.insert(
        HeaderName::from_static("svix-signature"),
        HeaderValue::from_str(&format!("v1,{signature}"))
            .expect("signature is a valid header value"),
    );
    map
}
