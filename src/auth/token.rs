//! Session token payload decoding.
//!
//! Tokens use the compact three-segment encoding (header.payload.signature,
//! base64url). Only the payload is decoded here; the signature is never
//! verified client-side. Expiry checking against the `exp` claim is advisory
//! UX gating, not a security boundary.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Deserialize;
use thiserror::Error;

/// Number of dot-separated segments in a compact token
const TOKEN_SEGMENTS: usize = 3;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("expected 3 dot-separated token segments, found {0}")]
    SegmentCount(usize),

    #[error("payload segment is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not a valid claims object: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Claims consulted by the navigation guard.
///
/// Only `exp` matters here; any other fields in the payload are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    /// Expiry as a Unix timestamp in seconds
    pub exp: i64,
}

impl Claims {
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp < now
    }
}

/// Decode the payload segment of a compact token into [`Claims`].
///
/// Any failure (wrong segment count, bad base64, unparseable payload,
/// missing `exp`) means the token is invalid; callers that don't care
/// which can treat all variants uniformly.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != TOKEN_SEGMENTS {
        return Err(TokenError::SegmentCount(segments.len()));
    }

    let payload = URL_SAFE_NO_PAD.decode(segments[1])?;
    Ok(serde_json::from_slice(&payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(payload_json: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(payload_json.as_bytes());
        format!("{}.{}.fakesignature", header, payload)
    }

    #[test]
    fn test_decode_valid_token() {
        let token = make_token(r#"{"exp": 9999999999, "sub": "user-1"}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.exp, 9999999999);
    }

    #[test]
    fn test_decode_rejects_wrong_segment_count() {
        assert!(matches!(
            decode_claims("justonesegment"),
            Err(TokenError::SegmentCount(1))
        ));
        assert!(matches!(
            decode_claims("a.b.c.d"),
            Err(TokenError::SegmentCount(4))
        ));
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        assert!(matches!(
            decode_claims("head.!!not-base64!!.sig"),
            Err(TokenError::Base64(_))
        ));
    }

    #[test]
    fn test_decode_rejects_non_json_payload() {
        let payload = URL_SAFE_NO_PAD.encode(b"not json at all");
        let token = format!("head.{}.sig", payload);
        assert!(matches!(decode_claims(&token), Err(TokenError::Payload(_))));
    }

    #[test]
    fn test_decode_rejects_missing_exp() {
        let token = make_token(r#"{"sub": "user-1"}"#);
        assert!(matches!(decode_claims(&token), Err(TokenError::Payload(_))));
    }

    #[test]
    fn test_expiry_boundary() {
        let claims = Claims { exp: 1000 };
        assert!(!claims.is_expired(999));
        // exp == now still counts as valid
        assert!(!claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }
}
