//! Opaque pagination cursor: an RFC 3339 timestamp wrapped in URL-safe base64.
//!
//! The token carries the `created_at` of the last row of a page. Callers must treat it as
//! opaque; the only guarantee is that [`decode_cursor`] reverses [`encode_cursor`] exactly,
//! nanoseconds and UTC offset included.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use thiserror::Error;

/// Reasons a cursor token cannot be turned back into a timestamp.
#[derive(Error, Debug)]
pub enum CursorError {
    #[error("not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("not an RFC 3339 timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
}

/// Encodes `t` into an opaque, URL-safe cursor token.
pub fn encode_cursor(t: DateTime<FixedOffset>) -> String {
    let text = t.to_rfc3339_opts(SecondsFormat::AutoSi, true);
    URL_SAFE_NO_PAD.encode(text.as_bytes())
}

/// Decodes a token produced by [`encode_cursor`].
///
/// Tokens in the standard padded base64 alphabet are accepted as well.
pub fn decode_cursor(token: &str) -> Result<DateTime<FixedOffset>, CursorError> {
    let bytes = match URL_SAFE_NO_PAD.decode(token) {
        Ok(bytes) => bytes,
        Err(url_err) => STANDARD.decode(token).map_err(|_| url_err)?,
    };
    let text = String::from_utf8(bytes)?;
    Ok(DateTime::parse_from_rfc3339(&text)?)
}
