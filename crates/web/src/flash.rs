//! One-shot notices carried across a redirect in a signed cookie.
//!
//! The cookie value is `<payload>.<signature>`, both base64url encoded. The
//! payload is `ok:<message>` or `err:<message>` and the signature is an
//! HMAC-SHA256 of the payload keyed by the configured secret.

use std::sync::Arc;

use axum::{
    http::{
        HeaderMap,
        header::{COOKIE, SET_COOKIE},
    },
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Ok,
    Err,
}

impl FlashKind {
    fn tag(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Err => "err",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ok" => Some(Self::Ok),
            "err" => Some(Self::Err),
            _ => None,
        }
    }

    pub fn css_class(self) -> &'static str {
        self.tag()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Ok,
            message: message.into(),
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Err,
            message: message.into(),
        }
    }
}

#[derive(Clone)]
pub struct FlashSigner {
    key: Arc<[u8]>,
}

impl FlashSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            key: Arc::from(secret.as_bytes()),
        }
    }

    fn mac(&self, payload: &[u8]) -> Option<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(&self.key).ok()?;
        mac.update(payload);
        Some(mac)
    }

    pub fn encode(&self, flash: &Flash) -> Option<String> {
        let payload = format!("{}:{}", flash.kind.tag(), flash.message);
        let signature = self.mac(payload.as_bytes())?.finalize().into_bytes();

        Some(format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(payload.as_bytes()),
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }

    /// Returns `None` for anything malformed or signed with another key.
    pub fn decode(&self, value: &str) -> Option<Flash> {
        let (payload, signature) = value.split_once('.')?;
        let payload = URL_SAFE_NO_PAD.decode(payload).ok()?;
        let signature = URL_SAFE_NO_PAD.decode(signature).ok()?;

        self.mac(&payload)?.verify_slice(&signature).ok()?;

        let payload = String::from_utf8(payload).ok()?;
        let (tag, message) = payload.split_once(':')?;

        Some(Flash {
            kind: FlashKind::from_tag(tag)?,
            message: message.to_string(),
        })
    }

    /// Flash carried by the request, if any, and whether a flash cookie was
    /// present at all (valid or not) so the caller knows to clear it.
    pub fn read(&self, headers: &HeaderMap) -> (Option<Flash>, bool) {
        match flash_cookie_value(headers) {
            Some(value) => {
                let flash = self.decode(&value);
                if flash.is_none() {
                    tracing::debug!("Ignoring flash cookie with invalid signature");
                }
                (flash, true)
            }
            None => (None, false),
        }
    }

    /// `303 See Other` to `to`, carrying `flash` for the next page view.
    pub fn redirect(&self, to: &str, flash: Flash) -> Response {
        match self.encode(&flash) {
            Some(value) => (
                AppendHeaders([(SET_COOKIE, set_cookie_header(&value))]),
                Redirect::to(to),
            )
                .into_response(),
            None => {
                tracing::warn!("Could not sign flash message: {}", flash.message);
                Redirect::to(to).into_response()
            }
        }
    }
}

fn flash_cookie_value(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == FLASH_COOKIE)
        .map(|(_, value)| value.to_string())
}

fn set_cookie_header(value: &str) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", FLASH_COOKIE, value)
}

pub fn clear_cookie_header() -> String {
    format!("{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax", FLASH_COOKIE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode, header::LOCATION};

    #[test]
    fn test_decode_reads_back_encoded_flash() {
        let signer = FlashSigner::new("secret");
        let flash = Flash::err("Score must be a number: 10:30");

        let value = signer.encode(&flash).unwrap();
        assert_eq!(signer.decode(&value), Some(flash));
    }

    #[test]
    fn test_foreign_key_is_rejected() {
        let value = FlashSigner::new("secret").encode(&Flash::ok("Score saved")).unwrap();
        assert_eq!(FlashSigner::new("other").decode(&value), None);
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let signer = FlashSigner::new("secret");
        let value = signer.encode(&Flash::ok("Score saved")).unwrap();
        let (_, signature) = value.split_once('.').unwrap();
        let forged = format!("{}.{}", URL_SAFE_NO_PAD.encode("ok:Deleted entry #1"), signature);

        assert_eq!(signer.decode(&forged), None);
        assert_eq!(signer.decode("garbage"), None);
    }

    #[test]
    fn test_read_finds_flash_among_other_cookies() {
        let signer = FlashSigner::new("secret");
        let value = signer.encode(&Flash::ok("Deleted entry #7")).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("theme=dark; flash={}; lang=en", value)).unwrap(),
        );

        let (flash, present) = signer.read(&headers);
        assert!(present);
        assert_eq!(flash, Some(Flash::ok("Deleted entry #7")));
    }

    #[test]
    fn test_read_without_cookie() {
        let (flash, present) = FlashSigner::new("secret").read(&HeaderMap::new());
        assert!(!present);
        assert!(flash.is_none());
    }

    #[test]
    fn test_redirect_sets_cookie() {
        let response = FlashSigner::new("secret").redirect("/judges", Flash::ok("Score saved"));

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/judges");
        let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("flash="));
    }
}
