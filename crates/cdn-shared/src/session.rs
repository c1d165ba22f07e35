use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::{const_config::admin::ADMIN_USER_ID, errors::SessionCookieError};

/// Identity decoded from the `user` cookie
///
/// Reconstructed from the cookie on every page load and never persisted
/// independently; the browser's cookie store owns the value and the client
/// only reads it.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub discriminator: Option<String>,
}

/// Decodes the raw value of the `user` cookie
///
/// The backend stores the value as a quoted base64 encoding of the identity
/// json so one surrounding quote pair is stripped before decoding. Unquoted
/// values are accepted as well. Unknown fields in the json are ignored (the
/// issuer includes the full upstream profile).
pub fn decode_user_cookie(raw: Option<&str>) -> Result<SessionIdentity, SessionCookieError> {
    let raw = raw.ok_or(SessionCookieError::Missing)?;
    let value = raw.strip_prefix('"').unwrap_or(raw);
    let value = value.strip_suffix('"').unwrap_or(value);
    if value.is_empty() {
        return Err(SessionCookieError::Empty);
    }
    let decoded = BASE64.decode(value)?;
    Ok(serde_json::from_slice(&decoded)?)
}

/// Who the client believes is using the page
///
/// Advisory only: the value comes from a client readable cookie that is not
/// cryptographically verified, so nothing here is a security decision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionContext {
    #[default]
    Anonymous,
    Identified(SessionIdentity),
}

impl SessionContext {
    /// Builds a context from the raw cookie value
    ///
    /// Any decode failure is folded into [`SessionContext::Anonymous`] instead
    /// of failing page initialization.
    pub fn from_cookie(raw: Option<&str>) -> Self {
        match decode_user_cookie(raw) {
            Ok(identity) => Self::Identified(identity),
            Err(e) => {
                tracing::debug!("treating session as anonymous, cookie did not decode: {e}");
                Self::Anonymous
            }
        }
    }

    pub fn identity(&self) -> Option<&SessionIdentity> {
        match self {
            Self::Anonymous => None,
            Self::Identified(identity) => Some(identity),
        }
    }

    /// Whether the admin only parts of the UI should be shown and fetched
    ///
    /// Client side convenience check only, it provides no security boundary.
    /// The backend must enforce authorization on the admin endpoints itself.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Identified(identity) if identity.id == ADMIN_USER_ID)
    }
}
