//! Expected format of the backend's response payloads
//!
//! The backend reports application failures in band: every payload carries an
//! `error` field and the data fields are nullable. [`Envelope::into_result`]
//! collapses that shape at the boundary so the rest of the client never deals
//! with ambiguous nulls.

use crate::{file_ref::FileRef, user::UserRecord};

/// A response payload that can be collapsed into data or an application error
pub trait Envelope {
    type Data;

    fn into_result(self) -> Result<Self::Data, String>;
}

/// Payload of `GET /files`
#[derive(Debug, serde::Deserialize)]
pub struct FilesResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub files: Option<Vec<String>>,
}

impl Envelope for FilesResponse {
    type Data = Vec<FileRef>;

    fn into_result(self) -> Result<Self::Data, String> {
        if let Some(error) = self.error {
            return Err(error);
        }
        // A null list is the documented empty state, not an error
        self.files
            .unwrap_or_default()
            .into_iter()
            .map(|url| {
                url.try_into()
                    .map_err(|e| format!("invalid file url in response: {e}"))
            })
            .collect()
    }
}

/// Payload of `GET /users`
#[derive(Debug, serde::Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub users: Option<Vec<UserRecord>>,
}

impl Envelope for UsersResponse {
    type Data = Vec<UserRecord>;

    fn into_result(self) -> Result<Self::Data, String> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(self.users.unwrap_or_default())
    }
}

/// Payload of the mutating endpoints (`POST /upload`, `DELETE /delete`)
#[derive(Debug, serde::Deserialize)]
pub struct MutationAck {
    #[serde(default)]
    pub error: Option<String>,
}

impl Envelope for MutationAck {
    type Data = ();

    fn into_result(self) -> Result<Self::Data, String> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
