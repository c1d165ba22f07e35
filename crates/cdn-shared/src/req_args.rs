//! This module stores the expected format of the arguments for the requests
//! The structure of the module is supposed to match the path of the endpoints.
//! For example `/delete` maps to [`DeleteReqArgs`]

/// Arguments for `/delete`, which removes a stored file or revokes a user's
/// access depending on which parameter is sent
///
/// Serialized untagged so only the inner query parameter ends up on the wire
/// (`filename=...` or `user_id=...`).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum DeleteReqArgs {
    File { filename: String },
    User { user_id: String },
}
