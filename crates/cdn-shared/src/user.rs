/// A user with access to the CDN as reported by the backend
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub discriminator: Option<String>,
}

impl UserRecord {
    /// Label the user is displayed under
    ///
    /// `username#discriminator` when both are present with a fallback to the
    /// opaque id
    pub fn display_label(&self) -> String {
        match (&self.username, &self.discriminator) {
            (Some(username), Some(discriminator)) => format!("{username}#{discriminator}"),
            _ => self.id.clone(),
        }
    }
}
