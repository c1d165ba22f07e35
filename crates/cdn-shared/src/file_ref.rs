use std::fmt::Display;

use crate::errors::ConversionError;

/// Fully qualified URL of a stored file as returned by the backend
///
/// Constrained to not be an empty string
#[derive(
    Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct FileRef(String);

impl TryFrom<String> for FileRef {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(ConversionError::Empty);
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for FileRef {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.to_string().try_into()
    }
}

impl FileRef {
    pub fn url(&self) -> &str {
        &self.0
    }

    /// Name the file is displayed under, the final `/` delimited segment of
    /// the URL
    pub fn display_name(&self) -> &str {
        self.0
            .rsplit('/')
            .next()
            .expect("rsplit yields at least one segment")
    }
}

impl From<FileRef> for String {
    fn from(value: FileRef) -> Self {
        value.0
    }
}

impl AsRef<str> for FileRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for FileRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
