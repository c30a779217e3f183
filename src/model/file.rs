//! Embedded file attachments (images, videos)

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// An immutable attachment: MIME type, name, size and base64 payload
///
/// The type and size are whatever the uploader declared; nothing is sniffed
/// from the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    #[serde(rename = "type")]
    mime_type: String,
    name: String,
    content: String,
    size: u64,
}

impl File {
    /// Wrap an already base64-encoded payload
    pub fn new(
        mime_type: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
        size: u64,
    ) -> Self {
        Self {
            mime_type: mime_type.into(),
            name: name.into(),
            content: content.into(),
            size,
        }
    }

    /// Encode raw bytes, recording their length as the size
    pub fn from_bytes(mime_type: impl Into<String>, name: impl Into<String>, bytes: &[u8]) -> Self {
        Self::new(mime_type, name, STANDARD.encode(bytes), bytes.len() as u64)
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The encoded payload
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Decode the payload back into bytes
    pub fn bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.content)
    }

    /// `data:<type>;base64,<payload>`
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.content)
    }
}
