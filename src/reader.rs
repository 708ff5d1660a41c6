//! Document readers for JSON files and byte buffers.

use std::io;
use std::path::Path;

use crate::{Document, PdfSuitError, Result};

impl Document {
    /// Reads and decodes a document from a JSON file.
    ///
    /// A missing path maps to [`PdfSuitError::FileNotFound`]; any other
    /// filesystem failure surfaces as [`PdfSuitError::Io`].
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await.map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                PdfSuitError::FileNotFound(path.display().to_string())
            } else {
                PdfSuitError::Io(err)
            }
        })?;

        serde_json::from_slice(&data).map_err(PdfSuitError::InvalidJson)
    }

    /// Decodes a document from a JSON byte buffer.
    ///
    /// Zero-length input maps to [`PdfSuitError::EmptyDocument`].
    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Err(PdfSuitError::EmptyDocument);
        }

        serde_json::from_slice(data).map_err(PdfSuitError::InvalidJson)
    }
}
