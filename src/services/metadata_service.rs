use log::error;
use serde_json::Value;

use super::text_reader::TextReader;
use super::transport::Transport;
use crate::error::MetadataError;

pub const METADATA_FILE: &str = "metadata.json";
pub const METADATA_MIME: &str = "application/json";

pub fn parse_json(resource: &str, data: &str) -> Result<Value, MetadataError> {
    serde_json::from_str(data).map_err(|source| MetadataError::Parse {
        resource: resource.to_string(),
        source,
    })
}

/// Loads the tileset metadata document next to the reader's base URL.
pub struct MetadataLoader<T> {
    reader: TextReader<T>,
    file: String,
}

impl<T: Transport> MetadataLoader<T> {
    pub fn new(reader: TextReader<T>) -> MetadataLoader<T> {
        MetadataLoader {
            reader,
            file: METADATA_FILE.to_string(),
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> MetadataLoader<T> {
        self.file = file.into();
        self
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    /// Returns `Ok(None)` when the document cannot be read, and an error when
    /// it was read but is not valid JSON.
    pub fn read_metadata(&self) -> Result<Option<Value>, MetadataError> {
        let text = match self.reader.read_text(&self.file, METADATA_MIME) {
            Ok(text) => text,
            Err(e) => {
                error!("Cannot read {}: {}", self.file, e);
                return Ok(None);
            }
        };

        parse_json(&self.file, &text).map(Some)
    }
}
