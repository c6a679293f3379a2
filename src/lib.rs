//! Blocking reader for tileset text resources and their `metadata.json`.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{ConfigError, MetadataError, ReadError, TransportError};
pub use models::Response;
pub use services::metadata_service::{parse_json, MetadataLoader, METADATA_FILE, METADATA_MIME};
pub use services::text_reader::{read_text, TextReader};
pub use services::transport::{FileTransport, HttpTransport, SchemeTransport, Transport};
