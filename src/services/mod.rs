pub mod metadata_service;
pub mod text_reader;
pub mod transport;
