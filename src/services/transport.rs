//! Blocking request capability used by the text reader.
//!
//! `SchemeTransport` is the default: `http`/`https` go through reqwest's
//! blocking client and `file` URLs are read from disk.

use std::fs;
use std::io::ErrorKind;
use std::time::Duration;

use encoding_rs::{Encoding, UTF_8};
use log::debug;
use reqwest::blocking::Client;
use url::Url;

use crate::error::TransportError;
use crate::models::{Response, LOCAL_STATUS};

pub trait Transport {
    /// Issues a blocking GET for `url` and returns the body read as `mime`.
    fn get(&self, url: &Url, mime: &str) -> Result<Response, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &Url, mime: &str) -> Result<Response, TransportError> {
        (**self).get(url, mime)
    }
}

/// Decodes `bytes` under the forced MIME type: its `charset` parameter wins,
/// UTF-8 otherwise. Whatever the server declared plays no part.
pub fn decode_body(bytes: &[u8], mime: &str) -> String {
    let encoding = mime
        .split(';')
        .skip(1)
        .filter_map(|param| {
            let mut kv = param.splitn(2, '=');
            match (kv.next(), kv.next()) {
                (Some(key), Some(value)) if key.trim().eq_ignore_ascii_case("charset") => {
                    Some(value.trim().trim_matches('"'))
                }
                _ => None,
            }
        })
        .find_map(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Result<HttpTransport, TransportError> {
        // reqwest's blocking client defaults to a 30s timeout; `None` here means no limit.
        let client = Client::builder().timeout(timeout).build()?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url, mime: &str) -> Result<Response, TransportError> {
        debug!("GET {} as {}", url, mime);
        // The override only affects how the body is read, never the request.
        let resp = self.client.get(url.clone()).send()?;
        let status = resp.status().as_u16();
        let bytes = resp.bytes()?;
        let body = decode_body(&bytes, mime);

        Ok(Response::new(status, body, mime))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FileTransport;

impl Transport for FileTransport {
    fn get(&self, url: &Url, mime: &str) -> Result<Response, TransportError> {
        if url.scheme() != "file" {
            return Err(TransportError::UnsupportedScheme(url.scheme().to_string()));
        }
        let path = url
            .to_file_path()
            .map_err(|_| TransportError::NotFound(url.to_string()))?;
        debug!("reading {} as {}", path.display(), mime);

        let bytes = fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => TransportError::NotFound(path.display().to_string()),
            ErrorKind::PermissionDenied => {
                TransportError::AccessDenied(path.display().to_string())
            }
            _ => TransportError::Io {
                path: path.display().to_string(),
                source: e,
            },
        })?;
        let body = decode_body(&bytes, mime);

        Ok(Response::new(LOCAL_STATUS, body, mime))
    }
}

pub struct SchemeTransport {
    http: HttpTransport,
    file: FileTransport,
}

impl SchemeTransport {
    pub fn new(timeout: Option<Duration>) -> Result<SchemeTransport, TransportError> {
        Ok(SchemeTransport {
            http: HttpTransport::new(timeout)?,
            file: FileTransport,
        })
    }
}

impl Transport for SchemeTransport {
    fn get(&self, url: &Url, mime: &str) -> Result<Response, TransportError> {
        match url.scheme() {
            "http" | "https" => self.http.get(url, mime),
            "file" => self.file.get(url, mime),
            other => Err(TransportError::UnsupportedScheme(other.to_string())),
        }
    }
}
