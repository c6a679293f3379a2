use log::{error, info, warn};
use url::Url;

use super::transport::Transport;
use crate::error::ReadError;

const LOCAL_ACCESS_HINT: &str = "local file access is blocked: serve the directory over HTTP, \
     or start Chromium-based browsers with --allow-file-access-from-files";

/// Reads `url` through `transport`, forcing the body to be read as `mime`.
///
/// Status `0` (local file) and 2xx succeed with the body, which may be empty.
/// Anything else is logged and returned as a [`ReadError`].
pub fn read_text<T: Transport + ?Sized>(
    transport: &T,
    url: &Url,
    mime: &str,
) -> Result<String, ReadError> {
    let resp = match transport.get(url, mime) {
        Ok(resp) => resp,
        Err(e) => {
            warn!("read_text {}: {}", url, e);
            if e.is_access_denied() {
                error!("{}", LOCAL_ACCESS_HINT);
            }
            return Err(ReadError::Transport {
                url: url.to_string(),
                source: e,
            });
        }
    };

    if !resp.is_ok() {
        warn!("read_text {} {} {}", url, resp.status, resp.body);
        return Err(ReadError::Status {
            url: url.to_string(),
            status: resp.status,
            body: resp.body,
        });
    }

    info!("read_text {} {} ({} bytes)", url, resp.status, resp.body.len());
    Ok(resp.body)
}

/// Resolves locators against a base URL before reading them, the way a page
/// resolves relative links.
pub struct TextReader<T> {
    base: Url,
    transport: T,
}

impl<T: Transport> TextReader<T> {
    pub fn new(base: Url, transport: T) -> TextReader<T> {
        TextReader { base, transport }
    }

    pub fn resolve(&self, locator: &str) -> Result<Url, ReadError> {
        self.base.join(locator).map_err(|source| ReadError::Locator {
            locator: locator.to_string(),
            source,
        })
    }

    pub fn read_text(&self, locator: &str, mime: &str) -> Result<String, ReadError> {
        let url = self.resolve(locator)?;
        read_text(&self.transport, &url, mime)
    }
}
