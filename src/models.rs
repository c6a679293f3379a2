/// Status reported for resources read straight from disk, matching what a
/// browser reports for `file://` requests.
pub const LOCAL_STATUS: u16 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
    /// The forced MIME type the body was read under.
    pub mime: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>, mime: impl Into<String>) -> Response {
        Response {
            status,
            body: body.into(),
            mime: mime.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == LOCAL_STATUS || (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod models_test {
    use super::Response;

    #[test]
    fn local_and_2xx_are_ok() {
        assert!(Response::new(0, "", "text/plain").is_ok());
        assert!(Response::new(200, "", "text/plain").is_ok());
        assert!(Response::new(204, "", "text/plain").is_ok());
        assert!(!Response::new(404, "", "text/plain").is_ok());
        assert!(!Response::new(302, "", "text/plain").is_ok());
    }
}
