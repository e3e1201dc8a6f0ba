use crate::models::ErrorResponse;
use std::error::Error;
use std::fmt::Display;

/// Error constructed from an erroneous catalog
/// response.
#[derive(Debug, Clone)]
pub struct APIError {
    status_code: u16,
    status: String,
    message: String,
}

impl APIError {
    /// The HTTP status code of the response.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The error code reported by the catalog, or the
    /// HTTP reason phrase if the body carried none.
    pub fn status(&self) -> &str {
        self.status.as_ref()
    }

    /// The actual error message with more concise
    /// error details.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    pub(crate) fn new(status_code: u16, status: &str, message: &str) -> Self {
        Self {
            status_code,
            status: status.to_owned(),
            message: message.to_owned(),
        }
    }

    /// Builds an error from a response body. Bodies which are not a catalog
    /// error object are kept as the message.
    pub(crate) fn from_body(status_code: u16, reason: &str, body: &str) -> Self {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(resp) => {
                let mut err: APIError = resp.into();
                err.set_status_code(status_code);
                if err.status.is_empty() {
                    err.status = reason.to_owned();
                }
                err
            }
            Err(_) => Self::new(status_code, reason, body.trim()),
        }
    }

    pub(crate) fn set_status_code(&mut self, status_code: u16) {
        self.status_code = status_code;
    }
}

impl Error for APIError {}

impl Display for APIError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.status_code, self.status, self.message
        )
    }
}

impl From<ErrorResponse> for APIError {
    fn from(resp: ErrorResponse) -> Self {
        Self {
            status_code: 0,
            message: resp.message,
            status: resp.code.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_catalog_error_body() {
        let body = r#"{"code":"query.soql.no-such-column","error":true,"message":"No such column: foo"}"#;
        let err = APIError::from_body(400, "Bad Request", body);
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.status(), "query.soql.no-such-column");
        assert_eq!(err.message(), "No such column: foo");
        assert_eq!(
            err.to_string(),
            "400 (query.soql.no-such-column): No such column: foo"
        );
    }

    #[test]
    fn test_from_error_body_with_error_code_alias() {
        let body = r#"{"errorCode":"not_found","message":"Dataset not found"}"#;
        let err = APIError::from_body(404, "Not Found", body);
        assert_eq!(err.status(), "not_found");
        assert_eq!(err.message(), "Dataset not found");
    }

    #[test]
    fn test_from_error_body_without_code() {
        let err = APIError::from_body(500, "Internal Server Error", r#"{"message":"boom"}"#);
        assert_eq!(err.status(), "Internal Server Error");
        assert_eq!(err.message(), "boom");
    }

    #[test]
    fn test_from_plain_text_body() {
        let err = APIError::from_body(502, "Bad Gateway", "<html>bad gateway</html>\n");
        assert_eq!(err.status_code(), 502);
        assert_eq!(err.status(), "Bad Gateway");
        assert_eq!(err.message(), "<html>bad gateway</html>");
    }
}
