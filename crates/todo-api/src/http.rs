//! Shared response handling for both clients.

use serde::de::DeserializeOwned;

use crate::error::{RequestError, Result};

/// Check the status of a response and decode its JSON body.
///
/// Any 2xx counts as success — the backend answers 200 or 201 depending on
/// the operation. The body of a failed response is preserved as the error
/// message.
pub(crate) async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(RequestError::Status {
            status: status.as_u16(),
            message,
        });
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| RequestError::Decode(e.to_string()))
}

/// Strip a trailing slash so URL joins stay predictable.
pub(crate) fn normalize_base(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slash() {
        assert_eq!(normalize_base("http://localhost:8080/api/"), "http://localhost:8080/api");
        assert_eq!(normalize_base("http://localhost:8080/api"), "http://localhost:8080/api");
    }
}
