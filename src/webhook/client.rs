//! Production HTTP client implementation using reqwest.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Production HTTP client using reqwest.
///
/// TLS verification is a per-client setting in reqwest, so two clients
/// are kept: one verifying certificates and one that does not. Each
/// request picks one by its [`HttpRequest::verify_tls`] flag.
///
/// # Example
///
/// ```no_run
/// use slackhook::webhook::{ReqwestClient, HttpClient, HttpRequest};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new()?;
/// let url = Url::parse("https://hooks.slack.com/services/T/B/X")?;
/// let request = HttpRequest::post(url).with_form([("payload", r#"{"text":"hi"}"#)]);
/// let response = client.request(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    verified: reqwest::Client,
    unverified: reqwest::Client,
}

impl ReqwestClient {
    /// Creates both underlying clients with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::ClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new() -> Result<Self, HttpError> {
        let build = |accept_invalid: bool| {
            reqwest::Client::builder()
                .danger_accept_invalid_certs(accept_invalid)
                .build()
                .map_err(|e| HttpError::ClientBuild(e.to_string()))
        };

        Ok(Self::from_clients(build(false)?, build(true)?))
    }

    /// Creates an HTTP client from existing reqwest clients.
    ///
    /// `unverified` is used for requests with TLS verification disabled
    /// and should be built with `danger_accept_invalid_certs(true)`.
    #[must_use]
    pub const fn from_clients(verified: reqwest::Client, unverified: reqwest::Client) -> Self {
        Self {
            verified,
            unverified,
        }
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let inner = if req.verify_tls {
            &self.verified
        } else {
            &self.unverified
        };

        let mut builder = inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        if let Some(timeout) = req.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(map_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(map_error)?.to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}

fn map_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else if e.is_builder() {
        HttpError::InvalidUrl(e.to_string())
    } else {
        HttpError::Connection(Box::new(e))
    }
}
