//! the one kind of request we make: a blocking GET

use std::{io::Read, time::Duration};

use crate::{cancel::CancelToken, error::RequestError};

/// Identifies us to the catalog API and the CDN.
pub const USER_AGENT: &str =
    "Fontsource Downloader (https://github.com/ZerGo0/fontsourcedownloader)";
/// Upper bound for any single request, body included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A response whose status may be anything; callers decide what counts as
/// success.
pub struct Response {
    pub status: u16,
    body: Box<dyn Read + Send>,
}

impl Response {
    pub fn new(status: u16, body: impl Read + Send + 'static) -> Self {
        Self {
            status,
            body: Box::new(body),
        }
    }

    /// The response body. Dropping it releases the connection.
    pub fn into_reader(self) -> Box<dyn Read + Send> {
        self.body
    }
}

/// Something that can perform a GET request.
///
/// Implementations must honour `cancel`: a cancelled token fails the request
/// without touching the network.
pub trait HttpClient {
    fn get(
        &self,
        url: &str,
        accept: Option<&str>,
        cancel: &CancelToken,
    ) -> Result<Response, RequestError>;
}

/// The real client, backed by a shared `ureq` agent.
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build();
        Self { agent }
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for UreqClient {
    fn get(
        &self,
        url: &str,
        accept: Option<&str>,
        cancel: &CancelToken,
    ) -> Result<Response, RequestError> {
        let timeout = cancel.request_timeout(REQUEST_TIMEOUT)?;
        let mut req = self.agent.get(url).timeout(timeout);
        if let Some(accept) = accept {
            req = req.set("Accept", accept);
        }
        match req.call() {
            Ok(resp) => Ok(Response::new(resp.status(), resp.into_reader())),
            // ureq treats 4xx/5xx as errors; we want to see the status
            Err(ureq::Error::Status(code, resp)) => Ok(Response::new(code, resp.into_reader())),
            Err(e) => Err(RequestError::Transport(e.to_string())),
        }
    }
}
