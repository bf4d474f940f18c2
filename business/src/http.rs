//! Platform-abstracted HTTP GET with Send-safe futures.
//!
//! On native targets requests go straight through reqwest. On WASM,
//! `reqwest::Response` holds JS values and is not `Send`, so the request is
//! spawned on the JS thread with `wasm_bindgen_futures::spawn_local` and the
//! result comes back through a `flume` channel.

use thiserror::Error;

/// A response reduced to Send-safe data.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    /// Returns true if the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport failure: the request never produced a response.
#[derive(Debug, Clone, Error)]
#[error("HTTP error: {message}")]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

/// Sends a GET request to `url`.
pub async fn get(url: &str) -> HttpResult<Response> {
    log::debug!("GET {url}");

    #[cfg(not(target_arch = "wasm32"))]
    {
        execute(url.to_owned()).await
    }

    #[cfg(target_arch = "wasm32")]
    {
        let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);
        let url = url.to_owned();

        wasm_bindgen_futures::spawn_local(async move {
            let result = execute(url).await;
            // The receiver may be gone if the caller stopped waiting.
            let _ = tx.send_async(result).await;
        });

        rx.recv_async()
            .await
            .map_err(|_| HttpError::new("Request cancelled"))?
    }
}

async fn execute(url: String) -> HttpResult<Response> {
    let response = reqwest::Client::new()
        .get(&url)
        .send()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .bytes()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?
        .to_vec();

    Ok(Response { status, body })
}
