//! HTTP helpers (REST).

use crate::core::error::RequestError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// GET `url` and decode a JSON body.
pub(crate) async fn get_json<T: DeserializeOwned>(
    operation: &'static str,
    url: &str,
) -> anyhow::Result<T> {
    let response = ensure_success(operation, Request::get(url).send().await?)?;
    Ok(response.json::<T>().await?)
}

/// POST to `url` without a body, ignoring the response payload.
pub(crate) async fn post_empty(operation: &'static str, url: &str) -> anyhow::Result<()> {
    send_empty(operation, Request::post(url)).await
}

/// Send a prepared request without a body, ignoring the response payload.
pub(crate) async fn send_empty(operation: &'static str, request: Request) -> anyhow::Result<()> {
    ensure_success(operation, request.send().await?)?;
    Ok(())
}

fn ensure_success(operation: &'static str, response: Response) -> Result<Response, RequestError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(RequestError::Status {
            operation,
            status: response.status(),
        })
    }
}
