//! API helpers for the delete confirmation.

use crate::features::deletion::state::{DeleteMethod, DeleteRequest};
use crate::services::http::send_empty;
use gloo_net::http::Request;

/// Send the confirmed request with its method.
pub(crate) async fn submit_delete(request: &DeleteRequest) -> anyhow::Result<()> {
    let route = request.route.as_str();
    let prepared = match request.method {
        DeleteMethod::Delete => Request::delete(route),
        DeleteMethod::Get => Request::get(route),
        DeleteMethod::Post => Request::post(route),
        DeleteMethod::Put => Request::put(route),
        DeleteMethod::Patch => Request::patch(route),
    };
    send_empty("confirm delete", prepared).await
}
