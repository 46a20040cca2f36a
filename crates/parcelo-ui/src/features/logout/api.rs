//! API helpers for the logout flow.

use crate::services::http::post_empty;

/// POST to the logout endpoint.
pub(crate) async fn submit_logout(route: &str) -> anyhow::Result<()> {
    post_empty("logout", route).await
}
