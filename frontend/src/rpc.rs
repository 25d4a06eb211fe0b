use gloo_net::http::Request;
use serde::Serialize;

use shared::{ClientTransport, RawResponse};

/// Browser transport: POSTs against the serving origin, so routes stay
/// relative just like the endpoints the backend mounts.
pub struct Client;

#[async_trait::async_trait(?Send)]
impl ClientTransport for Client {
    type Error = gloo_net::Error;

    async fn post_json<P>(&self, route: &str, payload: &P) -> Result<RawResponse, Self::Error>
    where
        P: Serialize + ?Sized,
    {
        let resp = Request::post(route).json(payload)?.send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        Ok(RawResponse { status, body })
    }
}
