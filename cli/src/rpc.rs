use miette::{Context, IntoDiagnostic, Result};
use serde::Serialize;
use tracing::debug;

use shared::{ClientTransport, RawResponse};

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// Terminal transport: one reqwest client, routes resolved against the
/// configured backend base URL.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .into_diagnostic()
            .wrap_err("Could not build reqwest client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait::async_trait(?Send)]
impl ClientTransport for HttpTransport {
    type Error = reqwest::Error;

    async fn post_json<P>(&self, route: &str, payload: &P) -> Result<RawResponse, Self::Error>
    where
        P: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, route);
        debug!(%url, "dispatching request");

        let resp = self.client.post(&url).json(payload).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        debug!(status, bytes = body.len(), "received reply");

        Ok(RawResponse { status, body })
    }
}
