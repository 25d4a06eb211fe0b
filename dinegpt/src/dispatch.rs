use serde::de::DeserializeOwned;
use serde::Serialize;

use shared::{ClientTransport, DispatchError, Envelope};

/// Conversational restaurant-search endpoint.
pub const SEARCH_ROUTE: &str = "/v1/restaurants/search";
/// Rating-prediction endpoint.
pub const PREDICT_ROUTE: &str = "/v1/ratings/predict";

/// Submits one payload to `route` and decodes the response envelope.
///
/// Exactly one attempt per call: no retries, and no timeout beyond the
/// transport's own default. Non-2xx statuses are failures regardless of the
/// body; a 2xx body is trusted to match the server contract.
pub async fn submit<T, P, D>(
    transport: &T,
    route: &str,
    payload: &P,
) -> Result<Envelope<D>, DispatchError>
where
    T: ClientTransport,
    P: Serialize,
    D: DeserializeOwned,
{
    let response = transport
        .post_json(route, payload)
        .await
        .map_err(|err| DispatchError::Transport {
            message: err.to_string(),
        })?;

    if !(200..300).contains(&response.status) {
        return Err(DispatchError::HttpStatus {
            status: response.status,
        });
    }

    serde_json::from_str(&response.body).map_err(|err| DispatchError::Decode {
        message: err.to_string(),
    })
}
