use crate::error::{ChartError, Result};
use crate::model::RawNode;
use gloo_net::http::Request;

/// GETs `url` and parses the body as a hierarchical dataset.
pub async fn fetch_dataset(url: &str) -> Result<RawNode> {
    let network = |e: gloo_net::Error| ChartError::Network {
        url: url.to_string(),
        message: e.to_string(),
    };
    let resp = Request::get(url).send().await.map_err(network)?;
    if !resp.ok() {
        return Err(ChartError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    let text = resp.text().await.map_err(network)?;
    RawNode::from_json(&text)
}
