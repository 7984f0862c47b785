//! Category expansion for the 360chrome catalog.
//!
//! The catalog is partitioned into categories; each category id found
//! in the index response becomes its own provider. Index failures are
//! not fatal: the run continues with whatever other sources yielded.

use serde::Deserialize;
use tracing::{debug, warn};

use super::Provider;

/// Index response shape: `{"data": [{"id": "..."}, ...]}`. Records
/// stay untyped so one malformed entry cannot reject the rest.
#[derive(Debug, Deserialize)]
struct CategoryIndex {
    data: Vec<serde_json::Value>,
}

/// Fetch the category index and synthesize one provider per category.
///
/// Returns an empty list when the index cannot be reached or decoded;
/// records without a string `id` are skipped.
pub async fn expand(
    client: &reqwest::Client,
    index_url: &str,
    feed_base: &str,
) -> Vec<Provider> {
    let text = match client.get(index_url).send().await {
        Ok(resp) => match resp.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!(url = index_url, error = %e, "failed to read category index");
                return Vec::new();
            }
        },
        Err(e) => {
            warn!(url = index_url, error = %e, "failed to fetch category index");
            return Vec::new();
        }
    };

    let index: CategoryIndex = match serde_json::from_str(&text) {
        Ok(index) => index,
        Err(e) => {
            warn!(url = index_url, error = %e, "malformed category index");
            return Vec::new();
        }
    };

    let providers: Vec<Provider> = index
        .data
        .iter()
        .filter_map(|record| record.get("id").and_then(serde_json::Value::as_str))
        .map(|id| Provider::category(feed_base, id))
        .collect();
    debug!(count = providers.len(), "expanded catalog categories");
    providers
}
