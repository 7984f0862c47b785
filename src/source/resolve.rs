//! Resolution strategies: turning a provider into a final image URL.

use rand::Rng;
use serde_json::Value;
use tracing::info;

use crate::error::{MuralError, Result};

use super::{Provider, OFFSET_PLACEHOLDER};

/// How a provider's endpoint becomes a downloadable URL.
#[derive(Debug, Clone)]
pub enum ResolveStrategy {
    /// The endpoint itself yields the image (redirect endpoints).
    Direct,
    /// The endpoint is a paged catalog feed: substitute a random
    /// offset, fetch, and extract the image URL from the JSON body.
    CategoryFeed { offset: OffsetParam },
}

/// Generates the random `start` offset for a paged feed request.
#[derive(Debug, Clone, Copy)]
pub struct OffsetParam {
    bound: u32,
}

impl Default for OffsetParam {
    fn default() -> Self {
        Self { bound: 128 }
    }
}

impl OffsetParam {
    /// Render a fresh uniformly random offset in `[0, bound)`.
    pub fn render<R: Rng>(&self, rng: &mut R) -> String {
        rng.random_range(0..self.bound).to_string()
    }
}

/// Resolve `provider` to a directly downloadable image URL.
pub(super) async fn resolve<R: Rng>(
    provider: &Provider,
    client: &reqwest::Client,
    rng: &mut R,
) -> Result<String> {
    match &provider.strategy {
        ResolveStrategy::Direct => Ok(provider.endpoint.clone()),
        ResolveStrategy::CategoryFeed { offset } => {
            let url = provider
                .endpoint
                .replace(OFFSET_PLACEHOLDER, &offset.render(rng));
            info!(url = %url, "fetching category feed");
            let text = client.get(&url).send().await?.text().await?;
            let body: Value = serde_json::from_str(&text)?;
            let image_url = extract_download_url(&body)?;
            Ok(full_resolution(image_url))
        }
    }
}

/// Walk `data` → first element → `url` out of the feed response.
fn extract_download_url(body: &Value) -> Result<&str> {
    body.get("data")
        .and_then(Value::as_array)
        .and_then(|items| items.first())
        .and_then(|item| item.get("url"))
        .and_then(Value::as_str)
        .ok_or_else(|| MuralError::resolution("failed to obtain download address"))
}

/// Rewrite a thumbnail URL to its full-resolution variant.
///
/// The feed hands out preview URLs; swapping the `bdr` host marker for
/// `bdm` and the `__85` quality suffix for `0_0_100` addresses the
/// original image.
fn full_resolution(url: &str) -> String {
    url.replace("bdr", "bdm").replace("__85", "0_0_100")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    #[test]
    fn full_resolution_rewrites_both_markers() {
        assert_eq!(
            full_resolution("http://x/abc_bdr_y__85.jpg"),
            "http://x/abc_bdm_y0_0_100.jpg"
        );
    }

    #[test]
    fn full_resolution_rewrites_single_marker() {
        assert_eq!(full_resolution("http://x/a_bdr_b.jpg"), "http://x/a_bdm_b.jpg");
        assert_eq!(full_resolution("http://x/a__85.jpg"), "http://x/a0_0_100.jpg");
    }

    #[test]
    fn full_resolution_without_markers_is_noop() {
        assert_eq!(full_resolution("http://x/plain.jpg"), "http://x/plain.jpg");
    }

    #[test]
    fn extract_url_from_well_formed_body() {
        let body = json!({"data": [{"url": "http://x/pic.jpg", "id": "7"}]});
        assert_eq!(extract_download_url(&body).unwrap(), "http://x/pic.jpg");
    }

    #[test]
    fn extract_url_rejects_empty_data() {
        let body = json!({"data": []});
        match extract_download_url(&body) {
            Err(MuralError::Resolution(msg)) => {
                assert_eq!(msg, "failed to obtain download address");
            }
            other => panic!("expected Resolution error, got {other:?}"),
        }
    }

    #[test]
    fn extract_url_rejects_wrong_shapes() {
        for body in [
            json!({}),
            json!({"data": "nope"}),
            json!({"data": [{"notaurl": "x"}]}),
            json!({"data": [{"url": 42}]}),
            json!({"data": ["flat"]}),
        ] {
            assert!(extract_download_url(&body).is_err(), "accepted {body}");
        }
    }

    #[test]
    fn offset_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let offset = OffsetParam::default();
        for _ in 0..1000 {
            let rendered: u32 = offset.render(&mut rng).parse().unwrap();
            assert!(rendered < 128);
        }
    }
}
