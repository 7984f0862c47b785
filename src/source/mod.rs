//! Wallpaper source providers and registry construction.

pub mod categories;
pub mod http;
pub mod resolve;
pub mod select;

use rand::Rng;

use crate::error::{MuralError, Result};

use resolve::{OffsetParam, ResolveStrategy};

const CATEGORY_INDEX_URL: &str = "http://lab.mkblog.cn/wallpaper/api.php?cid=360tags";
const CATEGORY_FEED_BASE: &str = "http://wallpaper.apc.360.cn";
const RANDOM_REDIRECT_URL: &str = "https://bing.ioliu.cn/v1/rand";

/// Placeholder in a feed endpoint template, substituted with a random
/// offset at resolution time.
pub(crate) const OFFSET_PLACEHOLDER: &str = "{start}";

/// Backend families a provider can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceTag {
    /// The 360chrome wallpaper catalog (category-based).
    Qihoo,
    /// The bing.ioliu.cn random-image redirect.
    Bing,
}

impl SourceTag {
    /// Canonical selection token for this source.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Qihoo => "360",
            Self::Bing => "bing",
        }
    }

    /// Parse a selection token into a source tag.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "360" => Some(Self::Qihoo),
            "bing" => Some(Self::Bing),
            _ => None,
        }
    }
}

/// One concrete, resolvable image source.
///
/// The resolution strategy is fixed at construction from the source
/// family, so a provider can never be resolved with the wrong
/// strategy, and only feed providers carry an offset generator.
#[derive(Debug, Clone)]
pub struct Provider {
    endpoint: String,
    tag: SourceTag,
    strategy: ResolveStrategy,
}

impl Provider {
    /// Provider for a single catalog category. The endpoint keeps a
    /// `{start}` slot that is filled with a fresh random offset on
    /// every resolution.
    pub fn category(feed_base: &str, category_id: &str) -> Self {
        Self {
            endpoint: format!(
                "{feed_base}/index.php?c=WallPaper&a=getAppsByCategory&cid={category_id}&start={OFFSET_PLACEHOLDER}&count=1&from=360chrome"
            ),
            tag: SourceTag::Qihoo,
            strategy: ResolveStrategy::CategoryFeed {
                offset: OffsetParam::default(),
            },
        }
    }

    /// Provider whose endpoint redirects straight to a random image.
    pub fn random_redirect(url: impl Into<String>) -> Self {
        Self {
            endpoint: url.into(),
            tag: SourceTag::Bing,
            strategy: ResolveStrategy::Direct,
        }
    }

    /// The backend family this provider belongs to.
    pub fn tag(&self) -> SourceTag {
        self.tag
    }

    /// The endpoint URL (or URL template) of this provider.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Resolve this provider to a directly downloadable image URL.
    pub async fn resolve<R: Rng>(
        &self,
        client: &reqwest::Client,
        rng: &mut R,
    ) -> Result<String> {
        resolve::resolve(self, client, rng).await
    }
}

/// Builds the provider registry for one run.
///
/// Endpoint URLs default to the production services and can be
/// overridden, which is how tests point the registry at a mock server.
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    index_url: String,
    feed_base: String,
    redirect_url: String,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self {
            index_url: CATEGORY_INDEX_URL.to_string(),
            feed_base: CATEGORY_FEED_BASE.to_string(),
            redirect_url: RANDOM_REDIRECT_URL.to_string(),
        }
    }
}

impl RegistryBuilder {
    /// Override the category index endpoint.
    pub fn with_index_url(mut self, url: impl Into<String>) -> Self {
        self.index_url = url.into();
        self
    }

    /// Override the base URL of the per-category feed.
    pub fn with_feed_base(mut self, url: impl Into<String>) -> Self {
        self.feed_base = url.into();
        self
    }

    /// Override the random-redirect endpoint.
    pub fn with_redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = url.into();
        self
    }

    /// Build the ordered provider list from a comma-separated selection.
    ///
    /// Category-based sources are expanded eagerly, so this issues
    /// network calls. An unrecognized token is a configuration error;
    /// insertion order follows the order of tokens.
    pub async fn build(
        &self,
        selection: &str,
        client: &reqwest::Client,
    ) -> Result<Vec<Provider>> {
        let mut providers = Vec::new();
        for token in selection.split(',') {
            match SourceTag::parse(token) {
                Some(SourceTag::Qihoo) => {
                    providers.extend(
                        categories::expand(client, &self.index_url, &self.feed_base).await,
                    );
                }
                Some(SourceTag::Bing) => {
                    providers.push(Provider::random_redirect(self.redirect_url.clone()));
                }
                None => {
                    return Err(MuralError::Configuration(format!(
                        "unknown wallpaper source: {token:?}"
                    )));
                }
            }
        }
        Ok(providers)
    }
}
