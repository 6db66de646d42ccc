use anyhow::Context as _;
use url::Url;

pub const DEFAULT_ASSET_BASE_URL: &str = "https://otero-ediciones.s3.amazonaws.com";

/// Overrides [`DEFAULT_ASSET_BASE_URL`] when no explicit base is given.
pub const ASSET_BASE_URL_ENV: &str = "CATALOGO_ASSET_BASE_URL";

/// Type code of educational texts. They ship without a synopsis asset.
pub const TEXTO_EDUCATIVO: &str = "TEXTO_EDUCATIVO";

/// Builds cover and synopsis URLs for a book identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUrls {
    base: String,
}

impl AssetUrls {
    pub fn new(base: &str) -> anyhow::Result<Self> {
        let raw = base.trim();
        let url = Url::parse(raw).with_context(|| format!("parse asset base url: {raw}"))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!("asset base url must be http/https: {raw}");
        }
        if url.host_str().is_none() {
            anyhow::bail!("asset base url must have host: {raw}");
        }
        Ok(Self {
            base: raw.trim_end_matches('/').to_owned(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn small_cover(&self, simplified_name: &str) -> String {
        format!("{}/tapas/small/{simplified_name}-tapa.jpg", self.base)
    }

    pub fn original_cover(&self, simplified_name: &str) -> String {
        format!("{}/tapas/originals/{simplified_name}-tapa.jpg", self.base)
    }

    pub fn synopsis(&self, simplified_name: &str) -> String {
        format!("{}/sinopsis/{simplified_name}.txt", self.base)
    }
}

/// Picks the asset host: explicit flag, then the environment, then the default.
pub fn resolve_asset_urls(flag: Option<&str>) -> anyhow::Result<AssetUrls> {
    let from_env = std::env::var(ASSET_BASE_URL_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match flag.map(str::to_owned).or(from_env) {
        Some(base) => AssetUrls::new(&base),
        None => Ok(AssetUrls::default()),
    }
}

impl Default for AssetUrls {
    fn default() -> Self {
        Self {
            base: DEFAULT_ASSET_BASE_URL.to_owned(),
        }
    }
}
