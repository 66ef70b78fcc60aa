use anyhow::Context;
use serde::Deserialize;
use tracing::{
  error,
  info
};

pub const DEFAULT_STORAGE_KEY: &str =
  "token";
pub const DEFAULT_SIGNUP_REDIRECT_MS:
  u32 = 1_500;

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
pub struct AppConfig {
  /// Prefix for every API path. Empty means same origin.
  #[serde(default)]
  pub api_base_url:       String,
  /// `localStorage` key holding the credential.
  #[serde(default = "default_storage_key")]
  pub storage_key:        String,
  #[serde(
    default = "default_signup_redirect_ms"
  )]
  pub signup_redirect_ms: u32
}

fn default_storage_key() -> String {
  DEFAULT_STORAGE_KEY.to_string()
}

fn default_signup_redirect_ms() -> u32
{
  DEFAULT_SIGNUP_REDIRECT_MS
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      api_base_url:       String::new(),
      storage_key:        default_storage_key(),
      signup_redirect_ms:
        DEFAULT_SIGNUP_REDIRECT_MS
    }
  }
}

impl AppConfig {
  /// Parses TOML, then lets `base_url_override` (usually a build-time env
  /// var) replace the API base URL.
  pub fn parse(
    raw: &str,
    base_url_override: Option<&str>
  ) -> anyhow::Result<Self> {
    let mut cfg: AppConfig =
      toml::from_str(raw).context(
        "failed to parse app config"
      )?;

    if let Some(url) = base_url_override
      .map(str::trim)
      .filter(|url| !url.is_empty())
    {
      cfg.api_base_url = url.to_string();
    }
    cfg.sanitize();
    Ok(cfg)
  }

  /// Like [`AppConfig::parse`] but falls back to defaults on error.
  pub fn load(
    raw: &str,
    base_url_override: Option<&str>
  ) -> Self {
    match Self::parse(
      raw,
      base_url_override
    ) {
      | Ok(cfg) => {
        info!(
          api_base_url = %cfg.api_base_url,
          storage_key = %cfg.storage_key,
          "loaded app config"
        );
        cfg
      }
      | Err(err) => {
        error!(error = %format!("{err:#}"), "failed parsing app config; using defaults");
        let mut cfg = Self::default();
        if let Some(url) =
          base_url_override
        {
          cfg.api_base_url =
            url.trim().to_string();
        }
        cfg.sanitize();
        cfg
      }
    }
  }

  fn sanitize(&mut self) {
    self.api_base_url = self
      .api_base_url
      .trim()
      .trim_end_matches('/')
      .to_string();
    if self.storage_key.trim().is_empty()
    {
      self.storage_key =
        default_storage_key();
    }
  }
}
