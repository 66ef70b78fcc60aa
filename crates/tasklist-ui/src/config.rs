use tasklist_core::config::AppConfig;

const APP_CONFIG_TOML: &str =
  include_str!("../assets/app.toml");

/// Embedded config, with `TASKLIST_API_URL` at build time taking precedence
/// for the API base URL.
pub fn load() -> AppConfig {
  AppConfig::load(
    APP_CONFIG_TOML,
    option_env!("TASKLIST_API_URL")
  )
}
