use shared_types::ClientConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();
static DEFAULT: OnceLock<ClientConfig> = OnceLock::new();

/// Parse the embedded `config.toml`, apply the base URL override and store
/// the result process-wide. Only the first call has effect.
///
/// An unparseable file falls back to defaults.
pub fn load_config(contents: &str, base_url_override: Option<&str>) -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        let config = ClientConfig::from_toml_str(contents).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default client config");
            ClientConfig::default()
        });
        let config = config.with_base_url_override(base_url_override);
        tracing::info!(base_url = %config.api.base_url, "client config loaded");
        config
    })
}

/// The loaded config, or defaults if [`load_config`] has not run.
pub fn config() -> &'static ClientConfig {
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(ClientConfig::default))
}

/// Strip whitespace and trailing slashes from a base URL.
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Join a normalized base URL and a relative path with exactly one `/`.
pub fn join_url(base_url: &str, path: &str) -> String {
    let path = path.trim().trim_start_matches('/');
    if path.is_empty() {
        return base_url.to_string();
    }
    format!("{base_url}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slashes() {
        assert_eq!(normalize_base_url(" https://api.example/ "), "https://api.example");
        assert_eq!(normalize_base_url("https://api.example///"), "https://api.example");
        assert_eq!(normalize_base_url("https://api.example/v1"), "https://api.example/v1");
    }

    #[test]
    fn join_uses_exactly_one_slash() {
        let base = "https://api.example";
        assert_eq!(join_url(base, "/api/parents"), "https://api.example/api/parents");
        assert_eq!(join_url(base, "actuator/health"), "https://api.example/actuator/health");
        assert_eq!(join_url(base, "//api/visits"), "https://api.example/api/visits");
        assert_eq!(join_url(base, ""), "https://api.example");
    }

    #[test]
    fn config_defaults_before_load() {
        assert!(!config().api.base_url.is_empty());
    }
}
