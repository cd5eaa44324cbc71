use portal_config::PortalConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &PortalConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &PortalConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.api.is_configured() && has_env_prefix(&env_keys, "PORTAL_API") {
        warnings.push(
            "API config appears default while PORTAL_API* env vars exist. Use double underscores (example: PORTAL_API__BASE_URL)."
                .to_string(),
        );
    }

    if config.storage.data_dir.is_empty() && has_env_prefix(&env_keys, "PORTAL_STORAGE") {
        warnings.push(
            "Storage config appears default while PORTAL_STORAGE* env vars exist. Use double underscores (example: PORTAL_STORAGE__DATA_DIR)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
