use portal_config::PortalConfig;

use crate::cli::GlobalFlags;

/// Load layered config (with `.env`) and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<PortalConfig> {
    let config = PortalConfig::load_with_dotenv()?;
    Ok(apply_overrides(config, flags))
}

fn apply_overrides(mut config: PortalConfig, flags: &GlobalFlags) -> PortalConfig {
    if let Some(lang) = flags.lang {
        config.general.language = lang;
    }
    if let Some(dir) = &flags.data_dir {
        config.storage.data_dir.clone_from(dir);
    }
    config
}
