use std::env;
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::config::{ConfigResult, GameConfig};

pub const CONFIG_ENV_VAR: &str = "ISOREALM_CONFIG";

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}

/// Loads the config file named by [`CONFIG_ENV_VAR`], or the stock defaults
/// when the variable is unset. A set-but-broken path is fatal rather than
/// silently ignored.
pub fn resolve_config() -> ConfigResult<GameConfig> {
    match env::var(CONFIG_ENV_VAR) {
        Ok(value) => {
            let path = PathBuf::from(value);
            let config = GameConfig::load(&path)?;
            info!(path = %path.display(), "config_loaded");
            Ok(config)
        }
        Err(env::VarError::NotPresent) => Ok(GameConfig::default()),
        Err(error) => Err(format!("read {CONFIG_ENV_VAR}: {error}")),
    }
}
