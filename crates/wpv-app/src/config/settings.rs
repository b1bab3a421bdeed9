//! Settings parser for .wpv/config.toml

use super::types::Settings;
use wpv_core::prelude::*;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.toml";
const WPV_DIR: &str = ".wpv";

/// Load settings from `<project>/.wpv/config.toml`.
///
/// A missing or unreadable file yields the defaults.
pub fn load_settings(project_path: &Path) -> Settings {
    load_settings_from_dir(&project_path.join(WPV_DIR))
}

/// Load settings from `<dir>/config.toml`
pub fn load_settings_from_dir(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                validate(settings)
            }
            Err(e) => {
                let err = Error::config_invalid(format!("{:?}: {}", config_path, e));
                warn!("{}, using defaults", err);
                Settings::default()
            }
        },
        Err(e) => {
            let err = Error::config(format!("cannot read {:?}: {}", config_path, e));
            warn!("{}, using defaults", err);
            Settings::default()
        }
    }
}

fn validate(mut settings: Settings) -> Settings {
    let percent = settings.console.effective_height_percent();
    if percent != settings.console.height_percent {
        warn!(
            "console.height_percent = {} is out of range, using {}",
            settings.console.height_percent, percent
        );
        settings.console.height_percent = percent;
    }
    if settings.preview.initial_path.is_empty() {
        warn!("preview.initial_path is empty, using \"/\"");
        settings.preview.initial_path = "/".to_string();
    }
    settings
}

/// Read the file shown in the code view
pub fn load_source_file(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(source) => Ok(source),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::source_not_found(path)),
        Err(e) => Err(e.into()),
    }
}
