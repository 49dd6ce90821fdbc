use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FormError;
use crate::form_options::FormOptions;

pub const DEFAULT_LOCALE: &str = "de-DE";
pub const DEFAULT_CURRENCY: &str = "EUR";
pub const DEFAULT_TIME_ZONE: &str = "Europe/Berlin";

/// Locale, currency and time zone used by the mapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperSettings {
    pub locale: String,
    pub currency: String,
    pub time_zone: String,
}

impl Default for MapperSettings {
    fn default() -> Self {
        MapperSettings {
            locale: DEFAULT_LOCALE.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            time_zone: DEFAULT_TIME_ZONE.to_string(),
        }
    }
}

/// Form assets and mapper settings, usually read from a TOML file:
///
/// ```toml
/// [form]
/// header_image_path = "img/head.png"
///
/// [mapper]
/// locale = "de-AT"
/// ```
///
/// Missing keys keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub form: FormOptions,
    pub mapper: MapperSettings,
}

impl FormConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, FormError> {
        Ok(toml::from_str(source)?)
    }

    /// Read a TOML config file. Relative image paths are resolved against
    /// the file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FormError> {
        let path = path.as_ref();
        let mut config = Self::from_toml_str(&fs::read_to_string(path)?)?;
        if let Some(dir) = path.parent() {
            config.form = config.form.relative_to(dir);
        }
        debug!(path = %path.display(), locale = %config.mapper.locale, "loaded form config");
        Ok(config)
    }
}
