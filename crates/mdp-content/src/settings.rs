//! Rendering settings shared by the formatter, the injectors and the
//! block dispatcher, and JSON file loading.

use std::fs::read_to_string;
use std::path::Path;

use bon::Builder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::interpreter::LoadError;

/// Display conventions used while rendering content.
///
/// # Example
///
/// ```
/// use mdp_content::RenderSettings;
///
/// let settings = RenderSettings::builder().currency_symbol("€").build();
/// assert_eq!(settings.currency_symbol, "€");
/// assert_eq!(settings.na_symbol, "N/A");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase", default)]
pub struct RenderSettings {
    /// Prefix for currency amounts.
    #[builder(default = "£".to_string())]
    pub currency_symbol: String,

    /// Text shown where a bound value is absent.
    #[builder(default = "N/A".to_string())]
    pub na_symbol: String,

    /// Label key whose text suffixes "per year" amounts.
    #[builder(default = "year".to_string())]
    pub year_label_key: String,

    /// `chrono` format string for dates.
    #[builder(default = "%d %B %Y".to_string())]
    pub date_format: String,

    /// Prefix of the CSS class given to directive placeholder spans.
    #[builder(default = "mdp".to_string())]
    pub placeholder_class_prefix: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings::builder().build()
    }
}

impl RenderSettings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read settings from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        load_json(path)
    }
}

/// Read and deserialize a JSON file.
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, LoadError> {
    let path = path.as_ref();
    let content = read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
