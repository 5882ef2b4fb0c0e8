use std::fs;

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub http: HttpCfg,
    #[serde(default)]
    pub storage: StorageCfg,
}

#[derive(Debug, Deserialize)]
pub struct HttpCfg {
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageCfg {
    /// Directory holding the selection store
    pub data_dir: String,
    /// File name of the selection store inside `data_dir`
    pub selections_file: String,
}

impl Default for StorageCfg {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
            selections_file: "selections.json".to_string(),
        }
    }
}

impl Settings {
    pub fn load(config_path: &str) -> Result<Self> {
        let raw = fs::read_to_string(config_path)?;
        let r = toml::from_str(&raw)?;
        Ok(r)
    }
}
