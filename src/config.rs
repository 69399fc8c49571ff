use crate::error::{Result, SizeFitError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// サイズ表CSVのデフォルトパス
    pub table_path: Option<PathBuf>,
    /// 照合に使う寸法
    pub primary_dimension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_path: None,
            primary_dimension: crate::matcher::PRIMARY_DIMENSION.into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SizeFitError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("size-fit").join("config.json"))
    }

    /// サイズ表の実パスを解決（フラグ > 設定 > 同梱データ）
    pub fn resolve_table_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.table_path.clone())
            .unwrap_or_else(|| PathBuf::from("data/sizes.csv"))
    }

    pub fn set_table_path(&mut self, path: PathBuf) -> Result<()> {
        self.table_path = Some(path);
        self.save()
    }

    pub fn set_primary_dimension(&mut self, dimension: String) -> Result<()> {
        self.primary_dimension = dimension;
        self.save()
    }
}
