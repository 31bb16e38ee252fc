use crate::error::{PhStripError, Result};
use ph_strip_common::sampler;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// サンプリング領域の幅比率 (0.0-1.0]
    pub strip_width_ratio: f32,
    /// サンプリング領域の高さ比率 (0.0-1.0]
    pub strip_height_ratio: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default_config())
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
            .ok_or_else(|| PhStripError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("ph-strip").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            strip_width_ratio: sampler::STRIP_WIDTH_RATIO,
            strip_height_ratio: sampler::STRIP_HEIGHT_RATIO,
        }
    }

    /// 比率を更新して保存する（Noneの項目は変更しない）
    pub fn set_ratios(&mut self, width_ratio: Option<f32>, height_ratio: Option<f32>) -> Result<()> {
        if let Some(ratio) = width_ratio {
            Self::validate_ratio("幅比率", ratio)?;
            self.strip_width_ratio = ratio;
        }
        if let Some(ratio) = height_ratio {
            Self::validate_ratio("高さ比率", ratio)?;
            self.strip_height_ratio = ratio;
        }
        self.save()
    }

    fn validate(&self) -> Result<()> {
        Self::validate_ratio("幅比率", self.strip_width_ratio)?;
        Self::validate_ratio("高さ比率", self.strip_height_ratio)?;
        Ok(())
    }

    fn validate_ratio(name: &str, ratio: f32) -> Result<()> {
        if ratio > 0.0 && ratio <= 1.0 {
            Ok(())
        } else {
            Err(PhStripError::Config(format!(
                "{}は0より大きく1以下で指定してください: {}",
                name, ratio
            )))
        }
    }
}
