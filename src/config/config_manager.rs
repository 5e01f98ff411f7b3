// ==========================================
// 供应链驾驶舱 - 配置管理器
// ==========================================
// 职责: 配置文件定位、加载、保存
// 存储: JSON 文件（默认位于用户配置目录）
// ==========================================

use crate::config::engine_config::EngineConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 显式指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "SUPPLY_CHAIN_DSS_CONFIG";

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读写失败: path={path}, {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件格式错误: path={path}, {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager;

impl ConfigManager {
    /// 默认配置文件路径
    ///
    /// 优先级:
    /// 1. 环境变量 SUPPLY_CHAIN_DSS_CONFIG
    /// 2. 用户配置目录/supply-chain-dss/config.json
    /// 3. ./supply_chain_dss.json
    pub fn default_config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return PathBuf::from(trimmed);
            }
        }

        match dirs::config_dir() {
            Some(dir) => dir.join("supply-chain-dss").join("config.json"),
            None => PathBuf::from("./supply_chain_dss.json"),
        }
    }

    /// 从文件加载配置
    ///
    /// - 文件不存在 → 默认配置
    /// - 文件存在但格式错误 → ConfigError::Parse
    pub fn load(path: &Path) -> Result<EngineConfig, ConfigError> {
        let path_str = path.display().to_string();

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("配置文件不存在，使用默认配置: {}", path_str);
                return Ok(EngineConfig::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path_str,
                    source,
                })
            }
        };

        let config: EngineConfig = serde_json::from_str(&raw).map_err(|source| {
            ConfigError::Parse {
                path: path_str.clone(),
                source,
            }
        })?;

        tracing::info!(
            path = %path_str,
            locale = %config.locale,
            custom_alert_rules = config.alert_rules.is_some(),
            custom_reorder_rules = config.reorder_rules.is_some(),
            "配置加载完成"
        );
        Ok(config)
    }

    /// 从默认路径加载配置
    pub fn load_default() -> Result<EngineConfig, ConfigError> {
        Self::load(&Self::default_config_path())
    }

    /// 从默认路径加载配置, 出错时回退为默认配置
    pub fn load_or_default() -> EngineConfig {
        match Self::load_default() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("配置加载失败，使用默认配置: {}", e);
                EngineConfig::default()
            }
        }
    }

    /// 保存配置（自动创建父目录）
    pub fn save(path: &Path, config: &EngineConfig) -> Result<(), ConfigError> {
        let path_str = path.display().to_string();
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path_str.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let json = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Parse {
            path: path_str.clone(),
            source,
        })?;
        fs::write(path, json).map_err(io_err)?;

        tracing::info!("配置已保存: {}", path_str);
        Ok(())
    }
}
