// ==========================================
// 生产运营驾驶舱 - 配置管理
// ==========================================
// 加载顺序: 默认值 → JSON 配置文件 → 环境变量覆写 → 校验
// 配置文件位置:
// - PLANT_OPS_CONFIG 显式指定
// - 否则 用户配置目录/plant-ops-dashboard/config.json（存在时）
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 环境变量 key
pub mod env_keys {
    pub const CONFIG_PATH: &str = "PLANT_OPS_CONFIG";
    pub const LOCALE: &str = "PLANT_OPS_LOCALE";
    pub const MACHINES_PATH: &str = "PLANT_OPS_MACHINES_PATH";
    pub const WORK_ORDERS_PATH: &str = "PLANT_OPS_WORK_ORDERS_PATH";
    pub const CLOCK_TICK_MS: &str = "PLANT_OPS_CLOCK_TICK_MS";
}

// ==========================================
// OeeThresholds - OEE 分档阈值
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OeeThresholds {
    pub good: f64, // ≥ good 为达标
    pub fair: f64, // ≥ fair 为关注
}

impl Default for OeeThresholds {
    fn default() -> Self {
        Self {
            good: 85.0,
            fair: 70.0,
        }
    }
}

// ==========================================
// DataSourceConfig - 数据来源
// ==========================================
// 两个路径都为空时使用内置样例快照
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSourceConfig {
    #[serde(default)]
    pub machines_path: Option<PathBuf>,
    #[serde(default)]
    pub work_orders_path: Option<PathBuf>,
}

impl DataSourceConfig {
    pub fn is_configured(&self) -> bool {
        self.machines_path.is_some() || self.work_orders_path.is_some()
    }
}

// ==========================================
// DashboardConfig - 驾驶舱配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// 界面语言（"en" 或 "zh-CN"）
    pub locale: String,
    pub oee_thresholds: OeeThresholds,
    pub data: DataSourceConfig,
    /// 时钟刷新周期（毫秒）
    pub clock_tick_ms: u64,
    /// 计划维修展示窗口（天）
    pub upcoming_window_days: i64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            oee_thresholds: OeeThresholds::default(),
            data: DataSourceConfig::default(),
            clock_tick_ms: 1_000,
            upcoming_window_days: 30,
        }
    }
}

impl DashboardConfig {
    /// 按标准顺序加载配置
    pub fn load() -> ConfigResult<Self> {
        let mut config = match default_config_path() {
            Some(path) if path.exists() => {
                tracing::info!(path = %path.display(), "加载配置文件");
                Self::from_file(&path)?
            }
            _ => {
                tracing::debug!("未找到配置文件，使用默认配置");
                Self::default()
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件读取配置（缺省字段取默认值）
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// 应用覆写
    ///
    /// `lookup` 通常为环境变量读取；空白值视为未设置
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(locale) = get(env_keys::LOCALE) {
            self.locale = locale;
        }
        if let Some(path) = get(env_keys::MACHINES_PATH) {
            self.data.machines_path = Some(PathBuf::from(path));
        }
        if let Some(path) = get(env_keys::WORK_ORDERS_PATH) {
            self.data.work_orders_path = Some(PathBuf::from(path));
        }
        if let Some(raw) = get(env_keys::CLOCK_TICK_MS) {
            match raw.parse::<u64>() {
                Ok(ms) => self.clock_tick_ms = ms,
                Err(_) => tracing::warn!(value = %raw, "忽略无效的时钟刷新周期"),
            }
        }
    }

    /// 校验配置
    pub fn validate(&self) -> ConfigResult<()> {
        let t = &self.oee_thresholds;
        for (key, value) in [("oee_thresholds.good", t.good), ("oee_thresholds.fair", t.fair)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("{} 不在 [0, 100] 范围内", value),
                });
            }
        }
        if t.fair > t.good {
            return Err(ConfigError::InvalidValue {
                key: "oee_thresholds".to_string(),
                message: format!("fair({}) 不能大于 good({})", t.fair, t.good),
            });
        }
        if self.clock_tick_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "clock_tick_ms".to_string(),
                message: "必须大于 0".to_string(),
            });
        }
        if self.upcoming_window_days < 0 {
            return Err(ConfigError::InvalidValue {
                key: "upcoming_window_days".to_string(),
                message: "不能为负数".to_string(),
            });
        }
        if !crate::i18n::is_supported(&self.locale) {
            return Err(ConfigError::InvalidValue {
                key: "locale".to_string(),
                message: format!("不支持的语言: {}", self.locale),
            });
        }
        Ok(())
    }
}

/// 默认配置文件路径
///
/// PLANT_OPS_CONFIG 优先；否则为用户配置目录下的 config.json
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(env_keys::CONFIG_PATH) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    dirs::config_dir().map(|dir| dir.join("plant-ops-dashboard").join("config.json"))
}
