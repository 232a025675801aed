// ==========================================
// 生产运营驾驶舱 - 配置层
// ==========================================
// 职责: 驾驶舱配置加载、环境变量覆写、校验
// 存储: JSON 文件（无数据库）
// ==========================================

pub mod dashboard_config;
pub mod error;

pub use dashboard_config::{
    default_config_path, env_keys, DashboardConfig, DataSourceConfig, OeeThresholds,
};
pub use error::{ConfigError, ConfigResult};
