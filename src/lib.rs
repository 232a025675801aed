// ==========================================
// 生产运营驾驶舱 - 核心库
// ==========================================
// 范围: 设备状态 / 产线 OEE 汇总 / 维修工单 / 质量 / 产量
// 系统定位: 只读看板（数据由 RecordSource 注入）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 纯计算
pub mod engine;

// 存储层 - 快照与数据来源
pub mod store;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 看板配置
pub mod config;

// 视图层 - 页面状态与渲染
pub mod view;

// API 层 - 对外接口
pub mod api;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// 性能统计
pub mod perf;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    AlertSeverity, MachineStatus, MaintenanceKind, OeeBand, Priority, WorkOrderStatus,
};

// 领域实体
pub use domain::{KpiKind, Machine, MaintenanceRecord, ScheduledMaintenance};

// 引擎
pub use engine::{aggregate_by_line, filter_machines, LineAggregate, StatusCounts};

// 存储
pub use store::{PlantSnapshot, RecordSource, StaticRecordSource};

// API
pub use api::{ApiError, ApiResult, DashboardApi, DashboardReport};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Plant Operations Dashboard";
