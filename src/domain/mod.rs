// ==========================================
// 生产运营驾驶舱 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、记录级校验
// 红线: 不含聚合逻辑，不含数据加载逻辑
// ==========================================

pub mod error;
pub mod kpi;
pub mod machine;
pub mod maintenance;
pub mod production;
pub mod quality;
pub mod types;

// 重导出核心类型
pub use error::{DomainError, DomainResult};
pub use kpi::{KpiComparison, KpiDelta, KpiKind, KpiSnapshot};
pub use machine::{Machine, OeeBreakdown};
pub use maintenance::{
    MaintenanceRecord, MaintenanceTrendPoint, ReliabilityPoint, ScheduledMaintenance,
};
pub use production::{
    OeeTrendPoint, PlantAlert, ProductionCounts, ProductionTrendPoint, Recommendation,
};
pub use quality::{QualityReport, RejectionReason, RejectionTrendPoint};
pub use types::{
    AlertSeverity, MachineStatus, MaintenanceKind, OeeBand, Priority, WorkOrderStatus,
};
