// ==========================================
// 生产运营驾驶舱 - 记录存储层
// ==========================================
// 职责: 快照数据结构、样例数据、数据来源抽象
// 红线: 只读，不回写
// ==========================================

pub mod fixtures;
pub mod snapshot;
pub mod source;

pub use snapshot::{PlantSnapshot, ProductionTrends};
pub use source::{
    source_from_config, FileRecordSource, RecordSource, StaticRecordSource, StoreError,
    StoreResult,
};
