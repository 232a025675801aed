// ==========================================
// 生产运营驾驶舱 - 质量领域模型
// ==========================================

use serde::{Deserialize, Serialize};

/// 不良原因及件数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionReason {
    pub reason: String,
    pub count: u64,
}

/// 月度不良率
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectionTrendPoint {
    pub month: String,
    pub rejection_rate: f64,
}

/// 质量报表（产出/不良汇总）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub total_produced: u64,
    pub total_rejected: u64,
    #[serde(default)]
    pub rejection_reasons: Vec<RejectionReason>,
    #[serde(default)]
    pub trend: Vec<RejectionTrendPoint>,
}
