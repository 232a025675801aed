// ==========================================
// 生产运营驾驶舱 - 产量/告警/建议
// ==========================================
// 职责: 产量计数、现场告警、静态改善建议
// 注意: 建议为静态内容，不存在生成逻辑
// ==========================================

use crate::domain::types::{AlertSeverity, Priority};
use serde::{Deserialize, Serialize};

// ==========================================
// ProductionCounts - 各时段产量
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionCounts {
    pub today: u64,
    pub yesterday: u64,
    pub week: u64,
    pub month: u64,
    pub quarter: u64,
    pub year: u64,
}

/// 产量走势数据点（x 轴标签 + 产量）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionTrendPoint {
    pub label: String,
    pub units: u64,
}

/// 日 OEE 走势数据点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OeeTrendPoint {
    pub date: chrono::NaiveDate,
    pub oee: f64,
}

// ==========================================
// PlantAlert - 现场告警
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantAlert {
    pub id: u32,
    pub time: String, // 时间文案，如 "10:23 AM"
    pub machine: String,
    pub issue: String,
    pub severity: AlertSeverity,
}

// ==========================================
// Recommendation - 改善建议（静态）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub impact: Priority,
    #[serde(default)]
    pub potential_savings: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}
