// ==========================================
// 生产运营驾驶舱 - KPI 领域模型
// ==========================================
// 职责: 可选 KPI 的封闭枚举 + 月度对比
// 红线: KPI 取值通过穷尽 match 映射，不做动态字段查找
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// KpiKind - 可选 KPI
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KpiKind {
    Oee,
    Availability,
    Performance,
    Quality,
}

impl fmt::Display for KpiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl KpiKind {
    pub const ALL: [KpiKind; 4] = [
        KpiKind::Oee,
        KpiKind::Availability,
        KpiKind::Performance,
        KpiKind::Quality,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            KpiKind::Oee => "OEE",
            KpiKind::Availability => "Availability",
            KpiKind::Performance => "Performance",
            KpiKind::Quality => "Quality",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            KpiKind::Oee => "kpi.oee",
            KpiKind::Availability => "kpi.availability",
            KpiKind::Performance => "kpi.performance",
            KpiKind::Quality => "kpi.quality",
        }
    }

    /// 单位（当前四项均为百分比）
    pub fn unit(&self) -> &'static str {
        match self {
            KpiKind::Oee | KpiKind::Availability | KpiKind::Performance | KpiKind::Quality => "%",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "oee" => Some(KpiKind::Oee),
            "availability" => Some(KpiKind::Availability),
            "performance" => Some(KpiKind::Performance),
            "quality" => Some(KpiKind::Quality),
            _ => None,
        }
    }
}

// ==========================================
// KpiSnapshot - 某一时段的 KPI 值
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    pub oee: f64,
    pub availability: f64,
    pub performance: f64,
    pub quality: f64,
}

impl KpiSnapshot {
    pub fn value(&self, kind: KpiKind) -> f64 {
        match kind {
            KpiKind::Oee => self.oee,
            KpiKind::Availability => self.availability,
            KpiKind::Performance => self.performance,
            KpiKind::Quality => self.quality,
        }
    }
}

// ==========================================
// KpiComparison - 本月 vs 上月
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiComparison {
    pub current_month: KpiSnapshot,
    pub previous_month: KpiSnapshot,
}

/// 单项 KPI 对比结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiDelta {
    pub kind: KpiKind,
    pub current: f64,
    pub previous: f64,
    pub delta: f64,
    /// 本月不低于上月
    pub improved: bool,
}

impl KpiComparison {
    pub fn compare(&self, kind: KpiKind) -> KpiDelta {
        let current = self.current_month.value(kind);
        let previous = self.previous_month.value(kind);
        KpiDelta {
            kind,
            current,
            previous,
            delta: current - previous,
            improved: current >= previous,
        }
    }

    /// 全部 KPI 的对比，顺序与 KpiKind::ALL 一致
    pub fn compare_all(&self) -> Vec<KpiDelta> {
        KpiKind::ALL.iter().map(|k| self.compare(*k)).collect()
    }
}
