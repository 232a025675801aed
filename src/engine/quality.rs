// ==========================================
// 生产运营驾驶舱 - 质量指标
// ==========================================

use crate::domain::quality::QualityReport;
use crate::engine::round_one_decimal;
use serde::{Deserialize, Serialize};

/// 不良原因占比
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectionShare {
    pub reason: String,
    pub count: u64,
    /// 占总不良件数的整数百分比
    pub percentage: u32,
}

/// 质量概览
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityOverview {
    pub total_produced: u64,
    pub total_rejected: u64,
    pub rejection_rate: f64,
    pub shares: Vec<RejectionShare>,
}

/// 不良率（百分比，一位小数）；产出为 0 时为 0.0
pub fn rejection_rate(produced: u64, rejected: u64) -> f64 {
    if produced == 0 {
        return 0.0;
    }
    round_one_decimal(rejected as f64 / produced as f64 * 100.0)
}

/// 各不良原因占比，保持输入顺序
pub fn rejection_shares(report: &QualityReport) -> Vec<RejectionShare> {
    let rejected = report.total_rejected;
    report
        .rejection_reasons
        .iter()
        .map(|r| RejectionShare {
            reason: r.reason.clone(),
            count: r.count,
            percentage: if rejected == 0 {
                0
            } else {
                (r.count as f64 / rejected as f64 * 100.0 + 0.5).floor() as u32
            },
        })
        .collect()
}

pub fn quality_overview(report: &QualityReport) -> QualityOverview {
    QualityOverview {
        total_produced: report.total_produced,
        total_rejected: report.total_rejected,
        rejection_rate: rejection_rate(report.total_produced, report.total_rejected),
        shares: rejection_shares(report),
    }
}
