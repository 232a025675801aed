// ==========================================
// 生产运营驾驶舱 - 维修统计
// ==========================================
// 职责: 工单汇总、计划维修窗口、MTTR/MTBF 汇总、趋势合计
// ==========================================

use crate::domain::maintenance::{
    MaintenanceRecord, MaintenanceTrendPoint, ReliabilityPoint, ScheduledMaintenance,
};
use crate::domain::types::Priority;
use crate::engine::round_one_decimal;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

// ==========================================
// 输出类型
// ==========================================

/// 工单汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrderSummary {
    pub total: usize,
    pub open: usize,
    pub completed: usize,
    pub total_cost: f64,
    /// 已关闭工单的平均处理时长（小时，一位小数）；无已关闭工单时为 None
    pub avg_resolution_hours: Option<f64>,
    pub high_priority: usize,
    pub medium_priority: usize,
    pub low_priority: usize,
}

/// 可靠性汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReliabilitySummary {
    pub latest_month: String,
    pub latest_mttr_hours: f64,
    pub latest_mtbf_hours: f64,
    pub avg_mttr_hours: f64,
    pub avg_mtbf_hours: f64,
}

/// 维修趋势合计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendTotals {
    pub preventive: u32,
    pub corrective: u32,
    pub emergency: u32,
}

impl TrendTotals {
    pub fn total(&self) -> u32 {
        self.preventive + self.corrective + self.emergency
    }
}

// ==========================================
// 计算
// ==========================================

/// 汇总工单
pub fn summarize_work_orders(records: &[MaintenanceRecord]) -> WorkOrderSummary {
    let mut summary = WorkOrderSummary {
        total: records.len(),
        open: 0,
        completed: 0,
        total_cost: 0.0,
        avg_resolution_hours: None,
        high_priority: 0,
        medium_priority: 0,
        low_priority: 0,
    };

    let mut resolved_minutes: i64 = 0;
    let mut resolved_count: usize = 0;

    for record in records {
        if record.is_open() {
            summary.open += 1;
        } else {
            summary.completed += 1;
        }
        summary.total_cost += record.cost;

        match record.priority {
            Priority::High => summary.high_priority += 1,
            Priority::Medium => summary.medium_priority += 1,
            Priority::Low => summary.low_priority += 1,
        }

        if let Some(d) = record.duration() {
            resolved_minutes += d.num_minutes();
            resolved_count += 1;
        }
    }

    if resolved_count > 0 {
        let avg_hours = resolved_minutes as f64 / 60.0 / resolved_count as f64;
        summary.avg_resolution_hours = Some(round_one_decimal(avg_hours));
    }

    summary
}

/// 计划维修窗口
///
/// 返回 due_date ∈ [today, today + days] 的计划，按到期日升序（同日按 id）。
/// 窗口超出日期上限时截到 `NaiveDate::MAX`；负数窗口为空。
pub fn upcoming_within(
    schedule: &[ScheduledMaintenance],
    today: NaiveDate,
    days: i64,
) -> Vec<ScheduledMaintenance> {
    let Ok(days) = u64::try_from(days) else {
        return Vec::new();
    };
    let horizon = today
        .checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX);
    let mut upcoming: Vec<ScheduledMaintenance> = schedule
        .iter()
        .filter(|s| s.due_date >= today && s.due_date <= horizon)
        .cloned()
        .collect();
    upcoming.sort_by(|a, b| a.due_date.cmp(&b.due_date).then_with(|| a.id.cmp(&b.id)));
    upcoming
}

/// MTTR/MTBF 汇总；空序列返回 None
pub fn reliability_summary(points: &[ReliabilityPoint]) -> Option<ReliabilitySummary> {
    let latest = points.last()?;
    let n = points.len() as f64;
    let avg_mttr = points.iter().map(|p| p.mttr_hours).sum::<f64>() / n;
    let avg_mtbf = points.iter().map(|p| p.mtbf_hours).sum::<f64>() / n;

    Some(ReliabilitySummary {
        latest_month: latest.month.clone(),
        latest_mttr_hours: latest.mttr_hours,
        latest_mtbf_hours: latest.mtbf_hours,
        avg_mttr_hours: round_one_decimal(avg_mttr),
        avg_mtbf_hours: round_one_decimal(avg_mtbf),
    })
}

/// 维修趋势按类型合计
pub fn trend_totals(points: &[MaintenanceTrendPoint]) -> TrendTotals {
    points.iter().fold(TrendTotals::default(), |acc, p| TrendTotals {
        preventive: acc.preventive + p.preventive,
        corrective: acc.corrective + p.corrective,
        emergency: acc.emergency + p.emergency,
    })
}
