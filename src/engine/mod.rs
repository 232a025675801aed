// ==========================================
// 生产运营驾驶舱 - 引擎层
// ==========================================
// 职责: 对快照数据做纯函数计算（分组/平均/百分比/过滤）
// 红线: 引擎不读文件、不持有状态、不缓存结果
// ==========================================

pub mod aggregation;
pub mod filter;
pub mod maintenance;
pub mod oee;
pub mod production;
pub mod quality;

// 重导出核心函数
pub use aggregation::{
    aggregate_by_line, average_oee, count_by_status, group_by_line, machines_on_line,
    LineAggregate, LineGroup, StatusCounts,
};
pub use filter::filter_machines;
pub use maintenance::{
    reliability_summary, summarize_work_orders, trend_totals, upcoming_within,
    ReliabilitySummary, TrendTotals, WorkOrderSummary,
};
pub use oee::{classify_oee, trend_average, trend_peak};
pub use production::format_count;
pub use quality::{quality_overview, rejection_rate, rejection_shares, QualityOverview, RejectionShare};

/// 保留一位小数（四舍五入，.5 向上）
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

#[cfg(test)]
mod tests {
    use super::round_one_decimal;

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(90.5), 90.5);
        assert_eq!(round_one_decimal(90.25), 90.3);
        assert_eq!(round_one_decimal(90.24), 90.2);
        assert_eq!(round_one_decimal(78.0), 78.0);
    }
}
