// ==========================================
// 生产运营驾驶舱 - 产量计数
// ==========================================

use crate::domain::production::ProductionCounts;
use crate::view::selectors::TimeRange;

impl ProductionCounts {
    /// 按时间范围取产量
    pub fn for_range(&self, range: TimeRange) -> u64 {
        match range {
            TimeRange::Day => self.today,
            TimeRange::Week => self.week,
            TimeRange::Month => self.month,
            TimeRange::Quarter => self.quarter,
            TimeRange::Year => self.year,
        }
    }

    /// 今日相对昨日的变化（百分比，一位小数）；昨日为 0 时返回 None
    pub fn day_over_day_pct(&self) -> Option<f64> {
        if self.yesterday == 0 {
            return None;
        }
        let delta = self.today as f64 - self.yesterday as f64;
        Some(crate::engine::round_one_decimal(
            delta / self.yesterday as f64 * 100.0,
        ))
    }
}

/// 产量文案
///
/// - ≥ 1 000 000 → "3.9M"
/// - ≥ 1 000 → "12.5K"
/// - 其他 → 原值
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}
