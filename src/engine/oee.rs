// ==========================================
// 生产运营驾驶舱 - OEE 分档与走势
// ==========================================

use crate::config::OeeThresholds;
use crate::domain::production::OeeTrendPoint;
use crate::domain::types::OeeBand;
use crate::engine::round_one_decimal;

/// OEE 分档
///
/// - value ≥ good → Good
/// - value ≥ fair → Fair
/// - 其他 → Poor
pub fn classify_oee(value: f64, thresholds: &OeeThresholds) -> OeeBand {
    if value >= thresholds.good {
        OeeBand::Good
    } else if value >= thresholds.fair {
        OeeBand::Fair
    } else {
        OeeBand::Poor
    }
}

/// 走势平均值（一位小数）；空序列为 0.0
pub fn trend_average(points: &[OeeTrendPoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let sum: f64 = points.iter().map(|p| p.oee).sum();
    round_one_decimal(sum / points.len() as f64)
}

/// 走势最高点
pub fn trend_peak(points: &[OeeTrendPoint]) -> Option<&OeeTrendPoint> {
    points
        .iter()
        .max_by(|a, b| a.oee.total_cmp(&b.oee))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_classify_default_thresholds() {
        let t = OeeThresholds::default();
        assert_eq!(classify_oee(90.5, &t), OeeBand::Good);
        assert_eq!(classify_oee(85.0, &t), OeeBand::Good);
        assert_eq!(classify_oee(84.9, &t), OeeBand::Fair);
        assert_eq!(classify_oee(70.0, &t), OeeBand::Fair);
        assert_eq!(classify_oee(67.5, &t), OeeBand::Poor);
    }

    #[test]
    fn test_trend_average_and_peak() {
        let points: Vec<OeeTrendPoint> = [78.0, 82.0, 79.0]
            .iter()
            .enumerate()
            .map(|(i, oee)| OeeTrendPoint {
                date: NaiveDate::from_ymd_opt(2025, 5, 1 + i as u32).unwrap(),
                oee: *oee,
            })
            .collect();
        assert_eq!(trend_average(&points), 79.7);
        assert_eq!(trend_peak(&points).map(|p| p.oee), Some(82.0));
        assert_eq!(trend_average(&[]), 0.0);
        assert!(trend_peak(&[]).is_none());
    }
}
