// ==========================================
// 生产运营驾驶舱 - 维修管理页
// ==========================================
// 状态: 当前标签页 + 展开的建议
// ==========================================

use crate::domain::maintenance::{MaintenanceRecord, ScheduledMaintenance};
use crate::domain::production::Recommendation;
use crate::engine::{
    reliability_summary, summarize_work_orders, trend_totals, upcoming_within,
    ReliabilitySummary, TrendTotals, WorkOrderSummary,
};
use crate::store::PlantSnapshot;
use crate::view::selectors::MaintenanceTab;
use chrono::NaiveDate;
use serde::Serialize;

/// 带展开标记的建议
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationCard {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    pub expanded: bool,
}

/// 工单历史行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkOrderRow {
    #[serde(flatten)]
    pub record: MaintenanceRecord,
    pub duration: String,
}

/// 维修管理页数据
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenancePage {
    pub active_tab: MaintenanceTab,
    pub summary: WorkOrderSummary,
    pub history: Vec<WorkOrderRow>,
    pub upcoming: Vec<ScheduledMaintenance>,
    pub reliability: Option<ReliabilitySummary>,
    pub trend_totals: TrendTotals,
    pub recommendations: Vec<RecommendationCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaintenanceView {
    active_tab: MaintenanceTab,
    expanded_recommendation: Option<String>,
}

impl MaintenanceView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> MaintenanceTab {
        self.active_tab
    }

    pub fn expanded_recommendation(&self) -> Option<&str> {
        self.expanded_recommendation.as_deref()
    }

    pub fn select_tab(&mut self, tab: MaintenanceTab) {
        self.active_tab = tab;
    }

    /// 同一时间最多展开一条建议
    pub fn toggle_recommendation(&mut self, id: &str) {
        if self.expanded_recommendation.as_deref() == Some(id) {
            self.expanded_recommendation = None;
        } else {
            self.expanded_recommendation = Some(id.to_string());
        }
    }

    pub fn render(
        &self,
        snapshot: &PlantSnapshot,
        today: NaiveDate,
        upcoming_window_days: i64,
    ) -> MaintenancePage {
        let history = snapshot
            .work_orders
            .iter()
            .map(|record| WorkOrderRow {
                duration: record.duration_label(),
                record: record.clone(),
            })
            .collect();

        let recommendations = snapshot
            .maintenance_recommendations
            .iter()
            .map(|rec| RecommendationCard {
                expanded: self.expanded_recommendation.as_deref() == Some(rec.id.as_str()),
                recommendation: rec.clone(),
            })
            .collect();

        MaintenancePage {
            active_tab: self.active_tab,
            summary: summarize_work_orders(&snapshot.work_orders),
            history,
            upcoming: upcoming_within(&snapshot.scheduled_maintenance, today, upcoming_window_days),
            reliability: reliability_summary(&snapshot.reliability),
            trend_totals: trend_totals(&snapshot.maintenance_trend),
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::seed_snapshot;

    #[test]
    fn test_toggle_recommendation() {
        let mut view = MaintenanceView::new();
        view.toggle_recommendation("AI-001");
        assert_eq!(view.expanded_recommendation(), Some("AI-001"));
        view.toggle_recommendation("AI-001");
        assert_eq!(view.expanded_recommendation(), None);
    }

    #[test]
    fn test_render_seed() {
        let mut view = MaintenanceView::new();
        view.select_tab(MaintenanceTab::History);
        view.toggle_recommendation("AI-002");

        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let page = view.render(&seed_snapshot(), today, 7);

        assert_eq!(page.active_tab, MaintenanceTab::History);
        assert_eq!(page.summary.open, 1);
        assert_eq!(page.history[0].duration, "5h 15m");
        assert_eq!(page.history[2].duration, "Ongoing");
        // 窗口 7 天: 只含 06-15
        assert_eq!(page.upcoming.len(), 1);
        assert_eq!(page.upcoming[0].id, "PM-2001");
        assert_eq!(page.trend_totals.total(), 84);
        let expanded: Vec<&str> = page
            .recommendations
            .iter()
            .filter(|r| r.expanded)
            .map(|r| r.recommendation.id.as_str())
            .collect();
        assert_eq!(expanded, vec!["AI-002"]);
    }
}
