// ==========================================
// 生产运营驾驶舱 - OEE 主看板
// ==========================================
// 状态: 时间范围 / 图表粒度 / 角色 / 全屏 / 选中 KPI / 看板模式
// ==========================================

use crate::config::OeeThresholds;
use crate::domain::kpi::{KpiDelta, KpiKind};
use crate::domain::production::{OeeTrendPoint, PlantAlert, ProductionTrendPoint, Recommendation};
use crate::domain::types::OeeBand;
use crate::engine::{
    aggregate_by_line, average_oee, classify_oee, count_by_status, format_count, quality_overview,
    trend_average, trend_peak, LineAggregate, QualityOverview, StatusCounts,
};
use crate::store::PlantSnapshot;
use crate::view::selectors::{
    role_view, ChartGranularity, DashboardMode, Role, RoleView, TimeRange,
};
use serde::Serialize;

/// KPI 对比行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiRow {
    #[serde(flatten)]
    pub delta: KpiDelta,
    pub unit: &'static str,
    pub selected: bool,
}

/// 产量卡片
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionTile {
    pub range: TimeRange,
    pub units: u64,
    pub formatted: String,
    pub day_over_day_pct: Option<f64>,
}

/// 产量走势图
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionChart {
    pub granularity: ChartGranularity,
    pub x_axis_key: &'static str,
    pub points: Vec<ProductionTrendPoint>,
}

/// 主看板数据
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardPage {
    pub mode: DashboardMode,
    pub full_screen: bool,
    pub role_view: Option<RoleView>,
    pub status: StatusCounts,
    /// 当前全部设备的平均 OEE
    pub fleet_oee: f64,
    /// OEE 走势的平均值
    pub plant_oee: f64,
    pub plant_oee_band: OeeBand,
    pub plant_oee_peak: Option<OeeTrendPoint>,
    pub kpis: Vec<KpiRow>,
    pub production: ProductionTile,
    pub production_chart: ProductionChart,
    pub quality: QualityOverview,
    pub alerts: Vec<PlantAlert>,
    pub recommendations: Vec<Recommendation>,
    /// 仅设备列表模式下提供
    pub line_overview: Option<Vec<LineAggregate>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    time_range: TimeRange,
    granularity: ChartGranularity,
    role: Role,
    full_screen: bool,
    selected_kpi: KpiKind,
    mode: DashboardMode,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self {
            time_range: TimeRange::Day,
            granularity: ChartGranularity::Daily,
            role: Role::All,
            full_screen: false,
            selected_kpi: KpiKind::Oee,
            mode: DashboardMode::Dashboard,
        }
    }
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn selected_kpi(&self) -> KpiKind {
        self.selected_kpi
    }

    pub fn mode(&self) -> DashboardMode {
        self.mode
    }

    pub fn is_full_screen(&self) -> bool {
        self.full_screen
    }

    pub fn set_time_range(&mut self, range: TimeRange) {
        self.time_range = range;
    }

    pub fn set_granularity(&mut self, granularity: ChartGranularity) {
        self.granularity = granularity;
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn select_kpi(&mut self, kpi: KpiKind) {
        self.selected_kpi = kpi;
    }

    pub fn toggle_full_screen(&mut self) {
        self.full_screen = !self.full_screen;
    }

    pub fn show_machine_list(&mut self) {
        self.mode = DashboardMode::MachineList;
    }

    pub fn show_dashboard(&mut self) {
        self.mode = DashboardMode::Dashboard;
    }

    pub fn render(&self, snapshot: &PlantSnapshot, thresholds: &OeeThresholds) -> DashboardPage {
        let kpis = snapshot
            .kpi_comparison
            .compare_all()
            .into_iter()
            .map(|delta| KpiRow {
                unit: delta.kind.unit(),
                selected: delta.kind == self.selected_kpi,
                delta,
            })
            .collect();

        let units = snapshot.production.for_range(self.time_range);
        let production = ProductionTile {
            range: self.time_range,
            units,
            formatted: format_count(units),
            day_over_day_pct: snapshot.production.day_over_day_pct(),
        };

        let production_chart = ProductionChart {
            granularity: self.granularity,
            x_axis_key: self.granularity.x_axis_key(),
            points: snapshot.production_trends.series(self.granularity).to_vec(),
        };

        let plant_oee = trend_average(&snapshot.plant_oee_trend);

        let line_overview = match self.mode {
            DashboardMode::MachineList => Some(aggregate_by_line(&snapshot.machines)),
            DashboardMode::Dashboard => None,
        };

        DashboardPage {
            mode: self.mode,
            full_screen: self.full_screen,
            role_view: role_view(self.role),
            status: count_by_status(&snapshot.machines),
            fleet_oee: average_oee(&snapshot.machines),
            plant_oee,
            plant_oee_band: classify_oee(plant_oee, thresholds),
            plant_oee_peak: trend_peak(&snapshot.plant_oee_trend).cloned(),
            kpis,
            production,
            production_chart,
            quality: quality_overview(&snapshot.quality),
            alerts: snapshot.alerts.clone(),
            recommendations: snapshot.recommendations.clone(),
            line_overview,
        }
    }
}
