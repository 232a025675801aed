// ==========================================
// 生产运营驾驶舱 - 数据快照
// ==========================================
// 职责: 一次加载得到的全部记录，加载后不可变
// ==========================================

use crate::domain::kpi::KpiComparison;
use crate::domain::machine::Machine;
use crate::domain::maintenance::{
    MaintenanceRecord, MaintenanceTrendPoint, ReliabilityPoint, ScheduledMaintenance,
};
use crate::domain::production::{
    OeeTrendPoint, PlantAlert, ProductionCounts, ProductionTrendPoint, Recommendation,
};
use crate::domain::quality::QualityReport;
use crate::view::selectors::ChartGranularity;
use serde::{Deserialize, Serialize};

/// 产量走势（按粒度）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionTrends {
    pub daily: Vec<ProductionTrendPoint>,
    pub weekly: Vec<ProductionTrendPoint>,
    pub monthly: Vec<ProductionTrendPoint>,
    pub quarterly: Vec<ProductionTrendPoint>,
    pub yearly: Vec<ProductionTrendPoint>,
}

impl ProductionTrends {
    pub fn series(&self, granularity: ChartGranularity) -> &[ProductionTrendPoint] {
        match granularity {
            ChartGranularity::Daily => &self.daily,
            ChartGranularity::Weekly => &self.weekly,
            ChartGranularity::Monthly => &self.monthly,
            ChartGranularity::Quarterly => &self.quarterly,
            ChartGranularity::Yearly => &self.yearly,
        }
    }
}

/// 全厂数据快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantSnapshot {
    pub machines: Vec<Machine>,
    pub work_orders: Vec<MaintenanceRecord>,
    pub scheduled_maintenance: Vec<ScheduledMaintenance>,
    pub maintenance_trend: Vec<MaintenanceTrendPoint>,
    pub reliability: Vec<ReliabilityPoint>,
    pub maintenance_recommendations: Vec<Recommendation>,
    pub quality: QualityReport,
    pub kpi_comparison: KpiComparison,
    pub production: ProductionCounts,
    pub production_trends: ProductionTrends,
    pub plant_oee_trend: Vec<OeeTrendPoint>,
    pub alerts: Vec<PlantAlert>,
    pub recommendations: Vec<Recommendation>,
}
