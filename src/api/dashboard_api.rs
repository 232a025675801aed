// ==========================================
// 生产运营驾驶舱 - 驾驶舱 API
// ==========================================
// 职责: 封装 RecordSource + 引擎 + 视图，为前端提供聚合查询
// 架构: API 层 → RecordSource（快照） → Engine（纯计算） / View（页面）
// ==========================================

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::api::error::{ApiError, ApiResult};
use crate::config::DashboardConfig;
use crate::domain::kpi::{KpiDelta, KpiKind};
use crate::domain::machine::Machine;
use crate::domain::maintenance::ScheduledMaintenance;
use crate::engine::{
    aggregate_by_line, count_by_status, filter_machines, machines_on_line, quality_overview,
    summarize_work_orders, upcoming_within, LineAggregate, QualityOverview, StatusCounts,
    WorkOrderSummary,
};
use crate::perf::PerfGuard;
use crate::store::{source_from_config, PlantSnapshot, RecordSource};
use crate::view::{
    ClockTicker, DashboardPage, DashboardView, MachinesPage, MachinesView, MaintenancePage,
    MaintenanceView,
};

// ==========================================
// DashboardReport - 看板报告
// ==========================================

/// 一次性导出的看板报告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub report_id: String,
    pub generated_at: NaiveDateTime,
    pub as_of: NaiveDate,
    pub source: String,
    pub query: String,
    pub status: StatusCounts,
    pub lines: Vec<LineAggregate>,
    pub matching_machines: Vec<Machine>,
    pub maintenance: WorkOrderSummary,
    pub upcoming_maintenance: Vec<ScheduledMaintenance>,
    pub quality: QualityOverview,
}

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================

/// 驾驶舱API
///
/// 每次调用都向 RecordSource 取一次快照，API 自身不缓存数据。
pub struct DashboardApi {
    source: Arc<dyn RecordSource>,
    config: DashboardConfig,
}

impl DashboardApi {
    pub fn new(source: Arc<dyn RecordSource>, config: DashboardConfig) -> Self {
        Self { source, config }
    }

    /// 按配置选择数据来源（配置了文件则读文件，否则用内置样例数据）
    pub fn from_config(config: DashboardConfig) -> Self {
        let source: Arc<dyn RecordSource> = Arc::from(source_from_config(&config.data));
        tracing::info!(source = %source.describe(), "驾驶舱数据来源");
        Self::new(source, config)
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// 启动看板时钟（需在 tokio 运行时内调用）
    pub fn start_clock(&self) -> ClockTicker {
        ClockTicker::start(self.config.clock_tick_ms)
    }

    // ==========================================
    // 快照与产线
    // ==========================================

    pub fn snapshot(&self) -> ApiResult<PlantSnapshot> {
        let _perf = PerfGuard::new("snapshot");
        self.load()
    }

    /// 产线汇总（按首次出现顺序）
    pub fn line_overview(&self) -> ApiResult<Vec<LineAggregate>> {
        let _perf = PerfGuard::new("line_overview");
        let snapshot = self.load()?;
        Ok(aggregate_by_line(&snapshot.machines))
    }

    /// 搜索设备；空查询返回全部设备
    pub fn search_machines(&self, query: &str) -> ApiResult<Vec<Machine>> {
        let _perf = PerfGuard::new("search_machines");
        let snapshot = self.load()?;
        let matched: Vec<Machine> = filter_machines(&snapshot.machines, query)
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!(query, matched = matched.len(), "设备搜索");
        Ok(matched)
    }

    /// 某条产线的设备
    pub fn line_machines(&self, line: &str) -> ApiResult<Vec<Machine>> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ApiError::InvalidInput("产线不能为空".to_string()));
        }
        let _perf = PerfGuard::new("line_machines");
        let snapshot = self.load()?;
        let machines: Vec<Machine> = machines_on_line(&snapshot.machines, Some(line))
            .into_iter()
            .cloned()
            .collect();
        if machines.is_empty() {
            return Err(ApiError::NotFound(format!("产线{}不存在", line)));
        }
        Ok(machines)
    }

    /// 按编号查询设备
    pub fn machine_detail(&self, id: &str) -> ApiResult<Machine> {
        if id.trim().is_empty() {
            return Err(ApiError::InvalidInput("设备编号不能为空".to_string()));
        }
        let _perf = PerfGuard::new("machine_detail");
        let snapshot = self.load()?;
        snapshot
            .machines
            .into_iter()
            .find(|m| m.id == id.trim())
            .ok_or_else(|| ApiError::NotFound(format!("设备(id={})不存在", id.trim())))
    }

    pub fn status_summary(&self) -> ApiResult<StatusCounts> {
        let _perf = PerfGuard::new("status_summary");
        let snapshot = self.load()?;
        Ok(count_by_status(&snapshot.machines))
    }

    // ==========================================
    // 页面
    // ==========================================

    pub fn machines_page(&self, view: &MachinesView) -> ApiResult<MachinesPage> {
        let _perf = PerfGuard::new("machines_page");
        let snapshot = self.load()?;
        Ok(view.render(&snapshot, &self.config.oee_thresholds))
    }

    pub fn maintenance_page(
        &self,
        view: &MaintenanceView,
        today: NaiveDate,
    ) -> ApiResult<MaintenancePage> {
        let _perf = PerfGuard::new("maintenance_page");
        let snapshot = self.load()?;
        Ok(view.render(&snapshot, today, self.config.upcoming_window_days))
    }

    pub fn dashboard_page(&self, view: &DashboardView) -> ApiResult<DashboardPage> {
        let _perf = PerfGuard::new("dashboard_page");
        let snapshot = self.load()?;
        Ok(view.render(&snapshot, &self.config.oee_thresholds))
    }

    /// 单项 KPI 本月/上月对比
    pub fn kpi_comparison(&self, kind: KpiKind) -> ApiResult<KpiDelta> {
        let _perf = PerfGuard::new("kpi_comparison");
        let snapshot = self.load()?;
        Ok(snapshot.kpi_comparison.compare(kind))
    }

    // ==========================================
    // 报告
    // ==========================================

    pub fn build_report(&self, query: &str, today: NaiveDate) -> ApiResult<DashboardReport> {
        let _perf = PerfGuard::new("build_report");
        let snapshot = self.load()?;

        let report = DashboardReport {
            report_id: uuid::Uuid::new_v4().to_string(),
            generated_at: chrono::Local::now().naive_local(),
            as_of: today,
            source: self.source.describe(),
            query: query.to_string(),
            status: count_by_status(&snapshot.machines),
            lines: aggregate_by_line(&snapshot.machines),
            matching_machines: filter_machines(&snapshot.machines, query)
                .into_iter()
                .cloned()
                .collect(),
            maintenance: summarize_work_orders(&snapshot.work_orders),
            upcoming_maintenance: upcoming_within(
                &snapshot.scheduled_maintenance,
                today,
                self.config.upcoming_window_days,
            ),
            quality: quality_overview(&snapshot.quality),
        };

        tracing::info!(
            report_id = %report.report_id,
            lines = report.lines.len(),
            matched = report.matching_machines.len(),
            "看板报告已生成"
        );
        Ok(report)
    }

    fn load(&self) -> ApiResult<PlantSnapshot> {
        self.source.load_snapshot().map_err(|e| {
            tracing::error!(source = %self.source.describe(), error = %e, "快照加载失败");
            ApiError::from(e)
        })
    }
}
