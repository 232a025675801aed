// ==========================================
// 生产运营驾驶舱 - 视图层
// ==========================================
// 职责: 持有界面状态（搜索词/选中项/标签页），渲染页面数据
// 红线: 视图不读文件，数据由调用方以快照形式传入
// ==========================================

pub mod clock;
pub mod dashboard_view;
pub mod machines_view;
pub mod maintenance_view;
pub mod selectors;

pub use clock::ClockTicker;
pub use dashboard_view::{DashboardPage, DashboardView, KpiRow, ProductionChart, ProductionTile};
pub use machines_view::{LineCard, MachinesPage, MachinesView};
pub use maintenance_view::{MaintenancePage, MaintenanceView, RecommendationCard, WorkOrderRow};
pub use selectors::{
    role_view, ChartGranularity, DashboardMode, MaintenanceTab, Role, RoleView, TimeRange,
};
