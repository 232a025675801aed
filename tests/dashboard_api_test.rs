// ==========================================
// DashboardApi 集成测试
// ==========================================
// 职责: 验证 API → RecordSource → Engine / View 的完整链路
// ==========================================

#[path = "helpers/machine_builder.rs"]
mod machine_builder;

use chrono::NaiveDate;
use machine_builder::{three_machine_scenario, MachineBuilder, WorkOrderBuilder};
use plant_ops_dashboard::api::{ApiError, DashboardApi};
use plant_ops_dashboard::config::{DashboardConfig, DataSourceConfig};
use plant_ops_dashboard::domain::types::{MachineStatus, Priority};
use plant_ops_dashboard::domain::KpiKind;
use plant_ops_dashboard::store::fixtures::seed_snapshot;
use plant_ops_dashboard::store::{
    PlantSnapshot, RecordSource, StaticRecordSource, StoreError, StoreResult,
};
use plant_ops_dashboard::view::{
    DashboardMode, DashboardView, MachinesView, MaintenanceTab, MaintenanceView, Role, TimeRange,
};
use std::sync::Arc;

// ==========================================
// 测试辅助函数
// ==========================================

fn seeded_api() -> DashboardApi {
    DashboardApi::new(
        Arc::new(StaticRecordSource::seeded()),
        DashboardConfig::default(),
    )
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
}

/// 总是失败的数据来源
struct BrokenSource;

impl RecordSource for BrokenSource {
    fn load_snapshot(&self) -> StoreResult<PlantSnapshot> {
        Err(StoreError::Unavailable("plc gateway offline".to_string()))
    }

    fn describe(&self) -> String {
        "broken".to_string()
    }
}

// ==========================================
// 查询接口
// ==========================================

#[test]
fn test_line_overview_and_status() {
    let api = seeded_api();

    let lines = api.line_overview().unwrap();
    let names: Vec<&str> = lines.iter().map(|l| l.line.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);

    let status = api.status_summary().unwrap();
    assert_eq!(status.running, 4);
    assert_eq!(status.idle, 1);
    assert_eq!(status.maintenance, 1);
    assert_eq!(status.total, 6);
}

#[test]
fn test_search_machines() {
    let api = seeded_api();
    assert_eq!(api.search_machines("").unwrap().len(), 6);
    assert_eq!(api.search_machines("cnc").unwrap().len(), 2);
    assert!(api.search_machines("zzz-no-match").unwrap().is_empty());
}

#[test]
fn test_injected_snapshot() {
    let mut snapshot = seed_snapshot();
    snapshot.machines = three_machine_scenario();
    snapshot.machines.push(
        MachineBuilder::new("M-401")
            .line("D")
            .oee(55.0)
            .status(MachineStatus::Maintenance)
            .build(),
    );

    let api = DashboardApi::new(
        Arc::new(StaticRecordSource::new(snapshot)),
        DashboardConfig::default(),
    );

    let lines = api.line_overview().unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].avg_oee, 90.5);
    assert_eq!(lines[2].line, "D");
    assert_eq!(lines[2].maintenance, 1);
}

#[test]
fn test_kpi_comparison_every_kind() {
    let api = seeded_api();
    for kind in KpiKind::ALL {
        let delta = api.kpi_comparison(kind).unwrap();
        assert_eq!(delta.kind, kind);
        assert!(delta.improved);
    }
    let oee = api.kpi_comparison(KpiKind::Oee).unwrap();
    assert_eq!(oee.current, 89.0);
    assert_eq!(oee.delta, 4.0);
}

// ==========================================
// 页面接口
// ==========================================

#[test]
fn test_machines_page() {
    let api = seeded_api();
    let mut view = MachinesView::new();
    view.set_search("idle");
    view.toggle_line("B");

    let page = api.machines_page(&view).unwrap();
    assert_eq!(page.matched, 1);
    assert_eq!(page.groups[0].machines[0].id, "M-201");
    assert_eq!(page.line_cards.len(), 3);
    assert!(page.line_cards[1].selected);

    view.clear_search();
    let page = api.machines_page(&view).unwrap();
    assert_eq!(page.matched, page.total);
}

#[test]
fn test_maintenance_page_uses_configured_window() {
    let api = seeded_api();
    let mut view = MaintenanceView::new();
    view.select_tab(MaintenanceTab::Schedule);

    let page = api.maintenance_page(&view, today()).unwrap();
    assert_eq!(page.active_tab, MaintenanceTab::Schedule);
    // 默认 30 天窗口覆盖两条计划维修，按到期日排序
    let ids: Vec<&str> = page.upcoming.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["PM-2001", "PM-2002"]);

    let config = DashboardConfig {
        upcoming_window_days: 3,
        ..DashboardConfig::default()
    };
    let api = DashboardApi::new(Arc::new(StaticRecordSource::seeded()), config);
    assert!(api.maintenance_page(&view, today()).unwrap().upcoming.is_empty());
}

#[test]
fn test_dashboard_page() {
    let api = seeded_api();
    let mut view = DashboardView::new();
    view.set_role(Role::Maintenance);
    view.set_time_range(TimeRange::Day);
    view.show_machine_list();

    let page = api.dashboard_page(&view).unwrap();
    assert_eq!(page.mode, DashboardMode::MachineList);
    assert_eq!(page.production.formatted, "12.4K");
    assert_eq!(page.production.day_over_day_pct, Some(4.9));
    assert_eq!(page.role_view.map(|r| r.title), Some("Maintenance"));
    assert_eq!(page.line_overview.map(|l| l.len()), Some(3));
    assert_eq!(page.kpis.iter().filter(|k| k.selected).count(), 1);
}

// ==========================================
// 报告
// ==========================================

#[test]
fn test_build_report() {
    let mut snapshot = seed_snapshot();
    snapshot.work_orders = vec![
        WorkOrderBuilder::new("WO-1")
            .priority(Priority::High)
            .resolved("2025-06-01T10:00:00", 200.0)
            .build(),
        WorkOrderBuilder::new("WO-2").build(),
    ];
    let api = DashboardApi::new(
        Arc::new(StaticRecordSource::new(snapshot)),
        DashboardConfig::default(),
    );

    let report = api.build_report("line", today()).unwrap();
    assert_eq!(report.query, "line");
    assert_eq!(report.as_of, today());
    assert_eq!(report.matching_machines.len(), 2);
    assert_eq!(report.lines.len(), 3);
    assert_eq!(report.maintenance.total, 2);
    assert_eq!(report.maintenance.open, 1);
    assert_eq!(report.maintenance.high_priority, 1);
    assert_eq!(report.quality.rejection_rate, 2.5);
    assert_eq!(report.upcoming_maintenance.len(), 2);
    assert!(uuid::Uuid::parse_str(&report.report_id).is_ok());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["lines"][0]["line"], "A");
    assert_eq!(json["status"]["running"], 4);
}

// ==========================================
// 错误传播
// ==========================================

#[test]
fn test_store_error_propagates() {
    let api = DashboardApi::new(Arc::new(BrokenSource), DashboardConfig::default());
    match api.line_overview() {
        Err(ApiError::Store(StoreError::Unavailable(msg))) => {
            assert!(msg.contains("offline"));
        }
        other => panic!("Expected Store error, got {:?}", other),
    }
    assert!(api.build_report("", today()).is_err());
}

#[test]
fn test_from_config_with_missing_file() {
    let config = DashboardConfig {
        data: DataSourceConfig {
            machines_path: Some(std::env::temp_dir().join("plant_ops_does_not_exist.csv")),
            work_orders_path: None,
        },
        ..DashboardConfig::default()
    };
    let api = DashboardApi::from_config(config);
    assert!(api.source_description().starts_with("file("));
    assert!(matches!(
        api.status_summary(),
        Err(ApiError::Store(StoreError::Import { .. }))
    ));
}

#[test]
fn test_from_config_with_csv_file() {
    let machines = test_helpers::machines_csv(&[
        "K-1,Kiln 1,running,88,,,,K,,,",
        "K-2,Kiln 2,running,91,,,,K,,,",
    ]);
    let config = DashboardConfig {
        data: DataSourceConfig {
            machines_path: Some(machines.path().to_path_buf()),
            work_orders_path: None,
        },
        ..DashboardConfig::default()
    };

    let api = DashboardApi::from_config(config);
    let lines = api.line_overview().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].avg_oee, 89.5);
    assert_eq!(lines[0].running, 2);
}
