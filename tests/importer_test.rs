// ==========================================
// 导入层集成测试
// ==========================================
// 职责: 验证 CSV / JSON 导入、行号报错、主键去重、记录校验
// ==========================================


use plant_ops_dashboard::config::DataSourceConfig;
use plant_ops_dashboard::domain::types::{MachineStatus, Priority, WorkOrderStatus};
use plant_ops_dashboard::domain::DomainError;
use plant_ops_dashboard::engine::aggregate_by_line;
use plant_ops_dashboard::importer::{import_machines, import_work_orders, ImportError};
use plant_ops_dashboard::store::fixtures::seed_snapshot;
use plant_ops_dashboard::store::{FileRecordSource, RecordSource, StoreError};
use test_helpers::{machines_csv, temp_file, work_orders_csv};

#[test]
fn test_import_machines_csv() {
    let file = machines_csv(&[
        "M-101,Injection Molder A1,running,92,95,96,98,A,2025-06-01,98.5%,2",
        "M-201,Assembly Line B1,Idle,78,,,,B,,,",
        "",
        "M-202,Packaging Line B2,MAINTENANCE,65,70,82,90,B,2025-06-07,89.7%,3",
    ]);

    let machines = import_machines(file.path()).unwrap();
    assert_eq!(machines.len(), 3);

    let m101 = &machines[0];
    assert_eq!(m101.status, MachineStatus::Running);
    assert_eq!(m101.alerts, 2);
    assert_eq!(m101.uptime.as_deref(), Some("98.5%"));
    assert!(m101.breakdown.is_some());

    let m201 = &machines[1];
    assert_eq!(m201.status, MachineStatus::Idle);
    assert!(m201.breakdown.is_none());
    assert!(m201.last_maintenance.is_none());
    assert_eq!(m201.alerts, 0);

    let lines = aggregate_by_line(&machines);
    assert_eq!(lines[1].line, "B");
    assert_eq!(lines[1].avg_oee, 71.5);
    assert_eq!(lines[1].idle + lines[1].maintenance, 2);
}

#[test]
fn test_unknown_status_reports_row() {
    let file = machines_csv(&[
        "M-101,Molder,running,92,,,,A,,,",
        "M-102,Molder,broken,89,,,,A,,,",
    ]);

    match import_machines(file.path()) {
        Err(ImportError::InvalidEnumValue { row, field, value }) => {
            assert_eq!(row, 2);
            assert_eq!(field, "status");
            assert_eq!(value, "broken");
        }
        other => panic!("Expected InvalidEnumValue, got {:?}", other),
    }
}

#[test]
fn test_blank_row_keeps_row_numbers() {
    let file = machines_csv(&[
        "M-1,Molder,running,92,,,,A,,,",
        ",,,,,,,,,,",
        "M-2,Molder,bogus,89,,,,A,,,",
    ]);

    match import_machines(file.path()) {
        Err(ImportError::InvalidEnumValue { row, value, .. }) => {
            assert_eq!(row, 3);
            assert_eq!(value, "bogus");
        }
        other => panic!("Expected InvalidEnumValue, got {:?}", other),
    }
}

#[test]
fn test_blank_row_keeps_row_numbers_in_record_checks() {
    let duplicate = machines_csv(&[
        "M-1,Molder,running,92,,,,A,,,",
        ",,,,,,,,,,",
        "M-1,Molder again,idle,70,,,,B,,,",
    ]);
    assert!(matches!(
        import_machines(duplicate.path()),
        Err(ImportError::DuplicateId { row: 3, .. })
    ));

    let out_of_range = machines_csv(&[
        ",,,,,,,,,,",
        "M-1,Molder,running,120,,,,A,,,",
    ]);
    assert!(matches!(
        import_machines(out_of_range.path()),
        Err(ImportError::Validation { row: 2, .. })
    ));
}

#[test]
fn test_partial_breakdown_is_missing_field() {
    let file = machines_csv(&["M-101,Molder,running,92,95,,98,A,,,"]);

    match import_machines(file.path()) {
        Err(ImportError::MissingField { row, field }) => {
            assert_eq!(row, 1);
            assert_eq!(field, "performance");
        }
        other => panic!("Expected MissingField, got {:?}", other),
    }
}

#[test]
fn test_non_numeric_oee() {
    let file = machines_csv(&["M-101,Molder,running,high,,,,A,,,"]);
    assert!(matches!(
        import_machines(file.path()),
        Err(ImportError::TypeConversionError { row: 1, .. })
    ));
}

#[test]
fn test_duplicate_id_rejected() {
    let file = machines_csv(&[
        "M-101,Molder,running,92,,,,A,,,",
        "M-102,Molder,running,89,,,,A,,,",
        "M-101,Molder again,idle,70,,,,B,,,",
    ]);

    match import_machines(file.path()) {
        Err(ImportError::DuplicateId { row, id }) => {
            assert_eq!(row, 3);
            assert_eq!(id, "M-101");
        }
        other => panic!("Expected DuplicateId, got {:?}", other),
    }
}

#[test]
fn test_out_of_range_oee_rejected() {
    let file = machines_csv(&["M-101,Molder,running,120,,,,A,,,"]);

    match import_machines(file.path()) {
        Err(ImportError::Validation { row, source }) => {
            assert_eq!(row, 1);
            assert!(matches!(source, DomainError::OutOfRange { .. }));
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_import_machines_json() {
    let file = temp_file(
        ".json",
        r#"[
            {"id": "J-1", "name": "Press", "status": "running", "oee": 81.5, "line": "J"},
            {"id": "J-2", "name": "Lathe", "status": "maintenance", "oee": 60, "line": "J", "alerts": 4}
        ]"#,
    );

    let machines = import_machines(file.path()).unwrap();
    assert_eq!(machines.len(), 2);
    assert_eq!(machines[1].alerts, 4);
    assert_eq!(machines[1].status, MachineStatus::Maintenance);
}

#[test]
fn test_json_unknown_status_rejected() {
    let file = temp_file(
        ".json",
        r#"[{"id": "J-1", "name": "Press", "status": "offline", "oee": 81.5, "line": "J"}]"#,
    );
    assert!(matches!(
        import_machines(file.path()),
        Err(ImportError::JsonParseError(_))
    ));
}

#[test]
fn test_import_work_orders_csv() {
    let file = work_orders_csv(&[
        "MT-1,CNC Machine C1,Spindle,Completed,High,2025-06-01T08:00:00,2025-06-01T13:15:00,Alex,450,Bearing; Belt",
        "MT-2,Assembly Line B1,Sensor,in_progress,medium,2025-06-08 09:30:00,,,,",
    ]);

    let records = import_work_orders(file.path()).unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].status, WorkOrderStatus::Completed);
    assert_eq!(records[0].priority, Priority::High);
    assert_eq!(records[0].duration_label(), "5h 15m");
    assert_eq!(records[0].parts, vec!["Bearing", "Belt"]);

    assert_eq!(records[1].status, WorkOrderStatus::InProgress);
    assert!(records[1].is_open());
    assert_eq!(records[1].duration_label(), "Ongoing");
    assert_eq!(records[1].cost, 0.0);
}

#[test]
fn test_work_order_resolved_before_reported() {
    let file = work_orders_csv(&[
        "MT-1,CNC,Spindle,Completed,High,2025-06-02T08:00:00,2025-06-01T08:00:00,,100,",
    ]);
    assert!(matches!(
        import_work_orders(file.path()),
        Err(ImportError::Validation {
            row: 1,
            source: DomainError::ResolvedBeforeReported { .. }
        })
    ));
}

#[test]
fn test_missing_and_unsupported_files() {
    let missing = std::env::temp_dir().join("plant_ops_missing_machines.csv");
    assert!(matches!(
        import_machines(&missing),
        Err(ImportError::FileNotFound(_))
    ));

    let txt = temp_file(".txt", "id,name\n");
    assert!(matches!(
        import_machines(txt.path()),
        Err(ImportError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_file_record_source_overrides_baseline() {
    let machines = machines_csv(&[
        "Z-1,Robot Cell,running,90,,,,Z,,,",
        "Z-2,Robot Cell 2,idle,70,,,,Z,,,",
    ]);
    let config = DataSourceConfig {
        machines_path: Some(machines.path().to_path_buf()),
        work_orders_path: None,
    };

    let baseline = seed_snapshot();
    let source = FileRecordSource::new(&config, baseline.clone());
    let snapshot = source.load_snapshot().unwrap();

    assert_eq!(snapshot.machines.len(), 2);
    assert_eq!(snapshot.work_orders, baseline.work_orders);
    assert_eq!(aggregate_by_line(&snapshot.machines)[0].avg_oee, 80.0);
    assert!(source.describe().contains("machines="));
}

#[test]
fn test_file_record_source_surfaces_import_error() {
    let machines = machines_csv(&["Z-1,Robot Cell,exploded,90,,,,Z,,,"]);
    let config = DataSourceConfig {
        machines_path: Some(machines.path().to_path_buf()),
        work_orders_path: None,
    };

    let source = FileRecordSource::new(&config, seed_snapshot());
    match source.load_snapshot() {
        Err(StoreError::Import { path, source }) => {
            assert!(path.ends_with(".csv"));
            assert!(matches!(source, ImportError::InvalidEnumValue { row: 1, .. }));
        }
        Err(other) => panic!("Expected Import error, got {:?}", other),
        Ok(_) => panic!("Expected Import error"),
    }
}
