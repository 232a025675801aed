// ==========================================
// 样例数据生成器
// ==========================================
// 用途: 将内置样例设备/工单导出为 CSV，供 FileRecordSource 使用
// 输出: <目录>/machines.csv, <目录>/work_orders.csv
// 用法: generate_sample_data [输出目录]（默认 tests/fixtures/datasets）
// ==========================================

use anyhow::Context;
use csv::Writer;
use plant_ops_dashboard::domain::{Machine, MaintenanceRecord};
use plant_ops_dashboard::store::fixtures::{seed_machines, seed_work_orders};
use std::path::{Path, PathBuf};

const MACHINE_HEADER: &[&str] = &[
    "id",
    "name",
    "status",
    "oee",
    "availability",
    "performance",
    "quality",
    "line",
    "last_maintenance",
    "uptime",
    "alerts",
];

const WORK_ORDER_HEADER: &[&str] = &[
    "id",
    "machine",
    "issue",
    "status",
    "priority",
    "reported",
    "resolved",
    "technician",
    "cost",
    "parts",
];

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

fn machine_row(m: &Machine) -> Vec<String> {
    let part = |f: fn(&plant_ops_dashboard::domain::OeeBreakdown) -> f64| {
        m.breakdown.as_ref().map(|b| f(b).to_string()).unwrap_or_default()
    };
    vec![
        m.id.clone(),
        m.name.clone(),
        m.status.as_str().to_string(),
        m.oee.to_string(),
        part(|b| b.availability),
        part(|b| b.performance),
        part(|b| b.quality),
        m.line.clone(),
        m.last_maintenance.map(|d| d.to_string()).unwrap_or_default(),
        m.uptime.clone().unwrap_or_default(),
        m.alerts.to_string(),
    ]
}

fn work_order_row(r: &MaintenanceRecord) -> Vec<String> {
    vec![
        r.id.clone(),
        r.machine.clone(),
        r.issue.clone(),
        r.status.to_string(),
        r.priority.to_string(),
        r.reported.format(DATETIME_FORMAT).to_string(),
        r.resolved
            .map(|t| t.format(DATETIME_FORMAT).to_string())
            .unwrap_or_default(),
        r.technician.clone().unwrap_or_default(),
        r.cost.to_string(),
        r.parts.join(";"),
    ]
}

fn write_csv(path: &Path, header: &[&str], rows: Vec<Vec<String>>) -> anyhow::Result<usize> {
    let mut writer =
        Writer::from_path(path).with_context(|| format!("无法创建 {}", path.display()))?;
    writer.write_record(header)?;
    let count = rows.len();
    for row in rows {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(count)
}

fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures/datasets"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("无法创建目录 {}", out_dir.display()))?;

    let machines_path = out_dir.join("machines.csv");
    let count = write_csv(
        &machines_path,
        MACHINE_HEADER,
        seed_machines().iter().map(machine_row).collect(),
    )?;
    println!("✓ {} ({} 行)", machines_path.display(), count);

    let work_orders_path = out_dir.join("work_orders.csv");
    let count = write_csv(
        &work_orders_path,
        WORK_ORDER_HEADER,
        seed_work_orders().iter().map(work_order_row).collect(),
    )?;
    println!("✓ {} ({} 行)", work_orders_path.display(), count);

    Ok(())
}
