// ==========================================
// 生产运营驾驶舱 - 内置样例快照
// ==========================================
// 用途: 未配置数据文件时的演示数据 / 测试基线
// 注意: 通过 StaticRecordSource 注入，不作为全局单例
// ==========================================

use crate::domain::kpi::{KpiComparison, KpiSnapshot};
use crate::domain::machine::{Machine, OeeBreakdown};
use crate::domain::maintenance::{
    MaintenanceRecord, MaintenanceTrendPoint, ReliabilityPoint, ScheduledMaintenance,
};
use crate::domain::production::{
    OeeTrendPoint, PlantAlert, ProductionCounts, ProductionTrendPoint, Recommendation,
};
use crate::domain::quality::{QualityReport, RejectionReason, RejectionTrendPoint};
use crate::domain::types::{
    AlertSeverity, MachineStatus, MaintenanceKind, Priority, WorkOrderStatus,
};
use crate::store::snapshot::{PlantSnapshot, ProductionTrends};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_time(NaiveTime::from_hms_opt(h, min, 0).unwrap_or_default())
}

/// 完整样例快照
pub fn seed_snapshot() -> PlantSnapshot {
    PlantSnapshot {
        machines: seed_machines(),
        work_orders: seed_work_orders(),
        scheduled_maintenance: seed_scheduled_maintenance(),
        maintenance_trend: seed_maintenance_trend(),
        reliability: seed_reliability(),
        maintenance_recommendations: seed_maintenance_recommendations(),
        quality: seed_quality(),
        kpi_comparison: seed_kpi_comparison(),
        production: ProductionCounts {
            today: 12_450,
            yesterday: 11_870,
            week: 84_320,
            month: 327_890,
            quarter: 985_430,
            year: 3_850_000,
        },
        production_trends: seed_production_trends(),
        plant_oee_trend: seed_plant_oee_trend(),
        alerts: seed_alerts(),
        recommendations: seed_recommendations(),
    }
}

// ==========================================
// 设备
// ==========================================

pub fn seed_machines() -> Vec<Machine> {
    let m = |id: &str,
             name: &str,
             status: MachineStatus,
             oee: f64,
             (a, p, q): (f64, f64, f64),
             line: &str,
             last: NaiveDate,
             uptime: &str,
             alerts: u32| {
        Machine::new(id, name, status, oee, line)
            .with_breakdown(OeeBreakdown::new(a, p, q))
            .with_last_maintenance(last)
            .with_uptime(uptime)
            .with_alerts(alerts)
    };

    vec![
        m("M-101", "Injection Molder A1", MachineStatus::Running, 92.0, (95.0, 96.0, 98.0), "A", date(2025, 6, 1), "98.5%", 2),
        m("M-102", "Injection Molder A2", MachineStatus::Running, 89.0, (92.0, 94.0, 97.0), "A", date(2025, 6, 5), "97.2%", 1),
        m("M-201", "Assembly Line B1", MachineStatus::Idle, 78.0, (85.0, 88.0, 95.0), "B", date(2025, 5, 28), "94.1%", 0),
        m("M-202", "Packaging Line B2", MachineStatus::Maintenance, 65.0, (70.0, 82.0, 90.0), "B", date(2025, 6, 7), "89.7%", 3),
        m("M-301", "CNC Machine C1", MachineStatus::Running, 85.0, (90.0, 92.0, 96.0), "C", date(2025, 5, 30), "96.3%", 1),
        m("M-302", "CNC Machine C2", MachineStatus::Running, 88.0, (93.0, 93.0, 97.0), "C", date(2025, 5, 25), "95.8%", 0),
    ]
}

// ==========================================
// 维修
// ==========================================

pub fn seed_work_orders() -> Vec<MaintenanceRecord> {
    vec![
        MaintenanceRecord {
            id: "MT-1001".to_string(),
            machine: "Injection Molder A1".to_string(),
            issue: "Hydraulic Leak".to_string(),
            status: WorkOrderStatus::Completed,
            priority: Priority::High,
            reported: at(2025, 6, 1, 9, 30),
            resolved: Some(at(2025, 6, 1, 14, 45)),
            technician: Some("John D.".to_string()),
            cost: 1250.0,
            parts: vec!["Hydraulic Seal Kit".to_string(), "Gasket Set".to_string()],
        },
        MaintenanceRecord {
            id: "MT-1002".to_string(),
            machine: "Assembly Line B1".to_string(),
            issue: "Conveyor Belt Misalignment".to_string(),
            status: WorkOrderStatus::Completed,
            priority: Priority::Medium,
            reported: at(2025, 5, 30, 11, 15),
            resolved: Some(at(2025, 5, 30, 12, 30)),
            technician: Some("Sarah M.".to_string()),
            cost: 450.0,
            parts: vec!["Belt Tensioner".to_string()],
        },
        MaintenanceRecord {
            id: "MT-1003".to_string(),
            machine: "Injection Molder C1".to_string(),
            issue: "Heating Element Failure".to_string(),
            status: WorkOrderStatus::InProgress,
            priority: Priority::High,
            reported: at(2025, 6, 8, 8, 0),
            resolved: None,
            technician: Some("Mike T.".to_string()),
            cost: 0.0,
            parts: vec!["Heating Element".to_string()],
        },
    ]
}

pub fn seed_scheduled_maintenance() -> Vec<ScheduledMaintenance> {
    vec![
        ScheduledMaintenance {
            id: "PM-2001".to_string(),
            machine: "Injection Molder A2".to_string(),
            kind: MaintenanceKind::Preventive,
            due_date: date(2025, 6, 15),
            status: WorkOrderStatus::Scheduled,
            estimated_hours: 4.0,
            parts_needed: vec!["Air Filter".to_string(), "Lubricant".to_string()],
        },
        ScheduledMaintenance {
            id: "PM-2002".to_string(),
            machine: "Assembly Line A1".to_string(),
            kind: MaintenanceKind::Calibration,
            due_date: date(2025, 6, 20),
            status: WorkOrderStatus::Scheduled,
            estimated_hours: 2.0,
            parts_needed: vec!["Calibration Kit".to_string()],
        },
    ]
}

fn seed_maintenance_trend() -> Vec<MaintenanceTrendPoint> {
    [(8, 5, 2), (7, 4, 1), (9, 6, 3), (6, 5, 2), (8, 7, 1), (5, 3, 2)]
        .iter()
        .zip(MONTHS.iter())
        .map(|(&(preventive, corrective, emergency), month)| MaintenanceTrendPoint {
            month: month.to_string(),
            preventive,
            corrective,
            emergency,
        })
        .collect()
}

fn seed_reliability() -> Vec<ReliabilityPoint> {
    [(3.2, 120.0), (2.8, 135.0), (4.1, 128.0), (3.5, 142.0), (3.0, 138.0), (2.7, 145.0)]
        .iter()
        .zip(MONTHS.iter())
        .map(|(&(mttr_hours, mtbf_hours), month)| ReliabilityPoint {
            month: month.to_string(),
            mttr_hours,
            mtbf_hours,
        })
        .collect()
}

fn seed_maintenance_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            id: "AI-001".to_string(),
            title: "Predictive Maintenance for Injection Molders".to_string(),
            description: "Vibration analysis suggests potential bearing wear in 3 injection molders within 2-3 weeks".to_string(),
            impact: Priority::High,
            potential_savings: Some("$15,000".to_string()),
            action: Some("Schedule vibration analysis for next week".to_string()),
        },
        Recommendation {
            id: "AI-002".to_string(),
            title: "Optimize Maintenance Schedule".to_string(),
            description: "Analysis shows 23% of maintenance is performed during peak production hours".to_string(),
            impact: Priority::Medium,
            potential_savings: Some("$8,400/year".to_string()),
            action: Some("Reschedule non-critical maintenance to off-peak hours".to_string()),
        },
    ]
}

// ==========================================
// 质量 / KPI
// ==========================================

fn seed_quality() -> QualityReport {
    let reasons = [
        ("Surface Defects", 125),
        ("Dimensional Issues", 78),
        ("Material Flaws", 47),
        ("Assembly Errors", 31),
        ("Other", 31),
    ];
    let trend = [3.2, 2.9, 2.7, 2.5, 2.4, 2.3];

    QualityReport {
        total_produced: 12_500,
        total_rejected: 312,
        rejection_reasons: reasons
            .iter()
            .map(|(reason, count)| RejectionReason {
                reason: reason.to_string(),
                count: *count,
            })
            .collect(),
        trend: trend
            .iter()
            .zip(MONTHS.iter())
            .map(|(rate, month)| RejectionTrendPoint {
                month: month.to_string(),
                rejection_rate: *rate,
            })
            .collect(),
    }
}

fn seed_kpi_comparison() -> KpiComparison {
    KpiComparison {
        current_month: KpiSnapshot {
            oee: 89.0,
            availability: 92.0,
            performance: 95.0,
            quality: 98.0,
        },
        previous_month: KpiSnapshot {
            oee: 85.0,
            availability: 89.0,
            performance: 93.0,
            quality: 97.0,
        },
    }
}

// ==========================================
// 产量 / 走势
// ==========================================

/// 确定性的伪随机偏移，保证快照每次构造结果一致
fn spread(i: u64, span: u64) -> u64 {
    (i * 7_919 + 3_571) % span
}

fn seed_production_trends() -> ProductionTrends {
    let point = |label: String, units: u64| ProductionTrendPoint { label, units };

    ProductionTrends {
        daily: (0..30u64)
            .map(|i| point(date(2025, 5, 1 + i as u32).to_string(), 10_000 + spread(i, 4_000)))
            .collect(),
        weekly: (0..12u64)
            .map(|i| point(format!("W{}", i + 1), 60_000 + spread(i, 20_000)))
            .collect(),
        monthly: (0..12u64)
            .map(|i| point(MONTHS[i as usize].to_string(), 250_000 + spread(i, 100_000)))
            .collect(),
        quarterly: (0..4u64)
            .map(|i| point(format!("Q{}", i + 1), 800_000 + spread(i, 400_000)))
            .collect(),
        yearly: (0..5u64)
            .map(|i| point((2021 + i).to_string(), 3_500_000 + spread(i, 1_000_000)))
            .collect(),
    }
}

fn seed_plant_oee_trend() -> Vec<OeeTrendPoint> {
    [78.0, 82.0, 79.0, 85.0, 88.0, 75.0, 90.0, 92.0, 89.0, 86.0, 82.0, 84.0, 87.0, 89.0, 91.0]
        .iter()
        .enumerate()
        .map(|(i, oee)| OeeTrendPoint {
            date: date(2025, 5, 1 + i as u32),
            oee: *oee,
        })
        .collect()
}

// ==========================================
// 告警 / 建议
// ==========================================

fn seed_alerts() -> Vec<PlantAlert> {
    let alert = |id: u32, time: &str, machine: &str, issue: &str, severity: AlertSeverity| PlantAlert {
        id,
        time: time.to_string(),
        machine: machine.to_string(),
        issue: issue.to_string(),
        severity,
    };

    vec![
        alert(1, "10:23 AM", "MX-04", "Overheating", AlertSeverity::Critical),
        alert(2, "09:45 AM", "Line B", "Conveyor Jam", AlertSeverity::Warning),
        alert(3, "09:12 AM", "QA-12", "Calibration Needed", AlertSeverity::Info),
        alert(4, "08:30 AM", "MX-04", "Low Lubricant", AlertSeverity::Warning),
    ]
}

fn seed_recommendations() -> Vec<Recommendation> {
    let rec = |id: &str, title: &str, description: &str, impact: Priority| Recommendation {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        impact,
        potential_savings: None,
        action: None,
    };

    vec![
        rec(
            "REC-1",
            "Reduce minor stops on Machine MX-04",
            "Frequent minor stops detected. Consider preventive maintenance.",
            Priority::High,
        ),
        rec(
            "REC-2",
            "Schedule preventive maintenance for Line B",
            "Scheduled maintenance due in 3 days.",
            Priority::Medium,
        ),
        rec(
            "REC-3",
            "Optimize changeover process",
            "Average changeover time increased by 15% this week.",
            Priority::Medium,
        ),
    ]
}
