// ==========================================
// 测试数据构建器 - 设备 / 工单
// ==========================================

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use plant_ops_dashboard::domain::types::{MachineStatus, Priority, WorkOrderStatus};
use plant_ops_dashboard::domain::{Machine, MaintenanceRecord, OeeBreakdown};

// ==========================================
// Machine 构建器
// ==========================================

pub struct MachineBuilder {
    id: String,
    name: Option<String>,
    status: MachineStatus,
    oee: f64,
    line: String,
    breakdown: Option<OeeBreakdown>,
    alerts: u32,
    last_maintenance: Option<NaiveDate>,
}

impl MachineBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: None,
            status: MachineStatus::Running,
            oee: 80.0,
            line: "A".to_string(),
            breakdown: None,
            alerts: 0,
            last_maintenance: None,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn status(mut self, status: MachineStatus) -> Self {
        self.status = status;
        self
    }

    pub fn oee(mut self, oee: f64) -> Self {
        self.oee = oee;
        self
    }

    pub fn line(mut self, line: &str) -> Self {
        self.line = line.to_string();
        self
    }

    pub fn breakdown(mut self, availability: f64, performance: f64, quality: f64) -> Self {
        self.breakdown = Some(OeeBreakdown::new(availability, performance, quality));
        self
    }

    pub fn alerts(mut self, alerts: u32) -> Self {
        self.alerts = alerts;
        self
    }

    pub fn last_maintenance(mut self, date: NaiveDate) -> Self {
        self.last_maintenance = Some(date);
        self
    }

    pub fn build(self) -> Machine {
        let name = self.name.unwrap_or_else(|| format!("Machine {}", self.id));
        let mut machine = Machine::new(self.id, name, self.status, self.oee, self.line)
            .with_alerts(self.alerts);
        machine.breakdown = self.breakdown;
        machine.last_maintenance = self.last_maintenance;
        machine
    }
}

/// 三台设备的标准场景：A 线两台运行，B 线一台空闲
pub fn three_machine_scenario() -> Vec<Machine> {
    vec![
        MachineBuilder::new("M-101").oee(92.0).line("A").build(),
        MachineBuilder::new("M-102").oee(89.0).line("A").build(),
        MachineBuilder::new("M-201")
            .oee(78.0)
            .line("B")
            .status(MachineStatus::Idle)
            .build(),
    ]
}

// ==========================================
// MaintenanceRecord 构建器
// ==========================================

pub struct WorkOrderBuilder {
    id: String,
    machine: String,
    status: WorkOrderStatus,
    priority: Priority,
    reported: NaiveDateTime,
    resolved: Option<NaiveDateTime>,
    cost: f64,
}

pub fn datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
}

impl WorkOrderBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            machine: "CNC Mill 1".to_string(),
            status: WorkOrderStatus::InProgress,
            priority: Priority::Medium,
            reported: datetime("2025-06-01T08:00:00"),
            resolved: None,
            cost: 0.0,
        }
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn resolved(mut self, at: &str, cost: f64) -> Self {
        self.status = WorkOrderStatus::Completed;
        self.resolved = Some(datetime(at));
        self.cost = cost;
        self
    }

    pub fn build(self) -> MaintenanceRecord {
        MaintenanceRecord {
            id: self.id,
            machine: self.machine,
            issue: "Inspection".to_string(),
            status: self.status,
            priority: self.priority,
            reported: self.reported,
            resolved: self.resolved,
            technician: None,
            cost: self.cost,
            parts: Vec::new(),
        }
    }
}
