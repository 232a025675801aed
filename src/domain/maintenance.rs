// ==========================================
// 生产运营驾驶舱 - 维修领域模型
// ==========================================
// 职责: 维修工单、计划维修、维修趋势与可靠性指标
// 约定: 工单未关闭时费用为 0（仅为数据约定，不做校验）
// ==========================================

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::types::{MaintenanceKind, Priority, WorkOrderStatus};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// MaintenanceRecord - 维修工单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub id: String,      // 工单号 (唯一)
    pub machine: String, // 设备名称 (自由文本，非外键)
    pub issue: String,
    pub status: WorkOrderStatus,
    pub priority: Priority,

    // ===== 时间 =====
    pub reported: NaiveDateTime,
    pub resolved: Option<NaiveDateTime>, // None 表示未关闭

    #[serde(default)]
    pub technician: Option<String>,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub parts: Vec<String>,
}

impl MaintenanceRecord {
    /// 是否仍未关闭（无解决时间）
    pub fn is_open(&self) -> bool {
        self.resolved.is_none()
    }

    /// 处理时长，未关闭返回 None
    pub fn duration(&self) -> Option<Duration> {
        self.resolved.map(|resolved| resolved - self.reported)
    }

    /// 处理时长文案，如 "5h 15m"；未关闭为 "Ongoing"
    pub fn duration_label(&self) -> String {
        match self.duration() {
            Some(d) => {
                let minutes = d.num_minutes().max(0);
                format!("{}h {}m", minutes / 60, minutes % 60)
            }
            None => "Ongoing".to_string(),
        }
    }

    /// 校验工单
    ///
    /// - 解决时间不得早于报修时间
    /// - 费用非负
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.trim().is_empty() {
            return Err(DomainError::EmptyField {
                entity: "MaintenanceRecord",
                field: "id",
            });
        }

        if let Some(resolved) = self.resolved {
            if resolved < self.reported {
                return Err(DomainError::ResolvedBeforeReported {
                    id: self.id.clone(),
                    reported: self.reported.to_string(),
                    resolved: resolved.to_string(),
                });
            }
        }

        if !(self.cost >= 0.0) {
            return Err(DomainError::OutOfRange {
                entity: "MaintenanceRecord",
                id: self.id.clone(),
                field: "cost",
                value: self.cost,
                min: 0.0,
                max: f64::MAX,
            });
        }
        Ok(())
    }
}

// ==========================================
// ScheduledMaintenance - 计划维修
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledMaintenance {
    pub id: String,
    pub machine: String,
    pub kind: MaintenanceKind,
    pub due_date: NaiveDate,
    pub status: WorkOrderStatus,
    pub estimated_hours: f64,
    #[serde(default)]
    pub parts_needed: Vec<String>,
}

// ==========================================
// 趋势数据点
// ==========================================

/// 月度维修次数（按类型）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceTrendPoint {
    pub month: String,
    pub preventive: u32,
    pub corrective: u32,
    pub emergency: u32,
}

impl MaintenanceTrendPoint {
    pub fn total(&self) -> u32 {
        self.preventive + self.corrective + self.emergency
    }
}

/// 月度可靠性指标
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityPoint {
    pub month: String,
    pub mttr_hours: f64, // 平均修复时间
    pub mtbf_hours: f64, // 平均故障间隔
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn record(resolved: Option<&str>) -> MaintenanceRecord {
        MaintenanceRecord {
            id: "MT-1".to_string(),
            machine: "Injection Molder A1".to_string(),
            issue: "Hydraulic Leak".to_string(),
            status: if resolved.is_some() {
                WorkOrderStatus::Completed
            } else {
                WorkOrderStatus::InProgress
            },
            priority: Priority::High,
            reported: ts("2025-06-01T09:30:00"),
            resolved: resolved.map(ts),
            technician: None,
            cost: 0.0,
            parts: vec![],
        }
    }

    #[test]
    fn test_duration_label() {
        assert_eq!(record(Some("2025-06-01T14:45:00")).duration_label(), "5h 15m");
        assert_eq!(record(None).duration_label(), "Ongoing");
        assert!(record(None).is_open());
    }

    #[test]
    fn test_validate_resolved_before_reported() {
        let r = record(Some("2025-06-01T08:00:00"));
        assert!(matches!(
            r.validate(),
            Err(DomainError::ResolvedBeforeReported { .. })
        ));
    }

    #[test]
    fn test_validate_negative_cost() {
        let mut r = record(Some("2025-06-01T10:00:00"));
        r.cost = -5.0;
        assert!(matches!(
            r.validate(),
            Err(DomainError::OutOfRange { field: "cost", .. })
        ));
        r.cost = 250.0;
        assert!(r.validate().is_ok());
    }
}
