// ==========================================
// 生产运营驾驶舱 - 领域类型定义
// ==========================================
// 职责: 设备状态、工单状态、优先级、告警级别等封闭枚举
// 红线: 状态必须为枚举值之一，不接受任意字符串
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 设备运行状态 (Machine Status)
// ==========================================
// 序列化格式: 小写 (与前端/导入文件一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MachineStatus {
    Running,     // 运行中
    Idle,        // 空闲
    Maintenance, // 维修中
}

impl fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MachineStatus {
    pub const ALL: [MachineStatus; 3] = [
        MachineStatus::Running,
        MachineStatus::Idle,
        MachineStatus::Maintenance,
    ];

    /// 从字符串解析状态（忽略首尾空白与大小写）
    ///
    /// 未知状态返回 None，由调用方决定如何上报
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "running" => Some(MachineStatus::Running),
            "idle" => Some(MachineStatus::Idle),
            "maintenance" => Some(MachineStatus::Maintenance),
            _ => None,
        }
    }

    /// 小写字符串形式，参与搜索匹配
    pub fn as_str(&self) -> &'static str {
        match self {
            MachineStatus::Running => "running",
            MachineStatus::Idle => "idle",
            MachineStatus::Maintenance => "maintenance",
        }
    }

    /// 国际化文案 key
    pub fn label_key(&self) -> &'static str {
        match self {
            MachineStatus::Running => "status.running",
            MachineStatus::Idle => "status.idle",
            MachineStatus::Maintenance => "status.maintenance",
        }
    }
}

// ==========================================
// 工单状态 (Work Order Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkOrderStatus {
    Completed, // 已完成
    #[serde(rename = "In Progress")]
    InProgress, // 处理中
    Scheduled, // 已排期
}

impl fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkOrderStatus::Completed => write!(f, "Completed"),
            WorkOrderStatus::InProgress => write!(f, "In Progress"),
            WorkOrderStatus::Scheduled => write!(f, "Scheduled"),
        }
    }
}

impl WorkOrderStatus {
    /// 从字符串解析工单状态
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['_', '-'], " ").as_str() {
            "completed" => Some(WorkOrderStatus::Completed),
            "in progress" => Some(WorkOrderStatus::InProgress),
            "scheduled" => Some(WorkOrderStatus::Scheduled),
            _ => None,
        }
    }

    /// 工单是否仍未关闭
    pub fn is_open(&self) -> bool {
        !matches!(self, WorkOrderStatus::Completed)
    }
}

// ==========================================
// 优先级 (Priority)
// ==========================================
// 顺序: High < Medium < Low（排序时高优先级在前）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

impl Priority {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Priority::High => "priority.high",
            Priority::Medium => "priority.medium",
            Priority::Low => "priority.low",
        }
    }
}

// ==========================================
// 维修类型 (Maintenance Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaintenanceKind {
    Preventive,  // 预防性
    Calibration, // 校准
    Corrective,  // 纠正性
    Emergency,   // 紧急
}

impl fmt::Display for MaintenanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaintenanceKind::Preventive => write!(f, "Preventive"),
            MaintenanceKind::Calibration => write!(f, "Calibration"),
            MaintenanceKind::Corrective => write!(f, "Corrective"),
            MaintenanceKind::Emergency => write!(f, "Emergency"),
        }
    }
}

// ==========================================
// 告警级别 (Alert Severity)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AlertSeverity {
    Critical,
    Warning,
    Info,
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertSeverity::Critical => write!(f, "Critical"),
            AlertSeverity::Warning => write!(f, "Warning"),
            AlertSeverity::Info => write!(f, "Info"),
        }
    }
}

impl AlertSeverity {
    /// 解析告警级别
    ///
    /// 空字符串视为 Info；其他未知值返回 None（前端以中性样式展示）
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "" | "Info" => Some(AlertSeverity::Info),
            "Critical" => Some(AlertSeverity::Critical),
            "Warning" => Some(AlertSeverity::Warning),
            _ => None,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            AlertSeverity::Critical => "severity.critical",
            AlertSeverity::Warning => "severity.warning",
            AlertSeverity::Info => "severity.info",
        }
    }
}

// ==========================================
// OEE 分档 (OEE Band)
// ==========================================
// 依据: 产线卡片的绿/黄/红三色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OeeBand {
    Good, // 达标
    Fair, // 关注
    Poor, // 偏低
}

impl OeeBand {
    pub fn label_key(&self) -> &'static str {
        match self {
            OeeBand::Good => "band.good",
            OeeBand::Fair => "band.fair",
            OeeBand::Poor => "band.poor",
        }
    }
}

impl fmt::Display for OeeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OeeBand::Good => write!(f, "GOOD"),
            OeeBand::Fair => write!(f, "FAIR"),
            OeeBand::Poor => write!(f, "POOR"),
        }
    }
}
